//! 消息服务 - 推送传输层调用的入口
//!
//! 单条消息的处理流程:
//! receiver chain -> extract -> ensure id -> decide -> render + post | forward

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::decision::{decide, Decision, ProcessState};
use crate::dispatcher::{derive_key, Dispatcher};
use crate::message::fields::Payload;
use crate::message::{extract, IdAssigner, IncomingMessage};
use crate::receiver::ReceiverChain;
use crate::render::NotificationRenderer;
use crate::surface::{AppCallback, NotificationSurface};

/// 消息的处理结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// 已被注册的接收器认领，不再处理
    Claimed { receiver: String },
    /// 没有标题、正文和数据
    Dropped,
    /// 已作为系统通知以 `key` 发布
    Rendered { id: String, key: i32 },
    /// 已渲染，但通知界面拒绝发布
    NotPosted { id: String, key: i32 },
    /// 已投递给前台应用
    Forwarded { id: String },
}

pub struct MessagingService {
    receivers: ReceiverChain,
    ids: IdAssigner,
    renderer: NotificationRenderer,
    dispatcher: Dispatcher,
}

impl MessagingService {
    pub fn new(renderer: NotificationRenderer, dispatcher: Dispatcher) -> Self {
        Self {
            receivers: ReceiverChain::new(),
            ids: IdAssigner::default(),
            renderer,
            dispatcher,
        }
    }

    /// 根据配置和两个出站界面组装服务
    pub fn from_config(
        config: &EngineConfig,
        surface: Arc<dyn NotificationSurface>,
        app: Arc<dyn AppCallback>,
    ) -> Self {
        let platform = config.platform();
        let renderer = NotificationRenderer::new(
            platform,
            Arc::new(config.resources()),
            Arc::new(config.channel_registry()),
        );
        let ids = IdAssigner::new(config.id_strategy);
        debug!(
            api_level = platform.api_level(),
            id_strategy = ?ids.strategy(),
            "Messaging service configured"
        );
        Self::new(renderer, Dispatcher::new(surface, app)).with_id_assigner(ids)
    }

    pub fn with_id_assigner(mut self, ids: IdAssigner) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_receivers(mut self, receivers: ReceiverChain) -> Self {
        debug!(count = receivers.len(), "Receiver chain installed");
        self.receivers = receivers;
        self
    }

    pub fn receivers_mut(&mut self) -> &mut ReceiverChain {
        &mut self.receivers
    }

    /// 端到端处理一条送达的消息
    pub fn on_message_received(&self, message: &IncomingMessage, state: &ProcessState) -> Outcome {
        if let Some(receiver) = self.receivers.offer(message) {
            info!(receiver = %receiver, "Message was handled by a registered receiver");
            return Outcome::Claimed { receiver };
        }

        let Some(fields) = extract(message, self.renderer.platform()) else {
            return Outcome::Dropped;
        };
        let fields = self.ids.ensure_id(fields);

        let decision = decide(&fields, state);
        debug!(id = %fields.id, decision = ?decision, state = ?state, "Display decision");

        match decision {
            Decision::Render => {
                let descriptor = self.renderer.render(&fields);
                match self.dispatcher.render(&fields.id, &descriptor) {
                    Some(key) => Outcome::Rendered { id: fields.id, key },
                    None => {
                        let key = derive_key(&fields.id);
                        Outcome::NotPosted { id: fields.id, key }
                    }
                }
            }
            Decision::Forward => {
                self.dispatcher.forward(&fields);
                Outcome::Forwarded { id: fields.id }
            }
        }
    }

    /// 将刷新后的推送 token 转发给应用
    pub fn on_new_token(&self, token: &str) {
        info!("Refreshed token received");
        self.dispatcher.send_token(token);
    }

    /// 重新注入被点击通知的 payload
    pub fn on_notification_opened(&self, payload: Payload) {
        info!("Notification opened");
        self.dispatcher.deliver_tap(payload);
    }
}
