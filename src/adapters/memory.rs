//! 内存界面 - 记录每一次出站调用

use anyhow::Result;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::message::fields::Payload;
use crate::render::NotificationDescriptor;
use crate::surface::{AppCallback, NotificationSurface};

#[derive(Default)]
struct Recorded {
    notifications: Vec<(i32, NotificationDescriptor)>,
    tap_actions: BTreeMap<i32, Payload>,
    messages: Vec<Payload>,
    tokens: Vec<String>,
}

/// 记录通知、点击动作、应用消息和 token
///
/// 同时实现两个出站端口，一个实例即可支撑整个服务。
#[derive(Default)]
pub struct RecordingSurface {
    recorded: Mutex<Recorded>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn recorded(&self) -> MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 按顺序记录的所有 notify 调用
    pub fn notifications(&self) -> Vec<(i32, NotificationDescriptor)> {
        self.recorded().notifications.clone()
    }

    /// 当前显示的通知；重复的 key 会替换之前的通知
    pub fn active_notifications(&self) -> BTreeMap<i32, NotificationDescriptor> {
        self.recorded().notifications.iter().cloned().collect()
    }

    pub fn tap_action(&self, key: i32) -> Option<Payload> {
        self.recorded().tap_actions.get(&key).cloned()
    }

    pub fn messages(&self) -> Vec<Payload> {
        self.recorded().messages.clone()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.recorded().tokens.clone()
    }
}

impl NotificationSurface for RecordingSurface {
    fn name(&self) -> &str {
        "memory"
    }

    fn notify(&self, key: i32, descriptor: &NotificationDescriptor) -> Result<()> {
        self.recorded()
            .notifications
            .push((key, descriptor.clone()));
        Ok(())
    }

    fn set_tap_action(&self, key: i32, payload: &Payload) -> Result<()> {
        self.recorded().tap_actions.insert(key, payload.clone());
        Ok(())
    }
}

impl AppCallback for RecordingSurface {
    fn on_message(&self, payload: &Payload) -> Result<()> {
        self.recorded().messages.push(payload.clone());
        Ok(())
    }

    fn on_token(&self, token: &str) -> Result<()> {
        self.recorded().tokens.push(token.to_string());
        Ok(())
    }
}
