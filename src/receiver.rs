//! 接收器链 - 可插拔的处理器，可在引擎处理前认领消息

use std::sync::Arc;
use tracing::{debug, info};

use crate::message::IncomingMessage;

/// 在引擎处理前先收到每条消息的处理器
pub trait MessageReceiver: Send + Sync {
    /// 接收器名称（用于日志）
    fn name(&self) -> &str;

    /// 认领消息时返回 true
    fn try_receive(&self, message: &IncomingMessage) -> bool;
}

/// 有序接收器列表，第一个认领者生效
#[derive(Default)]
pub struct ReceiverChain {
    receivers: Vec<Arc<dyn MessageReceiver>>,
}

impl ReceiverChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, receiver: Arc<dyn MessageReceiver>) {
        info!(receiver = receiver.name(), "Registering message receiver");
        self.receivers.push(receiver);
    }

    /// 按顺序提交消息，返回认领者名称
    pub fn offer(&self, message: &IncomingMessage) -> Option<String> {
        for receiver in &self.receivers {
            if receiver.try_receive(message) {
                debug!(receiver = receiver.name(), "Message claimed by receiver");
                return Some(receiver.name().to_string());
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.receivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receivers.is_empty()
    }

    pub fn receiver_names(&self) -> Vec<&str> {
        self.receivers.iter().map(|r| r.name()).collect()
    }
}

/// 认领 data 中包含指定 key 的消息
pub struct DataKeyReceiver {
    name: String,
    key: String,
}

impl DataKeyReceiver {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
        }
    }
}

impl MessageReceiver for DataKeyReceiver {
    fn name(&self) -> &str {
        &self.name
    }

    fn try_receive(&self, message: &IncomingMessage) -> bool {
        message.data.contains_key(&self.key)
    }
}
