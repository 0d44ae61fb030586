//! 出站端口 - 系统通知界面与应用回调

use anyhow::Result;

use crate::message::fields::Payload;
use crate::render::NotificationDescriptor;

/// 系统通知界面
///
/// `key` 是之后替换或取消通知的唯一句柄；同一 key 再次发布会替换之前的通知。
pub trait NotificationSurface: Send + Sync {
    /// 界面名称（用于日志）
    fn name(&self) -> &str;

    /// 发布或替换通知
    fn notify(&self, key: i32, descriptor: &NotificationDescriptor) -> Result<()>;

    /// 绑定 `key` 对应通知被点击时触发的动作
    fn set_tap_action(&self, key: i32, payload: &Payload) -> Result<()>;
}

/// 应用层回调
pub trait AppCallback: Send + Sync {
    /// 向应用投递消息数据（转发或点击）
    fn on_message(&self, payload: &Payload) -> Result<()>;

    /// 投递刷新后的推送 token
    fn on_token(&self, token: &str) -> Result<()>;
}
