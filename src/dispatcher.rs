//! 通知分发器 - 发布渲染后的通知，或将数据转发给应用

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::message::fields::Payload;
use crate::message::{keys, CanonicalFields};
use crate::render::NotificationDescriptor;
use crate::surface::{AppCallback, NotificationSurface};

/// 由消息 ID 计算通知 key
///
/// 与 Java `String.hashCode` 一致: 按 UTF-16 码元计算 `s[0]*31^(n-1) + ... + s[n-1]`，
/// i32 溢出回绕。相同 ID 必然得到相同 key。
pub fn derive_key(id: &str) -> i32 {
    id.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

/// 将处理后的消息路由到出站界面
///
/// 界面调用失败只记录日志，不重试。
pub struct Dispatcher {
    surface: Arc<dyn NotificationSurface>,
    app: Arc<dyn AppCallback>,
}

impl Dispatcher {
    pub fn new(surface: Arc<dyn NotificationSurface>, app: Arc<dyn AppCallback>) -> Self {
        Self { surface, app }
    }

    /// 发布通知并绑定点击动作
    ///
    /// 返回通知 key；界面拒绝发布时返回 `None`。
    pub fn render(&self, id: &str, descriptor: &NotificationDescriptor) -> Option<i32> {
        let key = derive_key(id);
        let surface = self.surface.name();

        if let Err(e) = self.surface.notify(key, descriptor) {
            warn!(surface, key, error = %e, "Notification surface rejected notification");
            return None;
        }
        if let Err(e) = self.surface.set_tap_action(key, &descriptor.tap_payload) {
            warn!(surface, key, error = %e, "Failed to wire tap action");
        }

        info!(surface, id = %id, key, "Notification posted");
        Some(key)
    }

    /// 不显示通知，直接将字段交给前台应用
    pub fn forward(&self, fields: &CanonicalFields) {
        let mut payload = fields.to_payload();
        payload.insert(keys::TAP.to_string(), Value::Bool(false));
        payload.insert(keys::TITLE.to_string(), optional(fields.title()));
        payload.insert(keys::BODY.to_string(), optional(fields.body()));

        debug!(id = %fields.id, payload = ?payload, "Forwarding message to application");
        if let Err(e) = self.app.on_message(&payload) {
            warn!(id = %fields.id, error = %e, "Application callback failed");
        }
    }

    /// 将被点击通知的 payload 重新投递给应用
    pub fn deliver_tap(&self, mut payload: Payload) {
        payload.insert(keys::TAP.to_string(), Value::Bool(true));
        debug!(payload = ?payload, "Delivering notification tap");
        if let Err(e) = self.app.on_message(&payload) {
            warn!(error = %e, "Application callback failed for tap");
        }
    }

    pub fn send_token(&self, token: &str) {
        if let Err(e) = self.app.on_token(token) {
            warn!(error = %e, "Application callback failed for token");
        }
    }
}

fn optional(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |v| Value::String(v.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{bail, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock 界面 - 统计调用次数，可设置为每次失败
    #[derive(Default)]
    struct MockSurface {
        fail: bool,
        notify_count: AtomicUsize,
        tap_count: AtomicUsize,
        messages: Mutex<Vec<Payload>>,
    }

    impl NotificationSurface for MockSurface {
        fn name(&self) -> &str {
            "mock"
        }

        fn notify(&self, _key: i32, _descriptor: &NotificationDescriptor) -> Result<()> {
            self.notify_count.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                bail!("surface unavailable");
            }
            Ok(())
        }

        fn set_tap_action(&self, _key: i32, _payload: &Payload) -> Result<()> {
            self.tap_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    impl AppCallback for MockSurface {
        fn on_message(&self, payload: &Payload) -> Result<()> {
            self.messages.lock().unwrap().push(payload.clone());
            if self.fail {
                bail!("app gone");
            }
            Ok(())
        }

        fn on_token(&self, _token: &str) -> Result<()> {
            Ok(())
        }
    }

    fn descriptor() -> NotificationDescriptor {
        use crate::platform::ResourceId;
        use crate::render::{IconOrigin, Priority, ResolvedIcon, Visibility};

        NotificationDescriptor {
            title: Some("Hi".to_string()),
            body: None,
            big_text: None,
            auto_cancel: true,
            channel_id: "default".to_string(),
            small_icon: ResolvedIcon {
                resource: ResourceId(1),
                origin: IconOrigin::Application,
            },
            large_icon: None,
            sound: None,
            vibrate_pattern: None,
            light: None,
            color: None,
            visibility: Visibility::Public,
            priority: Priority::Max,
            tap_payload: Payload::new(),
        }
    }

    #[test]
    fn test_derive_key_matches_java_hash() {
        assert_eq!(derive_key(""), 0);
        assert_eq!(derive_key("a"), 97);
        assert_eq!(derive_key("42"), 1662);
        assert_eq!(derive_key("hello"), 99162322);
        // wraps like i32 overflow
        assert_eq!(derive_key("hello world"), 1794106052);
    }

    #[test]
    fn test_derive_key_collides_for_equal_ids() {
        assert_eq!(derive_key("17"), derive_key("17"));
        assert_ne!(derive_key("17"), derive_key("18"));
    }

    #[test]
    fn test_render_posts_and_wires_tap() {
        let surface = Arc::new(MockSurface::default());
        let dispatcher = Dispatcher::new(surface.clone(), surface.clone());

        let key = dispatcher.render("42", &descriptor());
        assert_eq!(key, Some(1662));
        assert_eq!(surface.notify_count.load(Ordering::SeqCst), 1);
        assert_eq!(surface.tap_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_render_failure_is_swallowed() {
        let surface = Arc::new(MockSurface {
            fail: true,
            ..Default::default()
        });
        let dispatcher = Dispatcher::new(surface.clone(), surface.clone());

        assert_eq!(dispatcher.render("42", &descriptor()), None);
        assert_eq!(surface.notify_count.load(Ordering::SeqCst), 1);
        assert_eq!(surface.tap_count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_forward_marks_not_tapped() {
        let surface = Arc::new(MockSurface::default());
        let dispatcher = Dispatcher::new(surface.clone(), surface.clone());
        let fields = CanonicalFields {
            id: "9".to_string(),
            title: Some("Hi".to_string()),
            ..Default::default()
        };

        dispatcher.forward(&fields);

        let messages = surface.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["tap"], false);
        assert_eq!(messages[0]["title"], "Hi");
        assert_eq!(messages[0]["body"], Value::Null);
        assert_eq!(messages[0]["id"], "9");
    }

    #[test]
    fn test_forward_failure_is_swallowed() {
        let surface = Arc::new(MockSurface {
            fail: true,
            ..Default::default()
        });
        let dispatcher = Dispatcher::new(surface.clone(), surface.clone());
        dispatcher.forward(&CanonicalFields::default());
        assert_eq!(surface.messages.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_deliver_tap_marks_tapped() {
        let surface = Arc::new(MockSurface::default());
        let dispatcher = Dispatcher::new(surface.clone(), surface.clone());
        let mut payload = Payload::new();
        payload.insert("id".to_string(), Value::String("1".to_string()));

        dispatcher.deliver_tap(payload);

        let messages = surface.messages.lock().unwrap();
        assert_eq!(messages[0]["tap"], true);
        assert_eq!(messages[0]["id"], "1");
    }
}
