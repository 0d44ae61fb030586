//! Field extraction from structured and data-shape messages

use tracing::{debug, info};

use super::{keys, CanonicalFields, IncomingMessage};
use crate::platform::Platform;

/// Normalize a message into canonical fields
///
/// Returns `None` when the message has no title, no body and no data; such
/// messages are dropped without further action.
pub fn extract(message: &IncomingMessage, platform: &Platform) -> Option<CanonicalFields> {
    let data = &message.data;
    let lookup = |key: &str| data.get(key).cloned();

    let mut fields = match &message.notification {
        Some(notification) => {
            info!("Received message: notification");
            CanonicalFields {
                id: message.message_id.clone().unwrap_or_default(),
                title: notification.title.clone(),
                body: notification.body.clone(),
                channel_id: if platform.supports_channels() {
                    notification.channel_id.clone()
                } else {
                    None
                },
                sound: notification.sound.clone(),
                color: notification.color.clone(),
                icon: notification.icon.clone(),
                ..Default::default()
            }
        }
        None => {
            info!("Received message: data");
            CanonicalFields {
                id: lookup(keys::ID).unwrap_or_default(),
                title: lookup(keys::TITLE),
                body: lookup(keys::BODY),
                channel_id: lookup(keys::CHANNEL_ID),
                sound: lookup(keys::SOUND),
                vibrate: lookup(keys::VIBRATE),
                light: lookup(keys::LIGHT),
                color: lookup(keys::COLOR),
                icon: lookup(keys::ICON),
                visibility: lookup(keys::VISIBILITY),
                priority: lookup(keys::PRIORITY),
                ..Default::default()
            }
        }
    };

    fields.has_foreground_flag = data.contains_key(keys::FOREGROUND_NOTIFICATION);
    fields.data = data.clone();

    debug!(
        from = ?message.from,
        id = %fields.id,
        title = ?fields.title,
        body = ?fields.body,
        sound = ?fields.sound,
        vibrate = ?fields.vibrate,
        light = ?fields.light,
        color = ?fields.color,
        icon = ?fields.icon,
        channel_id = ?fields.channel_id,
        visibility = ?fields.visibility,
        priority = ?fields.priority,
        foreground = fields.has_foreground_flag,
        "Extracted message fields"
    );

    if !fields.has_content() && data.is_empty() {
        debug!("Message has no content and no data, dropping");
        return None;
    }

    Some(fields)
}
