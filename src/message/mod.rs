//! Incoming push messages and their canonical field set
//!
//! A push message arrives in one of two shapes:
//! - a structured notification (`title`, `body`, `channel_id`, ...)
//! - a free-form string map of data fields
//!
//! [`extract`] normalizes both into [`CanonicalFields`], and [`IdAssigner`]
//! guarantees the result carries a non-empty id.

pub mod extractor;
pub mod fields;
pub mod id;

pub use extractor::extract;
pub use fields::CanonicalFields;
pub use id::{IdAssigner, IdStrategy};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Data-shape keys recognized by the extractor
pub mod keys {
    pub const TITLE: &str = "title";
    pub const BODY: &str = "body";
    pub const CHANNEL_ID: &str = "channel_id";
    pub const ID: &str = "id";
    pub const SOUND: &str = "sound";
    pub const VIBRATE: &str = "vibrate";
    pub const LIGHT: &str = "light";
    pub const COLOR: &str = "color";
    pub const ICON: &str = "icon";
    pub const VISIBILITY: &str = "visibility";
    pub const PRIORITY: &str = "priority";
    /// Presence-only flag forcing a system notification while in foreground
    pub const FOREGROUND_NOTIFICATION: &str = "foregroundNotification";
    /// Marker added to payloads delivered to the application
    pub const TAP: &str = "tap";
}

/// Structured notification shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredNotification {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, alias = "channelId")]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub sound: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A push message as delivered by the transport
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Transport-assigned message id
    #[serde(default, alias = "messageId")]
    pub message_id: Option<String>,
    /// Sender id, only used for logging
    #[serde(default)]
    pub from: Option<String>,
    /// Structured shape; takes precedence over `data` for field extraction
    #[serde(default)]
    pub notification: Option<StructuredNotification>,
    /// Free-form data fields
    #[serde(default)]
    pub data: HashMap<String, String>,
}

impl IncomingMessage {
    /// Create a data-shape message
    pub fn data<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            data: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Create a structured-shape message
    pub fn structured(notification: StructuredNotification) -> Self {
        Self {
            notification: Some(notification),
            ..Self::default()
        }
    }

    /// Set the transport message id
    pub fn with_message_id(mut self, id: impl Into<String>) -> Self {
        self.message_id = Some(id.into());
        self
    }

    /// Add one data field
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

/// Returns the value when present and non-empty
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
