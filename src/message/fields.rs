//! Canonical field set shared by decision, rendering and dispatch

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::{keys, non_empty};

/// Payload handed to the application (tap action or forwarded data)
pub type Payload = Map<String, Value>;

/// Normalized view of one push message
///
/// Empty strings are treated the same as unset values everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CanonicalFields {
    /// Never empty once [`super::IdAssigner::ensure_id`] has run
    pub id: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub sound: Option<String>,
    pub vibrate: Option<String>,
    pub light: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub channel_id: Option<String>,
    pub visibility: Option<String>,
    pub priority: Option<String>,
    pub has_foreground_flag: bool,
    /// Raw data mapping of the message, kept for payloads
    #[serde(skip)]
    pub data: HashMap<String, String>,
}

impl CanonicalFields {
    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    pub fn body(&self) -> Option<&str> {
        non_empty(self.body.as_deref())
    }

    /// Title or body is non-empty
    pub fn has_content(&self) -> bool {
        self.title().is_some() || self.body().is_some()
    }

    /// Named canonical fields under their data-shape keys, skipping empty ones
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let id = non_empty(Some(self.id.as_str()));
        [
            (keys::ID, id),
            (keys::TITLE, self.title()),
            (keys::BODY, self.body()),
            (keys::SOUND, non_empty(self.sound.as_deref())),
            (keys::VIBRATE, non_empty(self.vibrate.as_deref())),
            (keys::LIGHT, non_empty(self.light.as_deref())),
            (keys::COLOR, non_empty(self.color.as_deref())),
            (keys::ICON, non_empty(self.icon.as_deref())),
            (keys::CHANNEL_ID, non_empty(self.channel_id.as_deref())),
            (keys::VISIBILITY, non_empty(self.visibility.as_deref())),
            (keys::PRIORITY, non_empty(self.priority.as_deref())),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }

    /// Raw data overlaid with every canonical field
    pub fn to_payload(&self) -> Payload {
        let mut payload: Payload = self
            .data
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();

        for (key, value) in self.entries() {
            payload.insert(key.to_string(), Value::String(value.to_string()));
        }

        payload
    }
}
