//! Render-vs-forward decision
//!
//! A message becomes a system notification only when it has content and the
//! application cannot take it directly:
//! - the app is in the background, or
//! - no consumer is registered for raw data, or
//! - the message carries the foreground override flag.
//!
//! Everything else is forwarded to the running application as data.

use serde::{Deserialize, Serialize};

use crate::message::CanonicalFields;

/// Process state observed when a message arrives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessState {
    pub is_app_in_foreground: bool,
    pub has_registered_notification_consumer: bool,
}

impl ProcessState {
    pub fn background() -> Self {
        Self::default()
    }

    pub fn foreground(has_consumer: bool) -> Self {
        Self {
            is_app_in_foreground: true,
            has_registered_notification_consumer: has_consumer,
        }
    }
}

/// What to do with a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Show a system notification
    Render,
    /// Hand the fields to the foreground application
    Forward,
}

/// Whether the message should be shown as a system notification
pub fn should_render(fields: &CanonicalFields, state: &ProcessState) -> bool {
    let app_cannot_take_it = !state.is_app_in_foreground
        || !state.has_registered_notification_consumer
        || fields.has_foreground_flag;

    fields.has_content() && app_cannot_take_it
}

pub fn decide(fields: &CanonicalFields, state: &ProcessState) -> Decision {
    if should_render(fields, state) {
        Decision::Render
    } else {
        Decision::Forward
    }
}
