//! Notification sound resolution

use serde::Serialize;

/// Value selecting the platform default notification sound
pub const DEFAULT_SOUND: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "uri", rename_all = "snake_case")]
pub enum SoundUri {
    /// Platform default notification sound
    PlatformDefault,
    /// Sound bundled with the application as a raw resource
    Resource(String),
}

/// Resolve a sound name; `None` leaves the sound untouched
pub fn resolve_sound(sound: Option<&str>, package_name: &str) -> Option<SoundUri> {
    match sound {
        None | Some("") => None,
        Some(DEFAULT_SOUND) => Some(SoundUri::PlatformDefault),
        Some(name) => Some(SoundUri::Resource(format!(
            "android.resource://{}/raw/{}",
            package_name, name
        ))),
    }
}
