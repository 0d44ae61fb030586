//! Notification rendering - canonical fields to a fully resolved descriptor
//!
//! Every property is resolved independently and degrades to its default on
//! bad input. A partially styled notification is always preferred over a
//! dropped one, so [`NotificationRenderer::render`] cannot fail.
//!
//! On platforms with notification channels, sound, vibration and light are
//! owned by the channel and left unset here.

pub mod color;
pub mod icon;
pub mod level;
pub mod light;
pub mod sound;
pub mod vibrate;

pub use color::Argb;
pub use icon::{IconOrigin, ResolvedIcon};
pub use level::{Priority, Visibility};
pub use light::LightSpec;
pub use sound::SoundUri;
pub use vibrate::VibratePattern;

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::message::fields::Payload;
use crate::message::{non_empty, CanonicalFields};
use crate::platform::{ChannelRegistry, Platform, ResourceResolver};

/// Fully resolved parameters for one system notification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationDescriptor {
    pub title: Option<String>,
    pub body: Option<String>,
    /// Expanded big-text style content
    pub big_text: Option<String>,
    /// Dismiss when tapped
    pub auto_cancel: bool,
    pub channel_id: String,
    pub small_icon: ResolvedIcon,
    pub large_icon: Option<ResolvedIcon>,
    pub sound: Option<SoundUri>,
    pub vibrate_pattern: Option<VibratePattern>,
    pub light: Option<LightSpec>,
    pub color: Option<Argb>,
    pub visibility: Visibility,
    pub priority: Priority,
    /// Delivered back to the application when the notification is tapped
    pub tap_payload: Payload,
}

/// Applies the defaulting policy for every visual and audible property
pub struct NotificationRenderer {
    platform: Platform,
    resources: Arc<dyn ResourceResolver>,
    channels: Arc<dyn ChannelRegistry>,
}

impl NotificationRenderer {
    pub fn new(
        platform: Platform,
        resources: Arc<dyn ResourceResolver>,
        channels: Arc<dyn ChannelRegistry>,
    ) -> Self {
        Self {
            platform,
            resources,
            channels,
        }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn render(&self, fields: &CanonicalFields) -> NotificationDescriptor {
        let icon_name = non_empty(fields.icon.as_deref());
        let (sound, vibrate_pattern, light) = self.resolve_alerts(fields);

        let descriptor = NotificationDescriptor {
            title: fields.title().map(str::to_string),
            body: fields.body().map(str::to_string),
            big_text: fields.body().map(str::to_string),
            auto_cancel: true,
            channel_id: self.resolve_channel(fields.channel_id.as_deref()),
            small_icon: icon::resolve_small_icon(icon_name, self.resources.as_ref()),
            large_icon: self
                .platform
                .supports_large_icon()
                .then(|| icon::resolve_large_icon(icon_name, self.resources.as_ref())),
            sound,
            vibrate_pattern,
            light,
            color: self.resolve_color(fields.color.as_deref()),
            visibility: resolve_visibility(fields.visibility.as_deref()),
            priority: resolve_priority(fields.priority.as_deref()),
            tap_payload: fields.to_payload(),
        };

        debug!(id = %fields.id, descriptor = ?descriptor, "Rendered notification");
        descriptor
    }

    fn resolve_channel(&self, channel_id: Option<&str>) -> String {
        let channel = match non_empty(channel_id) {
            Some(id) if self.channels.channel_exists(id) => id.to_string(),
            Some(id) => {
                debug!(channel_id = %id, "Unknown channel, using default");
                self.channels.default_channel_id().to_string()
            }
            None => self.channels.default_channel_id().to_string(),
        };
        if self.platform.supports_channels() {
            debug!(channel_id = %channel, "Channel resolved");
        }
        channel
    }

    /// Sound, vibration and light; all unset when the channel owns them
    fn resolve_alerts(
        &self,
        fields: &CanonicalFields,
    ) -> (Option<SoundUri>, Option<VibratePattern>, Option<LightSpec>) {
        if self.platform.supports_channels() {
            return (None, None, None);
        }

        let sound = sound::resolve_sound(fields.sound.as_deref(), self.resources.package_name());
        debug!(sound = ?sound, "Sound resolved");

        let light = non_empty(fields.light.as_deref()).and_then(|raw| {
            raw.parse::<LightSpec>()
                .map_err(|e| warn!(light = %raw, error = %e, "Ignoring malformed light"))
                .ok()
        });

        let vibrate = non_empty(fields.vibrate.as_deref()).and_then(|raw| {
            raw.parse::<VibratePattern>()
                .map_err(|e| error!(vibrate = %raw, error = %e, "Ignoring malformed vibration pattern"))
                .ok()
        });

        (sound, vibrate, light)
    }

    fn resolve_color(&self, color: Option<&str>) -> Option<Argb> {
        if !self.platform.supports_accent_color() {
            return None;
        }

        match non_empty(color) {
            Some(raw) => match raw.parse::<Argb>() {
                Ok(color) => {
                    debug!(color = %raw, "Color: custom");
                    Some(color)
                }
                Err(e) => {
                    warn!(color = %raw, error = %e, "Invalid color, using accent");
                    self.resources.accent_color()
                }
            },
            None => {
                debug!("Color: default");
                self.resources.accent_color()
            }
        }
    }
}

fn resolve_visibility(raw: Option<&str>) -> Visibility {
    let visibility = match non_empty(raw) {
        Some(raw) => Visibility::parse(raw).unwrap_or_else(|e| {
            warn!(visibility = %raw, error = %e, "Invalid visibility, using default");
            Visibility::default()
        }),
        None => Visibility::default(),
    };
    debug!(visibility = ?visibility, "Visibility resolved");
    visibility
}

fn resolve_priority(raw: Option<&str>) -> Priority {
    let priority = match non_empty(raw) {
        Some(raw) => Priority::parse(raw).unwrap_or_else(|e| {
            warn!(priority = %raw, error = %e, "Invalid priority, using default");
            Priority::default()
        }),
        None => Priority::default(),
    };
    debug!(priority = ?priority, "Priority resolved");
    priority
}

/// Removes all whitespace, including between list elements
pub(crate) fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
