//! Device platform profile and local resource lookups

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::render::color::Argb;

/// First API level with notification channels
pub const API_CHANNELS: u32 = 26;
/// First API level with large notification icons
pub const API_LARGE_ICON: u32 = 21;
/// First API level with notification accent color
pub const API_ACCENT_COLOR: u32 = 23;

/// Capabilities of the device the message is rendered on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    api_level: u32,
}

impl Platform {
    pub fn new(api_level: u32) -> Self {
        Self { api_level }
    }

    pub fn api_level(&self) -> u32 {
        self.api_level
    }

    /// Sound, vibration and light are owned by the channel when true
    pub fn supports_channels(&self) -> bool {
        self.api_level >= API_CHANNELS
    }

    pub fn supports_large_icon(&self) -> bool {
        self.api_level >= API_LARGE_ICON
    }

    pub fn supports_accent_color(&self) -> bool {
        self.api_level >= API_ACCENT_COLOR
    }
}

/// Opaque handle of a bundled resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub u32);

/// Lookup of bundled application resources
///
/// Implementations must answer from local state only.
pub trait ResourceResolver: Send + Sync {
    /// Drawable resource with the given name
    fn drawable(&self, name: &str) -> Option<ResourceId>;

    /// The application's own launcher icon
    fn app_icon(&self) -> ResourceId;

    /// Theme accent color, if the application defines one
    fn accent_color(&self) -> Option<Argb>;

    /// Package name used to build raw resource URIs
    fn package_name(&self) -> &str;
}

/// Notification channels registered on the device
pub trait ChannelRegistry: Send + Sync {
    fn channel_exists(&self, channel_id: &str) -> bool;

    /// Process-wide default channel
    fn default_channel_id(&self) -> &str;
}

/// Resource table built from configuration
#[derive(Debug, Clone)]
pub struct BundledResources {
    package_name: String,
    drawables: HashMap<String, ResourceId>,
    app_icon: ResourceId,
    accent_color: Option<Argb>,
}

impl BundledResources {
    pub fn new(package_name: impl Into<String>, app_icon: ResourceId) -> Self {
        Self {
            package_name: package_name.into(),
            drawables: HashMap::new(),
            app_icon,
            accent_color: None,
        }
    }

    pub fn with_drawable(mut self, name: impl Into<String>, id: ResourceId) -> Self {
        self.drawables.insert(name.into(), id);
        self
    }

    pub fn with_accent_color(mut self, color: Option<Argb>) -> Self {
        self.accent_color = color;
        self
    }
}

impl ResourceResolver for BundledResources {
    fn drawable(&self, name: &str) -> Option<ResourceId> {
        self.drawables.get(name).copied()
    }

    fn app_icon(&self) -> ResourceId {
        self.app_icon
    }

    fn accent_color(&self) -> Option<Argb> {
        self.accent_color
    }

    fn package_name(&self) -> &str {
        &self.package_name
    }
}

/// Fixed set of known channels
#[derive(Debug, Clone)]
pub struct StaticChannels {
    default_channel_id: String,
    channels: HashSet<String>,
}

impl StaticChannels {
    pub fn new(default_channel_id: impl Into<String>) -> Self {
        let default_channel_id = default_channel_id.into();
        let channels = HashSet::from([default_channel_id.clone()]);
        Self {
            default_channel_id,
            channels,
        }
    }

    pub fn with_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channels.insert(channel_id.into());
        self
    }
}

impl ChannelRegistry for StaticChannels {
    fn channel_exists(&self, channel_id: &str) -> bool {
        self.channels.contains(channel_id)
    }

    fn default_channel_id(&self) -> &str {
        &self.default_channel_id
    }
}
