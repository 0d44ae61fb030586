//! Icon resolution with fallback
//!
//! Order: custom named drawable, bundled default drawable, application icon.

use serde::Serialize;
use tracing::debug;

use crate::platform::{ResourceId, ResourceResolver};

pub const DEFAULT_SMALL_ICON: &str = "notification_icon";
pub const DEFAULT_LARGE_ICON: &str = "notification_icon_large";
const LARGE_SUFFIX: &str = "_large";

/// Where a resolved icon came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum IconOrigin {
    Custom(String),
    Default(String),
    Application,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedIcon {
    pub resource: ResourceId,
    pub origin: IconOrigin,
}

pub fn resolve_small_icon(icon: Option<&str>, resources: &dyn ResourceResolver) -> ResolvedIcon {
    let resolved = resolve(icon.map(str::to_string), DEFAULT_SMALL_ICON, resources);
    debug!(icon = ?resolved.origin, "Small icon resolved");
    resolved
}

pub fn resolve_large_icon(icon: Option<&str>, resources: &dyn ResourceResolver) -> ResolvedIcon {
    let custom = icon.map(|name| format!("{}{}", name, LARGE_SUFFIX));
    let resolved = resolve(custom, DEFAULT_LARGE_ICON, resources);
    debug!(icon = ?resolved.origin, "Large icon resolved");
    resolved
}

fn resolve(
    custom: Option<String>,
    default_name: &str,
    resources: &dyn ResourceResolver,
) -> ResolvedIcon {
    if let Some(name) = custom {
        if let Some(resource) = resources.drawable(&name) {
            return ResolvedIcon {
                resource,
                origin: IconOrigin::Custom(name),
            };
        }
    }

    if let Some(resource) = resources.drawable(default_name) {
        return ResolvedIcon {
            resource,
            origin: IconOrigin::Default(default_name.to_string()),
        };
    }

    ResolvedIcon {
        resource: resources.app_icon(),
        origin: IconOrigin::Application,
    }
}
