//! 引擎配置 - 设备信息、内置资源与 ID 策略
//!
//! 未指定路径时从 `~/.config/push-render/config.json` 加载，
//! 默认文件不存在则使用 [`EngineConfig::default`]。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::message::IdStrategy;
use crate::platform::{BundledResources, Platform, ResourceId, StaticChannels};
use crate::render::Argb;

pub const DEFAULT_CHANNEL_ID: &str = "fcm_default_channel";
pub const DEFAULT_API_LEVEL: u32 = 33;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// 设备 API 级别，决定是否支持渠道、大图标和强调色
    pub api_level: u32,
    pub package_name: String,
    pub default_channel_id: String,
    /// 除默认渠道外设备上已注册的渠道
    pub channels: Vec<String>,
    /// 按名称索引的内置 drawable
    pub drawables: BTreeMap<String, ResourceId>,
    pub app_icon: ResourceId,
    pub accent_color: Option<Argb>,
    pub id_strategy: IdStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            api_level: DEFAULT_API_LEVEL,
            package_name: "com.example.app".to_string(),
            default_channel_id: DEFAULT_CHANNEL_ID.to_string(),
            channels: Vec::new(),
            drawables: BTreeMap::new(),
            app_icon: ResourceId(1),
            accent_color: None,
            id_strategy: IdStrategy::default(),
        }
    }
}

impl EngineConfig {
    /// 默认配置文件路径
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("push-render")
            .join("config.json")
    }

    /// 从指定路径加载；未指定时从默认路径加载（若存在）
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    debug!(path = %path.display(), "No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn platform(&self) -> Platform {
        Platform::new(self.api_level)
    }

    pub fn resources(&self) -> BundledResources {
        self.drawables.iter().fold(
            BundledResources::new(&self.package_name, self.app_icon)
                .with_accent_color(self.accent_color),
            |resources, (name, id)| resources.with_drawable(name, *id),
        )
    }

    pub fn channel_registry(&self) -> StaticChannels {
        self.channels
            .iter()
            .fold(StaticChannels::new(&self.default_channel_id), |registry, id| {
                registry.with_channel(id)
            })
    }
}
