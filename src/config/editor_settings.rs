// ==========================================
// ARK 服务器配置工作台 - 编辑器运行参数
// ==========================================
// 职责: 从环境变量加载运行参数，缺失时使用默认值
// ==========================================

use crate::domain::types::GameVariant;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

// ==========================================
// 环境变量键
// ==========================================
pub mod setting_keys {
    // 服务器根目录
    pub const ROOT: &str = "ARK_CONFIG_STUDIO_ROOT";
    // 外部变更轮询间隔（毫秒）
    pub const POLL_MS: &str = "ARK_CONFIG_STUDIO_POLL_MS";
    // 是否启用外部变更监视
    pub const AUTO_SYNC: &str = "ARK_CONFIG_STUDIO_AUTO_SYNC";
    // 默认游戏版本
    pub const VARIANT: &str = "ARK_CONFIG_STUDIO_VARIANT";
}

/// 默认轮询间隔（毫秒）
pub const DEFAULT_POLL_MS: u64 = 3000;
/// 轮询间隔下限（毫秒）
pub const MIN_POLL_MS: u64 = 250;

// ==========================================
// EditorSettings - 运行参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    pub servers_root: PathBuf,
    pub poll_interval_ms: u64,
    pub auto_sync: bool,
    pub default_variant: GameVariant,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            servers_root: default_servers_root(),
            poll_interval_ms: DEFAULT_POLL_MS,
            auto_sync: true,
            default_variant: GameVariant::Ase,
        }
    }
}

impl EditorSettings {
    /// 从进程环境变量加载
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载（无效值记录警告后回退默认值）
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(root) = non_empty(lookup(setting_keys::ROOT)) {
            settings.servers_root = PathBuf::from(root);
        }

        if let Some(raw) = non_empty(lookup(setting_keys::POLL_MS)) {
            match raw.parse::<u64>() {
                Ok(ms) => settings.poll_interval_ms = ms.max(MIN_POLL_MS),
                Err(_) => warn!(value = %raw, "轮询间隔无效，使用默认值 {}ms", DEFAULT_POLL_MS),
            }
        }

        if let Some(raw) = non_empty(lookup(setting_keys::AUTO_SYNC)) {
            settings.auto_sync = !matches!(
                raw.to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }

        if let Some(raw) = non_empty(lookup(setting_keys::VARIANT)) {
            match raw.parse::<GameVariant>() {
                Ok(variant) => settings.default_variant = variant,
                Err(e) => warn!(error = %e, "默认游戏版本无效，使用 ASE"),
            }
        }

        settings
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(MIN_POLL_MS))
    }

    /// 导出为 JSON（供宿主程序持久化）
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 恢复，轮询间隔按下限修正
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.poll_interval_ms = settings.poll_interval_ms.max(MIN_POLL_MS);
        Ok(settings)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 默认服务器根目录: <data_dir>/ark-config-studio/servers，取不到时为 ./servers
pub fn default_servers_root() -> PathBuf {
    match dirs::data_dir() {
        Some(data_dir) => data_dir.join("ark-config-studio").join("servers"),
        None => PathBuf::from("./servers"),
    }
}
