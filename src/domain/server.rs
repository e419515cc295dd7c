// ==========================================
// ARK 服务器配置工作台 - 服务器档案
// ==========================================
// 职责: 服务器标识、游戏版本与安装目录
// ==========================================

use crate::domain::types::{ConfigFileKind, GameVariant};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 配置文件相对安装目录的路径
pub const CONFIG_RELATIVE_DIR: [&str; 4] = ["ShooterGame", "Saved", "Config", "WindowsServer"];

// ==========================================
// ServerProfile - 服务器档案
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerProfile {
    pub id: String,   // 服务器ID
    pub name: String, // 显示名称
    pub variant: GameVariant,
    pub install_path: PathBuf, // 服务器安装根目录
}

impl ServerProfile {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        variant: GameVariant,
        install_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            variant,
            install_path: install_path.into(),
        }
    }

    /// 配置目录: <install>/ShooterGame/Saved/Config/WindowsServer
    pub fn config_dir(&self) -> PathBuf {
        config_dir_for(&self.install_path)
    }

    /// 指定配置文件的完整路径
    pub fn config_path(&self, file: ConfigFileKind) -> PathBuf {
        self.config_dir().join(file.file_name())
    }
}

pub fn config_dir_for(install_path: &Path) -> PathBuf {
    CONFIG_RELATIVE_DIR
        .iter()
        .fold(install_path.to_path_buf(), |acc, part| acc.join(part))
}
