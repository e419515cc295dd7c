// ==========================================
// ARK 服务器配置工作台 - 领域类型定义
// ==========================================
// 职责: 游戏版本、配置文件、字段类型、经验曲线等枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 游戏版本 (Game Variant)
// ==========================================
// ASE = Survival Evolved, ASA = Survival Ascended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameVariant {
    #[default]
    Ase,
    Asa,
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameVariant::Ase => write!(f, "ASE"),
            GameVariant::Asa => write!(f, "ASA"),
        }
    }
}

impl FromStr for GameVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ASE" | "EVOLVED" => Ok(GameVariant::Ase),
            "ASA" | "ASCENDED" => Ok(GameVariant::Asa),
            other => Err(format!("未知游戏版本: {}", other)),
        }
    }
}

// ==========================================
// 配置文件 (Config File)
// ==========================================
// 磁盘布局: <install>/ShooterGame/Saved/Config/WindowsServer/<Kind>.ini
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigFileKind {
    GameUserSettings,
    Game,
    Engine,
    Scaling,
    Custom,
}

impl ConfigFileKind {
    /// 全部可编辑的配置文件（界面顺序）
    pub const ALL: [ConfigFileKind; 5] = [
        ConfigFileKind::GameUserSettings,
        ConfigFileKind::Game,
        ConfigFileKind::Engine,
        ConfigFileKind::Scaling,
        ConfigFileKind::Custom,
    ];

    /// 逻辑文件名（不含扩展名）
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFileKind::GameUserSettings => "GameUserSettings",
            ConfigFileKind::Game => "Game",
            ConfigFileKind::Engine => "Engine",
            ConfigFileKind::Scaling => "Scaling",
            ConfigFileKind::Custom => "Custom",
        }
    }

    /// 磁盘文件名
    pub fn file_name(&self) -> String {
        format!("{}.ini", self.as_str())
    }
}

impl fmt::Display for ConfigFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConfigFileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_suffix(".ini").unwrap_or(name);
        ConfigFileKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("未知配置文件: {}", s))
    }
}

// ==========================================
// 字段类型 (Field Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Boolean,
    Select,
    Color,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => write!(f, "text"),
            FieldType::Number => write!(f, "number"),
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::Select => write!(f, "select"),
            FieldType::Color => write!(f, "color"),
        }
    }
}

// ==========================================
// 经验曲线 (XP Curve)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CurveType {
    Linear,
    Exponential,
    Flat,
    #[default]
    Official,
}

impl CurveType {
    pub const ALL: [CurveType; 4] = [
        CurveType::Linear,
        CurveType::Exponential,
        CurveType::Flat,
        CurveType::Official,
    ];
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveType::Linear => write!(f, "linear"),
            CurveType::Exponential => write!(f, "exponential"),
            CurveType::Flat => write!(f, "flat"),
            CurveType::Official => write!(f, "official"),
        }
    }
}

impl FromStr for CurveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(CurveType::Linear),
            "exponential" => Ok(CurveType::Exponential),
            "flat" => Ok(CurveType::Flat),
            "official" => Ok(CurveType::Official),
            other => Err(format!("未知经验曲线: {}", other)),
        }
    }
}

// ==========================================
// 编辑模式 (Edit Mode)
// ==========================================
// Visual: 保存时序列化工作副本
// Raw: 保存时直接写出原始文本缓冲
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditMode {
    #[default]
    Visual,
    Raw,
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditMode::Visual => write!(f, "VISUAL"),
            EditMode::Raw => write!(f, "RAW"),
        }
    }
}
