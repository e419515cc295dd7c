// ==========================================
// ARK 服务器配置工作台 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("索引越界: index={index}, len={len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("字段值错误 (field={field}): {message}")]
    InvalidValue { field: String, message: String },

    #[error("经验表为空")]
    EmptyTable,

    #[error("未知预设: {0}")]
    UnknownPreset(String),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
