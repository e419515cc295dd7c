// ==========================================
// ARK 服务器配置工作台 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，把仓储/引擎错误转换为面向调用方的错误消息
// ==========================================

use crate::engine::error::EngineError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入与状态错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("没有打开的编辑会话")]
    NoActiveSession,

    /// 文件没有字段表（调用方应退回纯文本编辑）
    #[error("{file} 没有可视化字段表 (variant={variant})")]
    SchemaUnavailable { variant: String, file: String },

    /// 严格模式下字段取值校验失败
    #[error("字段校验失败: {section}.{key}: {reason}")]
    FieldValidation {
        section: String,
        key: String,
        reason: String,
    },

    // ==========================================
    // 存储与引擎错误
    // ==========================================
    #[error("文件读写失败: {0}")]
    Io(String),

    #[error("引擎错误: {0}")]
    Engine(#[from] EngineError),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{}(id={})不存在", entity, id))
            }
            RepositoryError::Io(msg) => ApiError::Io(msg),
            RepositoryError::InvalidPath(msg) => ApiError::InvalidInput(format!("路径无效: {}", msg)),
            RepositoryError::LockError(msg) => {
                ApiError::InternalError(format!("锁获取失败: {}", msg))
            }
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
