// ==========================================
// ARK 服务器配置工作台 - 配置文件存取
// ==========================================
// 职责: 读写服务器配置文本、查询修改时间
// 红线: get_config_modified_time 永不报错，未知/不可用时返回 0
// ==========================================

use crate::domain::types::ConfigFileKind;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::server_repo::ServerRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, instrument};

// ==========================================
// ConfigStore Trait
// ==========================================
// 实现者: FileConfigStore（磁盘）；测试中为内存实现
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// 读取配置文本
    ///
    /// # 返回
    /// - Err(NotFound): 服务器不存在
    /// - Err(Io): 读取失败
    async fn read_config(&self, server_id: &str, file: ConfigFileKind) -> RepositoryResult<String>;

    /// 写入配置文本
    async fn save_config(
        &self,
        server_id: &str,
        file: ConfigFileKind,
        text: &str,
    ) -> RepositoryResult<()>;

    /// 修改时间（毫秒，Unix 纪元）；未知时为 0
    async fn get_config_modified_time(&self, server_id: &str, file: ConfigFileKind) -> u64;
}

// ==========================================
// FileConfigStore - 磁盘实现
// ==========================================
// 路径: <install>/ShooterGame/Saved/Config/WindowsServer/<Kind>.ini
pub struct FileConfigStore {
    servers: Arc<ServerRepository>,
}

impl FileConfigStore {
    pub fn new(servers: Arc<ServerRepository>) -> Self {
        Self { servers }
    }

    /// 解析配置文件路径
    pub fn resolve_path(&self, server_id: &str, file: ConfigFileKind) -> RepositoryResult<PathBuf> {
        let server = self.servers.find_by_id(server_id)?;
        if server.install_path.as_os_str().is_empty() {
            return Err(RepositoryError::InvalidPath(format!(
                "服务器 {} 未设置安装目录",
                server_id
            )));
        }
        Ok(server.config_path(file))
    }
}

#[async_trait]
impl ConfigStore for FileConfigStore {
    #[instrument(skip(self))]
    async fn read_config(&self, server_id: &str, file: ConfigFileKind) -> RepositoryResult<String> {
        let path = self.resolve_path(server_id, file)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            // 文件尚未生成时视为空文档
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "配置文件不存在，按空文本处理");
                Ok(String::new())
            }
            Err(e) => Err(RepositoryError::Io(format!("{}: {}", path.display(), e))),
        }
    }

    #[instrument(skip(self, text), fields(bytes = text.len()))]
    async fn save_config(
        &self,
        server_id: &str,
        file: ConfigFileKind,
        text: &str,
    ) -> RepositoryResult<()> {
        let path = self.resolve_path(server_id, file)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| RepositoryError::Io(format!("{}: {}", parent.display(), e)))?;
        }
        tokio::fs::write(&path, text)
            .await
            .map_err(|e| RepositoryError::Io(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "配置文件已写入");
        Ok(())
    }

    async fn get_config_modified_time(&self, server_id: &str, file: ConfigFileKind) -> u64 {
        let path = match self.resolve_path(server_id, file) {
            Ok(path) => path,
            Err(e) => {
                debug!(error = %e, "无法解析配置路径");
                return 0;
            }
        };
        match tokio::fs::metadata(&path).await.and_then(|m| m.modified()) {
            Ok(modified) => {
                let millis = DateTime::<Utc>::from(modified).timestamp_millis();
                u64::try_from(millis).unwrap_or(0)
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "无法读取配置文件修改时间");
                0
            }
        }
    }
}
