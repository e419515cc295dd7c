// ==========================================
// ARK 服务器配置工作台 - 服务器档案仓储
// ==========================================
// 职责: 内存中的服务器注册表（按 id 唯一）
// ==========================================

use crate::domain::server::ServerProfile;
use crate::domain::types::GameVariant;
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::path::Path;
use std::sync::RwLock;
use tracing::{debug, info};

// ==========================================
// ServerRepository - 服务器注册表
// ==========================================
#[derive(Debug, Default)]
pub struct ServerRepository {
    servers: RwLock<Vec<ServerProfile>>,
}

impl ServerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增或替换（按 id）
    pub fn upsert(&self, profile: ServerProfile) -> RepositoryResult<()> {
        let mut servers = self
            .servers
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        match servers.iter_mut().find(|s| s.id == profile.id) {
            Some(existing) => *existing = profile,
            None => servers.push(profile),
        }
        Ok(())
    }

    /// 按 id 查询
    pub fn find_by_id(&self, id: &str) -> RepositoryResult<ServerProfile> {
        let servers = self
            .servers
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        servers
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "ServerProfile".to_string(),
                id: id.to_string(),
            })
    }

    pub fn list(&self) -> RepositoryResult<Vec<ServerProfile>> {
        let servers = self
            .servers
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(servers.clone())
    }

    /// 按游戏版本筛选
    pub fn list_by_variant(&self, variant: GameVariant) -> RepositoryResult<Vec<ServerProfile>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|s| s.variant == variant)
            .collect())
    }

    /// 删除，返回是否存在
    pub fn remove(&self, id: &str) -> RepositoryResult<bool> {
        let mut servers = self
            .servers
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        let before = servers.len();
        servers.retain(|s| s.id != id);
        Ok(servers.len() != before)
    }

    /// 把根目录下的每个子目录登记为一个服务器（id 与名称取目录名）
    ///
    /// # 返回
    /// 本次登记的服务器数量
    pub fn register_from_root(&self, root: &Path, variant: GameVariant) -> RepositoryResult<usize> {
        if !root.is_dir() {
            return Err(RepositoryError::InvalidPath(format!(
                "服务器根目录不存在: {}",
                root.display()
            )));
        }

        let mut registered = 0;
        for entry in std::fs::read_dir(root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            debug!(server = %name, "发现服务器目录");
            self.upsert(ServerProfile::new(name.clone(), name, variant, entry.path()))?;
            registered += 1;
        }
        info!(root = %root.display(), registered, "服务器目录扫描完成");
        Ok(registered)
    }
}
