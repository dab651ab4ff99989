// 会话状态 - 认证令牌的持久化管理

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::warn;

/// 持久化的会话内容
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PersistedSession {
    token: Option<String>,
}

/// 会话管理器 - 持有远端 API 的 Bearer 令牌
///
/// 令牌独立于设置和报告单独保存，作为显式参数传递给需要
/// 携带凭证的客户端，而不是读取全局状态。
pub struct SessionManager {
    path: PathBuf,
    data: RwLock<PersistedSession>,
}

impl SessionManager {
    pub async fn new(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let initial = match tokio::fs::read(&path).await {
            Ok(bytes) if !bytes.is_empty() => match serde_json::from_slice(&bytes) {
                Ok(session) => session,
                Err(e) => {
                    warn!("会话文件无法解析，视为未登录: {}", e);
                    PersistedSession::default()
                }
            },
            _ => PersistedSession::default(),
        };

        Ok(Self {
            path,
            data: RwLock::new(initial),
        })
    }

    /// 当前令牌；未登录时为 None
    pub async fn token(&self) -> Option<String> {
        self.data.read().await.token.clone()
    }

    /// 保存新令牌
    pub async fn set_token(&self, token: String) -> Result<()> {
        let mut data = self.data.write().await;

        let next = PersistedSession { token: Some(token) };
        self.persist(&next).await?;
        *data = next;

        Ok(())
    }

    /// 清除令牌（登出或认证失败时调用）
    pub async fn clear(&self) -> Result<()> {
        let mut data = self.data.write().await;

        self.persist(&PersistedSession::default()).await?;
        *data = PersistedSession::default();

        Ok(())
    }

    async fn persist(&self, session: &PersistedSession) -> Result<()> {
        let json = serde_json::to_string_pretty(session)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn test_token_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let manager = SessionManager::new(path.clone()).await.unwrap();
        assert_eq!(manager.token().await, None);

        manager.set_token("opaque-token".to_string()).await.unwrap();
        drop(manager);

        let reopened = SessionManager::new(path).await.unwrap();
        assert_eq!(reopened.token().await, Some("opaque-token".to_string()));
    }

    #[tokio::test]
    async fn test_clear_removes_token() {
        let dir = tempdir().unwrap();
        let manager = SessionManager::new(dir.path().join("session.json"))
            .await
            .unwrap();

        manager.set_token("t".to_string()).await.unwrap();
        manager.clear().await.unwrap();

        assert_eq!(manager.token().await, None);
    }

    #[tokio::test]
    async fn test_corrupt_file_means_logged_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "oops").unwrap();

        let manager = SessionManager::new(path).await.unwrap();
        assert_eq!(manager.token().await, None);
    }
}
