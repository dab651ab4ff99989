// JSON 文件存储实现 - 单个文件保存整个报告序列

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use super::ReportRepository;
use crate::storage::models::AnalysisRecord;

/// 基于单个 JSON 文件的报告存储
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ReportRepository for JsonFileRepository {
    async fn load_all(&self) -> Result<Vec<AnalysisRecord>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) if !bytes.is_empty() => bytes,
            _ => return Ok(Vec::new()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!("报告文件无法解析，按空列表处理: {}", e);
                Ok(Vec::new())
            }
        }
    }

    async fn persist_all(&self, records: &[AnalysisRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
