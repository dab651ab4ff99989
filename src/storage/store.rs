// 报告存储 - 维护按保存时间倒序排列的分析记录

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;
use tracing::info;

use super::models::AnalysisRecord;
use super::repository::ReportRepository;
use crate::models::AnalysisResult;

/// 报告存储管理器
///
/// 内存中缓存完整序列，每次变更整体写回存储层。
/// 序列始终保持最新记录在头部。
pub struct ReportStore {
    repository: Arc<dyn ReportRepository>,
    records: RwLock<Vec<AnalysisRecord>>,
}

impl ReportStore {
    /// 创建存储管理器并加载已持久化的记录
    pub async fn new(repository: Arc<dyn ReportRepository>) -> Result<Self> {
        let initial = repository.load_all().await?;

        Ok(Self {
            repository,
            records: RwLock::new(initial),
        })
    }

    /// 保存一条分析结果
    ///
    /// 分配 id 和时间戳后插入序列头部并持久化，返回完整记录。
    pub async fn insert(&self, result: AnalysisResult) -> Result<AnalysisRecord> {
        let record = AnalysisRecord::from_result(result);

        let mut records = self.records.write().await;
        records.insert(0, record.clone());

        if let Err(e) = self.repository.persist_all(&records).await {
            // 写入失败时回滚内存状态，保持缓存与磁盘一致
            records.remove(0);
            return Err(e);
        }

        info!("已保存报告: {}", record.id);
        Ok(record)
    }

    /// 返回完整的记录序列（最新在前）
    pub async fn list_all(&self) -> Vec<AnalysisRecord> {
        self.records.read().await.clone()
    }

    /// 按 id 删除记录
    ///
    /// id 不存在时静默忽略，不视为错误。
    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        let mut records = self.records.write().await;

        let filtered: Vec<AnalysisRecord> = records
            .iter()
            .filter(|record| record.id != id)
            .cloned()
            .collect();

        if filtered.len() == records.len() {
            return Ok(());
        }

        self.repository.persist_all(&filtered).await?;
        *records = filtered;

        info!("已删除报告: {}", id);
        Ok(())
    }

    /// 清空全部记录
    pub async fn clear_all(&self) -> Result<()> {
        let mut records = self.records.write().await;

        self.repository.clear().await?;
        records.clear();

        info!("已清空全部报告");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::*;
    use crate::models::Sentiment;
    use crate::storage::repository::json_file::JsonFileRepository;

    fn result(text: &str, sentiment: Sentiment) -> AnalysisResult {
        AnalysisResult {
            feedback: text.to_string(),
            sentiment,
        }
    }

    async fn store_at(path: PathBuf) -> ReportStore {
        ReportStore::new(Arc::new(JsonFileRepository::new(path)))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_prepends_newest_first() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path().join("reports.json")).await;

        store
            .insert(result("第一条", Sentiment::Positive))
            .await
            .unwrap();
        store
            .insert(result("第二条", Sentiment::Negative))
            .await
            .unwrap();
        let third = store
            .insert(result("第三条", Sentiment::Neutral))
            .await
            .unwrap();

        let all = store.list_all().await;
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, third.id, "最新插入的记录应位于头部");
        assert_eq!(all[2].feedback, "第一条");
    }

    #[tokio::test]
    async fn test_insert_assigns_unique_ids() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path().join("reports.json")).await;

        for i in 0..10 {
            store
                .insert(result(&format!("反馈 {}", i), Sentiment::Positive))
                .await
                .unwrap();
        }

        let all = store.list_all().await;
        let ids: std::collections::HashSet<&str> =
            all.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids.len(), 10, "连续插入的 id 不应重复");
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path().join("reports.json")).await;

        let first = store
            .insert(result("保留", Sentiment::Positive))
            .await
            .unwrap();
        let second = store
            .insert(result("删除", Sentiment::Negative))
            .await
            .unwrap();

        store.delete_by_id(&second.id).await.unwrap();

        let all = store.list_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, first.id);
    }

    #[tokio::test]
    async fn test_delete_absent_id_is_noop() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path().join("reports.json")).await;

        store
            .insert(result("唯一一条", Sentiment::Neutral))
            .await
            .unwrap();
        store.delete_by_id("不存在的id").await.unwrap();

        assert_eq!(store.list_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_all_empties_store() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path().join("reports.json")).await;

        store
            .insert(result("一", Sentiment::Positive))
            .await
            .unwrap();
        store
            .insert(result("二", Sentiment::Negative))
            .await
            .unwrap();

        store.clear_all().await.unwrap();
        assert!(store.list_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_reopen_reads_persisted_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports.json");

        let store = store_at(path.clone()).await;
        store
            .insert(result("先保存", Sentiment::Positive))
            .await
            .unwrap();
        let latest = store
            .insert(result("后保存", Sentiment::Negative))
            .await
            .unwrap();
        drop(store);

        let reopened = store_at(path).await;
        let all = reopened.list_all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, latest.id, "重新打开后顺序保持最新在前");
    }

    #[tokio::test]
    async fn test_corrupt_file_falls_back_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports.json");
        std::fs::write(&path, "not-json{{{").unwrap();

        let store = store_at(path).await;
        assert!(store.list_all().await.is_empty(), "损坏内容应降级为空列表");

        // 降级后仍可正常写入
        store
            .insert(result("恢复写入", Sentiment::Positive))
            .await
            .unwrap();
        assert_eq!(store.list_all().await.len(), 1);
    }
}
