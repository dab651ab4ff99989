// Repository 抽象层 - 定义报告持久化接口

pub mod json_file;

use anyhow::Result;
use async_trait::async_trait;

use super::models::AnalysisRecord;

/// 报告持久化接口 - 所有存储实现必须实现此 trait
///
/// 报告序列整体读写：每次变更都覆盖写入完整序列。
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// 读取完整的报告序列
    ///
    /// 内容缺失时返回空序列；内容损坏时同样降级为空序列，
    /// 本地数据问题绝不阻塞界面。
    async fn load_all(&self) -> Result<Vec<AnalysisRecord>>;

    /// 持久化完整的报告序列（整体覆盖）
    async fn persist_all(&self, records: &[AnalysisRecord]) -> Result<()>;

    /// 删除整个持久化序列
    async fn clear(&self) -> Result<()>;
}
