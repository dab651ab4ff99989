// 分析领域管理器
//
// 负责与远端情感分析服务的交互

use std::sync::Arc;

use crate::analysis::AnalysisClient;

/// 分析领域管理器 - 持有情感分析客户端
#[derive(Clone)]
pub struct AnalysisDomain {
    client: Arc<AnalysisClient>,
}

impl AnalysisDomain {
    /// 创建新的分析领域管理器
    pub fn new(client: Arc<AnalysisClient>) -> Self {
        Self { client }
    }

    /// 获取分析客户端
    pub fn get_client(&self) -> &Arc<AnalysisClient> {
        &self.client
    }
}
