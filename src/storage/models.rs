// 报告数据模型 - 本地持久化的分析记录

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{AnalysisResult, Sentiment};

/// 一条已保存的反馈分析记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// 唯一标识：保存时刻的毫秒时间戳加随机后缀
    pub id: String,
    /// 用户提交的原始反馈文本
    pub feedback: String,
    /// 远端服务返回的情感分类
    pub sentiment: Sentiment,
    /// 保存时刻（ISO-8601 格式）
    pub timestamp: String,
}

impl AnalysisRecord {
    /// 由分析结果生成完整记录，分配 id 和时间戳
    ///
    /// id 前缀取自保存时刻，保证按时间近似有序；随机后缀保证
    /// 同一毫秒内连续保存也不会重复。
    pub fn from_result(result: AnalysisResult) -> Self {
        let now = Utc::now();
        let suffix = Uuid::new_v4().simple().to_string();

        Self {
            id: format!("{}-{}", now.timestamp_millis(), &suffix[..8]),
            feedback: result.feedback,
            sentiment: result.sentiment,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// 情感统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentStats {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}
