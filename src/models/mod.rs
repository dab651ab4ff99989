// 数据模型模块 - 定义所有的数据结构

use serde::{Deserialize, Serialize};

// 重新导出存储模块的类型
pub use crate::storage::{AnalysisRecord, SentimentStats};

/// 默认的后端 API 地址
pub const DEFAULT_API_URL: &str = "http://localhost:5500";

/// 情感分类
///
/// 远端服务约定只返回三种标签；收到未知标签时原样保留并展示，
/// 不做本地纠正。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// 正面
    Positive,
    /// 负面
    Negative,
    /// 中性
    Neutral,
    /// 服务返回的其他标签，按原样透传
    #[serde(untagged)]
    Other(String),
}

impl Sentiment {
    /// 情感标签文本
    pub fn as_str(&self) -> &str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Other(label) => label,
        }
    }
}

/// 报告筛选条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentFilter {
    /// 不过滤
    All,
    Positive,
    Negative,
    Neutral,
}

impl SentimentFilter {
    /// 判断记录的情感分类是否满足筛选条件
    pub fn matches(&self, sentiment: &Sentiment) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Positive => matches!(sentiment, Sentiment::Positive),
            SentimentFilter::Negative => matches!(sentiment, Sentiment::Negative),
            SentimentFilter::Neutral => matches!(sentiment, Sentiment::Neutral),
        }
    }
}

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }
}

/// 远端分析服务返回的结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 提交的原始反馈文本
    pub feedback: String,
    /// 情感分类
    pub sentiment: Sentiment,
}

/// 应用设置
///
/// 字段名与前端约定保持一致（camelCase）。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// 后端 API 地址
    pub api_url: String,
    /// 默认导出格式
    pub export_format: ExportFormat,
    /// 分析成功后是否自动保存到报告
    pub auto_save: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            export_format: ExportFormat::Json,
            auto_save: true,
        }
    }
}

/// 登录用户信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    /// 账号来源（local / google）
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// 认证成功后的会话内容（令牌 + 用户信息）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}
