// 分析客户端模块
// 负责与远端情感分析服务交互

use anyhow::{anyhow, Result};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tracing::debug;

use crate::models::AnalysisResult;

/// 情感分析客户端
///
/// 只负责一次网络调用，不做任何持久化；结果是否保存
/// 由调用方决定。
#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
}

impl AnalysisClient {
    /// 创建分析客户端（复用外部传入的连接池）
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// 将反馈文本提交给远端分析服务
    ///
    /// 调用方需保证文本去除空白后非空。`token` 存在时附加
    /// Bearer 认证头，缺失时完全省略该头（分析接口按可选
    /// 认证处理）。
    pub async fn analyze(
        &self,
        api_url: &str,
        token: Option<&str>,
        feedback: &str,
    ) -> Result<AnalysisResult> {
        let url = format!("{}/api/analyze", api_url.trim_end_matches('/'));
        debug!("提交分析请求: {}", url);

        let mut request = self
            .client
            .post(&url)
            .json(&json!({ "feedback": feedback }));

        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| anyhow!("无法连接分析服务: {}", e))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(anyhow!("{}", error_message(status, &body)));
        }

        serde_json::from_str(&body).map_err(|e| anyhow!("分析服务返回了无法解析的内容: {}", e))
    }
}

/// 从失败响应中提取错误信息：优先取响应体的 error 字段
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| format!("分析请求失败 (HTTP {})", status.as_u16()))
}
