//! 反馈分析命令
//!
//! 分析入口：校验输入、调用远端服务，并根据自动保存设置
//! 决定是否立即写入报告存储。保存与否是这一层的显式决定，
//! 分析客户端本身不带副作用。

use serde::Serialize;
use tracing::info;

use crate::models::{AnalysisRecord, AnalysisResult};
use crate::AppState;

/// 分析命令的返回内容
///
/// `record` 仅在结果被保存时存在。
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeFeedbackResponse {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub record: Option<AnalysisRecord>,
}

/// 分析一条反馈文本
///
/// # 参数
/// - `feedback`: 反馈文本，去除空白后不能为空
/// - `save`: 前端的覆盖开关；缺省时使用设置中的自动保存选项
#[tauri::command]
pub async fn analyze_feedback(
    state: tauri::State<'_, AppState>,
    feedback: String,
    save: Option<bool>,
) -> Result<AnalyzeFeedbackResponse, String> {
    let text = feedback.trim();
    if text.is_empty() {
        return Err("请输入要分析的反馈内容".to_string());
    }

    let settings = state.storage_domain.get_settings().get().await;
    let token = state.auth_domain.get_session().token().await;

    let result = state
        .analysis_domain
        .get_client()
        .analyze(&settings.api_url, token.as_deref(), text)
        .await
        .map_err(|e| e.to_string())?;

    info!("分析完成: sentiment={}", result.sentiment.as_str());

    let record = if save.unwrap_or(settings.auto_save) {
        let record = state
            .storage_domain
            .get_reports()
            .insert(result.clone())
            .await
            .map_err(|e| format!("保存报告失败: {}", e))?;
        Some(record)
    } else {
        None
    };

    Ok(AnalyzeFeedbackResponse { result, record })
}

/// 手动保存一条分析结果到报告
#[tauri::command]
pub async fn save_report(
    state: tauri::State<'_, AppState>,
    result: AnalysisResult,
) -> Result<AnalysisRecord, String> {
    state
        .storage_domain
        .get_reports()
        .insert(result)
        .await
        .map_err(|e| format!("保存报告失败: {}", e))
}
