//! 报告查询与导出命令
//!
//! 提供报告的查询、筛选、删除与导出接口。筛选和统计都在
//! 完整序列的内存副本上计算。

use tracing::info;

use crate::models::{AnalysisRecord, ExportFormat, SentimentFilter, SentimentStats};
use crate::reports::export::ExportPayload;
use crate::AppState;

/// 获取全部报告（最新在前）
#[tauri::command]
pub async fn get_reports(
    state: tauri::State<'_, AppState>,
) -> Result<Vec<AnalysisRecord>, String> {
    Ok(state.storage_domain.get_reports().list_all().await)
}

/// 按情感分类与搜索词筛选报告
#[tauri::command]
pub async fn search_reports(
    state: tauri::State<'_, AppState>,
    filter: SentimentFilter,
    search: Option<String>,
) -> Result<Vec<AnalysisRecord>, String> {
    let all = state.storage_domain.get_reports().list_all().await;
    Ok(crate::reports::filter_and_search(
        &all,
        filter,
        search.as_deref().unwrap_or(""),
    ))
}

/// 获取情感统计
#[tauri::command]
pub async fn get_report_stats(
    state: tauri::State<'_, AppState>,
) -> Result<SentimentStats, String> {
    let all = state.storage_domain.get_reports().list_all().await;
    Ok(crate::reports::sentiment_stats(&all))
}

/// 删除单条报告；id 不存在时同样视为成功
#[tauri::command]
pub async fn delete_report(state: tauri::State<'_, AppState>, id: String) -> Result<(), String> {
    state
        .storage_domain
        .get_reports()
        .delete_by_id(&id)
        .await
        .map_err(|e| format!("删除报告失败: {}", e))
}

/// 清空全部报告
#[tauri::command]
pub async fn clear_reports(state: tauri::State<'_, AppState>) -> Result<(), String> {
    state
        .storage_domain
        .get_reports()
        .clear_all()
        .await
        .map_err(|e| format!("清空报告失败: {}", e))
}

/// 导出筛选后的报告集合
///
/// `format` 缺省时使用设置中的默认导出格式。
#[tauri::command]
pub async fn export_reports(
    state: tauri::State<'_, AppState>,
    filter: SentimentFilter,
    search: Option<String>,
    format: Option<ExportFormat>,
) -> Result<ExportPayload, String> {
    let settings = state.storage_domain.get_settings().get().await;
    let format = format.unwrap_or(settings.export_format);

    let all = state.storage_domain.get_reports().list_all().await;
    let selected =
        crate::reports::filter_and_search(&all, filter, search.as_deref().unwrap_or(""));

    info!("导出 {} 条报告 ({})", selected.len(), format.extension());
    crate::reports::export::export_records(&selected, format).map_err(|e| format!("导出失败: {}", e))
}

/// 导出单条报告
#[tauri::command]
pub async fn export_report(
    state: tauri::State<'_, AppState>,
    id: String,
    format: Option<ExportFormat>,
) -> Result<ExportPayload, String> {
    let settings = state.storage_domain.get_settings().get().await;
    let format = format.unwrap_or(settings.export_format);

    let all = state.storage_domain.get_reports().list_all().await;
    let record = all
        .iter()
        .find(|record| record.id == id)
        .ok_or_else(|| format!("报告不存在: {}", id))?;

    crate::reports::export::export_record(record, format).map_err(|e| format!("导出失败: {}", e))
}

/// 将导出内容写入指定路径
///
/// 路径由前端通过保存对话框选定。
#[tauri::command]
pub async fn save_export_file(path: String, contents: String) -> Result<(), String> {
    let path = std::path::PathBuf::from(path);

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| format!("创建目录失败: {}", e))?;
    }

    tokio::fs::write(&path, contents)
        .await
        .map_err(|e| format!("写入文件失败: {}", e))?;

    info!("导出文件已保存: {:?}", path);
    Ok(())
}
