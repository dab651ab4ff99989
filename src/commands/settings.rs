//! 设置管理命令

use tracing::info;

use crate::models::AppSettings;
use crate::AppState;

/// 获取当前设置
#[tauri::command]
pub async fn get_settings(state: tauri::State<'_, AppState>) -> Result<AppSettings, String> {
    Ok(state.storage_domain.get_settings().get().await)
}

/// 保存设置（整体替换，字段合并由前端完成）
#[tauri::command]
pub async fn update_settings(
    state: tauri::State<'_, AppState>,
    settings: AppSettings,
) -> Result<AppSettings, String> {
    let saved = state
        .storage_domain
        .get_settings()
        .save(settings)
        .await
        .map_err(|e| format!("保存设置失败: {}", e))?;

    info!("设置已更新: api_url={}", saved.api_url);
    Ok(saved)
}

/// 恢复默认设置
#[tauri::command]
pub async fn reset_settings(state: tauri::State<'_, AppState>) -> Result<AppSettings, String> {
    let restored = state
        .storage_domain
        .get_settings()
        .reset()
        .await
        .map_err(|e| format!("重置设置失败: {}", e))?;

    info!("设置已恢复默认值");
    Ok(restored)
}
