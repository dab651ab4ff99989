//! 系统工具命令
//!
//! 提供日志与数据目录访问、前端日志推送开关。

use tracing::info;

use crate::utils::file_system::{
    get_log_dir as get_log_dir_impl, open_folder_in_explorer, open_log_folder_impl,
};
use crate::AppState;

/// 获取日志目录路径
#[tauri::command]
pub fn get_log_dir() -> Result<String, String> {
    Ok(get_log_dir_impl().to_string_lossy().to_string())
}

/// 打开日志文件夹
#[tauri::command]
pub fn open_log_folder() -> Result<(), String> {
    open_log_folder_impl()
}

/// 打开应用数据文件夹（设置与报告文件所在位置）
#[tauri::command]
pub async fn open_data_folder(state: tauri::State<'_, AppState>) -> Result<(), String> {
    open_folder_in_explorer(state.system_domain.data_dir())
}

/// 设置是否向前端推送日志
#[tauri::command]
pub async fn set_frontend_logging(
    state: tauri::State<'_, AppState>,
    enabled: bool,
) -> Result<(), String> {
    state.system_domain.get_logger().set_enabled(enabled);
    info!("日志推送已设置: {}", enabled);
    Ok(())
}
