//! 应用程序初始化和启动
//!
//! 负责 Tauri 应用的完整启动流程，包括：
//! - 日志系统初始化
//! - 应用数据目录准备
//! - 各领域模块初始化
//! - Tauri Builder 配置
//! - 命令注册

use std::sync::Arc;

use tauri::Manager;
use tracing::info;

use crate::analysis::AnalysisClient;
use crate::auth::AuthClient;
use crate::commands::*;
use crate::domains::{AnalysisDomain, AuthDomain, StorageDomain, SystemDomain};
use crate::logger;
use crate::session::SessionManager;
use crate::settings::SettingsManager;
use crate::storage::{JsonFileRepository, ReportStore};
use crate::AppState;

/// 应用程序入口点
///
/// 初始化并启动 Tauri 应用，包含以下步骤：
/// 1. 日志系统初始化
/// 2. 应用数据目录创建
/// 3. 设置、会话与报告存储初始化
/// 4. 领域管理器组装
/// 5. Tauri 命令注册
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // 创建日志广播器
    let log_broadcaster = Arc::new(logger::LogBroadcaster::new());

    // 初始化日志系统（带前端推送功能）
    logger::init_with_broadcaster(log_broadcaster.clone()).expect("Failed to initialize logger");

    tauri::Builder::default()
        .setup(move |app| {
            info!("初始化反馈情感分析器...");

            // 设置日志广播器的 app handle
            log_broadcaster.set_app_handle(app.handle().clone());

            let app_dir = app.path().app_data_dir().map_err(|e| e.to_string())?;
            std::fs::create_dir_all(&app_dir).map_err(|e| e.to_string())?;

            // 初始化运行时（仅用于启动阶段的异步初始化）
            let runtime = tokio::runtime::Runtime::new().map_err(|e| e.to_string())?;

            let state = runtime.block_on(async {
                // 设置管理器
                let settings = Arc::new(
                    SettingsManager::new(app_dir.join("settings.json"))
                        .await
                        .expect("设置管理器初始化失败"),
                );

                // 会话管理器（认证令牌独立保存）
                let session = Arc::new(
                    SessionManager::new(app_dir.join("session.json"))
                        .await
                        .expect("会话管理器初始化失败"),
                );

                // 报告存储
                let repository = Arc::new(JsonFileRepository::new(app_dir.join("reports.json")));
                let reports = Arc::new(
                    ReportStore::new(repository)
                        .await
                        .expect("报告存储初始化失败"),
                );

                // 共享的 HTTP 客户端（复用连接池）
                let http_client = reqwest::Client::builder()
                    .timeout(std::time::Duration::from_secs(30))
                    .build()
                    .expect("无法创建 HTTP 客户端");

                // ==================== 组装领域管理器 ====================

                let analysis_domain = Arc::new(AnalysisDomain::new(Arc::new(
                    AnalysisClient::new(http_client.clone()),
                )));
                let storage_domain = Arc::new(StorageDomain::new(reports, settings));
                let auth_domain = Arc::new(AuthDomain::new(
                    Arc::new(AuthClient::new(http_client)),
                    session,
                ));
                let system_domain = Arc::new(SystemDomain::new(
                    log_broadcaster.clone(),
                    app_dir.clone(),
                ));

                info!("领域管理器已初始化完成");

                AppState {
                    analysis_domain,
                    storage_domain,
                    auth_domain,
                    system_domain,
                }
            });

            app.manage(state);

            Ok(())
        })
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![
            analyze_feedback,
            save_report,
            get_reports,
            search_reports,
            get_report_stats,
            delete_report,
            clear_reports,
            export_reports,
            export_report,
            save_export_file,
            get_settings,
            update_settings,
            reset_settings,
            login,
            register,
            login_with_google,
            logout,
            current_user,
            get_log_dir,
            open_log_folder,
            open_data_folder,
            set_frontend_logging,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
