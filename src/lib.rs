// 反馈情感分析器 - Tauri应用主库

// 声明模块
pub mod analysis;
pub mod auth;
pub mod commands;
pub mod domains;
pub mod logger;
pub mod models;
pub mod reports;
pub mod session;
pub mod settings;
pub mod storage;
pub mod utils;

mod app;

use std::sync::Arc;

use domains::{AnalysisDomain, AuthDomain, StorageDomain, SystemDomain};

pub use app::run;

/// 应用状态（按领域分组）
///
/// - 分析领域：远端情感分析调用
/// - 存储领域：报告与设置的本地持久化
/// - 认证领域：远端认证与会话令牌
/// - 系统领域：日志与数据目录等基础设施
#[derive(Clone)]
pub struct AppState {
    /// 分析领域管理器
    pub analysis_domain: Arc<AnalysisDomain>,
    /// 存储领域管理器
    pub storage_domain: Arc<StorageDomain>,
    /// 认证领域管理器
    pub auth_domain: Arc<AuthDomain>,
    /// 系统领域管理器
    pub system_domain: Arc<SystemDomain>,
}
