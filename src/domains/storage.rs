// 存储领域管理器
//
// 负责报告与设置的本地持久化
// 包含 ReportStore 和 SettingsManager 两个核心组件

use std::sync::Arc;

use crate::settings::SettingsManager;
use crate::storage::ReportStore;

/// 存储领域管理器 - 负责报告存储和设置
#[derive(Clone)]
pub struct StorageDomain {
    reports: Arc<ReportStore>,
    settings: Arc<SettingsManager>,
}

impl StorageDomain {
    /// 创建新的存储领域管理器
    pub fn new(reports: Arc<ReportStore>, settings: Arc<SettingsManager>) -> Self {
        Self { reports, settings }
    }

    /// 获取报告存储
    pub fn get_reports(&self) -> &Arc<ReportStore> {
        &self.reports
    }

    /// 获取设置管理器
    pub fn get_settings(&self) -> &Arc<SettingsManager> {
        &self.settings
    }
}
