// 系统领域管理器
//
// 负责日志和数据目录等基础设施

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::logger::LogBroadcaster;

/// 系统领域管理器 - 负责日志推送和数据目录
#[derive(Clone)]
pub struct SystemDomain {
    log_broadcaster: Arc<LogBroadcaster>,
    data_dir: PathBuf,
}

impl SystemDomain {
    /// 创建新的系统领域管理器
    pub fn new(log_broadcaster: Arc<LogBroadcaster>, data_dir: PathBuf) -> Self {
        Self {
            log_broadcaster,
            data_dir,
        }
    }

    /// 获取日志广播器
    pub fn get_logger(&self) -> &Arc<LogBroadcaster> {
        &self.log_broadcaster
    }

    /// 应用数据目录（设置与报告文件所在位置）
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
