//! 工具函数模块
//!
//! 提供跨平台的文件系统辅助功能

pub mod file_system;

// 重新导出常用函数
pub use file_system::*;
