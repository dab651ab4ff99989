// 存储模块 - 报告的本地持久化

// 子模块
pub mod models;
pub mod repository;
pub mod store;

// 重新导出主要类型
pub use models::{AnalysisRecord, SentimentStats};
pub use repository::json_file::JsonFileRepository;
pub use repository::ReportRepository;
pub use store::ReportStore;
