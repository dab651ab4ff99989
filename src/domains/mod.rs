// 领域模块 - 用于组织应用的业务逻辑
//
// 将应用状态按业务领域分组,实现单一职责原则
// 包含4个领域:分析、存储、认证、系统

pub mod analysis;
pub mod auth;
pub mod storage;
pub mod system;

pub use analysis::AnalysisDomain;
pub use auth::AuthDomain;
pub use storage::StorageDomain;
pub use system::SystemDomain;
