// ==========================================
// 钛合金3D打印成本预算系统 - API 层
// ==========================================
// 职责: 面向调用方的业务接口
// ==========================================

// 模块声明
pub mod budget_api;
pub mod error;

// 重导出核心类型
pub use budget_api::BudgetApi;
pub use error::{ApiError, ApiResult};
