// ==========================================
// 钛合金3D打印成本预算系统 - 领域层
// ==========================================
// 职责: 零件/定价/成本明细的数据模型
// 红线: 领域类型不含默认定价, 默认值属于配置层
// ==========================================

// 模块声明
pub mod breakdown;
pub mod part;
pub mod pricing;

// 重导出核心类型
pub use breakdown::{round2, CostBreakdown, CostLines, InputEcho};
pub use part::Part;
pub use pricing::PricingConfig;
