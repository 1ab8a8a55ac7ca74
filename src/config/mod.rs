// ==========================================
// 钛合金3D打印成本预算系统 - 配置层
// ==========================================
// 职责: 定价方案的默认值与磁盘持久化
// 红线: 默认值只存在于本层, 计算引擎不含默认定价
// ==========================================

// 模块声明
pub mod pricing_profile;

// 重导出核心类型
pub use pricing_profile::{
    default_profile_path, load_profile, save_profile, DiscountScale, PricingProfile,
};
