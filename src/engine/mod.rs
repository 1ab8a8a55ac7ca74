// ==========================================
// 钛合金3D打印成本预算系统 - 引擎层
// ==========================================
// 职责: 时长解析与成本计算, 纯函数无副作用
// 红线: 前置条件(零件非空/时长非空)由 API 层校验
// ==========================================

pub mod calculator;
pub mod duration;
pub mod error;

// 重导出核心引擎
pub use calculator::CostCalculator;
pub use duration::parse_duration_hours;
pub use error::{CalcError, CalcResult};
