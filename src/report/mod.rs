// ==========================================
// 钛合金3D打印成本预算系统 - 报表层
// ==========================================
// 职责: 等宽文本报表渲染
// 红线: 对齐一律按显示宽度计算, 不按字符个数
// ==========================================

pub mod formatter;
pub mod width;

// 重导出核心类型
pub use formatter::{format_amount, ReportFormatter};
pub use width::{center, display_width, pad_left, pad_right};
