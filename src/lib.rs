// ==========================================
// 钛合金3D打印成本预算系统 - 核心库
// ==========================================
// 技术栈: Rust + calamine + zip/quick-xml
// 系统定位: 成本估算核心 (界面外壳仅作为调用方)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 时长解析与成本计算
pub mod engine;

// 报表层 - 显示宽度与文本报表
pub mod report;

// 导入层 - 零件清单加载
pub mod importer;

// 导出层 - Excel/文本报表写出
pub mod exporter;

// 配置层 - 定价方案持久化
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务门面
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{CostBreakdown, CostLines, InputEcho, Part, PricingConfig};

// 引擎
pub use engine::{parse_duration_hours, CalcError, CalcResult, CostCalculator};

// 报表
pub use report::ReportFormatter;

// 导入/导出
pub use exporter::{ExportError, ExportResult};
pub use importer::{CsvPartsLoader, ExcelPartsLoader, LoadError, LoadResult};

// API
pub use api::{ApiError, ApiResult, BudgetApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "钛合金3D打印成本预算系统";
