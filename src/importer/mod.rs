// ==========================================
// 钛合金3D打印成本预算系统 - 导入层
// ==========================================
// 职责: 从外部文件加载零件清单
// 支持: Excel (.xlsx/.xlsm), CSV (.csv)
// ==========================================

// 模块声明
pub mod csv_loader;
pub mod error;
pub mod parts_loader;

// 重导出核心类型
pub use csv_loader::CsvPartsLoader;
pub use error::{LoadError, LoadResult};
pub use parts_loader::ExcelPartsLoader;
