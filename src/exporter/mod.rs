// ==========================================
// 钛合金3D打印成本预算系统 - 导出层
// ==========================================
// 职责: 成本明细 → Excel 工作簿 / 文本报表
// 红线: I/O 失败原样上报, 不影响计算状态
// ==========================================

// 模块声明
pub mod error;
pub mod report_sheet;
pub mod text;
pub mod workbook;

// 重导出核心类型
pub use error::{ExportError, ExportResult};
pub use report_sheet::report_workbook;
pub use text::export_report_text;
pub use workbook::{CellStyle, CellValue, SheetBuilder, XlsxWriter};

use crate::domain::CostBreakdown;
use std::path::Path;

/// 导出预算总览 Excel 报表
pub fn export_report_excel(breakdown: &CostBreakdown, path: &Path) -> ExportResult<()> {
    let sheet = report_workbook(breakdown);
    XlsxWriter::write_file(&[sheet], path)?;
    tracing::info!(path = %path.display(), "预算报表已导出");
    Ok(())
}
