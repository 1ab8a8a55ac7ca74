// ==========================================
// 钛合金3D打印成本预算系统 - 文本报表导出
// ==========================================

use crate::exporter::error::ExportResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 将渲染好的报表文本写入文件（UTF-8）
pub fn export_report_text(report: &str, path: &Path) -> ExportResult<()> {
    let mut file = File::create(path)?;
    file.write_all(report.as_bytes())?;
    Ok(())
}
