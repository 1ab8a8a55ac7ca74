// ==========================================
// 钛合金3D打印成本预算系统 - 预算业务门面
// ==========================================
// 职责: 前置条件校验 + 调度计算/报表/导入导出
// 界面(或 CLI)只与本层交互
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{CostBreakdown, Part, PricingConfig};
use crate::engine::CostCalculator;
use crate::exporter;
use crate::importer::{CsvPartsLoader, ExcelPartsLoader, LoadError};
use crate::report::ReportFormatter;
use std::path::Path;

// ==========================================
// BudgetApi - 预算 API
// ==========================================
#[derive(Debug, Default)]
pub struct BudgetApi {
    calculator: CostCalculator,
    formatter: ReportFormatter,
}

impl BudgetApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析数值输入框文本（体积、定价参数等）
    ///
    /// 解析失败为可恢复错误, 调用方重新提示输入即可。
    pub fn parse_numeric_field(field: &str, text: &str) -> ApiResult<f64> {
        text.trim()
            .parse::<f64>()
            .map_err(|_| ApiError::InvalidNumericInput {
                field: field.to_string(),
                value: text.to_string(),
            })
    }

    /// 成本估算入口
    ///
    /// 空零件清单 / 空时长在此拦截; 计算引擎假定前置条件成立。
    pub fn estimate(
        &self,
        parts: &[Part],
        duration_text: &str,
        pricing: &PricingConfig,
    ) -> ApiResult<CostBreakdown> {
        if parts.is_empty() {
            return Err(ApiError::EmptyPartList);
        }
        if duration_text.trim().is_empty() {
            return Err(ApiError::EmptyDuration);
        }

        Ok(self.calculator.calculate(parts, duration_text, pricing))
    }

    /// 渲染文本报表
    pub fn render_report(&self, breakdown: &CostBreakdown) -> String {
        self.formatter.render(breakdown)
    }

    /// 导出 Excel 报表
    pub fn export_excel(&self, breakdown: &CostBreakdown, path: &Path) -> ApiResult<()> {
        exporter::export_report_excel(breakdown, path)?;
        Ok(())
    }

    /// 导出文本报表
    pub fn export_text(&self, breakdown: &CostBreakdown, path: &Path) -> ApiResult<()> {
        exporter::export_report_text(&self.render_report(breakdown), path)?;
        Ok(())
    }

    /// 按扩展名加载零件清单（.xlsx/.xlsm/.csv）
    pub fn load_parts(&self, path: &Path) -> ApiResult<Vec<Part>> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let parts = match ext {
            "xlsx" | "xlsm" => ExcelPartsLoader::load(path)?,
            "csv" => CsvPartsLoader::load(path)?,
            other => return Err(LoadError::UnsupportedFormat(other.to_string()).into()),
        };
        Ok(parts)
    }
}
