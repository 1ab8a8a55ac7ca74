// ==========================================
// 钛合金3D打印成本预算系统 - 预算总览工作表
// ==========================================
// 布局: 标题(A1:B1 合并) / 生成时间 / 输入参数 /
//       定价标准 / 费用明细, 列宽 25/25
// ==========================================

use crate::domain::pricing::KEY_DISCOUNT;
use crate::domain::CostBreakdown;
use crate::exporter::workbook::{CellStyle, SheetBuilder};
use chrono::Local;

/// 工作表名称
pub const SHEET_NAME: &str = "预算总览";

/// 工作簿标题
const WORKBOOK_TITLE: &str = "多零件合并打印预算报告";

/// 由成本明细构建预算总览工作表
pub fn report_workbook(breakdown: &CostBreakdown) -> SheetBuilder {
    let mut sheet = SheetBuilder::new(SHEET_NAME);
    sheet.column_width(0, 25.0).column_width(1, 25.0);

    // 标题与生成时间
    sheet.text(0, 0, WORKBOOK_TITLE, CellStyle::Title);
    sheet.merge(0, 0, 0, 1);
    sheet.text(
        1,
        0,
        format!("生成时间：{}", Local::now().format("%Y-%m-%d %H:%M")),
        CellStyle::Text,
    );
    sheet.merge(1, 0, 1, 1);

    let mut row = 3u32;

    // 输入参数
    row = section_header(&mut sheet, row, "输入参数");
    row = label_text(
        &mut sheet,
        row,
        "总打印时长",
        &breakdown.inputs.duration_text,
    );
    row = label_text(
        &mut sheet,
        row,
        "零件数量",
        &format!("{}件", breakdown.inputs.part_count),
    );
    for (i, part) in breakdown.inputs.parts.iter().enumerate() {
        let no = i + 1;
        sheet.text(row, 0, format!("零件{}名称", no), CellStyle::Header);
        sheet.text(row, 1, part.name.as_str(), CellStyle::Header);
        row += 1;
        row = label_text(
            &mut sheet,
            row,
            &format!("零件{}体积", no),
            &format!("{:.3}mm³", part.volume_mm3),
        );
        if let Some(support) = part.support_volume_mm3 {
            row = label_text(
                &mut sheet,
                row,
                &format!("零件{}支撑体积", no),
                &format!("{:.3}mm³", support),
            );
        }
    }
    row += 1;

    // 定价标准（带单位; 折扣以"折"记）
    row = section_header(&mut sheet, row, "定价标准");
    for (key, value, unit) in breakdown.pricing.labeled_entries() {
        let display = if key == KEY_DISCOUNT {
            format!("{}折", trim_number(breakdown.pricing.discount_zhe()))
        } else if unit.is_empty() {
            trim_number(value)
        } else {
            format!("{} {}", trim_number(value), unit)
        };
        row = label_text(&mut sheet, row, key, &display);
    }
    row += 1;

    // 费用明细（货币单元格用数值 + ¥ 数字格式）
    let costs = &breakdown.costs;
    row = section_header(&mut sheet, row, "费用明细");
    row = label_currency(&mut sheet, row, "材料费用", costs.material_cost);
    row = label_currency(&mut sheet, row, "机时费用", costs.machine_cost);
    row = label_currency(&mut sheet, row, "氩气费用", costs.gas_cost);
    row = label_currency(&mut sheet, row, "后处理费", costs.post_processing_cost);
    row = label_currency(&mut sheet, row, "总费用", costs.total_cost);
    label_currency(&mut sheet, row, "实际费用", costs.actual_cost);

    sheet
}

fn section_header(sheet: &mut SheetBuilder, row: u32, title: &str) -> u32 {
    sheet.text(row, 0, title, CellStyle::Header);
    sheet.merge(row, 0, row, 1);
    row + 1
}

fn label_text(sheet: &mut SheetBuilder, row: u32, label: &str, value: &str) -> u32 {
    sheet.text(row, 0, label, CellStyle::Text);
    sheet.text(row, 1, value, CellStyle::Text);
    row + 1
}

fn label_currency(sheet: &mut SheetBuilder, row: u32, label: &str, value: f64) -> u32 {
    sheet.text(row, 0, label, CellStyle::Text);
    sheet.number(row, 1, value, CellStyle::Currency);
    row + 1
}

/// 数字显示: 去掉无意义的小数位（4.5 → "4.5", 900 → "900"）
fn trim_number(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_number() {
        assert_eq!(trim_number(900.0), "900");
        assert_eq!(trim_number(4.5), "4.5");
        assert_eq!(trim_number(0.9995), "0.9995");
        assert_eq!(trim_number(1.0), "1");
    }
}
