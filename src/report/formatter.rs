// ==========================================
// 钛合金3D打印成本预算系统 - 预算报表格式化
// ==========================================
// 输出 62 列等宽文本报表: 边框标题 + 打印参数 +
// 零件清单 + 费用明细(千分位金额/折扣/实付)
// ==========================================

use crate::domain::{CostBreakdown, Part};
use crate::report::width::{center, display_width};

/// 报表总宽（显示列）
const REPORT_WIDTH: usize = 62;

/// 报表标题
const REPORT_TITLE: &str = "多零件3D打印成本预算报告";

/// 金额格式化: 千分位 + 两位小数（如 8,946.07）
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}.{}", sign, grouped, frac_part)
}

// ==========================================
// ReportFormatter - 报表格式化器
// ==========================================
#[derive(Debug, Default)]
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// 渲染完整报表文本
    pub fn render(&self, breakdown: &CostBreakdown) -> String {
        let border = "=".repeat(REPORT_WIDTH);
        let mut lines: Vec<String> = Vec::new();

        lines.push(border.clone());
        lines.push(center(REPORT_TITLE, REPORT_WIDTH));
        lines.push(border.clone());

        // 打印参数
        lines.push("[打印参数]".to_string());
        lines.push(format!("  零件数量：{}件", breakdown.inputs.part_count));
        lines.push(format!("  打印时长：{}", breakdown.inputs.duration_text));

        // 零件清单
        lines.push(String::new());
        lines.push("[零件清单]".to_string());
        for (index, part) in breakdown.inputs.parts.iter().enumerate() {
            lines.push(part_line(index + 1, part));
        }

        // 费用明细
        let costs = &breakdown.costs;
        let rule = format!("  {}", "-".repeat(REPORT_WIDTH - 4));
        lines.push(String::new());
        lines.push("[费用明细]".to_string());
        lines.push(amount_line("  项目名称", "金额"));
        lines.push(rule.clone());
        lines.push(amount_line("  材料成本：", &currency(costs.material_cost)));
        lines.push(amount_line("  机时费用：", &currency(costs.machine_cost)));
        lines.push(amount_line("  氩气消耗：", &currency(costs.gas_cost)));
        lines.push(amount_line(
            "  后处理费：",
            &currency(costs.post_processing_cost),
        ));
        lines.push(rule);
        lines.push(amount_line("  合计金额：", &currency(costs.total_cost)));
        lines.push(amount_line(
            "  折扣优惠：",
            &format!("{}折", format_zhe(breakdown.pricing.discount_zhe())),
        ));
        lines.push(amount_line("  实付金额：", &currency(costs.actual_cost)));
        lines.push(border);

        lines.join("\n")
    }
}

fn currency(value: f64) -> String {
    format!("¥{}", format_amount(value))
}

/// 左侧标签 + 右对齐数值, 整行凑足 REPORT_WIDTH 列
fn amount_line(label: &str, value: &str) -> String {
    let used = display_width(label) + display_width(value);
    if used >= REPORT_WIDTH {
        return format!("{}{}", label, value);
    }
    format!("{}{}{}", label, " ".repeat(REPORT_WIDTH - used), value)
}

fn part_line(index: usize, part: &Part) -> String {
    match part.support_volume_mm3 {
        Some(support) => format!(
            "  零件{}: {}（零件体积：{:.3}mm³，支撑体积：{:.3}mm³）",
            index, part.name, part.volume_mm3, support
        ),
        None => format!(
            "  零件{}: {}（零件体积：{:.3}mm³）",
            index, part.name, part.volume_mm3
        ),
    }
}

/// 折数显示: 整数折不带小数点（8 而非 8.0）
fn format_zhe(zhe: f64) -> String {
    if (zhe - zhe.round()).abs() < 1e-9 {
        format!("{:.0}", zhe)
    } else {
        format!("{:.1}", zhe)
    }
}
