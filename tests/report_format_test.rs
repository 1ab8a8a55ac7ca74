// ==========================================
// 文本报表格式集成测试
// ==========================================
// 测试目标: 渲染 → 文本提取 往返, 以及中英混排对齐
// ==========================================

use ti_print_budget::report::{display_width, ReportFormatter};
use ti_print_budget::{BudgetApi, CostBreakdown, Part, PricingConfig};

fn sample_breakdown() -> CostBreakdown {
    let pricing = PricingConfig {
        density_g_cm3: 4.5,
        packing_factor: 0.9995,
        usage_ratio: 1.5,
        unit_price_per_kg: 900.0,
        machine_hour_rate: 250.0,
        gas_bottle_count: 1.0,
        gas_unit_price: 1800.0,
        gas_usage_fraction: 0.8,
        post_processing_fee: 1500.0,
        discount_rate: 0.8,
    };
    let api = BudgetApi::new();
    // 中英混排零件名, 检验宽字符对齐
    let parts = vec![
        Part::with_support("连接支架Bracket-01", 1000.0, 120.0),
        Part::new("Base", 500.0),
    ];
    api.estimate(&parts, "1天0小时0分0秒", &pricing).unwrap()
}

#[test]
fn test_rendered_total_round_trips() {
    // 从渲染文本按货币格式提取的合计金额与舍入原值一致
    let breakdown = sample_breakdown();
    let report = ReportFormatter::new().render(&breakdown);

    let extract = |label: &str| -> f64 {
        let line = report
            .lines()
            .find(|line| line.contains(label))
            .unwrap_or_else(|| panic!("报表缺少 {} 行", label));
        line.split('¥')
            .nth(1)
            .unwrap_or_else(|| panic!("{} 行缺少货币符号", label))
            .replace(',', "")
            .trim()
            .parse()
            .unwrap()
    };

    assert_eq!(extract("合计金额"), breakdown.costs.total_cost);
    assert_eq!(extract("实付金额"), breakdown.costs.actual_cost);
    assert_eq!(extract("机时费用"), breakdown.costs.machine_cost);
}

#[test]
fn test_cost_lines_align_with_border() {
    // 所有金额行按显示宽度与边框严格同宽
    let report = ReportFormatter::new().render(&sample_breakdown());
    let border_width = display_width(report.lines().next().unwrap());

    for line in report.lines() {
        if line.contains('¥') || line.contains("折扣优惠") {
            assert_eq!(
                display_width(line),
                border_width,
                "行未对齐到边框宽度: {:?}",
                line
            );
        }
    }
}

#[test]
fn test_parts_listing_is_one_indexed() {
    let report = ReportFormatter::new().render(&sample_breakdown());
    assert!(report.contains("零件1: 连接支架Bracket-01"));
    assert!(report.contains("零件2: Base"));
    assert!(!report.contains("零件0:"));
}

#[test]
fn test_discount_shown_in_zhe_notation() {
    let report = ReportFormatter::new().render(&sample_breakdown());
    assert!(report.contains("8折"));
}
