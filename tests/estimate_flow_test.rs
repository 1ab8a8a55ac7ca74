// ==========================================
// 成本估算流程集成测试
// ==========================================
// 测试目标: API 门面 → 计算引擎 → 成本明细 全链路
// ==========================================

use std::collections::HashMap;

use ti_print_budget::api::{ApiError, BudgetApi};
use ti_print_budget::domain::pricing::{
    KEY_DENSITY, KEY_DISCOUNT, KEY_GAS_COUNT, KEY_GAS_PRICE, KEY_GAS_USAGE, KEY_MACHINE_RATE,
    KEY_PACKING_FACTOR, KEY_POST_FEE, KEY_UNIT_PRICE, KEY_USAGE_RATIO,
};
use ti_print_budget::{CalcError, Part, PricingConfig};

fn standard_entries() -> HashMap<String, f64> {
    [
        (KEY_DENSITY, 4.5),
        (KEY_PACKING_FACTOR, 0.9995),
        (KEY_USAGE_RATIO, 1.5),
        (KEY_UNIT_PRICE, 900.0),
        (KEY_MACHINE_RATE, 250.0),
        (KEY_GAS_COUNT, 1.0),
        (KEY_GAS_PRICE, 1800.0),
        (KEY_GAS_USAGE, 0.8),
        (KEY_POST_FEE, 1500.0),
        (KEY_DISCOUNT, 0.8),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

#[test]
fn test_standard_estimate_scenario() {
    // 1000mm³ 单零件, 整 1 天机时, 标准定价
    let api = BudgetApi::new();
    let pricing = PricingConfig::from_entries(&standard_entries()).unwrap();
    let parts = vec![Part::new("A", 1000.0)];

    let breakdown = api
        .estimate(&parts, "1天0小时0分0秒", &pricing)
        .expect("标准场景估算应当成功");

    assert_eq!(breakdown.inputs.part_count, 1);
    assert_eq!(breakdown.inputs.machine_hours, 24.0);
    assert_eq!(breakdown.costs.machine_cost, 6000.0);
    assert_eq!(breakdown.costs.gas_cost, 1440.0);
    assert_eq!(breakdown.costs.post_processing_cost, 1500.0);
    assert_eq!(breakdown.costs.material_cost, 6.07);
    assert_eq!(breakdown.costs.total_cost, 8946.07);
    assert_eq!(breakdown.costs.actual_cost, 7156.86);
}

#[test]
fn test_duration_order_does_not_matter() {
    let api = BudgetApi::new();
    let pricing = PricingConfig::from_entries(&standard_entries()).unwrap();
    let parts = vec![Part::new("A", 1000.0)];

    let a = api.estimate(&parts, "1天2小时", &pricing).unwrap();
    let b = api.estimate(&parts, "2小时1天", &pricing).unwrap();

    assert_eq!(a.inputs.machine_hours, 26.0);
    assert_eq!(a.costs.machine_cost, b.costs.machine_cost);
}

#[test]
fn test_zero_duration_total() {
    // 机时为零: 总费用 = 材料 + 氩气 + 后处理
    let api = BudgetApi::new();
    let pricing = PricingConfig::from_entries(&standard_entries()).unwrap();
    let parts = vec![
        Part::new("A", 1000.0),
        Part::with_support("B", 2000.0, 300.0),
    ];

    let breakdown = api.estimate(&parts, "0天0小时0分0秒", &pricing).unwrap();

    assert_eq!(breakdown.inputs.machine_hours, 0.0);
    assert_eq!(breakdown.costs.machine_cost, 0.0);
    let component_sum = breakdown.costs.material_cost
        + breakdown.costs.gas_cost
        + breakdown.costs.post_processing_cost;
    assert!((breakdown.costs.total_cost - component_sum).abs() < 0.011);
}

#[test]
fn test_missing_pricing_key_is_fatal() {
    // 机时费率缺失: 必须确定性失败, 不得按零计算
    let mut entries = standard_entries();
    entries.remove(KEY_MACHINE_RATE);

    let result = PricingConfig::from_entries(&entries);
    match result {
        Err(CalcError::MissingPricingKey(key)) => assert_eq!(key, "机时费率"),
        other => panic!("期望 MissingPricingKey, 实际 {:?}", other),
    }
}

#[test]
fn test_empty_inputs_rejected_before_engine() {
    let api = BudgetApi::new();
    let pricing = PricingConfig::from_entries(&standard_entries()).unwrap();

    assert!(matches!(
        api.estimate(&[], "1小时", &pricing),
        Err(ApiError::EmptyPartList)
    ));
    assert!(matches!(
        api.estimate(&[Part::new("A", 1.0)], "", &pricing),
        Err(ApiError::EmptyDuration)
    ));
}

#[test]
fn test_error_messages_are_explicit() {
    // 错误信息必须包含显式原因, 可直接展示给用户
    let mut entries = standard_entries();
    entries.remove(KEY_MACHINE_RATE);
    let message = PricingConfig::from_entries(&entries).unwrap_err().to_string();
    assert!(message.contains("机时费率"));

    let message = ApiError::EmptyPartList.to_string();
    assert!(message.contains("零件清单为空"));
}
