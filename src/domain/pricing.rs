// ==========================================
// 钛合金3D打印成本预算系统 - 定价标准
// ==========================================
// 职责: 计算引擎使用的定价系数（具名字段）
// 红线: 缺失的键绝不以默认值代替, 必须显式失败
// ==========================================

use crate::engine::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// 定价标准键名
// ==========================================
// 与界面输入框、报表、导出表格中的标签一致
pub const KEY_DENSITY: &str = "钛粉密度";
pub const KEY_PACKING_FACTOR: &str = "致密系数";
pub const KEY_USAGE_RATIO: &str = "用量比例";
pub const KEY_UNIT_PRICE: &str = "材料单价";
pub const KEY_MACHINE_RATE: &str = "机时费率";
pub const KEY_GAS_COUNT: &str = "氩气数量";
pub const KEY_GAS_PRICE: &str = "氩气单价";
pub const KEY_GAS_USAGE: &str = "氩气用量";
pub const KEY_POST_FEE: &str = "后处理费";
pub const KEY_DISCOUNT: &str = "折扣优惠";

// ==========================================
// PricingConfig - 定价标准
// ==========================================
// 每次计算都显式传入, 不存在进程级默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub density_g_cm3: f64,       // 钛粉密度（g/cm³）
    pub packing_factor: f64,      // 致密系数（无量纲）
    pub usage_ratio: f64,         // 用量比例（无量纲）
    pub unit_price_per_kg: f64,   // 材料单价（元/公斤）
    pub machine_hour_rate: f64,   // 机时费率（元/小时）
    pub gas_bottle_count: f64,    // 氩气数量（瓶）
    pub gas_unit_price: f64,      // 氩气单价（元）
    pub gas_usage_fraction: f64,  // 氩气用量（无量纲）
    pub post_processing_fee: f64, // 后处理费（元）
    pub discount_rate: f64,       // 折扣优惠（0-1 小数, 0.8 = 八折）
}

impl PricingConfig {
    /// 从键值表构造（界面动态输入路径）
    ///
    /// 任一必需键缺失即返回 `CalcError::MissingPricingKey`,
    /// 绝不以零或默认值代替。
    pub fn from_entries(entries: &HashMap<String, f64>) -> CalcResult<Self> {
        let get = |key: &str| -> CalcResult<f64> {
            entries
                .get(key)
                .copied()
                .ok_or_else(|| CalcError::MissingPricingKey(key.to_string()))
        };

        Ok(Self {
            density_g_cm3: get(KEY_DENSITY)?,
            packing_factor: get(KEY_PACKING_FACTOR)?,
            usage_ratio: get(KEY_USAGE_RATIO)?,
            unit_price_per_kg: get(KEY_UNIT_PRICE)?,
            machine_hour_rate: get(KEY_MACHINE_RATE)?,
            gas_bottle_count: get(KEY_GAS_COUNT)?,
            gas_unit_price: get(KEY_GAS_PRICE)?,
            gas_usage_fraction: get(KEY_GAS_USAGE)?,
            post_processing_fee: get(KEY_POST_FEE)?,
            discount_rate: get(KEY_DISCOUNT)?,
        })
    }

    /// 报表/导出使用的 (键名, 数值, 单位) 序列, 顺序与界面一致
    pub fn labeled_entries(&self) -> Vec<(&'static str, f64, &'static str)> {
        vec![
            (KEY_DENSITY, self.density_g_cm3, "g/cm³"),
            (KEY_PACKING_FACTOR, self.packing_factor, ""),
            (KEY_USAGE_RATIO, self.usage_ratio, ""),
            (KEY_UNIT_PRICE, self.unit_price_per_kg, "元/公斤"),
            (KEY_MACHINE_RATE, self.machine_hour_rate, "元/小时"),
            (KEY_GAS_COUNT, self.gas_bottle_count, "瓶"),
            (KEY_GAS_PRICE, self.gas_unit_price, "元"),
            (KEY_GAS_USAGE, self.gas_usage_fraction, ""),
            (KEY_POST_FEE, self.post_processing_fee, "元"),
            (KEY_DISCOUNT, self.discount_rate, ""),
        ]
    }

    /// 折扣的"折"表示（0.8 → 8折）
    pub fn discount_zhe(&self) -> f64 {
        self.discount_rate * 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_entries() -> HashMap<String, f64> {
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
    fn test_from_entries_complete() {
        let pricing = PricingConfig::from_entries(&full_entries()).unwrap();
        assert_eq!(pricing.density_g_cm3, 4.5);
        assert_eq!(pricing.machine_hour_rate, 250.0);
        assert_eq!(pricing.discount_rate, 0.8);
    }

    #[test]
    fn test_missing_machine_rate_fails() {
        // 机时费率缺失必须显式失败, 不得以零代替
        let mut entries = full_entries();
        entries.remove(KEY_MACHINE_RATE);

        let result = PricingConfig::from_entries(&entries);
        match result {
            Err(CalcError::MissingPricingKey(key)) => assert_eq!(key, KEY_MACHINE_RATE),
            other => panic!("期望 MissingPricingKey, 实际 {:?}", other),
        }
    }

    #[test]
    fn test_every_key_is_required() {
        let full = full_entries();
        for key in full.keys() {
            let mut entries = full.clone();
            entries.remove(key);
            assert!(
                PricingConfig::from_entries(&entries).is_err(),
                "缺少 {} 时应当失败",
                key
            );
        }
    }

    #[test]
    fn test_discount_zhe() {
        let pricing = PricingConfig::from_entries(&full_entries()).unwrap();
        assert!((pricing.discount_zhe() - 8.0).abs() < 1e-9);
    }
}
