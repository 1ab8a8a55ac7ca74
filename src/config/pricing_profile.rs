// ==========================================
// 钛合金3D打印成本预算系统 - 定价方案
// ==========================================
// 职责: 界面侧默认定价与 JSON 持久化;
// 折扣记法(小数/折数)在此归一化为 0-1 小数
// ==========================================

use crate::domain::PricingConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ==========================================
// DiscountScale - 折扣记法
// ==========================================
// Fraction: 0-1 小数（0.8 = 八折）
// Zhe:      0-10 折数（8 = 八折）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountScale {
    #[default]
    Fraction,
    Zhe,
}

// ==========================================
// PricingProfile - 定价方案（持久化格式）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingProfile {
    pub density_g_cm3: f64,       // 钛粉密度（g/cm³）
    pub packing_factor: f64,      // 致密系数
    pub usage_ratio: f64,         // 用量比例
    pub unit_price_per_kg: f64,   // 材料单价（元/公斤）
    pub machine_hour_rate: f64,   // 机时费率（元/小时）
    pub gas_bottle_count: f64,    // 氩气数量（瓶）
    pub gas_unit_price: f64,      // 氩气单价（元）
    pub gas_usage_fraction: f64,  // 氩气用量
    pub post_processing_fee: f64, // 后处理费（元）
    pub discount: f64,            // 折扣值（按 discount_scale 解释）
    #[serde(default)]
    pub discount_scale: DiscountScale, // 折扣记法
}

impl Default for PricingProfile {
    /// 界面侧默认定价（钛粉 SLM 口径）
    fn default() -> Self {
        Self {
            density_g_cm3: 4.50,
            packing_factor: 0.9995,
            usage_ratio: 1.5,
            unit_price_per_kg: 900.0,
            machine_hour_rate: 250.0,
            gas_bottle_count: 1.0,
            gas_unit_price: 1800.0,
            gas_usage_fraction: 0.8,
            post_processing_fee: 1500.0,
            discount: 0.8,
            discount_scale: DiscountScale::Fraction,
        }
    }
}

impl PricingProfile {
    /// 归一化为计算引擎使用的定价标准
    ///
    /// 折数记法（8折）换算为 0-1 小数（0.8）。
    pub fn to_pricing_config(&self) -> PricingConfig {
        let discount_rate = match self.discount_scale {
            DiscountScale::Fraction => self.discount,
            DiscountScale::Zhe => self.discount / 10.0,
        };

        PricingConfig {
            density_g_cm3: self.density_g_cm3,
            packing_factor: self.packing_factor,
            usage_ratio: self.usage_ratio,
            unit_price_per_kg: self.unit_price_per_kg,
            machine_hour_rate: self.machine_hour_rate,
            gas_bottle_count: self.gas_bottle_count,
            gas_unit_price: self.gas_unit_price,
            gas_usage_fraction: self.gas_usage_fraction,
            post_processing_fee: self.post_processing_fee,
            discount_rate,
        }
    }
}

/// 默认定价方案文件位置（用户配置目录）
pub fn default_profile_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ti-print-budget")
        .join("pricing.json")
}

/// 读取定价方案; 文件不存在时返回 None
pub fn load_profile(path: &Path) -> anyhow::Result<Option<PricingProfile>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)?;
    let profile = serde_json::from_str(&raw)?;
    Ok(Some(profile))
}

/// 保存定价方案（自动创建上级目录）
pub fn save_profile(profile: &PricingProfile, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(profile)?)?;
    Ok(())
}
