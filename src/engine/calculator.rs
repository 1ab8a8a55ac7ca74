// ==========================================
// 钛合金3D打印成本预算系统 - 成本计算引擎
// ==========================================
// 计算口径:
//   材料重量(g) = Σ体积(mm³) × 1e-3 × 密度 × 用量比例 × 致密系数
//   材料费用   = 材料重量 × 材料单价 × 1e-3   (g→kg 折算)
//   机时费用   = 解析时长(h) × 机时费率
//   氩气费用   = 氩气单价 × 氩气用量 × 氩气数量
//   总费用     = 材料 + 机时 + 氩气 + 后处理
//   实付金额   = 总费用 × 折扣
// ==========================================

use crate::domain::{CostBreakdown, CostLines, InputEcho, Part, PricingConfig};
use crate::engine::duration::parse_duration_hours;

// ==========================================
// CostCalculator - 成本计算引擎
// ==========================================
// 无内部状态, 每次计算都是输入的纯函数
#[derive(Debug, Default)]
pub struct CostCalculator;

impl CostCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 多零件成本计算
    ///
    /// 前置条件（零件非空、时长非空）由调用方校验;
    /// 零体积零件合法, 贡献零质量。支撑体积存在时计入总体积。
    ///
    /// 金额在构造 `CostLines` 时统一舍入到分, 中间运算保持全精度。
    pub fn calculate(
        &self,
        parts: &[Part],
        duration_text: &str,
        pricing: &PricingConfig,
    ) -> CostBreakdown {
        // 总体积（mm³）
        let total_volume_mm3: f64 = parts.iter().map(Part::total_volume_mm3).sum();

        // 材料重量与费用（mm³→cm³ 与 g→kg 的换算各折入一个 1e-3 因子）
        let material_weight_g = total_volume_mm3
            * 1e-3
            * pricing.density_g_cm3
            * pricing.usage_ratio
            * pricing.packing_factor;
        let material_cost = material_weight_g * pricing.unit_price_per_kg * 1e-3;

        // 机时费用
        let machine_hours = parse_duration_hours(duration_text);
        let machine_cost = machine_hours * pricing.machine_hour_rate;

        // 氩气与后处理
        let gas_cost =
            pricing.gas_unit_price * pricing.gas_usage_fraction * pricing.gas_bottle_count;
        let post_processing_cost = pricing.post_processing_fee;

        tracing::debug!(
            total_volume_mm3,
            material_weight_g,
            machine_hours,
            "成本计算完成"
        );

        CostBreakdown {
            inputs: InputEcho {
                parts: parts.to_vec(),
                duration_text: duration_text.to_string(),
                part_count: parts.len(),
                machine_hours,
            },
            pricing: pricing.clone(),
            costs: CostLines::from_raw(
                material_cost,
                machine_cost,
                gas_cost,
                post_processing_cost,
                pricing.discount_rate,
            ),
        }
    }
}
