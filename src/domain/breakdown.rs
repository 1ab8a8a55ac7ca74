// ==========================================
// 钛合金3D打印成本预算系统 - 成本明细模型
// ==========================================
// 职责: 单次计算的输出记录（输入回显 + 定价回显 + 费用明细）
// 红线: 金额仅在产出时舍入, 中间运算保持全精度
// ==========================================

use crate::domain::{Part, PricingConfig};
use serde::{Deserialize, Serialize};

/// 金额舍入到分
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ==========================================
// InputEcho - 输入回显
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputEcho {
    pub parts: Vec<Part>,      // 零件清单
    pub duration_text: String, // 总打印时长（原始文本）
    pub part_count: usize,     // 零件数量
    pub machine_hours: f64,    // 解析后的机时（小时, 未舍入）
}

// ==========================================
// CostLines - 费用明细
// ==========================================
// 六项金额均已舍入到分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostLines {
    pub material_cost: f64,        // 材料费用
    pub machine_cost: f64,         // 机时费用
    pub gas_cost: f64,             // 氩气费用
    pub post_processing_cost: f64, // 后处理费
    pub total_cost: f64,           // 总费用
    pub actual_cost: f64,          // 实际费用（折后）
}

impl CostLines {
    /// 由未舍入的各项费用构造
    ///
    /// 合计与折后金额先在全精度上求出, 再与各分项一起舍入,
    /// 避免舍入误差逐项累积。
    pub fn from_raw(
        material_cost: f64,
        machine_cost: f64,
        gas_cost: f64,
        post_processing_cost: f64,
        discount_rate: f64,
    ) -> Self {
        let total_cost = material_cost + machine_cost + gas_cost + post_processing_cost;
        let actual_cost = total_cost * discount_rate;

        Self {
            material_cost: round2(material_cost),
            machine_cost: round2(machine_cost),
            gas_cost: round2(gas_cost),
            post_processing_cost: round2(post_processing_cost),
            total_cost: round2(total_cost),
            actual_cost: round2(actual_cost),
        }
    }
}

// ==========================================
// CostBreakdown - 成本明细
// ==========================================
// 每次计算新建, 不持久化
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub inputs: InputEcho,     // 输入参数
    pub pricing: PricingConfig, // 定价标准
    pub costs: CostLines,      // 计算明细
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(6.0719625), 6.07);
        assert_eq!(round2(7156.85757), 7156.86);
        assert_eq!(round2(1234.5678), 1234.57);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_cost_lines_from_raw() {
        let lines = CostLines::from_raw(6.0719625, 6000.0, 1440.0, 1500.0, 0.8);
        assert_eq!(lines.material_cost, 6.07);
        assert_eq!(lines.machine_cost, 6000.0);
        assert_eq!(lines.gas_cost, 1440.0);
        assert_eq!(lines.post_processing_cost, 1500.0);
        // 合计在全精度上求出后舍入
        assert_eq!(lines.total_cost, 8946.07);
        assert_eq!(lines.actual_cost, 7156.86);
    }
}
