// ==========================================
// 钛合金3D打印成本预算系统 - 零件领域模型
// ==========================================
// 用途: 调用方(界面/加载器)构造, 计算引擎只读
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Part - 零件信息
// ==========================================
// 一经添加不可修改, "一键清零"时整体丢弃
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub name: String,                    // 零件名称
    pub volume_mm3: f64,                 // 零件净体积（mm³）
    pub support_volume_mm3: Option<f64>, // 支撑体积（mm³）, None 表示无支撑数据
}

impl Part {
    /// 创建无支撑体积的零件
    pub fn new(name: impl Into<String>, volume_mm3: f64) -> Self {
        Self {
            name: name.into(),
            volume_mm3,
            support_volume_mm3: None,
        }
    }

    /// 创建带支撑体积的零件
    pub fn with_support(name: impl Into<String>, volume_mm3: f64, support_volume_mm3: f64) -> Self {
        Self {
            name: name.into(),
            volume_mm3,
            support_volume_mm3: Some(support_volume_mm3),
        }
    }

    /// 计入材料重量的总体积（支撑缺省按 0 计）
    pub fn total_volume_mm3(&self) -> f64 {
        self.volume_mm3 + self.support_volume_mm3.unwrap_or(0.0)
    }
}
