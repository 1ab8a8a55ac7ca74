// ==========================================
// 钛合金3D打印成本预算系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 计算引擎错误类型
#[derive(Error, Debug)]
pub enum CalcError {
    // ===== 配置错误 =====
    // 对本次计算致命, 不得以默认值继续
    #[error("定价标准缺少必需参数: {0}")]
    MissingPricingKey(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type CalcResult<T> = Result<T, CalcError>;
