// ==========================================
// 钛合金3D打印成本预算系统 - API层错误类型
// ==========================================
// 职责: 将各层错误转换为面向调用方的消息
// 红线: 任何错误都不得被静默吞掉
// ==========================================

use crate::engine::CalcError;
use crate::exporter::ExportError;
use crate::importer::LoadError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 可恢复的输入错误（调用方重新提示即可）
    // ==========================================
    #[error("{field}必须为数字, 实际输入: {value}")]
    InvalidNumericInput { field: String, value: String },

    #[error("零件清单为空, 请先添加零件")]
    EmptyPartList,

    #[error("打印时长为空, 请先填写打印时长")]
    EmptyDuration,

    // ==========================================
    // 配置错误（本次计算致命）
    // ==========================================
    #[error("定价配置错误: {0}")]
    Pricing(#[from] CalcError),

    // ==========================================
    // 外部协作方错误（原样上报）
    // ==========================================
    #[error("零件清单加载失败: {0}")]
    Load(#[from] LoadError),

    #[error("报表导出失败: {0}")]
    Export(#[from] ExportError),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
