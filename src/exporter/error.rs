// ==========================================
// 钛合金3D打印成本预算系统 - 导出模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 报表导出错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("报表写入失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("压缩包写入失败: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
