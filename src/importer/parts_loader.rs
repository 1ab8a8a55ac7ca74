// ==========================================
// 钛合金3D打印成本预算系统 - 零件清单 Excel 加载器
// ==========================================
// 约定单元格坐标（与报价模板一致）:
//   C2        零件数量
//   第 8 行起  每行一个零件: B=名称 / C=零件体积 / D=支撑体积
// ==========================================

use crate::domain::Part;
use crate::importer::error::{LoadError, LoadResult};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;

/// 零件数量所在单元格 C2（0 起算的 行, 列）
const PART_COUNT_CELL: (u32, u32) = (1, 2);

/// 模板中首个零件所在行（1 起算）
const FIRST_PART_ROW: u32 = 8;

// ==========================================
// ExcelPartsLoader - Excel 零件清单加载器
// ==========================================
pub struct ExcelPartsLoader;

impl ExcelPartsLoader {
    /// 从 .xlsx/.xlsm 模板加载零件清单
    ///
    /// 缺失或无法解析的单元格报错时指明单元格引用与原因,
    /// 调用方的计算状态不受影响。
    pub fn load(path: &Path) -> LoadResult<Vec<Part>> {
        // 检查文件存在
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "xlsx" && ext != "xlsm" {
            return Err(LoadError::UnsupportedFormat(ext.to_string()));
        }

        // 打开工作簿, 取第一个工作表
        let mut workbook: Xlsx<_> = open_workbook(path)?;
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(LoadError::ExcelParseError("Excel 文件无工作表".to_string()));
        }
        let sheet_name = sheet_names[0].clone();
        let range = workbook.worksheet_range(&sheet_name)?;

        // 零件数量（C2）
        let part_count = read_part_count(&range)?;

        // 逐行读取零件
        let mut parts = Vec::with_capacity(part_count);
        for i in 0..part_count {
            let row = FIRST_PART_ROW - 1 + i as u32; // 0 起算行号
            let row_ref = row + 1; // 单元格引用按 1 起算

            let name = match range.get_value((row, 1)) {
                None | Some(Data::Empty) => {
                    return Err(LoadError::MissingCell {
                        cell: format!("B{row_ref}"),
                        message: "零件名称为空".to_string(),
                    })
                }
                Some(value) => {
                    let text = value.to_string().trim().to_string();
                    if text.is_empty() {
                        return Err(LoadError::MissingCell {
                            cell: format!("B{row_ref}"),
                            message: "零件名称为空".to_string(),
                        });
                    }
                    text
                }
            };

            let volume_mm3 =
                cell_f64(&range, row, 2).ok_or_else(|| LoadError::CellParseError {
                    cell: format!("C{row_ref}"),
                    message: "零件体积必须为数字".to_string(),
                })?;

            // 支撑体积列允许留空
            let support_volume_mm3 = match range.get_value((row, 3)) {
                None | Some(Data::Empty) => None,
                Some(_) => Some(cell_f64(&range, row, 3).ok_or_else(|| {
                    LoadError::CellParseError {
                        cell: format!("D{row_ref}"),
                        message: "支撑体积必须为数字".to_string(),
                    }
                })?),
            };

            parts.push(Part {
                name,
                volume_mm3,
                support_volume_mm3,
            });
        }

        tracing::info!(count = parts.len(), path = %path.display(), "零件清单加载完成");
        Ok(parts)
    }
}

fn read_part_count(range: &Range<Data>) -> LoadResult<usize> {
    let (row, col) = PART_COUNT_CELL;
    cell_f64(range, row, col)
        .map(|v| v as usize)
        .ok_or_else(|| LoadError::MissingCell {
            cell: "C2".to_string(),
            message: "零件数量缺失或不是数字".to_string(),
        })
}

/// 数字单元格取值（数字字符串也接受）
fn cell_f64(range: &Range<Data>, row: u32, col: u32) -> Option<f64> {
    match range.get_value((row, col))? {
        Data::Float(v) => Some(*v),
        Data::Int(v) => Some(*v as f64),
        Data::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
