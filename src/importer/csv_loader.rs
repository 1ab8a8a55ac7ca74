// ==========================================
// 钛合金3D打印成本预算系统 - 零件清单 CSV 加载器
// ==========================================
// 表头: 零件名称,零件体积,支撑体积
// 支撑体积列可整体省略, 也可逐行留空
// ==========================================

use crate::domain::Part;
use crate::importer::error::{LoadError, LoadResult};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

pub const HEADER_NAME: &str = "零件名称";
pub const HEADER_VOLUME: &str = "零件体积";
pub const HEADER_SUPPORT: &str = "支撑体积";

// ==========================================
// CsvPartsLoader - CSV 零件清单加载器
// ==========================================
pub struct CsvPartsLoader;

impl CsvPartsLoader {
    /// 从 CSV 文件加载零件清单
    pub fn load(path: &Path) -> LoadResult<Vec<Part>> {
        // 检查文件存在
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "csv" {
            return Err(LoadError::UnsupportedFormat(ext.to_string()));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头并定位各列
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        let name_idx = required_column(&headers, HEADER_NAME)?;
        let volume_idx = required_column(&headers, HEADER_VOLUME)?;
        let support_idx = headers.iter().position(|h| h == HEADER_SUPPORT);

        let mut parts = Vec::new();
        for (i, result) in reader.records().enumerate() {
            let record = result?;
            let row = i + 2; // 表头占第 1 行

            // 跳过完全空白的行
            if record.iter().all(|v| v.trim().is_empty()) {
                continue;
            }

            let name = record.get(name_idx).map(str::trim).unwrap_or("");
            if name.is_empty() {
                return Err(LoadError::FieldParseError {
                    row,
                    field: HEADER_NAME.to_string(),
                    message: "零件名称为空".to_string(),
                });
            }

            let volume_text = record.get(volume_idx).map(str::trim).unwrap_or("");
            let volume_mm3 =
                volume_text
                    .parse::<f64>()
                    .map_err(|_| LoadError::FieldParseError {
                        row,
                        field: HEADER_VOLUME.to_string(),
                        message: format!("零件体积必须为数字, 实际为 {:?}", volume_text),
                    })?;

            let support_volume_mm3 = match support_idx
                .and_then(|idx| record.get(idx))
                .map(str::trim)
            {
                None | Some("") => None,
                Some(text) => {
                    Some(
                        text.parse::<f64>()
                            .map_err(|_| LoadError::FieldParseError {
                                row,
                                field: HEADER_SUPPORT.to_string(),
                                message: format!("支撑体积必须为数字, 实际为 {:?}", text),
                            })?,
                    )
                }
            };

            parts.push(Part {
                name: name.to_string(),
                volume_mm3,
                support_volume_mm3,
            });
        }

        tracing::info!(count = parts.len(), path = %path.display(), "零件清单加载完成");
        Ok(parts)
    }
}

fn required_column(headers: &[String], name: &str) -> LoadResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| LoadError::CsvParseError(format!("缺少表头: {}", name)))
}
