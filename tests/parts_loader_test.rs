// ==========================================
// 零件清单加载集成测试
// ==========================================
// 测试目标: Excel 固定坐标加载与 CSV 表头加载,
// 含出错单元格/字段的定位
// ==========================================

use std::io::Write;
use std::path::Path;

use ti_print_budget::exporter::{CellStyle, SheetBuilder, XlsxWriter};
use ti_print_budget::importer::{CsvPartsLoader, ExcelPartsLoader, LoadError};

/// 按报价模板坐标生成零件清单工作簿:
/// C2 = 零件数量, 第 8 行起 B/C/D = 名称/体积/支撑体积
fn write_parts_workbook(path: &Path, parts: &[(&str, Option<f64>, Option<f64>)]) {
    let mut sheet = SheetBuilder::new("零件清单");
    sheet.number(1, 2, parts.len() as f64, CellStyle::Number); // C2

    for (i, (name, volume, support)) in parts.iter().enumerate() {
        let row = 7 + i as u32; // 第 8 行起（0 起算为 7）
        sheet.text(row, 1, *name, CellStyle::Text);
        if let Some(v) = volume {
            sheet.number(row, 2, *v, CellStyle::Number);
        }
        if let Some(s) = support {
            sheet.number(row, 3, *s, CellStyle::Number);
        }
    }

    XlsxWriter::write_file(&[sheet], path).expect("生成测试工作簿失败");
}

#[test]
fn test_load_parts_from_excel() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("零件清单.xlsx");
    write_parts_workbook(
        &path,
        &[
            ("支架A", Some(1000.0), Some(120.5)),
            ("底座B", Some(500.0), None),
        ],
    );

    let parts = ExcelPartsLoader::load(&path).expect("加载应当成功");

    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].name, "支架A");
    assert_eq!(parts[0].volume_mm3, 1000.0);
    assert_eq!(parts[0].support_volume_mm3, Some(120.5));
    assert_eq!(parts[1].name, "底座B");
    // 支撑体积列留空 → None
    assert_eq!(parts[1].support_volume_mm3, None);
}

#[test]
fn test_excel_missing_volume_reports_cell() {
    // 第 2 个零件（第 9 行）体积缺失: 错误必须指明 C9
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("零件清单.xlsx");
    write_parts_workbook(
        &path,
        &[("支架A", Some(1000.0), None), ("底座B", None, None)],
    );

    let result = ExcelPartsLoader::load(&path);
    match result {
        Err(LoadError::CellParseError { cell, .. }) => assert_eq!(cell, "C9"),
        other => panic!("期望 CellParseError, 实际 {:?}", other),
    }
}

#[test]
fn test_excel_file_not_found() {
    let result = ExcelPartsLoader::load(Path::new("/不存在/零件清单.xlsx"));
    assert!(matches!(result, Err(LoadError::FileNotFound(_))));
}

#[test]
fn test_excel_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("零件清单.ods");
    std::fs::write(&path, b"not a workbook").unwrap();

    let result = ExcelPartsLoader::load(&path);
    assert!(matches!(result, Err(LoadError::UnsupportedFormat(_))));
}

// ==========================================
// CSV 加载
// ==========================================

fn write_csv(path: &Path, content: &str) {
    let mut file = std::fs::File::create(path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

#[test]
fn test_load_parts_from_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("零件清单.csv");
    write_csv(
        &path,
        "零件名称,零件体积,支撑体积\n支架A,1000.0,120.5\n底座B,500.0,\n",
    );

    let parts = CsvPartsLoader::load(&path).expect("加载应当成功");

    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].name, "支架A");
    assert_eq!(parts[0].support_volume_mm3, Some(120.5));
    // 支撑列留空 → None
    assert_eq!(parts[1].support_volume_mm3, None);
}

#[test]
fn test_csv_without_support_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("零件清单.csv");
    write_csv(&path, "零件名称,零件体积\n支架A,1000.0\n");

    let parts = CsvPartsLoader::load(&path).unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].support_volume_mm3, None);
}

#[test]
fn test_csv_malformed_volume_reports_row_and_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("零件清单.csv");
    write_csv(
        &path,
        "零件名称,零件体积,支撑体积\n支架A,1000.0,\n底座B,五百,\n",
    );

    let result = CsvPartsLoader::load(&path);
    match result {
        Err(LoadError::FieldParseError { row, field, .. }) => {
            assert_eq!(row, 3); // 表头占第 1 行
            assert_eq!(field, "零件体积");
        }
        other => panic!("期望 FieldParseError, 实际 {:?}", other),
    }
}

#[test]
fn test_csv_missing_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("零件清单.csv");
    write_csv(&path, "名称,体积\nA,1.0\n");

    let result = CsvPartsLoader::load(&path);
    assert!(matches!(result, Err(LoadError::CsvParseError(_))));
}

#[test]
fn test_csv_skips_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("零件清单.csv");
    write_csv(
        &path,
        "零件名称,零件体积,支撑体积\n支架A,1000.0,\n,,\n底座B,500.0,\n",
    );

    let parts = CsvPartsLoader::load(&path).unwrap();
    assert_eq!(parts.len(), 2);
}
