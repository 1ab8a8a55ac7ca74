// ==========================================
// 钛合金3D打印成本预算系统 - 最小 XLSX 写出器
// ==========================================
// 直接生成 OOXML 包（zip + 内联 XML）:
// 字符串一律内联, 样式为固定调色板, 足够覆盖预算报表
// ==========================================

use crate::exporter::error::ExportResult;
use quick_xml::escape::escape;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

// ==========================================
// 单元格样式
// ==========================================
// 值即 styles.xml cellXfs 中的下标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Default = 0,  // 无样式
    Title = 1,    // 报表标题（加粗 14 号, 深底白字）
    Header = 2,   // 区块表头（加粗, 浅底, 边框）
    Text = 3,     // 文本（边框, 居中）
    Number = 4,   // 数值（0.00, 边框, 居中）
    Currency = 5, // 金额（¥#,##0.00, 边框, 居中）
}

impl CellStyle {
    fn xf_index(self) -> u32 {
        self as u32
    }
}

/// 单元格内容
#[derive(Debug, Clone)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

#[derive(Debug, Clone)]
struct Cell {
    row: u32, // 0 起算
    col: u32,
    value: CellValue,
    style: CellStyle,
}

// ==========================================
// SheetBuilder - 工作表构建器
// ==========================================
#[derive(Debug)]
pub struct SheetBuilder {
    name: String,
    cells: Vec<Cell>,
    merges: Vec<(u32, u32, u32, u32)>, // (起始行, 起始列, 结束行, 结束列)
    column_widths: Vec<(u32, f64)>,
}

impl SheetBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: Vec::new(),
            merges: Vec::new(),
            column_widths: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 写入文本单元格
    pub fn text(
        &mut self,
        row: u32,
        col: u32,
        text: impl Into<String>,
        style: CellStyle,
    ) -> &mut Self {
        self.cells.push(Cell {
            row,
            col,
            value: CellValue::Text(text.into()),
            style,
        });
        self
    }

    /// 写入数值单元格
    pub fn number(&mut self, row: u32, col: u32, value: f64, style: CellStyle) -> &mut Self {
        self.cells.push(Cell {
            row,
            col,
            value: CellValue::Number(value),
            style,
        });
        self
    }

    /// 合并单元格区域
    pub fn merge(&mut self, row1: u32, col1: u32, row2: u32, col2: u32) -> &mut Self {
        self.merges.push((row1, col1, row2, col2));
        self
    }

    /// 设置列宽
    pub fn column_width(&mut self, col: u32, width: f64) -> &mut Self {
        self.column_widths.push((col, width));
        self
    }
}

/// 列号转字母（0 → A, 25 → Z, 26 → AA）
fn column_name(col: u32) -> String {
    let mut name = String::new();
    let mut c = col;
    loop {
        name.insert(0, (b'A' + (c % 26) as u8) as char);
        if c < 26 {
            break;
        }
        c = c / 26 - 1;
    }
    name
}

/// 单元格引用（0 起算坐标 → A1 记法）
fn cell_reference(row: u32, col: u32) -> String {
    format!("{}{}", column_name(col), row + 1)
}

// ==========================================
// XlsxWriter - XLSX 文件写出器
// ==========================================
pub struct XlsxWriter;

impl XlsxWriter {
    /// 将工作表写入文件
    pub fn write_file(sheets: &[SheetBuilder], path: &Path) -> ExportResult<()> {
        let file = File::create(path)?;
        Self::write(sheets, file)
    }

    /// 将工作表写入任意 Write + Seek
    pub fn write<W: Write + Seek>(sheets: &[SheetBuilder], writer: W) -> ExportResult<()> {
        let mut zip = zip::ZipWriter::new(writer);

        Self::write_content_types(&mut zip, sheets)?;
        Self::write_root_rels(&mut zip)?;
        Self::write_workbook_xml(&mut zip, sheets)?;
        Self::write_workbook_rels(&mut zip, sheets)?;
        Self::write_styles_xml(&mut zip)?;
        for (i, sheet) in sheets.iter().enumerate() {
            Self::write_worksheet(&mut zip, i, sheet)?;
        }

        zip.finish()?;
        Ok(())
    }

    fn write_content_types<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheets: &[SheetBuilder],
    ) -> ExportResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("[Content_Types].xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
        );

        for i in 0..sheets.len() {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
                i + 1
            ));
        }

        content.push_str("\n</Types>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_root_rels<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> ExportResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("_rels/.rels", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheets: &[SheetBuilder],
    ) -> ExportResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/workbook.xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>"#,
        );

        for (i, sheet) in sheets.iter().enumerate() {
            content.push_str(&format!(
                r#"
        <sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape(sheet.name()),
                i + 1,
                i + 1
            ));
        }

        content.push_str(
            r#"
    </sheets>
</workbook>"#,
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_rels<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheets: &[SheetBuilder],
    ) -> ExportResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/_rels/workbook.xml.rels", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for i in 0..sheets.len() {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                i + 1,
                i + 1
            ));
        }

        content.push_str(&format!(
            r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#,
            sheets.len() + 1
        ));

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    // 固定样式表: cellXfs 下标与 CellStyle 一一对应
    fn write_styles_xml<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> ExportResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/styles.xml", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <numFmts count="1">
        <numFmt numFmtId="164" formatCode="&quot;¥&quot;#,##0.00"/>
    </numFmts>
    <fonts count="3">
        <font><sz val="11"/><name val="Calibri"/></font>
        <font><b/><sz val="14"/><color rgb="FFFFFFFF"/><name val="Calibri"/></font>
        <font><b/><sz val="11"/><name val="Calibri"/></font>
    </fonts>
    <fills count="4">
        <fill><patternFill patternType="none"/></fill>
        <fill><patternFill patternType="gray125"/></fill>
        <fill><patternFill patternType="solid"><fgColor rgb="FF4F81BD"/></patternFill></fill>
        <fill><patternFill patternType="solid"><fgColor rgb="FFD9E1F2"/></patternFill></fill>
    </fills>
    <borders count="2">
        <border><left/><right/><top/><bottom/><diagonal/></border>
        <border><left style="thin"/><right style="thin"/><top style="thin"/><bottom style="thin"/><diagonal/></border>
    </borders>
    <cellStyleXfs count="1">
        <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
    </cellStyleXfs>
    <cellXfs count="6">
        <xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>
        <xf numFmtId="0" fontId="1" fillId="2" borderId="1" xfId="0" applyFont="1" applyFill="1" applyBorder="1" applyAlignment="1"><alignment horizontal="center" vertical="center"/></xf>
        <xf numFmtId="0" fontId="2" fillId="3" borderId="1" xfId="0" applyFont="1" applyFill="1" applyBorder="1" applyAlignment="1"><alignment horizontal="center" vertical="center"/></xf>
        <xf numFmtId="0" fontId="0" fillId="0" borderId="1" xfId="0" applyBorder="1" applyAlignment="1"><alignment horizontal="center" vertical="center"/></xf>
        <xf numFmtId="2" fontId="0" fillId="0" borderId="1" xfId="0" applyNumberFormat="1" applyBorder="1" applyAlignment="1"><alignment horizontal="center" vertical="center"/></xf>
        <xf numFmtId="164" fontId="0" fillId="0" borderId="1" xfId="0" applyNumberFormat="1" applyBorder="1" applyAlignment="1"><alignment horizontal="center" vertical="center"/></xf>
    </cellXfs>
</styleSheet>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_worksheet<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        index: usize,
        sheet: &SheetBuilder,
    ) -> ExportResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file(format!("xl/worksheets/sheet{}.xml", index + 1), options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        // 列宽
        if !sheet.column_widths.is_empty() {
            content.push_str("\n    <cols>");
            for (col, width) in &sheet.column_widths {
                content.push_str(&format!(
                    r#"
        <col min="{0}" max="{0}" width="{1}" customWidth="1"/>"#,
                    col + 1,
                    width
                ));
            }
            content.push_str("\n    </cols>");
        }

        // 单元格按行分组, 行内按列排序
        let mut rows: BTreeMap<u32, Vec<&Cell>> = BTreeMap::new();
        for cell in &sheet.cells {
            rows.entry(cell.row).or_default().push(cell);
        }

        content.push_str("\n    <sheetData>");
        for (row, mut cells) in rows {
            cells.sort_by_key(|c| c.col);
            content.push_str(&format!("\n        <row r=\"{}\">", row + 1));
            for cell in cells {
                let reference = cell_reference(cell.row, cell.col);
                let style = cell.style.xf_index();
                match &cell.value {
                    CellValue::Text(text) => content.push_str(&format!(
                        r#"<c r="{}" s="{}" t="inlineStr"><is><t>{}</t></is></c>"#,
                        reference,
                        style,
                        escape(text.as_str())
                    )),
                    CellValue::Number(value) => content.push_str(&format!(
                        r#"<c r="{}" s="{}"><v>{}</v></c>"#,
                        reference, style, value
                    )),
                }
            }
            content.push_str("</row>");
        }
        content.push_str("\n    </sheetData>");

        // 合并区域
        if !sheet.merges.is_empty() {
            content.push_str(&format!(
                "\n    <mergeCells count=\"{}\">",
                sheet.merges.len()
            ));
            for (row1, col1, row2, col2) in &sheet.merges {
                content.push_str(&format!(
                    r#"<mergeCell ref="{}:{}"/>"#,
                    cell_reference(*row1, *col1),
                    cell_reference(*row2, *col2)
                ));
            }
            content.push_str("</mergeCells>");
        }

        content.push_str("\n</worksheet>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }
}
