// ==========================================
// 钛合金3D打印成本预算系统 - 显示宽度工具
// ==========================================
// 报表为等宽文本; 中英混排时按"显示列"对齐:
// 全角/宽字符占 2 列, 半角字符占 1 列
// ==========================================

/// 单个码点的显示宽度
///
/// East Asian Wide / Fullwidth 区段记 2 列, 其余记 1 列。
pub fn char_width(c: char) -> usize {
    match c as u32 {
        0x1100..=0x115F        // 谚文字母
        | 0x2E80..=0x303E      // CJK 部首补充/符号与标点
        | 0x3041..=0x33FF      // 假名/注音/CJK 兼容符号
        | 0x3400..=0x4DBF      // CJK 扩展 A
        | 0x4E00..=0x9FFF      // CJK 统一表意文字
        | 0xA000..=0xA4CF      // 彝文
        | 0xAC00..=0xD7A3      // 谚文音节
        | 0xF900..=0xFAFF      // CJK 兼容表意文字
        | 0xFE30..=0xFE4F      // CJK 兼容形式
        | 0xFF00..=0xFF60      // 全角形式
        | 0xFFE0..=0xFFE6      // 全角货币符号
        | 0x20000..=0x2FFFD    // CJK 扩展 B 及以后
        | 0x30000..=0x3FFFD => 2,
        _ => 1,
    }
}

/// 字符串显示宽度
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// 按显示宽度右补空格（左对齐）
pub fn pad_right(text: &str, width: usize) -> String {
    let current = display_width(text);
    if current >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - current))
}

/// 按显示宽度左补空格（右对齐）
pub fn pad_left(text: &str, width: usize) -> String {
    let current = display_width(text);
    if current >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat(width - current), text)
}

/// 按显示宽度居中
///
/// 两侧各补 (width - 文本宽度) / 2 列, 向下取整。
pub fn center(text: &str, width: usize) -> String {
    let current = display_width(text);
    if current >= width {
        return text.to_string();
    }
    let padding = " ".repeat((width - current) / 2);
    format!("{0}{1}{0}", padding, text)
}
