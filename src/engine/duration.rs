// ==========================================
// 钛合金3D打印成本预算系统 - 打印时长解析
// ==========================================
// 输入形如 "0天4小时11分46秒", 各单位可缺省、顺序任意
// 缺失或无法解析的单位按 0 计, 不构成错误
// ==========================================

/// 单位 → 小时乘数表
const UNIT_TABLE: [(&str, f64); 4] = [
    ("天", 24.0),
    ("小时", 1.0),
    ("分", 1.0 / 60.0),
    ("秒", 1.0 / 3600.0),
];

/// 将自由文本时长解析为小时数
///
/// 每个单位取首次出现的数值; 空串或无匹配返回 0.0。
/// 本函数不做舍入, 舍入发生在金额产出处。
///
/// # 示例
/// ```
/// use ti_print_budget::engine::parse_duration_hours;
/// assert_eq!(parse_duration_hours("1天2小时"), 26.0);
/// assert_eq!(parse_duration_hours(""), 0.0);
/// ```
pub fn parse_duration_hours(text: &str) -> f64 {
    let mut values: [Option<u64>; 4] = [None; 4];

    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            // 取连续数字串
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let number: String = chars[start..i].iter().collect();
            let rest: String = chars[i..].iter().collect();

            // 数字串后紧跟单位时才计入; 首次出现的单位生效
            for (slot, (unit, _)) in UNIT_TABLE.iter().enumerate() {
                if rest.starts_with(unit) {
                    if values[slot].is_none() {
                        if let Ok(v) = number.parse::<u64>() {
                            values[slot] = Some(v);
                        }
                    }
                    break;
                }
            }
        } else {
            i += 1;
        }
    }

    UNIT_TABLE
        .iter()
        .zip(values.iter())
        .map(|((_, multiplier), value)| value.unwrap_or(0) as f64 * multiplier)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_duration() {
        let hours = parse_duration_hours("0天4小时11分46秒");
        let expected = 4.0 + 11.0 / 60.0 + 46.0 / 3600.0;
        assert!((hours - expected).abs() < 1e-12);
    }

    #[test]
    fn test_order_independent() {
        // 解析与单位出现顺序无关
        assert_eq!(parse_duration_hours("1天2小时"), 26.0);
        assert_eq!(parse_duration_hours("2小时1天"), 26.0);
    }

    #[test]
    fn test_all_zero() {
        assert_eq!(parse_duration_hours("0天0小时0分0秒"), 0.0);
    }

    #[test]
    fn test_empty_and_no_match() {
        assert_eq!(parse_duration_hours(""), 0.0);
        assert_eq!(parse_duration_hours("大约半天"), 0.0);
        assert_eq!(parse_duration_hours("abc"), 0.0);
    }

    #[test]
    fn test_missing_units_default_to_zero() {
        assert_eq!(parse_duration_hours("3小时"), 3.0);
        assert_eq!(parse_duration_hours("90分"), 1.5);
        assert_eq!(parse_duration_hours("2天"), 48.0);
    }

    #[test]
    fn test_first_occurrence_wins() {
        // 同一单位重复出现时取首个
        assert_eq!(parse_duration_hours("1小时2小时"), 1.0);
    }

    #[test]
    fn test_unknown_unit_ignored() {
        // "分钟" 中的 "分" 前有数字, 正常计入; 未知单位的数字被忽略
        assert_eq!(parse_duration_hours("30分钟"), 0.5);
        assert_eq!(parse_duration_hours("5圈3小时"), 3.0);
    }
}
