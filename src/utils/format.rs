const SNAP_EPSILON: f64 = 1e-9;

/// 克數一律截斷取整（不四捨五入），與原本畫面顯示一致。
/// 與整數只差浮點誤差的值（例如 39.99999999999997）視為該整數。
pub fn truncate_grams(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let nearest = value.round();
    if (value - nearest).abs() < SNAP_EPSILON {
        return nearest as i64;
    }
    value.trunc() as i64
}

pub fn format_grams(value: f64) -> String {
    format!("{} g", truncate_grams(value))
}

/// 百分比保留一位小數，鹽量這種小比例才看得出差異
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_not_round() {
        assert_eq!(truncate_grams(259.9), 259);
        assert_eq!(truncate_grams(260.00000000000003), 260);
        assert_eq!(truncate_grams(-3.7), -3);
        assert_eq!(truncate_grams(39.99999999999997), 40);
        assert_eq!(truncate_grams(-39.99999999999997), -40);
        assert_eq!(truncate_grams(f64::NAN), 0);
    }

    #[test]
    fn test_format() {
        assert_eq!(format_grams(760.4), "760 g");
        assert_eq!(format_percent(2.0), "2.0%");
        assert_eq!(format_percent(75.0), "75.0%");
        assert_eq!(format_percent(1.85), "1.9%");
    }
}
