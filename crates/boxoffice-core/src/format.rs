//! Number formatting for reports

/// Fixed two-decimal formatting, e.g. `20.00`
pub fn fixed2(value: f64) -> String {
    format!("{value:.2}")
}

/// Shortest round-trip formatting that always shows a fractional part,
/// e.g. `7.07`, `20.0`, `0.4`
pub fn plain(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed2() {
        assert_eq!(fixed2(20.0), "20.00");
        assert_eq!(fixed2(3.14159), "3.14");
    }

    #[test]
    fn test_plain() {
        assert_eq!(plain(20.0), "20.0");
        assert_eq!(plain(7.07), "7.07");
        assert_eq!(plain(-0.5), "-0.5");
        assert_eq!(plain(2923.7), "2923.7");
    }
}
