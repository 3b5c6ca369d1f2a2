//! Shared utility functions for WDE crates.

/// Number formatting for axis ticks and tooltips
pub mod fmt {
    /// Format a value compactly: billions/millions/thousands get a one
    /// decimal suffix, values >= 1 get two decimals, smaller values keep
    /// two significant digits. Non-finite values render as "N/A".
    pub fn format_short(value: f64) -> String {
        if !value.is_finite() {
            return "N/A".to_string();
        }
        let abs = value.abs();
        if abs >= 1e9 {
            format!("{:.1}B", value / 1e9)
        } else if abs >= 1e6 {
            format!("{:.1}M", value / 1e6)
        } else if abs >= 1e3 {
            format!("{:.1}K", value / 1e3)
        } else if abs >= 1.0 {
            format!("{:.2}", value)
        } else if value == 0.0 {
            "0.0".to_string()
        } else {
            // Two significant digits for sub-unit values (growth rates).
            let decimals = (1 - abs.log10().floor() as i32).max(0) as usize;
            format!("{:.*}", decimals, value)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_suffixes() {
            assert_eq!(format_short(1_412_000_000.0), "1.4B");
            assert_eq!(format_short(38_500_000.0), "38.5M");
            assert_eq!(format_short(9_593.0), "9.6K");
            assert_eq!(format_short(38.5), "38.50");
        }

        #[test]
        fn test_small_and_negative_values() {
            assert_eq!(format_short(0.012), "0.012");
            assert_eq!(format_short(0.5), "0.50");
            assert_eq!(format_short(0.0), "0.0");
            assert_eq!(format_short(-2_500_000.0), "-2.5M");
        }

        #[test]
        fn test_non_finite() {
            assert_eq!(format_short(f64::NAN), "N/A");
            assert_eq!(format_short(f64::INFINITY), "N/A");
        }
    }
}
