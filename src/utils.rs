/// Units selectable in human-readable mode, each 1024 times the previous.
pub const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB", "EB"];

const BASE: f64 = 1024.0;

/// Format a byte count as `<value><unit>`.
///
/// Without `human` the raw count is printed in bytes. With `human` the
/// largest fitting unit up to EB is chosen; plain bytes get no decimals and
/// every other unit gets exactly one.
pub fn format_size(bytes: i64, human: bool) -> String {
    if !human {
        return format!("{}B", bytes);
    }

    if bytes <= 0 {
        return "0B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= BASE && unit < UNITS.len() - 1 {
        value /= BASE;
        unit += 1;
    }

    if unit == 0 {
        format!("{:.0}{}", value, UNITS[unit])
    } else {
        format!("{:.1}{}", value, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_raw() {
        assert_eq!(format_size(0, false), "0B");
        assert_eq!(format_size(1000, false), "1000B");
        assert_eq!(format_size(10_485_760, false), "10485760B");
    }

    #[test]
    fn test_format_size_human() {
        assert_eq!(format_size(0, true), "0B");
        assert_eq!(format_size(512, true), "512B");
        assert_eq!(format_size(1023, true), "1023B");
        assert_eq!(format_size(1024, true), "1.0KB");
        assert_eq!(format_size(1536, true), "1.5KB");
        assert_eq!(format_size(3000, true), "2.9KB");
        assert_eq!(format_size(10_485_760, true), "10.0MB");
        assert_eq!(format_size(1024_i64.pow(3), true), "1.0GB");
        assert_eq!(format_size(1024_i64.pow(4), true), "1.0TB");
        assert_eq!(format_size(1024_i64.pow(5), true), "1.0PB");
    }

    #[test]
    fn test_format_size_clamps_at_eb() {
        assert_eq!(format_size(1 << 60, true), "1.0EB");
        assert_eq!(format_size(i64::MAX, true), "8.0EB");
    }

    #[test]
    fn test_format_size_negative() {
        assert_eq!(format_size(-5, true), "0B");
        assert_eq!(format_size(-5, false), "-5B");
    }
}
