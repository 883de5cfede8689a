// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ResumeDrop contributors

//! Human-readable byte formatting matching the analyzer's web UI.

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count with binary (1024-based) units.
///
/// Values carry up to two decimal places with trailing zeros trimmed, so
/// `1024` renders as `1 KB` and `1536` as `1.5 KB`. Zero is the literal
/// `0 Bytes`. The unit is clamped at GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let unit = (bytes.ilog2() / 10).min(UNITS.len() as u32 - 1) as usize;
    let value = bytes as f64 / 1024f64.powi(unit as i32);
    // Round half away from zero to two places, like Number.toFixed.
    let rounded = (value * 100.0).round() / 100.0;

    let mut text = format!("{rounded:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }

    format!("{text} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::format_file_size;

    #[test]
    fn zero_is_literal() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn whole_units_drop_decimals() {
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1 GB");
    }

    #[test]
    fn fractional_values_trim_trailing_zeros() {
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 + 256), "1.25 KB");
    }

    #[test]
    fn sub_kilobyte_counts_stay_in_bytes() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
    }

    #[test]
    fn rounds_to_two_decimal_places() {
        // 1.46484375 MB
        assert_eq!(format_file_size(1536 * 1000), "1.46 MB");
    }

    // Counts past GB stay in GB instead of running off the unit table.
    #[test]
    fn unit_is_clamped_at_gigabytes() {
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }
}
