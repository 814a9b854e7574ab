//! Elapsed-time formatting.

/// Formats milliseconds as `HH:MM:SS.CS` (centisecond resolution).
#[must_use]
pub fn format_elapsed(ms: u64) -> String {
    let total_centis = ms / 10;
    let centis = total_centis % 100;
    let total_seconds = total_centis / 100;
    let seconds = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}.{centis:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_elapsed(0), "00:00:00.00");
    }

    #[test]
    fn test_sub_second() {
        assert_eq!(format_elapsed(90), "00:00:00.09");
        assert_eq!(format_elapsed(990), "00:00:00.99");
        // Sub-centisecond remainder truncates.
        assert_eq!(format_elapsed(9), "00:00:00.00");
    }

    #[test]
    fn test_seconds_and_minutes() {
        assert_eq!(format_elapsed(1_000), "00:00:01.00");
        assert_eq!(format_elapsed(61_500), "00:01:01.50");
        assert_eq!(format_elapsed(59 * 60_000 + 59_990), "00:59:59.99");
    }

    #[test]
    fn test_hours_roll_over() {
        assert_eq!(format_elapsed(3_600_000), "01:00:00.00");
        assert_eq!(format_elapsed(25 * 3_600_000 + 90_000), "25:01:30.00");
    }
}
