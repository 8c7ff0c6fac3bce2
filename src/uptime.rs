/// Format uptime as total floored minutes, hours, and days.
///
/// Each figure is the whole duration in that unit, not a remainder:
/// 90061 seconds reads as 1 day, 25 hours, 1501 minutes.
pub fn text(seconds: u64) -> String {
    let minutes = seconds / 60;
    let hours = seconds / 3600;
    let days = seconds / 86400;
    format!("{} days, {} hours, {} minutes", days, hours, minutes)
}

/// Seconds since boot.
pub fn seconds() -> u64 {
    sysinfo::System::uptime()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(text(0), "0 days, 0 hours, 0 minutes");
    }

    #[test]
    fn test_fractions_floor() {
        assert_eq!(text(61), "0 days, 0 hours, 1 minutes");
        assert_eq!(text(3599), "0 days, 0 hours, 59 minutes");
    }

    #[test]
    fn test_figures_are_totals_not_remainders() {
        assert_eq!(text(90061), "1 days, 25 hours, 1501 minutes");
    }

    #[test]
    fn test_seconds_is_monotonic() {
        let first = seconds();
        let second = seconds();
        assert!(second >= first);
    }
}
