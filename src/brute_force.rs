//! Brute-force time estimation.
//!
//! Models an attacker guessing uniformly at random over the implied
//! alphabet at a fixed rate, and renders the expected wall-clock time
//! as a human-readable string.

/// Assumed attack rate in attempts per second.
const ATTEMPTS_PER_SECOND: f64 = 1e9;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;

/// Estimates the expected time to brute-force a password of `length`
/// characters drawn from an alphabet of `charset_size`.
///
/// The search space is `charset_size ^ length` and the expected number
/// of attempts is half of it. The power is computed in floating point;
/// overflow saturates to infinity and lands in the terminal bucket
/// instead of failing.
pub fn estimate_brute_force_time(length: usize, charset_size: usize) -> String {
    if length == 0 || charset_size == 0 {
        return "Instant".to_string();
    }

    let combinations = (charset_size as f64).powf(length as f64);
    let average_attempts = combinations / 2.0;
    let seconds = average_attempts / ATTEMPTS_PER_SECOND;

    format_duration(seconds)
}

/// Renders a duration in seconds into the first matching bucket.
///
/// Bucket selection compares the raw value against strict upper
/// bounds; only the displayed figure is rounded.
fn format_duration(seconds: f64) -> String {
    if seconds < 1.0 {
        return "Instant".to_string();
    }
    if seconds < MINUTE {
        return format!("{} seconds", seconds.round() as u64);
    }
    if seconds < HOUR {
        return format!("{} minutes", (seconds / MINUTE).round() as u64);
    }
    if seconds < DAY {
        return format!("{} hours", (seconds / HOUR).round() as u64);
    }
    if seconds < YEAR {
        return format!("{} days", (seconds / DAY).round() as u64);
    }
    if seconds < 1_000.0 * YEAR {
        return format!("{} years", (seconds / YEAR).round() as u64);
    }

    let years = seconds / YEAR;
    if years < 1e6 {
        return format!("{} years", years.round() as u64);
    }
    if years < 1e9 {
        return format!("{} million years", (years / 1e6).round() as u64);
    }
    if years < 1e12 {
        return format!("{} billion years", (years / 1e9).round() as u64);
    }

    "Longer than the age of the universe".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_empty_or_no_alphabet() {
        assert_eq!(estimate_brute_force_time(0, 94), "Instant");
        assert_eq!(estimate_brute_force_time(10, 0), "Instant");
        assert_eq!(estimate_brute_force_time(0, 0), "Instant");
    }

    #[test]
    fn test_estimate_short_lowercase() {
        // 26^4 / 2 / 1e9 is well under a second
        assert_eq!(estimate_brute_force_time(4, 26), "Instant");
    }

    #[test]
    fn test_estimate_eight_lowercase() {
        // 26^8 / 2 / 1e9 = 104.41s -> 1.74 minutes, rounded up
        assert_eq!(estimate_brute_force_time(8, 26), "2 minutes");
    }

    #[test]
    fn test_estimate_exact_one_second_boundary() {
        // 2e9^1 / 2 / 1e9 == 1.0 exactly: not "Instant"
        assert_eq!(estimate_brute_force_time(1, 2_000_000_000), "1 seconds");
    }

    #[test]
    fn test_estimate_twelve_full_alphabet() {
        // 94^12 / 2 / 1e9 = 2.3796e14s = 7,545,666 years
        assert_eq!(estimate_brute_force_time(12, 94), "8 million years");
    }

    #[test]
    fn test_estimate_twenty_full_alphabet_is_terminal() {
        assert_eq!(
            estimate_brute_force_time(20, 94),
            "Longer than the age of the universe"
        );
    }

    #[test]
    fn test_estimate_overflow_does_not_panic() {
        // 94^10000 overflows f64 to infinity
        assert_eq!(
            estimate_brute_force_time(10_000, 94),
            "Longer than the age of the universe"
        );
    }

    #[test]
    fn test_format_sub_second_is_instant() {
        assert_eq!(format_duration(0.0), "Instant");
        assert_eq!(format_duration(0.999), "Instant");
    }

    #[test]
    fn test_format_second_boundaries() {
        assert_eq!(format_duration(1.0), "1 seconds");
        assert_eq!(format_duration(59.4), "59 seconds");
        // Bucket is chosen on the raw value, so 59.6 still renders in
        // seconds even though it rounds up to 60
        assert_eq!(format_duration(59.6), "60 seconds");
    }

    #[test]
    fn test_format_minute_boundaries() {
        assert_eq!(format_duration(60.0), "1 minutes");
        assert_eq!(format_duration(90.0), "2 minutes");
        assert_eq!(format_duration(3_599.0), "60 minutes");
    }

    #[test]
    fn test_format_hour_boundaries() {
        assert_eq!(format_duration(3_600.0), "1 hours");
        assert_eq!(format_duration(86_399.0), "24 hours");
    }

    #[test]
    fn test_format_day_boundaries() {
        assert_eq!(format_duration(86_400.0), "1 days");
        assert_eq!(format_duration(31_535_999.0), "365 days");
    }

    #[test]
    fn test_format_year_boundaries() {
        assert_eq!(format_duration(31_536_000.0), "1 years");
        assert_eq!(format_duration(31_535_999_999.0), "1000 years");
        // Rendering stays continuous across the bucket switch
        assert_eq!(format_duration(31_536_000_000.0), "1000 years");
        assert_eq!(format_duration(999_999.0 * YEAR), "999999 years");
    }

    #[test]
    fn test_format_million_year_boundaries() {
        assert_eq!(format_duration(1e6 * YEAR), "1 million years");
        assert_eq!(format_duration(1e8 * YEAR), "100 million years");
    }

    #[test]
    fn test_format_billion_year_boundaries() {
        assert_eq!(format_duration(1e9 * YEAR), "1 billion years");
        assert_eq!(format_duration(1e11 * YEAR), "100 billion years");
    }

    #[test]
    fn test_format_terminal_bucket() {
        assert_eq!(
            format_duration(1e12 * YEAR),
            "Longer than the age of the universe"
        );
        assert_eq!(
            format_duration(f64::INFINITY),
            "Longer than the age of the universe"
        );
    }
}
