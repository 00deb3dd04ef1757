use jiff::{Timestamp, tz::TimeZone};

pub const CURRENCY: &str = "SAR";

pub const DEFAULT_TIME_ZONE: &str = "Asia/Riyadh";

/// Format an amount with at most two decimals and no trailing zeros.
pub fn amount(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

pub fn price(value: f64) -> String {
    format!("{} {}", amount(value), CURRENCY)
}

/// Average rating with one decimal, e.g. `4.3`.
pub fn rating(value: f64) -> String {
    format!("{:.1}", value)
}

/// Five-star bar for an average rating, rounded to the nearest star.
pub fn stars(average: f64) -> String {
    let filled = average.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Render an instant in the given IANA time zone, falling back to UTC.
pub fn timestamp(at: Timestamp, time_zone: &str) -> String {
    let tz = TimeZone::get(time_zone).unwrap_or(TimeZone::UTC);
    at.to_zoned(tz).strftime("%b %d, %Y at %I:%M %p %Z").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_have_no_decimals() {
        assert_eq!(amount(170.0), "170");
        assert_eq!(amount(0.0), "0");
    }

    #[test]
    fn fractional_amounts_are_trimmed() {
        assert_eq!(amount(12.5), "12.5");
        assert_eq!(amount(0.1 + 0.2), "0.3");
        assert_eq!(amount(9.999), "10");
    }

    #[test]
    fn price_carries_currency() {
        assert_eq!(price(25.0), "25 SAR");
    }

    #[test]
    fn stars_round_to_nearest() {
        assert_eq!(stars(0.0), "☆☆☆☆☆");
        assert_eq!(stars(3.0), "★★★☆☆");
        assert_eq!(stars(4.5), "★★★★★");
        assert_eq!(stars(4.4), "★★★★☆");
    }

    #[test]
    fn unknown_time_zone_falls_back_to_utc() {
        let formatted = timestamp(Timestamp::UNIX_EPOCH, "Not/AZone");
        assert_eq!(formatted, "Jan 01, 1970 at 12:00 AM UTC");
    }
}
