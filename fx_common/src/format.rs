//! Display helpers shared by every page.
//!
//! These are pure functions turning raw numbers and ISO-8601 timestamps into the
//! strings shown on screen. Amounts are never grouped by locale.
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Placeholder shown when a timestamp is missing.
pub const MISSING_TIMESTAMP: &str = "N/A";

/// Currency marker prefixed to every amount.
pub const CURRENCY_PREFIX: &str = "R$";

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Format an amount in BRL with exactly four decimals, e.g. `R$ 5.4321`.
pub fn format_currency(value: f64) -> String {
    format!("{} {:.4}", CURRENCY_PREFIX, value)
}

/// Format a signed percentage with two decimals.
///
/// Strictly positive values get an explicit `+`; zero and negative values rely on
/// the number's own sign.
pub fn format_percentage(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, value)
}

/// Format a ratio already expressed in percent with two decimals and no sign prefix.
pub fn format_ratio(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Render an ISO-8601 timestamp as a local date and time (`dd/mm/yyyy, HH:MM:SS`).
///
/// Returns [`MISSING_TIMESTAMP`] for a missing or empty timestamp. A value that cannot
/// be parsed is returned as-is.
pub fn format_timestamp(timestamp: Option<&str>) -> String {
    let raw = match timestamp.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return MISSING_TIMESTAMP.to_string(),
    };

    parse_timestamp(raw)
        .map(|local| local.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Parse an RFC 3339 timestamp, or a naive one interpreted in local time.
fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Local));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
    Local.from_local_datetime(&naive).earliest()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimals(formatted: &str) -> usize {
        let number = formatted.trim_end_matches('%');
        number.split('.').nth(1).map(str::len).unwrap_or(0)
    }

    #[test]
    fn currency_has_four_decimals() {
        assert_eq!(format_currency(1.2345), "R$ 1.2345");
        assert_eq!(format_currency(5.0), "R$ 5.0000");
        assert_eq!(format_currency(0.1), "R$ 0.1000");
        for value in [0.0, -0.3, 5.123456789, 1234567.5, 1e-9] {
            assert_eq!(decimals(&format_currency(value)), 4, "value {}", value);
        }
    }

    #[test]
    fn percentage_sign_rules() {
        assert_eq!(format_percentage(1.5), "+1.50%");
        assert_eq!(format_percentage(-1.5), "-1.50%");
        assert_eq!(format_percentage(0.0), "0.00%");
        for value in [0.004, 2.0, 99.999, -0.01, -7.0, 0.0] {
            let out = format_percentage(value);
            assert_eq!(out.starts_with('+'), value > 0.0, "value {}", value);
            assert_eq!(decimals(&out), 2, "value {}", value);
        }
    }

    #[test]
    fn ratio_has_no_sign() {
        assert_eq!(format_ratio(1.851851), "1.85%");
        assert_eq!(format_ratio(5.454545), "5.45%");
    }

    #[test]
    fn missing_timestamp_is_sentinel() {
        assert_eq!(format_timestamp(None), "N/A");
        assert_eq!(format_timestamp(Some("")), "N/A");
    }

    #[test]
    fn present_timestamp_is_rendered() {
        let out = format_timestamp(Some("2024-01-01T12:00:00Z"));
        assert_ne!(out, "N/A");
        assert!(out.contains("2024") || out.contains("2023"), "got {}", out);
        assert!(out.contains(':'));

        let naive = format_timestamp(Some("2024-06-15T08:30:00"));
        assert_eq!(naive, "15/06/2024, 08:30:00");
    }

    #[test]
    fn unparseable_timestamp_is_echoed() {
        assert_eq!(format_timestamp(Some("yesterday")), "yesterday");
    }
}
