//! Publication date normalization
//!
//! Dates arrive in whatever form the site renders: ISO stamps in
//! `datetime` attributes, dotted Russian numerics, or textual dates like
//! "17 мая 2024". Everything normalizes to one canonical representation.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Canonical representation for normalized dates
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATETIME_FORMATS: &[&str] = &[
    CANONICAL_DATE_FORMAT,
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y"];

/// Genitive month names as the site renders them
const RU_MONTHS: &[(&str, u32)] = &[
    ("января", 1),
    ("февраля", 2),
    ("марта", 3),
    ("апреля", 4),
    ("мая", 5),
    ("июня", 6),
    ("июля", 7),
    ("августа", 8),
    ("сентября", 9),
    ("октября", 10),
    ("ноября", 11),
    ("декабря", 12),
];

/// Normalizes raw date text into a datetime
///
/// Tries full datetime formats first (including RFC 3339 stamps from
/// `datetime` attributes), then date-only formats with a midnight fill,
/// then Russian textual dates with an optional `HH:MM` tail. Returns None
/// when nothing matches; an unparseable date is "no date found", never an
/// error.
pub fn normalize_date(raw: &str) -> Option<NaiveDateTime> {
    let text = raw.trim().trim_end_matches("г.").trim();
    if text.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed);
        }
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.naive_local());
    }

    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(text, format) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }

    parse_russian_date(text)
}

/// Formats a normalized datetime in the canonical representation
pub fn format_canonical(date: &NaiveDateTime) -> String {
    date.format(CANONICAL_DATE_FORMAT).to_string()
}

/// Parses "17 мая 2024" or "17 мая 2024 14:30"
fn parse_russian_date(text: &str) -> Option<NaiveDateTime> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 3 && tokens.len() != 4 {
        return None;
    }

    let day: u32 = tokens[0].parse().ok()?;
    let month = month_number(tokens[1])?;
    let year: i32 = tokens[2].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    if tokens.len() == 4 {
        let (hour, minute) = tokens[3].split_once(':')?;
        let hour: u32 = hour.parse().ok()?;
        let minute: u32 = minute.parse().ok()?;
        date.and_hms_opt(hour, minute, 0)
    } else {
        date.and_hms_opt(0, 0, 0)
    }
}

fn month_number(token: &str) -> Option<u32> {
    let lowered = token.to_lowercase();
    RU_MONTHS
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, number)| *number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(raw: &str) -> Option<String> {
        normalize_date(raw).map(|date| format_canonical(&date))
    }

    #[test]
    fn test_canonical_round_trip_is_idempotent() {
        let first = canonical("17 мая 2024 14:30").unwrap();
        let second = canonical(&first).unwrap();
        assert_eq!(first, second);
        assert_eq!(second, "2024-05-17 14:30:00");
    }

    #[test]
    fn test_iso_datetime() {
        assert_eq!(
            canonical("2024-05-17T14:30:05").as_deref(),
            Some("2024-05-17 14:30:05")
        );
    }

    #[test]
    fn test_rfc3339_with_offset() {
        assert_eq!(
            canonical("2024-05-17T14:30:05+03:00").as_deref(),
            Some("2024-05-17 14:30:05")
        );
    }

    #[test]
    fn test_date_only_fills_midnight() {
        assert_eq!(
            canonical("2024-05-17").as_deref(),
            Some("2024-05-17 00:00:00")
        );
        assert_eq!(
            canonical("17.05.2024").as_deref(),
            Some("2024-05-17 00:00:00")
        );
    }

    #[test]
    fn test_dotted_datetime() {
        assert_eq!(
            canonical("17.05.2024 14:30").as_deref(),
            Some("2024-05-17 14:30:00")
        );
    }

    #[test]
    fn test_russian_textual_date() {
        assert_eq!(
            canonical("17 мая 2024").as_deref(),
            Some("2024-05-17 00:00:00")
        );
        assert_eq!(
            canonical("3 января 2023 09:05").as_deref(),
            Some("2023-01-03 09:05:00")
        );
    }

    #[test]
    fn test_russian_month_case_insensitive() {
        assert_eq!(
            canonical("17 Мая 2024").as_deref(),
            Some("2024-05-17 00:00:00")
        );
    }

    #[test]
    fn test_year_suffix_is_stripped() {
        assert_eq!(
            canonical("17 мая 2024 г.").as_deref(),
            Some("2024-05-17 00:00:00")
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(
            canonical("  2024-05-17 14:30:00  ").as_deref(),
            Some("2024-05-17 14:30:00")
        );
    }

    #[test]
    fn test_unparseable_text_is_none() {
        assert_eq!(normalize_date("вчера"), None);
        assert_eq!(normalize_date("17 maybe 2024"), None);
        assert_eq!(normalize_date("32 января 2024"), None);
        assert_eq!(normalize_date(""), None);
        assert_eq!(normalize_date("   "), None);
    }
}
