//! Lenient date parsing into canonical `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Placeholder for a date cell that could not be parsed.
pub const INVALID_DATE: &str = "Fecha inválida";

/// Date-time layouts tried before the date-only ones.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

/// Month-first wins over day-first for ambiguous slash dates.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y", "%d.%m.%Y", "%d-%m-%Y",
];

/// Parse a date cell, returning `None` when no known layout fits.
pub fn parse_date(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(format_date(dt.date_naive()));
    }

    // Fractional seconds are irrelevant for a calendar date.
    let without_fraction = value.split('.').next().unwrap_or(value);
    for candidate in [value, without_fraction] {
        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(candidate, fmt) {
                return Some(format_date(dt.date()));
            }
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .map(format_date)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
