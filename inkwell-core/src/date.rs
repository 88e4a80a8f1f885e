use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Label returned for input that does not describe a calendar date.
pub const INVALID_DATE: &str = "Invalid Date";

/// Month name and day, e.g. "January 5". Always English.
const LABEL_FORMAT: &str = "%B %-d";

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
];

/// Minute-precision timestamps with an offset, which RFC 3339 leaves out.
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Render a date string as a "Month Day" label for article metadata.
///
/// The label never carries a year or a time of day, and never depends on
/// the host locale or time zone. Input that can't be read as a date gives
/// back [`INVALID_DATE`] instead of an error.
pub fn format_date(input: &str) -> String {
    match parse_date(input) {
        Some(date) => date.format(LABEL_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Read the calendar day out of a date string.
///
/// Timestamps with an explicit offset are normalized to UTC first; naive
/// timestamps keep the day as written.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    let zoned = match input.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{}+00:00", rest),
        None => input.to_string(),
    };
    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&zoned, format) {
            return Some(dt.with_timezone(&Utc).date_naive());
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(date);
        }
    }

    parse_partial_date(input)
}

/// "2023" and "2023-01" stand for the first day of the year or month.
fn parse_partial_date(input: &str) -> Option<NaiveDate> {
    let bytes = input.as_bytes();
    let all_digits = |b: &[u8]| b.iter().all(u8::is_ascii_digit);

    match bytes.len() {
        4 if all_digits(bytes) => NaiveDate::from_ymd_opt(input.parse().ok()?, 1, 1),
        7 if bytes[4] == b'-' && all_digits(&bytes[..4]) && all_digits(&bytes[5..]) => {
            let year = input[..4].parse().ok()?;
            let month = input[5..].parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, 1)
        }
        _ => None,
    }
}
