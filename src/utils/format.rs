//! Format - Formatting Utilities

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Parse a date-ish cell value.
///
/// Accepts RFC 3339 timestamps (taken in local time), `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS` and plain `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, pattern) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Format a date as `yyyy-mm-dd`
pub fn format_ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a timestamp as `HH:MM:SS.mmm`
pub fn format_time_ms(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S%.3f").to_string()
}

/// Upper-case the first letter of every word, like CSS `text-transform: capitalize`
pub fn capitalize_words(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if at_word_start && c.is_alphabetic() {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = c.is_whitespace();
    }

    result
}

/// Truncate a string to max chars with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_formats() {
        let expected = NaiveDate::from_ymd_opt(2021, 10, 1);
        assert_eq!(parse_date("2021-10-01"), expected);
        assert_eq!(parse_date("2021-10-01 08:30:00"), expected);
        assert_eq!(parse_date("2021-10-01T08:30:00"), expected);
        assert_eq!(parse_date(" 2021-10-01 "), expected);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn rfc3339_uses_local_calendar_day() {
        let parsed = parse_date("2021-10-01T12:00:00+00:00").expect("date");
        let expected = DateTime::parse_from_rfc3339("2021-10-01T12:00:00+00:00")
            .expect("rfc3339")
            .with_timezone(&Local)
            .date_naive();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(capitalize_words("mobile money"), "Mobile Money");
        assert_eq!(capitalize_words("W-0100"), "W-0100");
        assert_eq!(capitalize_words("bank  transfer"), "Bank  Transfer");
    }

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("payment confirmation", 10), "payment...");
        assert_eq!(truncate("日本語テキスト", 5), "日本...");
    }
}
