//! Calendar date parsing and the fixed display format used in responses.

use chrono::NaiveDate;

/// Input format accepted for `date`, `from` and `to`.
pub const INPUT_FORMAT: &str = "%Y-%m-%d";

/// `"<Weekday> <Month> <Day> <Year>"`, e.g. `Mon Jan 01 1990`.
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

/// Parse a strict `YYYY-MM-DD` date.
///
/// Only four-digit, unsigned years are accepted so the stored `%F` text
/// sorts in calendar order.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if !has_input_shape(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, INPUT_FORMAT).ok()
}

fn has_input_shape(raw: &str) -> bool {
    raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}
