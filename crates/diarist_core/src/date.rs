//! Date line prepended to every generated diary.

use chrono::{Local, NaiveDate};

/// `strftime` pattern of the date line, e.g. `2026年10月16日`.
pub const DATE_LINE_FORMAT: &str = "%Y年%m月%d日";

/// Format a date as a diary date line.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use diarist_core::date_line;
///
/// let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// assert_eq!(date_line(date), "2024年04月01日");
/// ```
pub fn date_line(date: NaiveDate) -> String {
    date.format(DATE_LINE_FORMAT).to_string()
}

/// Today's date line in local time.
pub fn today_line() -> String {
    date_line(Local::now().date_naive())
}

/// Prefix `body` with today's date line and a newline.
pub fn prepend_date_line(body: &str) -> String {
    format!("{}\n{}", today_line(), body)
}
