//! iCalendar export for appointments and medication reminders.

mod appointment;
mod medications;

pub use appointment::*;
pub use medications::*;

use chrono::NaiveDateTime;
use thiserror::Error;

/// Calendar export errors.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid time: {0}")]
    InvalidTime(String),
}

pub type CalendarResult<T> = Result<T, CalendarError>;

/// Product identifier stamped into every exported calendar.
pub const PRODID: &str = "-//CuraMate//Scheduling Core//EN";

/// Wrap serialized events in the VCALENDAR envelope.
pub(crate) fn wrap_calendar(events: &str) -> String {
    let mut out = String::new();
    out.push_str("BEGIN:VCALENDAR\r\n");
    out.push_str("VERSION:2.0\r\n");
    out.push_str("PRODID:");
    out.push_str(PRODID);
    out.push_str("\r\n");
    out.push_str(events);
    out.push_str("END:VCALENDAR\r\n");
    out
}

/// Format a naive local datetime as an iCalendar floating timestamp.
pub(crate) fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// Escape TEXT property values per the calendar grammar: backslash,
/// semicolon, comma, and newline.
pub(crate) fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            other => out.push(other),
        }
    }
    out
}

/// A fresh event UID.
pub(crate) fn event_uid() -> String {
    format!("{}@curamate.app", uuid::Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_wrap_calendar_envelope() {
        let text = wrap_calendar("BEGIN:VEVENT\r\nEND:VEVENT\r\n");
        assert!(text.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(text.ends_with("END:VCALENDAR\r\n"));
        assert!(text.contains("VERSION:2.0"));
        assert!(text.contains(PRODID));
    }

    #[test]
    fn test_format_datetime() {
        let dt = NaiveDate::from_ymd_opt(2025, 1, 6)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(format_datetime(dt), "20250106T090000");
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("plain"), "plain");
        assert_eq!(escape_text("a,b;c\\d"), "a\\,b\\;c\\\\d");
        assert_eq!(escape_text("line1\nline2"), "line1\\nline2");
    }

    #[test]
    fn test_event_uid_shape() {
        let uid = event_uid();
        assert!(uid.ends_with("@curamate.app"));
        assert_eq!(uid.len(), 36 + "@curamate.app".len());
    }
}
