//! Calendar invite for a confirmed appointment.

use chrono::{Duration, NaiveDate};
use tracing::error;

use super::{escape_text, event_uid, format_datetime, wrap_calendar, CalendarError, CalendarResult};

/// Build a downloadable calendar invite for a confirmed appointment: a
/// single 09:00–10:00 event on the given date with a reminder one day
/// before.
///
/// Empty display fields fall back to "Doctor" / "Clinic Appointment". A
/// malformed date is logged and yields an empty string; it never
/// propagates.
pub fn appointment_invite(doctor_name: &str, hospital: &str, date: &str) -> String {
    match build_invite(doctor_name, hospital, date) {
        Ok(text) => text,
        Err(err) => {
            error!(%err, "appointment calendar export failed");
            String::new()
        }
    }
}

fn build_invite(doctor_name: &str, hospital: &str, date: &str) -> CalendarResult<String> {
    let doctor_name = if doctor_name.is_empty() {
        "Doctor"
    } else {
        doctor_name
    };
    let hospital = if hospital.is_empty() {
        "Clinic Appointment"
    } else {
        hospital
    };

    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| CalendarError::InvalidDate(date.to_string()))?;
    let start = day
        .and_hms_opt(9, 0, 0)
        .ok_or_else(|| CalendarError::InvalidDate(date.to_string()))?;
    let end = start + Duration::hours(1);

    let mut event = String::new();
    event.push_str("BEGIN:VEVENT\r\n");
    event.push_str(&format!("UID:{}\r\n", event_uid()));
    event.push_str(&format!(
        "DTSTAMP:{}Z\r\n",
        chrono::Utc::now().format("%Y%m%dT%H%M%S")
    ));
    event.push_str(&format!("DTSTART:{}\r\n", format_datetime(start)));
    event.push_str(&format!("DTEND:{}\r\n", format_datetime(end)));
    event.push_str(&format!(
        "SUMMARY:Appointment with {}\r\n",
        escape_text(doctor_name)
    ));
    event.push_str(&format!("LOCATION:{}\r\n", escape_text(hospital)));
    event.push_str("BEGIN:VALARM\r\n");
    event.push_str("ACTION:DISPLAY\r\n");
    event.push_str("DESCRIPTION:Reminder\r\n");
    event.push_str("TRIGGER:-P1D\r\n");
    event.push_str("END:VALARM\r\n");
    event.push_str("END:VEVENT\r\n");

    Ok(wrap_calendar(&event))
}
