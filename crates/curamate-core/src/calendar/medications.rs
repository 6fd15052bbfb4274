//! Recurring reminder calendar for a medication schedule.

use chrono::{NaiveDate, NaiveTime};
use tracing::warn;

use super::{escape_text, event_uid, format_datetime, wrap_calendar, CalendarError, CalendarResult};
use crate::models::MedicationRecord;

/// Build a reminder calendar for a medication schedule: one recurring
/// daily event per alert time, anchored at `start_date`, each with a
/// 30-minute-before reminder.
///
/// Records with an unparsable time or end date are skipped with a log
/// entry; the remaining records still export. Partial output is expected.
pub fn medication_calendar(records: &[MedicationRecord], start_date: NaiveDate) -> String {
    let mut events = String::new();

    for record in records {
        match record_events(record, start_date) {
            Ok(text) => events.push_str(&text),
            Err(err) => {
                warn!(medication = %record.name, %err, "skipping medication in calendar export")
            }
        }
    }

    wrap_calendar(&events)
}

/// Serialize every alert-time event for one medication.
fn record_events(record: &MedicationRecord, start_date: NaiveDate) -> CalendarResult<String> {
    let dosage = record.dosage.as_deref().unwrap_or("as prescribed");

    // Recurrence runs to the end of the last day when a course end is given
    let until = match record.end_date.as_deref() {
        Some(raw) => {
            let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| CalendarError::InvalidDate(raw.to_string()))?;
            let end_of_day = NaiveTime::from_hms_opt(23, 59, 59)
                .ok_or_else(|| CalendarError::InvalidTime("23:59:59".into()))?;
            Some(day.and_time(end_of_day))
        }
        None => None,
    };

    let mut out = String::new();
    for alert in &record.alert_times {
        let time = NaiveTime::parse_from_str(alert, "%H:%M")
            .map_err(|_| CalendarError::InvalidTime(alert.clone()))?;
        let start = start_date.and_time(time);
        let display_time = time.format("%I:%M %p");

        out.push_str("BEGIN:VEVENT\r\n");
        out.push_str(&format!("UID:{}\r\n", event_uid()));
        out.push_str(&format!(
            "DTSTAMP:{}Z\r\n",
            chrono::Utc::now().format("%Y%m%dT%H%M%S")
        ));
        out.push_str(&format!("DTSTART:{}\r\n", format_datetime(start)));
        out.push_str("DURATION:PT15M\r\n");
        out.push_str(&format!(
            "SUMMARY:Take: {} ({})\r\n",
            escape_text(&record.name),
            display_time
        ));
        out.push_str(&format!("DESCRIPTION:Dosage: {}\r\n", escape_text(dosage)));
        match until {
            Some(end) => out.push_str(&format!(
                "RRULE:FREQ=DAILY;UNTIL={}\r\n",
                format_datetime(end)
            )),
            None => out.push_str("RRULE:FREQ=DAILY\r\n"),
        }
        out.push_str("BEGIN:VALARM\r\n");
        out.push_str("ACTION:DISPLAY\r\n");
        out.push_str("DESCRIPTION:Reminder\r\n");
        out.push_str("TRIGGER:-PT30M\r\n");
        out.push_str("END:VALARM\r\n");
        out.push_str("END:VEVENT\r\n");
    }

    Ok(out)
}
