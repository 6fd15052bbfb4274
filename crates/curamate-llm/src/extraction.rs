//! Structured decoding of completion output.
//!
//! The completion service returns free-form text; the contract lives in
//! the prompt. Decoding is therefore defensive: slice out the JSON
//! payload, decode it, and validate required fields, failing loudly when
//! any step falls through.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::completion::{CompletionError, CompletionService};
use crate::prompts;

/// Extraction errors.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Completion failed: {0}")]
    Completion(#[from] CompletionError),

    #[error(
        "Could not find a city or usable date in the request. \
         Please be more specific (e.g., 'Delhi, next Tuesday')."
    )]
    MissingBookingFields,
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// A validated booking request decoded from completion output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRequest {
    /// City to search in
    pub city: String,
    /// Candidate dates, "YYYY-MM-DD"
    pub potential_dates: Vec<String>,
}

/// Raw decoded shape before validation; either field may come back null.
#[derive(Debug, Deserialize)]
struct RawBooking {
    city: Option<String>,
    potential_dates: Option<Vec<String>>,
}

/// One medication entry decoded from completion output.
///
/// Mirrors the core `MedicationRecord` shape; validated only by decoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicationEntry {
    pub name: String,
    pub dosage: Option<String>,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub alert_times: Vec<String>,
    pub end_date: Option<String>,
    pub notes: Option<String>,
}

/// Slice the first `{` ... last `}` span out of a completion (models often
/// wrap the payload in extra prose).
pub fn extract_object(content: &str) -> ExtractionResult<&str> {
    let start = content.find('{').ok_or_else(|| {
        ExtractionError::InvalidFormat("No JSON object found in response".into())
    })?;
    let end = content.rfind('}').ok_or_else(|| {
        ExtractionError::InvalidFormat("No closing brace found in response".into())
    })?;
    if end < start {
        return Err(ExtractionError::InvalidFormat(
            "Braces are out of order in response".into(),
        ));
    }
    Ok(&content[start..=end])
}

/// Slice a JSON array out of a completion: the array inside a ```json
/// fenced block when one is present, else the first `[` ... last `]` span
/// of the whole text.
pub fn extract_array(content: &str) -> ExtractionResult<&str> {
    if let Some(block) = fenced_json_block(content) {
        if let Some(span) = bracket_span(block) {
            return Ok(span);
        }
    }
    bracket_span(content).ok_or_else(|| {
        ExtractionError::InvalidFormat("No JSON array found in response".into())
    })
}

/// The contents of the first ```json fenced block, if any.
fn fenced_json_block(content: &str) -> Option<&str> {
    let after_open = &content[content.find("```json")? + "```json".len()..];
    let close = after_open.find("```")?;
    Some(&after_open[..close])
}

/// First `[` ... last `]` span, when the brackets are ordered.
fn bracket_span(body: &str) -> Option<&str> {
    let start = body.find('[')?;
    let end = body.rfind(']')?;
    (end >= start).then(|| &body[start..=end])
}

/// Decode and validate a booking request from completion output.
///
/// Absent, null, or empty `city`/`potential_dates` is a hard failure; the
/// matcher must never run on a defaulted preference.
pub fn decode_booking(content: &str) -> ExtractionResult<BookingRequest> {
    let raw: RawBooking = serde_json::from_str(extract_object(content)?)?;

    let city = raw.city.filter(|c| !c.trim().is_empty());
    let dates = raw.potential_dates.filter(|d| !d.is_empty());

    match (city, dates) {
        (Some(city), Some(potential_dates)) => Ok(BookingRequest {
            city,
            potential_dates,
        }),
        _ => Err(ExtractionError::MissingBookingFields),
    }
}

/// Decode a medication schedule from completion output.
pub fn decode_medications(content: &str) -> ExtractionResult<Vec<MedicationEntry>> {
    Ok(serde_json::from_str(extract_array(content)?)?)
}

/// Run one completion call and decode its output.
///
/// The seam the two parsers share: a single blocking call, a single decode,
/// no retries. Unit-testable with canned completions.
pub fn complete_and_decode<T, F>(
    service: &dyn CompletionService,
    data: &str,
    system_prompt: &str,
    decode: F,
) -> ExtractionResult<T>
where
    F: FnOnce(&str) -> ExtractionResult<T>,
{
    let content = service.complete(data, system_prompt)?;
    decode(&content)
}

/// Parse a free-text scheduling preference into a booking request.
pub fn parse_booking_request(
    service: &dyn CompletionService,
    user_text: &str,
    today: NaiveDate,
) -> ExtractionResult<BookingRequest> {
    let prompt = prompts::booking_prompt(user_text, today);
    complete_and_decode(service, user_text, &prompt, decode_booking)
}

/// Parse free-text medication instructions into a schedule.
pub fn parse_medication_schedule(
    service: &dyn CompletionService,
    user_text: &str,
    today: NaiveDate,
) -> ExtractionResult<Vec<MedicationEntry>> {
    let prompt = prompts::medication_prompt(user_text, today);
    complete_and_decode(service, user_text, &prompt, decode_medications)
}
