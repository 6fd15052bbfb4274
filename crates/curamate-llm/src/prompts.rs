//! System prompts for the booking and medication parsers.
//!
//! The completion service has no structured-output mode; these prompts are
//! the schema. Wording changes here change what the decoders can extract.

use chrono::{Duration, NaiveDate};

/// System prompt for parsing a free-text booking preference.
///
/// Embeds today's date and a one-week reference point so relative phrases
/// ("next Tuesday", "this weekend") resolve to absolute dates.
pub fn booking_prompt(user_text: &str, today: NaiveDate) -> String {
    let one_week = today + Duration::days(7);

    format!(
        r#"You are an expert appointment scheduling assistant. Your task is to parse a
user's free-text request and extract booking information.

Today's date is: {today}
One week from today is: {one_week}

The user's request is:
"{user_text}"

Analyze the request and return ONLY a single, minified JSON object in the
following format:
{{
  "city": "The city the user mentioned (e.g., 'Delhi', 'Mumbai')",
  "potential_dates": [
    "A list of all potential dates in 'YYYY-MM-DD' format.",
    "Translate relative terms like 'next Tuesday' or 'this weekend'
     into specific 'YYYY-MM-DD' dates based on today's date.",
    "If the user says 'next weekend', include both Saturday and Sunday."
  ]
}}

Example 1:
User text: "I'm in Delhi and am free next Tuesday or Wednesday."
JSON: {{"city":"Delhi","potential_dates":["<next Tuesday as YYYY-MM-DD>","<next Wednesday as YYYY-MM-DD>"]}}

Example 2:
User text: "I live in Mumbai and can do any day this weekend."
JSON: {{"city":"Mumbai","potential_dates":["<Saturday as YYYY-MM-DD>","<Sunday as YYYY-MM-DD>"]}}

If you cannot find a city or a date, return "null" for that field.
Do not add any other text, explanation, or markdown."#,
    )
}

/// System prompt for parsing free-text medication instructions.
///
/// Enumerates the fixed time-of-day inference table and a one-shot example
/// whose end date is three days out, and demands a bare JSON array.
pub fn medication_prompt(user_text: &str, today: NaiveDate) -> String {
    let example_end = today + Duration::days(3);

    format!(
        r#"You are a backend API that converts unstructured text into a JSON array.
You DO NOT talk. You ONLY return JSON.

Current Date: {today}

### Interpretation Rules:
- **Identify Medications:** Extract every distinct medication or nickname (e.g., "blue pill").
- **Infer Standard Times (Crucial):** Map layman routines to 24-hour times:
   - "Morning"/"Breakfast" -> ["08:00"]
   - "Lunch"/"Afternoon" -> ["13:00"]
   - "Dinner"/"Evening" -> ["20:00"]
   - "Bedtime"/"Night" -> ["22:00"]
   - "Twice a day" -> ["09:00", "21:00"]
   - "Three times a day" -> ["09:00", "14:00", "21:00"]
- **Durations:** Calculate 'end_date' (YYYY-MM-DD) if a duration is given (e.g., "for 7 days"). Otherwise, set to null.
- **CRITICAL OUTPUT RULE:** Your output must start with '[' and end with ']'. No preamble.

### ONE-SHOT EXAMPLE (Follow this format exactly):
Input: "Take 500mg Crocin twice daily for 3 days, and Aspirin every night."
Output:
[
  {{
    "name": "Crocin",
    "dosage": "500mg",
    "frequency": "twice daily",
    "alert_times": ["09:00", "21:00"],
    "end_date": "{example_end}",
    "notes": null
  }},
  {{
    "name": "Aspirin",
    "dosage": null,
    "frequency": "every night",
    "alert_times": ["22:00"],
    "end_date": null,
    "notes": null
  }}
]

---

### REAL INPUT:
"{user_text}"

### REAL OUTPUT (JSON Array ONLY):"#,
    )
}
