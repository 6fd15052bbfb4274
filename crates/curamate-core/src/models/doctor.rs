//! Doctor roster models.

use serde::{Deserialize, Serialize};

/// A doctor record from the static roster.
///
/// Field names follow the roster JSON keys verbatim, including the
/// capitalized and slash-separated ones the source file uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    /// Roster identifier
    pub id: i64,
    /// Display name (e.g., "Dr. Asha Rao")
    #[serde(rename = "Name")]
    pub name: String,
    /// Medical specialty; matchable only when it equals a [`Specialty`] value
    #[serde(rename = "Specialization")]
    pub specialization: String,
    /// Practice city
    pub city: String,
    /// Free-text working-days descriptor (e.g., "monday, wednesday" or "monday - friday")
    #[serde(rename = "working days")]
    pub working_days: String,
    /// Experience as text (e.g., "15 years")
    pub experience: String,
    /// Consultation fee
    pub fee: f64,
    /// Hospital or clinic name
    #[serde(rename = "hospital/clinic")]
    pub hospital: String,
}

impl Doctor {
    /// Years of experience, parsed as the first run of digits in the
    /// experience text. Returns 0 when the text contains no number.
    pub fn experience_years(&self) -> u32 {
        let digits: String = self
            .experience
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().unwrap_or(0)
    }

    /// Whether this doctor works on the named day.
    ///
    /// The working-days descriptor is free text, so availability is a
    /// substring check on the lowercase day name, with "monday - friday"
    /// treated as every weekday.
    pub fn works_on(&self, day_name: &str) -> bool {
        let days = self.working_days.to_lowercase();
        let day = day_name.to_lowercase();

        if days.contains(&day) {
            return true;
        }
        days.contains("monday - friday") && day != "saturday" && day != "sunday"
    }

    /// Exact case-insensitive match on specialization and city.
    pub fn matches(&self, specialty: &str, city: &str) -> bool {
        self.specialization.eq_ignore_ascii_case(specialty)
            && self.city.eq_ignore_ascii_case(city)
    }
}
