//! Booking models: specialties, parsed preferences, and outcomes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Doctor;

/// A medical specialty a doctor can be matched against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Specialty {
    Hematology,
    Hepatology,
    Endocrinology,
    Cardiology,
    Nephrology,
}

impl Specialty {
    /// Canonical display name, matching roster specialization values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hematology => "Hematology",
            Self::Hepatology => "Hepatology",
            Self::Endocrinology => "Endocrinology",
            Self::Cardiology => "Cardiology",
            Self::Nephrology => "Nephrology",
        }
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheduling preference parsed from the user's free text.
///
/// Dates stay as ISO strings: entries the model got wrong are skipped
/// individually during matching instead of failing the whole request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingPreference {
    /// City to search for doctors in
    pub city: String,
    /// Candidate appointment dates, "YYYY-MM-DD"
    pub potential_dates: Vec<String>,
}

/// Patient contact details, passed through to persistence and notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Appointment lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppointmentStatus {
    /// Awaiting clinic confirmation
    Pending,
    Confirmed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// The durable appointment row written to the record store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentRecord {
    /// Unique appointment ID
    pub id: String,
    /// Requesting user
    pub user_id: String,
    /// Roster ID of the booked doctor
    pub doctor_id: i64,
    pub doctor_name: String,
    pub hospital_name: String,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    /// The doctor's city (the city the appointment is in)
    pub preferred_city: String,
    /// The concrete matched date, "YYYY-MM-DD"
    pub preferred_day: String,
    pub status: AppointmentStatus,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl AppointmentRecord {
    /// Build a new pending appointment for a matched doctor and date.
    pub fn new(user_id: &str, doctor: &Doctor, patient: &PatientDetails, date: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            doctor_id: doctor.id,
            doctor_name: doctor.name.clone(),
            hospital_name: doctor.hospital.clone(),
            patient_name: patient.name.clone(),
            patient_email: patient.email.clone(),
            patient_phone: patient.phone.clone(),
            preferred_city: doctor.city.clone(),
            preferred_day: date.to_string(),
            status: AppointmentStatus::Pending,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// A confirmed booking, reported back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmedAppointment {
    pub doctor_name: String,
    pub hospital: String,
    pub date: NaiveDate,
}

/// Why a booking attempt did not produce an appointment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BookingFailure {
    /// The roster loaded but contained no doctors at all
    EmptyRoster,
    /// No doctor matched the requested specialty and city
    NoSpecialistInCity,
    /// Matching doctors exist but none works on any preferred date
    NoDateAvailable,
    /// A doctor was matched but the record store rejected the insert
    SaveFailed,
}

/// Terminal result of an appointment-matching run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum BookingOutcome {
    Confirmed(ConfirmedAppointment),
    Failed {
        reason: BookingFailure,
        /// User-facing explanation
        message: String,
        /// Ranked doctors the user can contact directly; populated only
        /// when the failure is [`BookingFailure::NoDateAvailable`]
        alternatives: Vec<Doctor>,
    },
}

impl BookingOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed(_))
    }

    /// User-facing message for failed outcomes.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Confirmed(_) => None,
            Self::Failed { message, .. } => Some(message),
        }
    }
}
