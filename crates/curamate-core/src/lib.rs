//! CuraMate Scheduling Core
//!
//! Appointment matching and medication scheduling for a health-report
//! analysis application.
//!
//! # Architecture
//!
//! ```text
//! Risk labels ──► Specialty Resolver ──► Specialty
//!                                            │
//! Free text ──► Availability Parser ──► BookingPreference
//!                 (curamate-llm)             │
//!                              ┌─────────────▼─────────────┐
//!                              │    Appointment Matcher    │
//!                              │  load → filter → rank →   │
//!                              │  earliest date × best doc │
//!                              └─────┬──────────────┬──────┘
//!                                    │              │
//!                              Record store   Notification
//!                               (persist)     (best-effort)
//!                                    │
//!                                    ▼
//!                            Calendar Exporter ──► .ics download
//!
//! Free text ──► Medication Parser ──► MedicationRecords ──► Record store
//!                 (curamate-llm)                │
//!                                               ▼
//!                                       Calendar Exporter
//! ```
//!
//! # Core behaviors
//!
//! - Matching is greedy and deterministic: earliest preferred date first,
//!   best-ranked doctor first, first satisfying pair wins.
//! - Roster problems are explicit errors; "no match" is a normal outcome
//!   carrying ranked alternatives, never an exception.
//! - Notification failures are logged and never unwind a saved booking.
//!
//! # Modules
//!
//! - [`models`]: domain types (Doctor, BookingPreference, MedicationRecord, ...)
//! - [`directory`]: roster loading and exact-equality filtering
//! - [`scheduling`]: specialty resolution, ranking, and the matcher
//! - [`calendar`]: iCalendar export for appointments and reminders
//! - [`notify`]: phone normalization and the notification seam
//! - [`db`]: SQLite record store (doctors, appointments, medications)
//! - [`flow`]: explicit application-flow state machine

pub mod calendar;
pub mod db;
pub mod directory;
pub mod flow;
pub mod models;
pub mod notify;
pub mod scheduling;

// Re-export commonly used types
pub use db::Database;
pub use directory::DoctorDirectory;
pub use models::{
    AppointmentRecord, BookingOutcome, BookingPreference, Doctor, MedicationRecord,
    PatientDetails, Specialty,
};
pub use scheduling::{rank_doctors, resolve_specialty, AppointmentMatcher, AppointmentStore};
