//! Appointment matching.
//!
//! Pipeline: risk labels → specialty → roster filter → rank → first
//! available (date, doctor) pair → persist → best-effort notification.

mod ranker;
mod specialty;

pub use ranker::*;
pub use specialty::*;

use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::directory::{filter_doctors, DirectoryResult, DoctorDirectory};
use crate::models::{
    AppointmentRecord, BookingFailure, BookingOutcome, BookingPreference, ConfirmedAppointment,
    PatientDetails, Specialty,
};
use crate::notify::{confirmation_message, normalize_phone, NotificationSender};

/// The record store rejected or failed an insert.
#[derive(Error, Debug)]
#[error("record store failure: {0}")]
pub struct PersistenceError(pub String);

/// Appointment persistence, implemented by the record store.
pub trait AppointmentStore {
    fn save_appointment(&self, record: &AppointmentRecord) -> Result<(), PersistenceError>;
}

/// Greedy first-match appointment booking over a static roster.
///
/// Date iteration is strictly earliest-first and, within a date, doctor
/// iteration is strictly rank-first; the first satisfying pair wins. This
/// is deliberately not a global optimization and must stay deterministic.
pub struct AppointmentMatcher<'a> {
    directory: &'a DoctorDirectory,
    store: &'a dyn AppointmentStore,
    notifier: &'a dyn NotificationSender,
}

impl<'a> AppointmentMatcher<'a> {
    pub fn new(
        directory: &'a DoctorDirectory,
        store: &'a dyn AppointmentStore,
        notifier: &'a dyn NotificationSender,
    ) -> Self {
        Self {
            directory,
            store,
            notifier,
        }
    }

    /// Find and book the first doctor available on one of the preferred
    /// dates.
    ///
    /// Roster problems (missing/malformed source) surface as errors; every
    /// other ending, including a failed save after a successful match, is a
    /// [`BookingOutcome`].
    pub fn book(
        &self,
        specialty: Specialty,
        preference: &BookingPreference,
        patient: &PatientDetails,
        user_id: &str,
    ) -> DirectoryResult<BookingOutcome> {
        let all_doctors = self.directory.load()?;
        if all_doctors.is_empty() {
            return Ok(BookingOutcome::Failed {
                reason: BookingFailure::EmptyRoster,
                message: "Doctor database is empty.".into(),
                alternatives: vec![],
            });
        }

        // 1. Filter by specialty and city
        let filtered = filter_doctors(&all_doctors, specialty.as_str(), &preference.city);
        if filtered.is_empty() {
            return Ok(BookingOutcome::Failed {
                reason: BookingFailure::NoSpecialistInCity,
                message: format!("No {} found in {}.", specialty, preference.city),
                alternatives: vec![],
            });
        }

        // 2. Rank the filtered set
        let ranked = rank_doctors(filtered);

        // 3. Check earliest date first; within a date, best-ranked doctor first
        let mut dates = preference.potential_dates.clone();
        dates.sort();

        for date_str in &dates {
            let date = match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
                Ok(date) => date,
                Err(err) => {
                    debug!(date = %date_str, %err, "skipping unparsable preferred date");
                    continue;
                }
            };
            let day_name = weekday_name(date);

            for doctor in &ranked {
                if !doctor.works_on(day_name) {
                    continue;
                }

                // First available pair wins; persist before reporting success
                let record = AppointmentRecord::new(user_id, doctor, patient, date_str);
                if let Err(err) = self.store.save_appointment(&record) {
                    warn!(doctor = %doctor.name, %err, "appointment insert failed");
                    return Ok(BookingOutcome::Failed {
                        reason: BookingFailure::SaveFailed,
                        message: "Found a doctor, but failed to save the appointment \
                                  to the database."
                            .into(),
                        alternatives: vec![],
                    });
                }

                info!(doctor = %doctor.name, date = %date_str, "appointment booked");
                self.notify(patient, &doctor.name, date_str);

                return Ok(BookingOutcome::Confirmed(ConfirmedAppointment {
                    doctor_name: doctor.name.clone(),
                    hospital: doctor.hospital.clone(),
                    date,
                }));
            }
        }

        // 4. Exhausted every date and doctor
        Ok(BookingOutcome::Failed {
            reason: BookingFailure::NoDateAvailable,
            message: format!(
                "No {} in {} was available on your preferred dates.",
                specialty, preference.city
            ),
            alternatives: ranked,
        })
    }

    /// Send the booking confirmation. Failures are logged, never returned:
    /// the appointment is already saved.
    fn notify(&self, patient: &PatientDetails, doctor_name: &str, date: &str) {
        let to = match normalize_phone(&patient.phone) {
            Ok(to) => to,
            Err(err) => {
                warn!(%err, "skipping booking confirmation");
                return;
            }
        };

        let body = confirmation_message(&patient.name, doctor_name, date);
        if let Err(err) = self.notifier.send_message(&to, &body) {
            warn!(%err, "booking confirmation failed");
        }
    }
}

/// Lowercase English weekday name for a date.
fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Doctor;
    use std::cell::RefCell;

    struct RecordingStore {
        saved: RefCell<Vec<AppointmentRecord>>,
    }

    impl RecordingStore {
        fn new() -> Self {
            Self {
                saved: RefCell::new(Vec::new()),
            }
        }
    }

    impl AppointmentStore for RecordingStore {
        fn save_appointment(&self, record: &AppointmentRecord) -> Result<(), PersistenceError> {
            self.saved.borrow_mut().push(record.clone());
            Ok(())
        }
    }

    struct FailingStore;

    impl AppointmentStore for FailingStore {
        fn save_appointment(&self, _record: &AppointmentRecord) -> Result<(), PersistenceError> {
            Err(PersistenceError("insert rejected".into()))
        }
    }

    struct RecordingNotifier {
        sent: RefCell<Vec<(String, String)>>,
    }

    impl RecordingNotifier {
        fn new() -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl NotificationSender for RecordingNotifier {
        fn send_message(&self, to: &str, body: &str) -> Result<(), crate::notify::NotifyError> {
            self.sent.borrow_mut().push((to.into(), body.into()));
            Ok(())
        }
    }

    fn make_doctor(id: i64, working_days: &str, experience: &str, fee: f64) -> Doctor {
        Doctor {
            id,
            name: format!("Dr. {}", id),
            specialization: "Hematology".into(),
            city: "Delhi".into(),
            working_days: working_days.into(),
            experience: experience.into(),
            fee,
            hospital: format!("Hospital {}", id),
        }
    }

    fn make_patient() -> PatientDetails {
        PatientDetails {
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
            phone: "+91 98765 43210".into(),
        }
    }

    fn preference(dates: &[&str]) -> BookingPreference {
        BookingPreference {
            city: "Delhi".into(),
            potential_dates: dates.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_books_first_available_doctor() {
        // 2025-01-06 is a Monday
        let directory =
            DoctorDirectory::fixed(vec![make_doctor(1, "monday, wednesday", "15 years", 800.0)]);
        let store = RecordingStore::new();
        let notifier = RecordingNotifier::new();
        let matcher = AppointmentMatcher::new(&directory, &store, &notifier);

        let outcome = matcher
            .book(
                Specialty::Hematology,
                &preference(&["2025-01-06"]),
                &make_patient(),
                "user-1",
            )
            .unwrap();

        match outcome {
            BookingOutcome::Confirmed(confirmed) => {
                assert_eq!(confirmed.doctor_name, "Dr. 1");
                assert_eq!(confirmed.hospital, "Hospital 1");
                assert_eq!(confirmed.date.to_string(), "2025-01-06");
            }
            other => panic!("expected confirmation, got {:?}", other),
        }

        let saved = store.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].preferred_day, "2025-01-06");
        assert_eq!(saved[0].status, crate::models::AppointmentStatus::Pending);

        let sent = notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "+919876543210");
        assert!(sent[0].1.contains("Dr. 1"));
    }

    #[test]
    fn test_higher_ranked_doctor_wins_on_the_same_date() {
        // Both work Mondays; doctor 2 has more experience
        let directory = DoctorDirectory::fixed(vec![
            make_doctor(1, "monday", "5 years", 300.0),
            make_doctor(2, "monday", "20 years", 900.0),
        ]);
        let store = RecordingStore::new();
        let notifier = RecordingNotifier::new();
        let matcher = AppointmentMatcher::new(&directory, &store, &notifier);

        let outcome = matcher
            .book(
                Specialty::Hematology,
                &preference(&["2025-01-06"]),
                &make_patient(),
                "user-1",
            )
            .unwrap();

        match outcome {
            BookingOutcome::Confirmed(confirmed) => assert_eq!(confirmed.doctor_name, "Dr. 2"),
            other => panic!("expected confirmation, got {:?}", other),
        }
    }

    #[test]
    fn test_earliest_date_wins_over_rank() {
        // The lower-ranked doctor works the earlier date, so they get it
        let directory = DoctorDirectory::fixed(vec![
            make_doctor(1, "monday", "5 years", 300.0),
            make_doctor(2, "tuesday", "20 years", 900.0),
        ]);
        let store = RecordingStore::new();
        let notifier = RecordingNotifier::new();
        let matcher = AppointmentMatcher::new(&directory, &store, &notifier);

        // Dates given out of order; 2025-01-06 (Monday) sorts first
        let outcome = matcher
            .book(
                Specialty::Hematology,
                &preference(&["2025-01-07", "2025-01-06"]),
                &make_patient(),
                "user-1",
            )
            .unwrap();

        match outcome {
            BookingOutcome::Confirmed(confirmed) => {
                assert_eq!(confirmed.doctor_name, "Dr. 1");
                assert_eq!(confirmed.date.to_string(), "2025-01-06");
            }
            other => panic!("expected confirmation, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_dates_are_skipped() {
        let directory = DoctorDirectory::fixed(vec![make_doctor(1, "monday", "15 years", 800.0)]);
        let store = RecordingStore::new();
        let notifier = RecordingNotifier::new();
        let matcher = AppointmentMatcher::new(&directory, &store, &notifier);

        let outcome = matcher
            .book(
                Specialty::Hematology,
                &preference(&["next tuesday", "2025-01-06"]),
                &make_patient(),
                "user-1",
            )
            .unwrap();

        assert!(outcome.is_confirmed());
    }

    #[test]
    fn test_no_specialist_in_city() {
        let directory = DoctorDirectory::fixed(vec![make_doctor(1, "monday", "15 years", 800.0)]);
        let store = RecordingStore::new();
        let notifier = RecordingNotifier::new();
        let matcher = AppointmentMatcher::new(&directory, &store, &notifier);

        let outcome = matcher
            .book(
                Specialty::Cardiology,
                &preference(&["2025-01-06"]),
                &make_patient(),
                "user-1",
            )
            .unwrap();

        match outcome {
            BookingOutcome::Failed {
                reason, message, ..
            } => {
                assert_eq!(reason, BookingFailure::NoSpecialistInCity);
                assert_eq!(message, "No Cardiology found in Delhi.");
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(store.saved.borrow().is_empty());
    }

    #[test]
    fn test_no_date_available_returns_ranked_alternatives() {
        let directory = DoctorDirectory::fixed(vec![
            make_doctor(1, "tuesday, thursday", "5 years", 300.0),
            make_doctor(2, "tuesday, thursday", "20 years", 900.0),
        ]);
        let store = RecordingStore::new();
        let notifier = RecordingNotifier::new();
        let matcher = AppointmentMatcher::new(&directory, &store, &notifier);

        // 2025-01-06 is a Monday; neither doctor works Mondays
        let outcome = matcher
            .book(
                Specialty::Hematology,
                &preference(&["2025-01-06"]),
                &make_patient(),
                "user-1",
            )
            .unwrap();

        match outcome {
            BookingOutcome::Failed {
                reason,
                message,
                alternatives,
            } => {
                assert_eq!(reason, BookingFailure::NoDateAvailable);
                assert_eq!(
                    message,
                    "No Hematology in Delhi was available on your preferred dates."
                );
                // Alternatives come back in rank order
                assert_eq!(alternatives.len(), 2);
                assert_eq!(alternatives[0].id, 2);
                assert_eq!(alternatives[1].id, 1);
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_save_failure_stops_the_search() {
        let directory = DoctorDirectory::fixed(vec![
            make_doctor(1, "monday", "20 years", 900.0),
            make_doctor(2, "monday", "5 years", 300.0),
        ]);
        let store = FailingStore;
        let notifier = RecordingNotifier::new();
        let matcher = AppointmentMatcher::new(&directory, &store, &notifier);

        let outcome = matcher
            .book(
                Specialty::Hematology,
                &preference(&["2025-01-06"]),
                &make_patient(),
                "user-1",
            )
            .unwrap();

        match outcome {
            BookingOutcome::Failed {
                reason, message, ..
            } => {
                assert_eq!(reason, BookingFailure::SaveFailed);
                assert!(message.contains("failed to save"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
        // No confirmation goes out when nothing was saved
        assert!(notifier.sent.borrow().is_empty());
    }

    #[test]
    fn test_bad_phone_number_does_not_fail_the_booking() {
        let directory = DoctorDirectory::fixed(vec![make_doctor(1, "monday", "15 years", 800.0)]);
        let store = RecordingStore::new();
        let notifier = RecordingNotifier::new();
        let matcher = AppointmentMatcher::new(&directory, &store, &notifier);

        let patient = PatientDetails {
            phone: "98765 43210".into(), // no leading +
            ..make_patient()
        };

        let outcome = matcher
            .book(
                Specialty::Hematology,
                &preference(&["2025-01-06"]),
                &patient,
                "user-1",
            )
            .unwrap();

        assert!(outcome.is_confirmed());
        assert_eq!(store.saved.borrow().len(), 1);
        assert!(notifier.sent.borrow().is_empty());
    }

    #[test]
    fn test_empty_roster() {
        let directory = DoctorDirectory::fixed(vec![]);
        let store = RecordingStore::new();
        let notifier = RecordingNotifier::new();
        let matcher = AppointmentMatcher::new(&directory, &store, &notifier);

        let outcome = matcher
            .book(
                Specialty::Hematology,
                &preference(&["2025-01-06"]),
                &make_patient(),
                "user-1",
            )
            .unwrap();

        match outcome {
            BookingOutcome::Failed { reason, .. } => {
                assert_eq!(reason, BookingFailure::EmptyRoster)
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_weekday_range_descriptor_books_weekdays_only() {
        let directory =
            DoctorDirectory::fixed(vec![make_doctor(1, "monday - friday", "15 years", 800.0)]);
        let store = RecordingStore::new();
        let notifier = RecordingNotifier::new();
        let matcher = AppointmentMatcher::new(&directory, &store, &notifier);

        // 2025-01-04 is a Saturday, 2025-01-08 a Wednesday
        let outcome = matcher
            .book(
                Specialty::Hematology,
                &preference(&["2025-01-04", "2025-01-08"]),
                &make_patient(),
                "user-1",
            )
            .unwrap();

        match outcome {
            BookingOutcome::Confirmed(confirmed) => {
                assert_eq!(confirmed.date.to_string(), "2025-01-08")
            }
            other => panic!("expected confirmation, got {:?}", other),
        }
    }

    #[test]
    fn test_weekday_name() {
        let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(weekday_name(monday), "monday");
        assert_eq!(weekday_name(sunday), "sunday");
    }
}
