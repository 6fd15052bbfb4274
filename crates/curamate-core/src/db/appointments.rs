//! Appointment persistence operations.

use rusqlite::params;

use super::{Database, DbError, DbResult};
use crate::models::{AppointmentRecord, AppointmentStatus};
use crate::scheduling::{AppointmentStore, PersistenceError};

impl Database {
    /// Insert a new appointment row.
    pub fn insert_appointment(&self, record: &AppointmentRecord) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO appointments (
                id, user_id, doctor_id, doctor_name, hospital_name,
                patient_name, patient_email, patient_phone,
                preferred_city, preferred_day, status, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
            params![
                record.id,
                record.user_id,
                record.doctor_id,
                record.doctor_name,
                record.hospital_name,
                record.patient_name,
                record.patient_email,
                record.patient_phone,
                record.preferred_city,
                record.preferred_day,
                record.status.as_str(),
                record.created_at,
            ],
        )?;
        Ok(())
    }

    /// All appointments for a user, most recent preferred day first.
    pub fn list_appointments_for_user(&self, user_id: &str) -> DbResult<Vec<AppointmentRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, user_id, doctor_id, doctor_name, hospital_name,
                   patient_name, patient_email, patient_phone,
                   preferred_city, preferred_day, status, created_at
            FROM appointments
            WHERE user_id = ?
            ORDER BY preferred_day DESC
            "#,
        )?;

        let rows = stmt.query_map([user_id], |row| {
            Ok(AppointmentRow {
                id: row.get(0)?,
                user_id: row.get(1)?,
                doctor_id: row.get(2)?,
                doctor_name: row.get(3)?,
                hospital_name: row.get(4)?,
                patient_name: row.get(5)?,
                patient_email: row.get(6)?,
                patient_phone: row.get(7)?,
                preferred_city: row.get(8)?,
                preferred_day: row.get(9)?,
                status: row.get(10)?,
                created_at: row.get(11)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?.try_into()?);
        }
        Ok(records)
    }
}

impl AppointmentStore for Database {
    fn save_appointment(&self, record: &AppointmentRecord) -> Result<(), PersistenceError> {
        self.insert_appointment(record)
            .map_err(|e| PersistenceError(e.to_string()))
    }
}

/// Intermediate row struct for database mapping.
struct AppointmentRow {
    id: String,
    user_id: String,
    doctor_id: i64,
    doctor_name: String,
    hospital_name: String,
    patient_name: String,
    patient_email: String,
    patient_phone: String,
    preferred_city: String,
    preferred_day: String,
    status: String,
    created_at: String,
}

impl TryFrom<AppointmentRow> for AppointmentRecord {
    type Error = DbError;

    fn try_from(row: AppointmentRow) -> Result<Self, Self::Error> {
        let status = match row.status.as_str() {
            "Pending" => AppointmentStatus::Pending,
            "Confirmed" => AppointmentStatus::Confirmed,
            "Cancelled" => AppointmentStatus::Cancelled,
            other => return Err(DbError::Invalid(format!("appointment status {:?}", other))),
        };

        Ok(AppointmentRecord {
            id: row.id,
            user_id: row.user_id,
            doctor_id: row.doctor_id,
            doctor_name: row.doctor_name,
            hospital_name: row.hospital_name,
            patient_name: row.patient_name,
            patient_email: row.patient_email,
            patient_phone: row.patient_phone,
            preferred_city: row.preferred_city,
            preferred_day: row.preferred_day,
            status,
            created_at: row.created_at,
        })
    }
}
