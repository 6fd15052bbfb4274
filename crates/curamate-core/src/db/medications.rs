//! Medication persistence operations.

use rusqlite::params;
use serde::{Deserialize, Serialize};

use super::{Database, DbResult};
use crate::models::MedicationRecord;

/// A medication row as stored, tagged with its owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredMedication {
    pub id: String,
    pub user_id: String,
    pub medication: MedicationRecord,
    pub created_at: String,
}

impl Database {
    /// Insert one parsed medication for a user. Returns the new row id.
    pub fn insert_medication(
        &self,
        user_id: &str,
        medication: &MedicationRecord,
    ) -> DbResult<String> {
        let id = uuid::Uuid::new_v4().to_string();
        let alert_times_json = serde_json::to_string(&medication.alert_times)?;
        let created_at = chrono::Utc::now().to_rfc3339();

        self.conn.execute(
            r#"
            INSERT INTO medications (
                id, user_id, name, dosage, frequency, alert_times, end_date, notes, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                id,
                user_id,
                medication.name,
                medication.dosage,
                medication.frequency,
                alert_times_json,
                medication.end_date,
                medication.notes,
                created_at,
            ],
        )?;
        Ok(id)
    }

    /// All medications for a user, most recently saved first.
    pub fn list_medications_for_user(&self, user_id: &str) -> DbResult<Vec<StoredMedication>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, user_id, name, dosage, frequency, alert_times, end_date, notes, created_at
            FROM medications
            WHERE user_id = ?
            ORDER BY created_at DESC
            "#,
        )?;

        let rows = stmt.query_map([user_id], |row| {
            Ok(MedicationRow {
                id: row.get(0)?,
                user_id: row.get(1)?,
                name: row.get(2)?,
                dosage: row.get(3)?,
                frequency: row.get(4)?,
                alert_times: row.get(5)?,
                end_date: row.get(6)?,
                notes: row.get(7)?,
                created_at: row.get(8)?,
            })
        })?;

        let mut medications = Vec::new();
        for row in rows {
            medications.push(row?.try_into()?);
        }
        Ok(medications)
    }
}

/// Intermediate row struct for database mapping.
struct MedicationRow {
    id: String,
    user_id: String,
    name: String,
    dosage: Option<String>,
    frequency: String,
    alert_times: String,
    end_date: Option<String>,
    notes: Option<String>,
    created_at: String,
}

impl TryFrom<MedicationRow> for StoredMedication {
    type Error = super::DbError;

    fn try_from(row: MedicationRow) -> Result<Self, Self::Error> {
        Ok(StoredMedication {
            id: row.id,
            user_id: row.user_id,
            medication: MedicationRecord {
                name: row.name,
                dosage: row.dosage,
                frequency: row.frequency,
                alert_times: serde_json::from_str(&row.alert_times)?,
                end_date: row.end_date,
                notes: row.notes,
            },
            created_at: row.created_at,
        })
    }
}
