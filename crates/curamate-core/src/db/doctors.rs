//! Doctor roster mirror operations.
//!
//! The roster is read-only from the core's perspective; `replace_roster`
//! exists so the surrounding application can seed or refresh the mirror
//! from the static source.

use rusqlite::params;

use super::{Database, DbResult};
use crate::models::Doctor;

impl Database {
    /// Replace the full roster mirror with the given doctors.
    pub fn replace_roster(&self, doctors: &[Doctor]) -> DbResult<()> {
        self.conn.execute("DELETE FROM doctors", [])?;

        let mut stmt = self.conn.prepare(
            r#"
            INSERT INTO doctors (
                id, name, specialization, city, working_days, experience, fee, hospital
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )?;
        for doc in doctors {
            stmt.execute(params![
                doc.id,
                doc.name,
                doc.specialization,
                doc.city,
                doc.working_days,
                doc.experience,
                doc.fee,
                doc.hospital,
            ])?;
        }
        Ok(())
    }

    /// Load the full roster, wholesale.
    pub fn list_doctors(&self) -> DbResult<Vec<Doctor>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, specialization, city, working_days, experience, fee, hospital
            FROM doctors
            ORDER BY id
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Doctor {
                id: row.get(0)?,
                name: row.get(1)?,
                specialization: row.get(2)?,
                city: row.get(3)?,
                working_days: row.get(4)?,
                experience: row.get(5)?,
                fee: row.get(6)?,
                hospital: row.get(7)?,
            })
        })?;

        let mut doctors = Vec::new();
        for row in rows {
            doctors.push(row?);
        }
        Ok(doctors)
    }
}
