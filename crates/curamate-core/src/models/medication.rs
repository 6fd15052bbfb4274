//! Medication reminder models.

use serde::{Deserialize, Serialize};

/// One medication parsed from free-text instructions.
///
/// Validated only by decoding; time and date strings are checked when a
/// calendar is built, so a bad entry costs one reminder, not the batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicationRecord {
    /// Medication name or the user's nickname for it
    pub name: String,
    /// Dosage as stated (e.g., "500mg")
    pub dosage: Option<String>,
    /// Frequency as stated (e.g., "twice daily")
    #[serde(default)]
    pub frequency: String,
    /// Daily reminder times, "HH:MM"
    #[serde(default)]
    pub alert_times: Vec<String>,
    /// Last day of the course, "YYYY-MM-DD"; open-ended when absent
    pub end_date: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_full_record() {
        let json = r#"{
            "name": "Crocin",
            "dosage": "500mg",
            "frequency": "twice daily",
            "alert_times": ["09:00", "21:00"],
            "end_date": "2025-01-10",
            "notes": null
        }"#;

        let record: MedicationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Crocin");
        assert_eq!(record.dosage.as_deref(), Some("500mg"));
        assert_eq!(record.alert_times, vec!["09:00", "21:00"]);
        assert_eq!(record.end_date.as_deref(), Some("2025-01-10"));
    }

    #[test]
    fn test_decodes_sparse_record() {
        // Only the name is required; everything else defaults
        let json = r#"{"name": "Aspirin", "dosage": null, "end_date": null, "notes": null}"#;

        let record: MedicationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Aspirin");
        assert!(record.dosage.is_none());
        assert!(record.frequency.is_empty());
        assert!(record.alert_times.is_empty());
        assert!(record.end_date.is_none());
    }
}
