//! Doctor roster loading and filtering.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Doctor;

/// Roster source errors. A missing or malformed roster is reported to the
/// caller, never silently treated as an empty directory.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("doctor roster not found at {0}")]
    NotFound(PathBuf),

    #[error("failed to read doctor roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode doctor roster: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Where the roster comes from.
enum RosterSource {
    /// JSON file, re-read on every load
    File(PathBuf),
    /// Preloaded roster (tests, or rows pulled from the record store)
    Fixed(Vec<Doctor>),
}

/// Read-only access to the doctor roster.
///
/// File-backed directories re-read the source on every [`load`] call;
/// caching, if wanted, belongs to the caller.
///
/// [`load`]: DoctorDirectory::load
pub struct DoctorDirectory {
    source: RosterSource,
}

impl DoctorDirectory {
    /// Directory backed by a roster JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        Self {
            source: RosterSource::File(path.as_ref().to_path_buf()),
        }
    }

    /// Directory over an already-loaded roster.
    pub fn fixed(doctors: Vec<Doctor>) -> Self {
        Self {
            source: RosterSource::Fixed(doctors),
        }
    }

    /// Load the full roster.
    pub fn load(&self) -> DirectoryResult<Vec<Doctor>> {
        match &self.source {
            RosterSource::File(path) => {
                if !path.exists() {
                    return Err(DirectoryError::NotFound(path.clone()));
                }
                let raw = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&raw)?)
            }
            RosterSource::Fixed(doctors) => Ok(doctors.clone()),
        }
    }
}

/// Doctors matching the specialty and city, both compared with exact
/// case-insensitive equality. No fuzzy matching.
pub fn filter_doctors(doctors: &[Doctor], specialty: &str, city: &str) -> Vec<Doctor> {
    doctors
        .iter()
        .filter(|doc| doc.matches(specialty, city))
        .cloned()
        .collect()
}
