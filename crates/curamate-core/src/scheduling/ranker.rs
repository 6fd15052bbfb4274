//! Doctor ranking.

use std::cmp::Ordering;

use crate::models::Doctor;

/// Rank doctors by experience (descending), then consultation fee
/// (ascending). The sort is stable, so doctors with identical keys keep
/// their directory order.
pub fn rank_doctors(mut doctors: Vec<Doctor>) -> Vec<Doctor> {
    doctors.sort_by(|a, b| {
        b.experience_years()
            .cmp(&a.experience_years())
            .then_with(|| a.fee.partial_cmp(&b.fee).unwrap_or(Ordering::Equal))
    });
    doctors
}
