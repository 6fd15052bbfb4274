//! Best-effort booking notifications.

use thiserror::Error;

/// Notification errors. These are logged by the caller and never fail a
/// booking that has already been saved.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("notification channel is not configured")]
    NotConfigured,

    #[error("invalid phone number, must be E.164 (+country code...): {0}")]
    InvalidNumber(String),

    #[error("failed to send message: {0}")]
    Send(String),
}

/// Outbound message delivery, implemented by the surrounding application.
pub trait NotificationSender {
    /// Send `body` to an E.164 phone number. Best-effort.
    fn send_message(&self, to: &str, body: &str) -> Result<(), NotifyError>;
}

/// Normalize a user-entered phone number for delivery: strip spaces,
/// hyphens, and parentheses, then require a leading `+`.
pub fn normalize_phone(phone: &str) -> Result<String, NotifyError> {
    let cleaned: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();

    if !cleaned.starts_with('+') {
        return Err(NotifyError::InvalidNumber(phone.to_string()));
    }
    Ok(cleaned)
}

/// Confirmation message sent after an appointment request is saved.
pub fn confirmation_message(patient_name: &str, doctor_name: &str, date: &str) -> String {
    format!(
        "Hi {}! Your appointment request with {} for {} has been received. \
         The clinic will contact you shortly to confirm.\n- CuraMate",
        patient_name, doctor_name, date
    )
}
