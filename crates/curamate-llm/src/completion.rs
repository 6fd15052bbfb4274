//! Completion-service seam.

use thiserror::Error;

/// Completion-service errors.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("completion service unavailable: {0}")]
    Unavailable(String),

    #[error("completion request failed: {0}")]
    Request(String),
}

pub type CompletionResult<T> = Result<T, CompletionError>;

/// An opaque text-completion capability, implemented by the surrounding
/// application (remote API, local model, ...).
///
/// Calls block; retry and timeout policy belong to the caller. A failed
/// call is terminal for the current parse.
pub trait CompletionService {
    /// Complete `data` under `system_prompt`, returning the raw text.
    fn complete(&self, data: &str, system_prompt: &str) -> CompletionResult<String>;
}

/// Canned completion for testing decode paths without a live model.
pub struct CannedCompletion {
    content: String,
}

impl CannedCompletion {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl CompletionService for CannedCompletion {
    fn complete(&self, _data: &str, _system_prompt: &str) -> CompletionResult<String> {
        Ok(self.content.clone())
    }
}

/// Always-failing completion for testing error propagation.
pub struct FailingCompletion;

impl CompletionService for FailingCompletion {
    fn complete(&self, _data: &str, _system_prompt: &str) -> CompletionResult<String> {
        Err(CompletionError::Unavailable("model not loaded".into()))
    }
}
