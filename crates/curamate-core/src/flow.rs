//! Application flow state machine.
//!
//! The UI drives a single state value through explicit transitions instead
//! of mutating ambient session flags. Undefined (state, event) pairs leave
//! the state unchanged, so the reducer is total.

use serde::{Deserialize, Serialize};

/// Where the user is in the analyze-then-book flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppState {
    /// Nothing submitted yet
    Idle,
    /// Report uploaded, waiting for the risk assessment
    AwaitingAnalysis,
    /// Assessment shown; booking is offered only for high risk
    ShowingRiskResult { high_risk: bool },
    /// Booking form open, waiting for preference text
    AwaitingBookingInput,
    /// Appointment request saved
    BookingConfirmed,
}

/// Transition triggers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppEvent {
    ReportSubmitted,
    AnalysisCompleted { high_risk: bool },
    AnalysisFailed,
    BookingStarted,
    BookingSucceeded,
    /// Booking failed or was abandoned; back to the result view
    BookingAbandoned,
    Reset,
}

/// Pure reducer: current state + event → next state.
pub fn transition(state: &AppState, event: &AppEvent) -> AppState {
    match (state, event) {
        (_, AppEvent::Reset) => AppState::Idle,

        (AppState::Idle, AppEvent::ReportSubmitted) => AppState::AwaitingAnalysis,

        (AppState::AwaitingAnalysis, AppEvent::AnalysisCompleted { high_risk }) => {
            AppState::ShowingRiskResult {
                high_risk: *high_risk,
            }
        }
        (AppState::AwaitingAnalysis, AppEvent::AnalysisFailed) => AppState::Idle,

        // Booking is only reachable from a high-risk result
        (AppState::ShowingRiskResult { high_risk: true }, AppEvent::BookingStarted) => {
            AppState::AwaitingBookingInput
        }
        (AppState::ShowingRiskResult { .. }, AppEvent::ReportSubmitted) => {
            AppState::AwaitingAnalysis
        }

        (AppState::AwaitingBookingInput, AppEvent::BookingSucceeded) => AppState::BookingConfirmed,
        (AppState::AwaitingBookingInput, AppEvent::BookingAbandoned) => {
            AppState::ShowingRiskResult { high_risk: true }
        }

        // Everything else is a no-op
        (state, _) => *state,
    }
}
