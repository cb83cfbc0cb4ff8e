//! Disbursement phase state machine.
//!
//! The phase sequence is an explicit finite-state machine with a pure
//! transition function, independent of any presentation layer, so the
//! sequence can be tested headlessly.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The phase of a disbursement transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Awaiting credential re-entry; the only cancelable phase.
    Auth,
    /// Simulated gateway negotiation; narration only, no state mutation.
    Connecting,
    /// The single commit call is in flight.
    Processing,
    /// Terminal; the commit landed.
    Success,
    /// Terminal for this attempt; targeted records stay PENDING.
    Error,
}

/// An event driving the phase machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The credential check passed.
    Authorized,
    /// Gateway negotiation narration finished.
    Connected,
    /// The commit call succeeded.
    Committed,
    /// The commit call (or gateway) failed or timed out.
    Failed,
}

impl Phase {
    /// Pure transition function: `(phase, event) -> phase`.
    ///
    /// Any pair outside the defined sequence fails with
    /// InvalidStateError, which is what forbids re-entry (a second AUTH
    /// cannot start while the transaction is CONNECTING or PROCESSING).
    pub fn apply(self, event: Event) -> CoreResult<Phase> {
        match (self, event) {
            (Phase::Auth, Event::Authorized) => Ok(Phase::Connecting),
            (Phase::Connecting, Event::Connected) => Ok(Phase::Processing),
            (Phase::Connecting, Event::Failed) => Ok(Phase::Error),
            (Phase::Processing, Event::Committed) => Ok(Phase::Success),
            (Phase::Processing, Event::Failed) => Ok(Phase::Error),
            (phase, event) => Err(CoreError::invalid_state(format!(
                "no transition from {phase:?} on {event:?}"
            ))),
        }
    }

    /// Returns true while cancellation is still possible. Once CONNECTING
    /// begins the flow runs to SUCCESS or ERROR.
    pub fn can_cancel(self) -> bool {
        self == Phase::Auth
    }

    /// Returns true once the attempt has reached a terminal phase.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Success | Phase::Error)
    }
}
