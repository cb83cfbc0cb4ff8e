//! The guarded, multi-phase salary disbursement transaction.
//!
//! AUTH → CONNECTING → PROCESSING → {SUCCESS, ERROR}. The phase machine
//! is a pure transition function; [`Transaction`] is the async driver
//! that re-authenticates the actor, narrates the simulated gateway, and
//! issues the single commit call.

mod phase;
mod transaction;

pub use phase::{Event, Phase};
pub use transaction::{LogEntry, Mode, Transaction};
