//! Capability model and session context.
//!
//! This module contains the pure capability predicate consulted by every
//! mutating workflow, the explicit session context passed to every
//! operation, and the password helpers used at login and again by the
//! disbursement re-authorization step.

mod capability;
mod password;
mod session;

pub use capability::{Action, permits};
pub use password::{hash_password, verify_password};
pub use session::Session;
