//! Workforce Core
//!
//! This crate implements the cross-entity monthly lifecycle of a
//! workforce management system: leave approval propagates into
//! attendance, a finalized attendance period unlocks payroll generation,
//! and salary disbursement runs as a guarded, re-authorized, multi-phase
//! transaction over one or many payroll records.

#![warn(missing_docs)]

pub mod api;
pub mod auth;
pub mod config;
pub mod disbursement;
pub mod error;
pub mod models;
pub mod store;
pub mod workflow;
