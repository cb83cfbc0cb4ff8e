//! The disbursement transaction driver.
//!
//! A foreground, cancelable-before-commit process over one payroll
//! record (SINGLE) or a period's PENDING records (BATCH). The actor
//! re-enters their login password, a fixed narration script simulates
//! gateway negotiation, and exactly one commit call flips the targeted
//! records to PAID. An ERROR is terminal for the attempt only: the
//! records stay PENDING and a fresh attempt can start from AUTH.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::{Action, Session};
use crate::config::GatewayConfig;
use crate::error::{CoreError, CoreResult};
use crate::models::{PayrollRecord, PayrollStatus, Period};
use crate::store::Store;
use crate::workflow::payroll;

use super::phase::{Event, Phase};

/// What the transaction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One payroll record.
    Single(Uuid),
    /// Every PENDING record in a period.
    Batch(Period),
}

/// A timestamped narration entry in the transaction log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// When the entry was appended.
    pub at: DateTime<Utc>,
    /// Narration text.
    pub message: String,
}

/// One disbursement attempt. Ephemeral: discarded on completion or
/// cancellation; the payroll records in the store are the only durable
/// outcome.
#[derive(Debug)]
pub struct Transaction {
    mode: Mode,
    phase: Phase,
    log: Vec<LogEntry>,
    gateway: GatewayConfig,
}

impl Transaction {
    /// Opens a transaction in AUTH.
    ///
    /// Requires DisbursePayroll for BATCH or MarkSinglePaid for SINGLE,
    /// and validates the targets: a SINGLE record must exist and be
    /// PENDING, a BATCH period must hold at least one PENDING record.
    pub fn begin<S: Store>(
        store: &S,
        session: &Session,
        mode: Mode,
        gateway: GatewayConfig,
    ) -> CoreResult<Self> {
        match mode {
            Mode::Single(record_id) => {
                session.require(Action::MarkSinglePaid)?;
                let record = store.payroll(record_id)?;
                if record.status == PayrollStatus::Paid {
                    return Err(CoreError::invalid_state(format!(
                        "payroll record {record_id} is already paid"
                    )));
                }
            }
            Mode::Batch(period) => {
                session.require(Action::DisbursePayroll)?;
                let pending = store
                    .payroll_for_period(period)?
                    .into_iter()
                    .filter(|r| r.status == PayrollStatus::Pending)
                    .count();
                if pending == 0 {
                    return Err(CoreError::invalid_state(format!(
                        "no pending payroll records for {period}"
                    )));
                }
            }
        }
        Ok(Self {
            mode,
            phase: Phase::Auth,
            log: Vec::new(),
            gateway,
        })
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The ordered narration log.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    fn narrate(&mut self, message: impl Into<String>) {
        self.log.push(LogEntry {
            at: Utc::now(),
            message: message.into(),
        });
    }

    /// Abandons the transaction. Only possible in AUTH; once CONNECTING
    /// begins the commit call cannot be un-sent. On success the caller
    /// drops the transaction.
    pub fn cancel(&self) -> CoreResult<()> {
        if self.phase.can_cancel() {
            Ok(())
        } else {
            Err(CoreError::invalid_state(format!(
                "cannot cancel a transaction in {:?}",
                self.phase
            )))
        }
    }

    /// Re-authenticates the actor with their login password.
    ///
    /// A mismatch fails with AuthorizationError and leaves the phase in
    /// AUTH, so the actor can retry without restarting the flow. On
    /// success the phase advances to CONNECTING.
    pub fn authorize<S: Store>(
        &mut self,
        store: &S,
        session: &Session,
        password: &str,
    ) -> CoreResult<()> {
        if self.phase != Phase::Auth {
            return Err(CoreError::invalid_state(format!(
                "authorization is not accepted in {:?}",
                self.phase
            )));
        }
        if !store.verify_credential(session.principal.id, password)? {
            warn!(principal = %session.principal.name, "disbursement authorization failed");
            return Err(CoreError::authorization(
                "invalid password, authorization failed",
            ));
        }
        self.phase = self.phase.apply(Event::Authorized)?;
        Ok(())
    }

    /// Runs the transaction from CONNECTING to a terminal phase.
    ///
    /// Narrates the gateway script, then issues exactly one commit call
    /// under the configured timeout. On success returns the refreshed
    /// records from the store (never the locally-constructed ones); on
    /// failure the phase is ERROR, the reason is logged, and the
    /// targeted records stay PENDING.
    pub async fn run<S: Store>(
        &mut self,
        store: &S,
        session: &Session,
    ) -> CoreResult<Vec<PayrollRecord>> {
        if self.phase != Phase::Connecting {
            return Err(CoreError::invalid_state(format!(
                "run is not accepted in {:?}",
                self.phase
            )));
        }

        for line in self.gateway.connect_script.clone() {
            self.narrate(line);
            tokio::time::sleep(self.gateway.connect_delay()).await;
        }

        self.phase = self.phase.apply(Event::Connected)?;
        self.narrate(match self.mode {
            Mode::Batch(_) => "Authenticated. Batch processing initiated...",
            Mode::Single(_) => "Authenticated. Single transfer initiated...",
        });

        // The commit future is dropped if the deadline elapses first, so
        // a preempted settlement never reaches the store.
        let commit = async {
            match self.mode {
                Mode::Batch(period) => payroll::process_batch(store, session, period).await,
                Mode::Single(record_id) => {
                    payroll::mark_paid(store, session, record_id).await.map(|r| vec![r])
                }
            }
        };
        let outcome = match tokio::time::timeout(self.gateway.process_timeout(), commit).await {
            Ok(result) => result,
            Err(_) => Err(CoreError::transport(format!(
                "settlement timed out after {:?}",
                self.gateway.process_timeout()
            ))),
        };

        match outcome {
            Ok(_) => {
                self.phase = self.phase.apply(Event::Committed)?;
                self.narrate("Transaction verified by bank.");
                self.narrate("Disbursement status: COMPLETE");
                info!("disbursement committed");
                tokio::time::sleep(self.gateway.settle_delay()).await;
                // Refresh from the source of truth.
                match self.mode {
                    Mode::Batch(period) => store.payroll_for_period(period),
                    Mode::Single(record_id) => store.payroll(record_id).map(|r| vec![r]),
                }
            }
            Err(err) => {
                self.phase = self.phase.apply(Event::Failed)?;
                self.narrate(format!("ERROR: transaction failed. {err}"));
                warn!(error = %err, "disbursement failed");
                Err(err)
            }
        }
    }
}
