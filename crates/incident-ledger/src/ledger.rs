//! # Ledger Core
//!
//! Owns the registry state, the sealed append-only event log, and the
//! per-sender nonce table. `apply` is the single write path: each call is
//! one atomic transaction that either commits (state updated, events
//! sealed) or reverts (no state change, no events, receipt carries the
//! rejection reason).

use crate::envelope::{RegistryCall, SignedTransaction};
use crate::errors::LedgerError;
use incident_registry::domain::entities::RegistryState;
use incident_registry::domain::registry::{IncidentView, PersonnelView};
use incident_registry::errors::ErrorKind;
use incident_registry::events::RegistryEvent;
use incident_registry::ports::outbound::Clock;
use incident_registry::prelude::{Address, IncidentId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

// =============================================================================
// CONFIG
// =============================================================================

/// Deployment-time ledger configuration.
#[derive(Clone, Debug)]
pub struct LedgerConfig {
    /// The genesis command center (the "deployer" of the registry).
    pub genesis_command_center: Address,
    /// Envelope version this ledger accepts.
    pub supported_version: u16,
}

impl LedgerConfig {
    /// Configuration with the current envelope version.
    #[must_use]
    pub fn new(genesis_command_center: Address) -> Self {
        Self {
            genesis_command_center,
            supported_version: SignedTransaction::CURRENT_VERSION,
        }
    }
}

// =============================================================================
// SEALED EVENTS & RECEIPTS
// =============================================================================

/// An event sealed into the append-only log by a committed transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedEvent {
    /// Position in the log; dense from 0.
    pub sequence: u64,
    /// The transaction that emitted this event.
    pub tx_id: Uuid,
    /// Ledger time of the emitting transaction.
    pub timestamp: u64,
    /// The registry event.
    pub event: RegistryEvent,
}

/// Outcome of an included transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    /// The transaction this receipt answers.
    pub tx_id: Uuid,
    /// True if the transaction committed; false if it reverted.
    pub committed: bool,
    /// Entry-point output: the new incident id for `ReportIncident`.
    pub output: Option<u64>,
    /// Rejection reason string for reverted transactions.
    pub reason: Option<String>,
    /// Rejection class for reverted transactions.
    pub kind: Option<ErrorKind>,
    /// The range of log sequence numbers this transaction sealed
    /// (empty when reverted).
    pub events: Range<u64>,
}

// =============================================================================
// LEDGER
// =============================================================================

/// The replicated ledger's local execution state.
pub struct Ledger {
    config: LedgerConfig,
    state: RegistryState,
    log: Vec<SealedEvent>,
    nonces: BTreeMap<Address, u64>,
    clock: Arc<dyn Clock>,
}

impl Ledger {
    /// Deploys a fresh registry under `config`, stamping time from `clock`.
    #[must_use]
    pub fn new(config: LedgerConfig, clock: Arc<dyn Clock>) -> Self {
        let state = RegistryState::new(config.genesis_command_center);
        Self {
            config,
            state,
            log: Vec::new(),
            nonces: BTreeMap::new(),
            clock,
        }
    }

    /// Applies one signed transaction atomically.
    ///
    /// Envelope-level failures (version, signature, nonce) return `Err`:
    /// the transaction is never included and consumes nothing. An included
    /// transaction always consumes its nonce; if the registry rejects it,
    /// the receipt reports the revert and the state and log are untouched.
    pub fn apply(&mut self, tx: &SignedTransaction) -> Result<TransactionReceipt, LedgerError> {
        if tx.version != self.config.supported_version {
            return Err(LedgerError::UnsupportedVersion {
                received: tx.version,
                supported: self.config.supported_version,
            });
        }
        let sender = tx.verify()?;

        let expected = self.nonces.get(&sender).copied().unwrap_or(0);
        if tx.nonce != expected {
            return Err(LedgerError::NonceMismatch {
                expected,
                received: tx.nonce,
            });
        }
        // Included from here on: reverted or not, the sequence advances.
        self.nonces.insert(sender, expected + 1);

        let now = self.clock.now();
        let result = self.dispatch(sender, now, &tx.call);

        match result {
            Ok((output, events)) => {
                let first = self.log.len() as u64;
                for (i, event) in events.into_iter().enumerate() {
                    self.log.push(SealedEvent {
                        sequence: first + i as u64,
                        tx_id: tx.tx_id,
                        timestamp: now,
                        event,
                    });
                }
                let sealed = self.log.len() as u64;
                info!(tx_id = %tx.tx_id, sender = %sender, events = sealed - first, "transaction committed");
                Ok(TransactionReceipt {
                    tx_id: tx.tx_id,
                    committed: true,
                    output,
                    reason: None,
                    kind: None,
                    events: first..sealed,
                })
            }
            Err(reject) => {
                let end = self.log.len() as u64;
                warn!(tx_id = %tx.tx_id, sender = %sender, reason = %reject, "transaction reverted");
                Ok(TransactionReceipt {
                    tx_id: tx.tx_id,
                    committed: false,
                    output: None,
                    reason: Some(reject.to_string()),
                    kind: Some(reject.kind()),
                    events: end..end,
                })
            }
        }
    }

    #[allow(clippy::type_complexity)]
    fn dispatch(
        &mut self,
        sender: Address,
        now: u64,
        call: &RegistryCall,
    ) -> Result<(Option<u64>, Vec<RegistryEvent>), incident_registry::errors::RegistryError> {
        match call {
            RegistryCall::RegisterPersonnel {
                address,
                name,
                role,
            } => self
                .state
                .register_personnel(sender, *address, name.clone(), *role)
                .map(|events| (None, events)),
            RegistryCall::ReportIncident {
                description,
                location,
            } => self
                .state
                .report_incident(sender, now, description.clone(), location.clone())
                .map(|(id, events)| (Some(id), events)),
            RegistryCall::AssignPersonnel {
                incident_id,
                personnel,
            } => self
                .state
                .assign_personnel(sender, *incident_id, *personnel)
                .map(|events| (None, events)),
            RegistryCall::UpdateIncidentStatus {
                incident_id,
                new_status,
            } => self
                .state
                .update_incident_status(sender, now, *incident_id, *new_status)
                .map(|events| (None, events)),
            RegistryCall::DeactivatePersonnel { personnel } => self
                .state
                .deactivate_personnel(sender, *personnel)
                .map(|events| (None, events)),
            RegistryCall::TransferCommandCenter { new_center } => self
                .state
                .transfer_command_center(sender, *new_center)
                .map(|events| (None, events)),
        }
    }

    // -- read-only surface ---------------------------------------------------

    /// Registry query: one incident's public fields.
    pub fn get_incident(
        &self,
        id: IncidentId,
    ) -> Result<IncidentView, incident_registry::errors::RegistryError> {
        self.state.get_incident(id)
    }

    /// Registry query: a personnel record's public fields.
    #[must_use]
    pub fn get_personnel_info(&self, address: Address) -> PersonnelView {
        self.state.get_personnel_info(address)
    }

    /// Registry query: total incidents ever reported.
    #[must_use]
    pub fn get_total_incidents(&self) -> u64 {
        self.state.get_total_incidents()
    }

    /// The full sealed event log.
    #[must_use]
    pub fn events(&self) -> &[SealedEvent] {
        &self.log
    }

    /// Log entries from `sequence` onward, for collaborators mirroring the
    /// log incrementally.
    #[must_use]
    pub fn events_since(&self, sequence: u64) -> &[SealedEvent] {
        let start = usize::try_from(sequence).unwrap_or(usize::MAX);
        self.log.get(start.min(self.log.len())..).unwrap_or(&[])
    }

    /// Next expected nonce for a sender.
    #[must_use]
    pub fn next_nonce(&self, sender: Address) -> u64 {
        self.nonces.get(&sender).copied().unwrap_or(0)
    }

    /// Read access to the registry state, for audits.
    #[must_use]
    pub fn state(&self) -> &RegistryState {
        &self.state
    }
}

// =============================================================================
// TESTS
// =============================================================================
