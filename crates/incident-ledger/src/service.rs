//! # Ledger Service
//!
//! Async submission front for the ledger. All writes funnel through one
//! `RwLock` writer at a time, giving every transaction the serializable,
//! no-interleaving execution the replicated ledger guarantees; queries share
//! the read side. Per-submitter order is enforced below this layer by the
//! nonce sequence.

use crate::envelope::SignedTransaction;
use crate::errors::LedgerError;
use crate::ledger::{Ledger, SealedEvent, TransactionReceipt};
use async_trait::async_trait;
use incident_registry::domain::registry::{IncidentView, PersonnelView};
use incident_registry::errors::RegistryError;
use incident_registry::ports::inbound::IncidentQueryApi;
use incident_registry::prelude::{Address, IncidentId};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};

// =============================================================================
// STATS
// =============================================================================

/// Running counters for the submission service.
#[derive(Debug, Default, Clone)]
pub struct ServiceStats {
    /// Transactions submitted.
    pub submitted: u64,
    /// Transactions included and committed.
    pub committed: u64,
    /// Transactions included but reverted by a registry guard.
    pub reverted: u64,
    /// Transactions rejected at the envelope (never included).
    pub rejected: u64,
}

// =============================================================================
// SERVICE
// =============================================================================

/// Shared handle to a running ledger.
///
/// Clones share the same ledger; the write lock is the global transaction
/// lock of the execution model.
#[derive(Clone)]
pub struct LedgerService {
    ledger: Arc<RwLock<Ledger>>,
    stats: Arc<RwLock<ServiceStats>>,
}

impl LedgerService {
    /// Wraps a deployed ledger for shared async access.
    #[must_use]
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
            stats: Arc::new(RwLock::new(ServiceStats::default())),
        }
    }

    /// Submits one signed transaction and waits for its receipt.
    ///
    /// Transactions are applied strictly one at a time; submitters racing
    /// this method observe some total order, and each submitter's own
    /// transactions apply in nonce order.
    #[instrument(skip(self, tx), fields(tx_id = %tx.tx_id))]
    pub async fn submit(&self, tx: SignedTransaction) -> Result<TransactionReceipt, LedgerError> {
        self.stats.write().await.submitted += 1;

        let result = self.ledger.write().await.apply(&tx);

        let mut stats = self.stats.write().await;
        match &result {
            Ok(receipt) if receipt.committed => stats.committed += 1,
            Ok(_) => stats.reverted += 1,
            Err(err) => {
                stats.rejected += 1;
                info!(error = %err, "transaction rejected at envelope");
            }
        }
        result
    }

    /// Current service counters.
    pub async fn stats(&self) -> ServiceStats {
        self.stats.read().await.clone()
    }

    /// Log entries from `sequence` onward.
    pub async fn events_since(&self, sequence: u64) -> Vec<SealedEvent> {
        self.ledger.read().await.events_since(sequence).to_vec()
    }

    /// Next expected nonce for a sender, for wallet-style submitters.
    pub async fn next_nonce(&self, sender: Address) -> u64 {
        self.ledger.read().await.next_nonce(sender)
    }
}

// =============================================================================
// QUERY API
// =============================================================================

#[async_trait]
impl IncidentQueryApi for LedgerService {
    async fn get_incident(&self, id: IncidentId) -> Result<IncidentView, RegistryError> {
        self.ledger.read().await.get_incident(id)
    }

    async fn get_personnel_info(&self, address: Address) -> PersonnelView {
        self.ledger.read().await.get_personnel_info(address)
    }

    async fn get_total_incidents(&self) -> u64 {
        self.ledger.read().await.get_total_incidents()
    }
}

// =============================================================================
// TESTS
// =============================================================================
