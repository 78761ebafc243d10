//! # Incident Ledger - Replicated-Ledger Execution Harness
//!
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! Executes [`incident_registry`] transitions the way a replicated ledger
//! would: signed transactions, authenticated caller identity, total
//! ordering, atomic commit-or-revert application, and an append-only sealed
//! event log. Consensus and networking live outside this crate; the harness
//! models the post-ordering execution half only.
//!
//! ## Execution Model
//!
//! | Property | Mechanism |
//! |----------|-----------|
//! | Caller authentication | ed25519 signature over canonical tx bytes |
//! | Identity | Keccak-256 of the verifying key, last 20 bytes |
//! | Per-submitter ordering | strict per-sender nonce sequence |
//! | Replay protection | consumed nonces never validate again |
//! | Serializable execution | one writer at a time through the service lock |
//! | Atomicity | registry guards precede mutation; reverts leave no trace |
//!
//! ## Inclusion vs. Revert
//!
//! A transaction with a bad version, signature, or nonce is never included:
//! `apply` returns `Err` and nothing advances. An included transaction that
//! fails a registry guard reverts: it consumes its nonce and yields a
//! committed=false receipt carrying the distinct rejection reason, with no
//! state change and no events.
//!
//! ## Usage Example
//!
//! ```
//! use incident_ledger::prelude::*;
//! use std::sync::Arc;
//!
//! let center_keys = Keypair::from_seed([1u8; 32]);
//! let config = LedgerConfig::new(center_keys.address());
//! let mut ledger = Ledger::new(config, Arc::new(ManualClock::new(1_700_000_000)));
//!
//! let responder_keys = Keypair::from_seed([2u8; 32]);
//! let tx = center_keys
//!     .sign(0, RegistryCall::RegisterPersonnel {
//!         address: responder_keys.address(),
//!         name: "A. Doe".into(),
//!         role: PersonnelRole::FirstResponder,
//!     })
//!     .unwrap();
//! let receipt = ledger.apply(&tx).unwrap();
//! assert!(receipt.committed);
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod envelope;
pub mod errors;
pub mod ledger;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Envelope
    pub use crate::envelope::{Keypair, RegistryCall, SignedTransaction};

    // Ledger
    pub use crate::ledger::{Ledger, LedgerConfig, SealedEvent, TransactionReceipt};

    // Service
    pub use crate::service::{LedgerService, ServiceStats};

    // Errors
    pub use crate::errors::LedgerError;

    // Re-exported registry surface
    pub use incident_registry::prelude::{
        Address, ErrorKind, IncidentQueryApi, IncidentStatus, ManualClock, PersonnelRole,
        RegistryError, RegistryEvent, SystemClock,
    };
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
