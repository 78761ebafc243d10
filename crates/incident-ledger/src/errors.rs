//! # Error Types
//!
//! Envelope-level failures: transactions the consensus layer would never
//! include. Registry-level rejections are NOT errors here; they surface as
//! reverted receipts (see `ledger::TransactionReceipt`).

use thiserror::Error;

/// Errors that prevent a transaction from entering the ledger at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Envelope version not understood by this ledger.
    #[error("unsupported transaction version: {received} (supported: {supported})")]
    UnsupportedVersion {
        /// The version carried by the transaction.
        received: u16,
        /// The version this ledger accepts.
        supported: u16,
    },

    /// Sender key bytes are not a valid ed25519 verifying key.
    #[error("invalid sender key")]
    InvalidSenderKey,

    /// Signature does not verify over the canonical transaction bytes.
    #[error("invalid transaction signature")]
    InvalidSignature,

    /// Nonce out of sequence for this sender (replay or gap).
    #[error("nonce mismatch: expected {expected}, received {received}")]
    NonceMismatch {
        /// The sender's next expected nonce.
        expected: u64,
        /// The nonce the transaction carried.
        received: u64,
    },

    /// Canonical encoding of the signable payload failed.
    #[error("transaction serialization failed: {0}")]
    Serialization(String),
}

// =============================================================================
// TESTS
// =============================================================================
