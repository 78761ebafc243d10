//! # Signed Transaction Envelope
//!
//! The wire form of a registry invocation. Caller identity is derived
//! solely from the envelope's verifying key; payloads carry no redundant
//! identity fields. The registry treats the derived address as untrusted
//! input and applies its own authorization guards.
//!
//! ## Canonical Signable Bytes
//!
//! The ed25519 signature covers the bincode encoding of
//! `(version, sender_key, nonce, tx_id, call)`. Any field tamper
//! invalidates the signature.

use crate::errors::LedgerError;
use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use incident_registry::prelude::{Address, IncidentId, IncidentStatus, PersonnelRole};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use sha3::{Digest, Keccak256};
use uuid::Uuid;

// =============================================================================
// REGISTRY CALLS
// =============================================================================

/// One mutating registry entry point with its arguments.
///
/// Read-only queries are not transactions and have no call variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryCall {
    /// `register_personnel(address, name, role)` - command-center only.
    RegisterPersonnel {
        /// Address to register.
        address: Address,
        /// Display name.
        name: String,
        /// Role label.
        role: PersonnelRole,
    },
    /// `report_incident(description, location)` - authorized only.
    ReportIncident {
        /// Free-form description.
        description: String,
        /// Free-form location.
        location: String,
    },
    /// `assign_personnel(incident_id, personnel)` - command-center only.
    AssignPersonnel {
        /// Target incident.
        incident_id: IncidentId,
        /// Responder to assign.
        personnel: Address,
    },
    /// `update_incident_status(incident_id, new_status)` - authorized, and
    /// command center or assignee.
    UpdateIncidentStatus {
        /// Target incident.
        incident_id: IncidentId,
        /// Status to write.
        new_status: IncidentStatus,
    },
    /// `deactivate_personnel(personnel)` - command-center only.
    DeactivatePersonnel {
        /// Address to deactivate.
        personnel: Address,
    },
    /// `transfer_command_center(new_center)` - command-center only.
    TransferCommandCenter {
        /// Successor administrator.
        new_center: Address,
    },
}

// =============================================================================
// SIGNED TRANSACTION
// =============================================================================

/// A signed, versioned registry invocation.
#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// Envelope version for forward compatibility.
    pub version: u16,

    /// The sender's ed25519 verifying key. The SOLE source of caller
    /// identity; the caller address is derived from it after verification.
    pub sender_key: [u8; 32],

    /// Per-sender sequence number, starting at 0. Enforces submission order
    /// and prevents replay.
    pub nonce: u64,

    /// Unique transaction id for receipts and log correlation.
    pub tx_id: Uuid,

    /// The registry entry point being invoked.
    pub call: RegistryCall,

    /// Ed25519 signature over the canonical signable bytes.
    #[serde_as(as = "serde_with::Bytes")]
    pub signature: [u8; 64],
}

/// The portion of the envelope covered by the signature.
#[derive(Serialize)]
struct SignablePayload<'a> {
    version: u16,
    sender_key: &'a [u8; 32],
    nonce: u64,
    tx_id: &'a Uuid,
    call: &'a RegistryCall,
}

impl SignedTransaction {
    /// Current envelope version.
    pub const CURRENT_VERSION: u16 = 1;

    /// Canonical bytes the signature covers.
    pub fn signable_bytes(&self) -> Result<Vec<u8>, LedgerError> {
        bincode::serialize(&SignablePayload {
            version: self.version,
            sender_key: &self.sender_key,
            nonce: self.nonce,
            tx_id: &self.tx_id,
            call: &self.call,
        })
        .map_err(|e| LedgerError::Serialization(e.to_string()))
    }

    /// Verifies the signature and returns the authenticated caller address.
    pub fn verify(&self) -> Result<Address, LedgerError> {
        let key = VerifyingKey::from_bytes(&self.sender_key)
            .map_err(|_| LedgerError::InvalidSenderKey)?;
        let signature = ed25519_dalek::Signature::from_bytes(&self.signature);
        let message = self.signable_bytes()?;
        key.verify(&message, &signature)
            .map_err(|_| LedgerError::InvalidSignature)?;
        Ok(derive_address(&self.sender_key))
    }
}

// =============================================================================
// ADDRESS DERIVATION
// =============================================================================

/// Derives the 20-byte ledger address for a verifying key:
/// Keccak-256 of the key bytes, last 20 bytes.
#[must_use]
pub fn derive_address(key_bytes: &[u8; 32]) -> Address {
    let digest = Keccak256::digest(key_bytes);
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&digest[12..]);
    Address::new(addr)
}

// =============================================================================
// KEYPAIR
// =============================================================================

/// Ed25519 signing identity for transaction submitters.
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generates a random keypair.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut rand::thread_rng()),
        }
    }

    /// Builds a keypair from a 32-byte seed (deterministic; test fixtures).
    #[must_use]
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    /// The verifying key bytes carried in envelopes.
    #[must_use]
    pub fn verifying_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// The ledger address this keypair acts as.
    #[must_use]
    pub fn address(&self) -> Address {
        derive_address(&self.verifying_key_bytes())
    }

    /// Signs `call` with sequence number `nonce`, producing a submittable
    /// transaction with a fresh transaction id.
    pub fn sign(&self, nonce: u64, call: RegistryCall) -> Result<SignedTransaction, LedgerError> {
        let mut tx = SignedTransaction {
            version: SignedTransaction::CURRENT_VERSION,
            sender_key: self.verifying_key_bytes(),
            nonce,
            tx_id: Uuid::new_v4(),
            call,
            signature: [0u8; 64],
        };
        let message = tx.signable_bytes()?;
        tx.signature = self.signing_key.sign(&message).to_bytes();
        Ok(tx)
    }
}

// =============================================================================
// TESTS
// =============================================================================
