//! # Core Domain Entities
//!
//! The registry's persisted records and the state-owning root object.
//! All four top-level collections live as fields of [`RegistryState`];
//! there are no ambient globals.

use crate::domain::value_objects::{Address, IncidentId, IncidentStatus, PersonnelRole};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::collections::BTreeMap;

// =============================================================================
// PERSONNEL
// =============================================================================

/// A registered responder, keyed by wallet address.
///
/// Created or overwritten only by `register_personnel`; never removed, only
/// deactivated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personnel {
    /// Identity; always equals the map key.
    pub wallet_address: Address,
    /// Display name, caller-supplied, unvalidated.
    pub name: String,
    /// Informational role; no entry point restricts behavior by it.
    pub role: PersonnelRole,
    /// False means ineligible for new assignments.
    pub is_active: bool,
    /// 0 when unassigned, otherwise the incident currently assigned.
    /// At most one active assignment per person.
    pub current_incident: IncidentId,
}

impl Personnel {
    /// The zero-value record a ledger mapping yields for an unwritten key.
    #[must_use]
    pub fn empty(wallet_address: Address) -> Self {
        Self {
            wallet_address,
            name: String::new(),
            role: PersonnelRole::default(),
            is_active: false,
            current_incident: 0,
        }
    }
}

// =============================================================================
// INCIDENT
// =============================================================================

/// A reported incident, keyed by its 1-based identity.
///
/// Created only by `report_incident`; never deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    /// Equals the map key.
    pub id: IncidentId,
    /// Free-form description.
    pub description: String,
    /// Free-form location.
    pub location: String,
    /// Lifecycle label; no enforced transition graph.
    pub status: IncidentStatus,
    /// Zero-address sentinel, or the assigned responder. Remains set after
    /// resolution until explicitly cleared by deactivation.
    pub assigned_personnel: Address,
    /// Ledger timestamp at creation; immutable thereafter.
    pub reported_time: u64,
    /// 0 until the status is first written to Resolved or Closed; repeated
    /// terminal writes overwrite it.
    pub resolved_time: u64,
    /// The authorized caller who reported the incident; immutable. Redacted
    /// from the public read interface.
    pub reported_by: Address,
}

// =============================================================================
// REGISTRY STATE
// =============================================================================

/// The registry's entire persisted state.
///
/// Ordered maps keep iteration deterministic for audits and state dumps.
/// All mutation happens inside the guarded entry points in
/// `domain/registry.rs`.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryState {
    /// The single privileged administrator address.
    pub(crate) command_center: Address,
    /// Monotonic source of incident identities; starts at 0, never
    /// decremented.
    pub(crate) incident_counter: u64,
    /// Incident records; entries are never removed, only mutated.
    pub(crate) incidents: BTreeMap<IncidentId, Incident>,
    /// Personnel records; upserted by registration, never removed.
    /// Serialized as a pair sequence: `Address` keys are byte arrays,
    /// which JSON maps cannot key.
    #[serde_as(as = "Vec<(_, _)>")]
    pub(crate) personnel: BTreeMap<Address, Personnel>,
    /// The authorization set. Grows via registration and command-center
    /// transfer; never explicitly shrinks.
    #[serde_as(as = "Vec<(_, _)>")]
    pub(crate) authorized: BTreeMap<Address, bool>,
}

impl RegistryState {
    /// Deploys a fresh registry with `command_center` as administrator.
    ///
    /// The genesis command center receives the same authorization grant a
    /// transferred-in successor would.
    #[must_use]
    pub fn new(command_center: Address) -> Self {
        let mut authorized = BTreeMap::new();
        authorized.insert(command_center, true);
        Self {
            command_center,
            incident_counter: 0,
            incidents: BTreeMap::new(),
            personnel: BTreeMap::new(),
            authorized,
        }
    }

    /// The current command center address.
    #[must_use]
    pub fn command_center(&self) -> Address {
        self.command_center
    }

    /// True if `address` is present with `true` in the authorization set.
    #[must_use]
    pub fn is_authorized(&self, address: Address) -> bool {
        self.authorized.get(&address).copied().unwrap_or(false)
    }
}

// =============================================================================
// TESTS
// =============================================================================
