//! # Domain Invariants
//!
//! Structural audits over a [`RegistryState`]. The entry points enforce
//! these at transition time; the checks here let tests and embedders verify
//! that an arbitrary call sequence left the state well-formed.
//!
//! The audit tolerates the two documented one-sided states the contract can
//! produce: a resolved or re-registered incident keeping its historical
//! `assigned_personnel`, with the person's `current_incident` already 0.

use crate::domain::entities::RegistryState;
use crate::domain::value_objects::{Address, IncidentId};

// =============================================================================
// VIOLATIONS
// =============================================================================

/// A detected invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The command center is not in the authorization set.
    CommandCenterNotAuthorized {
        /// The offending command center address.
        center: Address,
    },
    /// Incident ids are not dense over `1..=incident_counter`.
    SparseIncidentIds {
        /// Number of stored incidents.
        stored: u64,
        /// The counter value.
        counter: u64,
    },
    /// An incident record's `id` field disagrees with its map key.
    IncidentKeyMismatch {
        /// The map key.
        key: IncidentId,
        /// The record's id field.
        id: IncidentId,
    },
    /// A personnel record's `wallet_address` disagrees with its map key.
    PersonnelKeyMismatch {
        /// The map key.
        key: Address,
        /// The record's wallet_address field.
        wallet: Address,
    },
    /// A person's `current_incident` points at an incident that does not
    /// point back.
    DanglingAssignment {
        /// The person holding the stale pointer.
        personnel: Address,
        /// The incident they claim to hold.
        incident: IncidentId,
    },
}

/// Outcome of a full audit.
#[derive(Clone, Debug, Default)]
pub struct InvariantCheckResult {
    /// All violations found, empty when the state is well-formed.
    pub violations: Vec<InvariantViolation>,
}

impl InvariantCheckResult {
    /// True if no violations were found.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

// =============================================================================
// CHECKS
// =============================================================================

/// INVARIANT-1: the single command center is always authorized.
#[must_use]
pub fn check_command_center_authorized(state: &RegistryState) -> bool {
    state.is_authorized(state.command_center())
}

/// INVARIANT-2: incident ids are dense over `1..=incident_counter` and each
/// record carries its own key.
#[must_use]
pub fn check_incident_identity(state: &RegistryState) -> bool {
    state.incidents.len() as u64 == state.incident_counter
        && state.incidents.iter().all(|(key, inc)| *key == inc.id)
}

/// INVARIANT-3: every non-zero `current_incident` points at a valid incident
/// whose `assigned_personnel` points back. (The reverse direction is NOT
/// required: incidents may keep historical assignees whose pointer was
/// already cleared.)
#[must_use]
pub fn check_assignment_consistency(state: &RegistryState) -> bool {
    state.personnel.values().all(|p| {
        p.current_incident == 0
            || state
                .incidents
                .get(&p.current_incident)
                .is_some_and(|inc| inc.assigned_personnel == p.wallet_address)
    })
}

/// Runs every audit and collects violations.
#[must_use]
pub fn check_all_invariants(state: &RegistryState) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_command_center_authorized(state) {
        violations.push(InvariantViolation::CommandCenterNotAuthorized {
            center: state.command_center(),
        });
    }

    if state.incidents.len() as u64 != state.incident_counter {
        violations.push(InvariantViolation::SparseIncidentIds {
            stored: state.incidents.len() as u64,
            counter: state.incident_counter,
        });
    }
    for (key, incident) in &state.incidents {
        if *key != incident.id {
            violations.push(InvariantViolation::IncidentKeyMismatch {
                key: *key,
                id: incident.id,
            });
        }
    }

    for (key, person) in &state.personnel {
        if *key != person.wallet_address {
            violations.push(InvariantViolation::PersonnelKeyMismatch {
                key: *key,
                wallet: person.wallet_address,
            });
        }
        if person.current_incident != 0
            && !state
                .incidents
                .get(&person.current_incident)
                .is_some_and(|inc| inc.assigned_personnel == person.wallet_address)
        {
            violations.push(InvariantViolation::DanglingAssignment {
                personnel: person.wallet_address,
                incident: person.current_incident,
            });
        }
    }

    InvariantCheckResult { violations }
}

// =============================================================================
// TESTS
// =============================================================================
