//! # Registry Events
//!
//! Append-only log entries emitted by committed transactions. The runtime
//! harness seals these into its event log; off-chain collaborators mirror
//! them for reporting and search.

use crate::domain::value_objects::{Address, IncidentId, IncidentStatus, PersonnelRole};
use serde::{Deserialize, Serialize};

// =============================================================================
// EVENT NAMES
// =============================================================================

/// Stable event names for external filtering.
pub mod names {
    /// A new incident was reported.
    pub const INCIDENT_REPORTED: &str = "IncidentReported";
    /// Personnel was assigned to an incident.
    pub const PERSONNEL_ASSIGNED: &str = "PersonnelAssigned";
    /// An incident's status changed.
    pub const STATUS_UPDATED: &str = "StatusUpdated";
    /// Personnel was registered (or re-registered).
    pub const PERSONNEL_REGISTERED: &str = "PersonnelRegistered";
    /// The command center role was transferred.
    pub const COMMAND_CENTER_TRANSFERRED: &str = "CommandCenterTransferred";
}

// =============================================================================
// REGISTRY EVENT
// =============================================================================

/// An event emitted by a committed registry transaction.
///
/// Deactivation emits no event; that asymmetry is part of the contract
/// surface and is preserved as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// Emitted by `report_incident`.
    IncidentReported {
        /// The new incident's identity.
        id: IncidentId,
        /// Caller-supplied description.
        description: String,
        /// Caller-supplied location.
        location: String,
    },
    /// Emitted by `assign_personnel`, before the paired `StatusUpdated`.
    PersonnelAssigned {
        /// The target incident.
        incident_id: IncidentId,
        /// The assigned responder.
        personnel: Address,
    },
    /// Emitted whenever an incident's status is written.
    StatusUpdated {
        /// The target incident.
        incident_id: IncidentId,
        /// The status written.
        new_status: IncidentStatus,
    },
    /// Emitted by `register_personnel`, including re-registration.
    PersonnelRegistered {
        /// The registered address.
        personnel: Address,
        /// Display name.
        name: String,
        /// Assigned role.
        role: PersonnelRole,
    },
    /// Emitted by `transfer_command_center`.
    CommandCenterTransferred {
        /// The previous command center.
        old_center: Address,
        /// The new command center.
        new_center: Address,
    },
}

impl RegistryEvent {
    /// The stable event name, for external filtering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::IncidentReported { .. } => names::INCIDENT_REPORTED,
            Self::PersonnelAssigned { .. } => names::PERSONNEL_ASSIGNED,
            Self::StatusUpdated { .. } => names::STATUS_UPDATED,
            Self::PersonnelRegistered { .. } => names::PERSONNEL_REGISTERED,
            Self::CommandCenterTransferred { .. } => names::COMMAND_CENTER_TRANSFERRED,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
