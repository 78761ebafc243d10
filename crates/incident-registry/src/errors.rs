//! # Error Types
//!
//! Every guard failure aborts the whole call with a distinct, descriptive
//! reason so external tooling can disambiguate failure causes
//! programmatically. Variants group into three classes via [`ErrorKind`].

use crate::domain::value_objects::{Address, IncidentId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// ERROR KIND
// =============================================================================

/// The three rejection classes of the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Caller identity fails the entry point's caller constraint.
    Authorization,
    /// A supplied argument is structurally invalid.
    Validation,
    /// The target record's current state forbids the operation.
    StateConflict,
}

// =============================================================================
// REGISTRY ERRORS
// =============================================================================

/// Rejection reasons for registry entry points, one variant per guard.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryError {
    // -- Authorization ------------------------------------------------------
    /// Caller is not the command center.
    #[error("caller is not the command center")]
    NotCommandCenter,

    /// Caller is not in the authorized personnel set.
    #[error("caller is not authorized personnel")]
    NotAuthorized,

    /// Caller is neither the command center nor the incident's assignee.
    #[error("caller is neither the command center nor the assigned personnel")]
    NotAssigneeOrCommandCenter,

    // -- Validation ---------------------------------------------------------
    /// A zero address was supplied where a non-zero address is required.
    #[error("zero address supplied where non-zero required")]
    ZeroAddress,

    /// Incident identity outside `1..=incident_counter`.
    #[error("invalid incident id: {id} (valid range 1..={max})")]
    InvalidIncidentId {
        /// The rejected identity.
        id: IncidentId,
        /// The current incident counter.
        max: u64,
    },

    /// New command center equals the current one.
    #[error("new command center equals the current command center")]
    SameCommandCenter,

    // -- State conflict -----------------------------------------------------
    /// Assignment target is not in the authorized set.
    #[error("personnel {0} is not authorized")]
    PersonnelNotAuthorized(Address),

    /// Assignment target is deactivated.
    #[error("personnel {0} is not active")]
    PersonnelInactive(Address),

    /// Assignment target already holds an active assignment.
    #[error("personnel already assigned to incident {current}")]
    PersonnelAlreadyAssigned {
        /// The incident currently held by the target.
        current: IncidentId,
    },
}

impl RegistryError {
    /// The rejection class this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotCommandCenter | Self::NotAuthorized | Self::NotAssigneeOrCommandCenter => {
                ErrorKind::Authorization
            }
            Self::ZeroAddress | Self::InvalidIncidentId { .. } | Self::SameCommandCenter => {
                ErrorKind::Validation
            }
            Self::PersonnelNotAuthorized(_)
            | Self::PersonnelInactive(_)
            | Self::PersonnelAlreadyAssigned { .. } => ErrorKind::StateConflict,
        }
    }

    /// True if this is an authorization failure.
    #[must_use]
    pub const fn is_authorization(&self) -> bool {
        matches!(self.kind(), ErrorKind::Authorization)
    }
}

// =============================================================================
// TESTS
// =============================================================================
