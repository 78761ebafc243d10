//! # Value Objects
//!
//! Immutable domain primitives for the Incident Command Registry.
//! These types are defined by their value, not identity.
//!
//! `PersonnelRole` and `IncidentStatus` persist as compact integers with a
//! fixed canonical ordering matching declaration order; external consumers
//! (events, queries) depend on the numeric values being stable.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ADDRESS (20 bytes)
// =============================================================================

/// A 20-byte ledger account address.
///
/// The zero address doubles as the "no value" sentinel: it marks both
/// "no assigned personnel" and fails every non-zero-address guard.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address (0x0000...0000), the reserved sentinel.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 20 {
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[18..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 20] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

// =============================================================================
// INCIDENT IDENTITY
// =============================================================================

/// A 1-based monotonically assigned incident identity.
///
/// `0` is never a valid identity; the personnel-side field
/// `current_incident` uses `0` as its "unassigned" sentinel.
pub type IncidentId = u64;

// =============================================================================
// PERSONNEL ROLE
// =============================================================================

/// Personnel role, informational only: no entry point restricts behavior
/// by role.
///
/// Persisted integer encoding (canonical, matches declaration order):
///
/// | Variant | Value |
/// |---------|-------|
/// | `IncidentCommander` | 0 |
/// | `OperationsChief` | 1 |
/// | `SafetyOfficer` | 2 |
/// | `FirstResponder` | 3 |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PersonnelRole {
    /// Overall command of an incident scene. The zero-value default, as
    /// read from an unregistered mapping entry.
    #[default]
    IncidentCommander = 0,
    /// Manages tactical operations.
    OperationsChief = 1,
    /// Monitors scene safety.
    SafetyOfficer = 2,
    /// Front-line responder.
    FirstResponder = 3,
}

impl PersonnelRole {
    /// Canonical integer encoding.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for PersonnelRole {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::IncidentCommander),
            1 => Ok(Self::OperationsChief),
            2 => Ok(Self::SafetyOfficer),
            3 => Ok(Self::FirstResponder),
            other => Err(other),
        }
    }
}

// =============================================================================
// INCIDENT STATUS
// =============================================================================

/// Incident lifecycle label.
///
/// No transition graph is enforced between the five values: any status may
/// be written over any other via `update_incident_status`, including
/// backward moves. The only structurally distinguished values are
/// `Reported` (set only at creation) and `Resolved`/`Closed` (trigger side
/// effects on write).
///
/// Persisted integer encoding (canonical, matches declaration order):
///
/// | Variant | Value |
/// |---------|-------|
/// | `Reported` | 0 |
/// | `Assigned` | 1 |
/// | `InProgress` | 2 |
/// | `Resolved` | 3 |
/// | `Closed` | 4 |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum IncidentStatus {
    /// Initial status, set only by `report_incident`.
    #[default]
    Reported = 0,
    /// Set as a side effect of `assign_personnel`.
    Assigned = 1,
    /// Reachable only via `update_incident_status`; no dedicated entry point.
    InProgress = 2,
    /// Stamps `resolved_time` and frees the assignee on write.
    Resolved = 3,
    /// Same write side effects as `Resolved`.
    Closed = 4,
}

impl IncidentStatus {
    /// Canonical integer encoding.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// True for the two values whose write triggers resolution side effects
    /// (`resolved_time` stamp, assignee release). Not a transition
    /// restriction.
    #[must_use]
    pub const fn is_terminal_write(self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }
}

impl TryFrom<u8> for IncidentStatus {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Reported),
            1 => Ok(Self::Assigned),
            2 => Ok(Self::InProgress),
            3 => Ok(Self::Resolved),
            4 => Ok(Self::Closed),
            other => Err(other),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
