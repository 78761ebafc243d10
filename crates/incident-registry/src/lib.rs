//! # Incident Command Registry - Permissioned Lifecycle State Machine
//!
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! Tracks personnel and incidents through a lifecycle, enforcing role-based
//! authorization, single-assignment invariants, and auditable state
//! transitions. Every entry point is a pure transition of
//! `(current state, caller, ledger timestamp, arguments)` to either
//! `(new state, emitted events)` or `(unchanged state, rejection reason)`.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Single command center | `domain/registry.rs` - `transfer_command_center()` |
//! | INVARIANT-2 | Monotonic incident identity | `domain/registry.rs` - `report_incident()` |
//! | INVARIANT-3 | At-most-one active assignment | `domain/registry.rs` - `assign_personnel()` |
//! | INVARIANT-4 | No state change on rejection | every entry point: guards precede mutation |
//!
//! ## Authorization Model
//!
//! | Guard | Meaning |
//! |-------|---------|
//! | Command-center-only | caller equals `command_center` exactly |
//! | Authorized-only | caller present with `true` in the authorization set |
//! | Valid-incident | supplied id within `1..=incident_counter` |
//!
//! ## Usage Example
//!
//! ```
//! use incident_registry::prelude::*;
//!
//! let center = Address::new([0x11; 20]);
//! let responder = Address::new([0x22; 20]);
//! let mut state = RegistryState::new(center);
//!
//! state
//!     .register_personnel(center, responder, "A. Doe".into(), PersonnelRole::FirstResponder)
//!     .unwrap();
//! let (id, _events) = state
//!     .report_incident(responder, 101, "fire".into(), "5th ave".into())
//!     .unwrap();
//! assert_eq!(id, 1);
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{Incident, Personnel, RegistryState};

    // Value objects
    pub use crate::domain::value_objects::{Address, IncidentId, IncidentStatus, PersonnelRole};

    // Query views
    pub use crate::domain::registry::{IncidentView, PersonnelView};

    // Invariants
    pub use crate::domain::invariants::{
        check_all_invariants, InvariantCheckResult, InvariantViolation,
    };

    // Ports
    pub use crate::ports::inbound::IncidentQueryApi;
    pub use crate::ports::outbound::Clock;

    // Adapters
    pub use crate::adapters::{ManualClock, SystemClock};

    // Events
    pub use crate::events::RegistryEvent;

    // Errors
    pub use crate::errors::{ErrorKind, RegistryError};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
