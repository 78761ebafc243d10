//! # Domain Layer
//!
//! Core business logic for the Incident Command Registry: value objects,
//! entities, entry points, and invariant audits.

pub mod entities;
pub mod invariants;
pub mod registry;
pub mod value_objects;
