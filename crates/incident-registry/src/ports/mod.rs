//! # Ports
//!
//! Trait boundaries between the registry core and its collaborators.

pub mod inbound;
pub mod outbound;
