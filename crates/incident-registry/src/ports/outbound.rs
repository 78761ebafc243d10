//! # Outbound Ports
//!
//! Dependencies the registry's runtime needs from its environment.

/// Ledger timestamp source.
///
/// The registry itself never reads a clock; the execution harness stamps
/// each transaction with `now()` before dispatch so transitions stay
/// deterministic and replayable.
pub trait Clock: Send + Sync {
    /// Current ledger time, seconds since the Unix epoch.
    fn now(&self) -> u64;
}
