//! # Adapters
//!
//! Concrete implementations of the outbound ports.

mod clock;

pub use clock::{ManualClock, SystemClock};
