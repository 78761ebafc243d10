//! # Incident-Chain Test Suite
//!
//! Unified test crate covering the full stack: registry state machine,
//! signed-transaction envelope, ledger application, and the async
//! submission service.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── lifecycle.rs      # End-to-end incident lifecycle scenarios
//!     ├── authorization.rs  # Guard and authorization-set behavior
//!     └── harness.rs        # Envelope, ordering, and async service flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ic-tests
//! cargo test -p ic-tests integration::lifecycle::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
