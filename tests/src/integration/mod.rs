//! # Integration Tests
//!
//! Cross-crate flows exercising the registry through the ledger harness.

pub mod harness;
pub mod lifecycle;

// =============================================================================
// SHARED FIXTURES (only compiled during tests)
// =============================================================================

#[cfg(test)]
pub(crate) mod fixtures {
    use incident_ledger::prelude::*;
    use std::sync::Arc;

    /// Genesis ledger time for deterministic assertions.
    pub const T0: u64 = 1_700_000_000;

    /// Installs the log subscriber once per test binary; honors `RUST_LOG`.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// A deployed ledger with a command center and two registered
    /// responders, A and B.
    pub struct TestNet {
        pub ledger: Ledger,
        pub clock: Arc<ManualClock>,
        pub center: Keypair,
        pub center_nonce: u64,
        pub a: Keypair,
        pub a_nonce: u64,
        pub b: Keypair,
        pub b_nonce: u64,
    }

    impl TestNet {
        pub fn deploy() -> Self {
            init_tracing();
            let center = Keypair::from_seed([0x01; 32]);
            let clock = Arc::new(ManualClock::new(T0));
            let ledger = Ledger::new(LedgerConfig::new(center.address()), clock.clone());
            let mut net = Self {
                ledger,
                clock,
                center,
                center_nonce: 0,
                a: Keypair::from_seed([0xaa; 32]),
                a_nonce: 0,
                b: Keypair::from_seed([0xbb; 32]),
                b_nonce: 0,
            };
            let a_addr = net.a.address();
            let b_addr = net.b.address();
            net.register(a_addr, "Responder A", PersonnelRole::FirstResponder);
            net.register(b_addr, "Responder B", PersonnelRole::SafetyOfficer);
            net
        }

        /// Registers personnel as the command center, asserting commit.
        pub fn register(&mut self, address: Address, name: &str, role: PersonnelRole) {
            let tx = self
                .center
                .sign(
                    self.center_nonce,
                    RegistryCall::RegisterPersonnel {
                        address,
                        name: name.into(),
                        role,
                    },
                )
                .expect("sign");
            self.center_nonce += 1;
            let receipt = self.ledger.apply(&tx).expect("include");
            assert!(receipt.committed, "register reverted: {:?}", receipt.reason);
        }

        /// Submits a call signed by the command center; returns the receipt.
        pub fn as_center(&mut self, call: RegistryCall) -> TransactionReceipt {
            let tx = self.center.sign(self.center_nonce, call).expect("sign");
            self.center_nonce += 1;
            self.ledger.apply(&tx).expect("include")
        }

        /// Submits a call signed by responder A; returns the receipt.
        pub fn as_a(&mut self, call: RegistryCall) -> TransactionReceipt {
            let tx = self.a.sign(self.a_nonce, call).expect("sign");
            self.a_nonce += 1;
            self.ledger.apply(&tx).expect("include")
        }

        /// Submits a call signed by responder B; returns the receipt.
        pub fn as_b(&mut self, call: RegistryCall) -> TransactionReceipt {
            let tx = self.b.sign(self.b_nonce, call).expect("sign");
            self.b_nonce += 1;
            self.ledger.apply(&tx).expect("include")
        }

        /// Reports an incident as A, asserting commit, returning the id.
        pub fn report_as_a(&mut self, description: &str, location: &str) -> u64 {
            let receipt = self.as_a(RegistryCall::ReportIncident {
                description: description.into(),
                location: location.into(),
            });
            assert!(receipt.committed, "report reverted: {:?}", receipt.reason);
            receipt.output.expect("incident id")
        }
    }
}
