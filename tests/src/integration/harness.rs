//! # Harness Flows
//!
//! Envelope authentication, per-submitter ordering, replay protection, and
//! the async submission service under concurrent submitters.

#[cfg(test)]
use incident_ledger::prelude::*;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
mod tests {
    use super::*;

    fn deploy_service() -> (LedgerService, Keypair) {
        crate::integration::fixtures::init_tracing();
        let center = Keypair::from_seed([0x01; 32]);
        let ledger = Ledger::new(
            LedgerConfig::new(center.address()),
            Arc::new(ManualClock::new(1_700_000_000)),
        );
        (LedgerService::new(ledger), center)
    }

    async fn register(service: &LedgerService, center: &Keypair, nonce: u64, who: &Keypair) {
        let tx = center
            .sign(
                nonce,
                RegistryCall::RegisterPersonnel {
                    address: who.address(),
                    name: "R".into(),
                    role: PersonnelRole::FirstResponder,
                },
            )
            .unwrap();
        assert!(service.submit(tx).await.unwrap().committed);
    }

    #[tokio::test]
    async fn submitters_see_sequential_nonces() {
        let (service, center) = deploy_service();
        let responder = Keypair::from_seed([0x02; 32]);
        register(&service, &center, 0, &responder).await;

        for n in 0..3 {
            assert_eq!(service.next_nonce(responder.address()).await, n);
            let tx = responder
                .sign(
                    n,
                    RegistryCall::ReportIncident {
                        description: "d".into(),
                        location: "l".into(),
                    },
                )
                .unwrap();
            let receipt = service.submit(tx).await.unwrap();
            assert_eq!(receipt.output, Some(n + 1));
        }
    }

    #[tokio::test]
    async fn replayed_transaction_is_rejected_not_reverted() {
        let (service, center) = deploy_service();
        let responder = Keypair::from_seed([0x02; 32]);
        register(&service, &center, 0, &responder).await;

        let tx = responder
            .sign(
                0,
                RegistryCall::ReportIncident {
                    description: "d".into(),
                    location: "l".into(),
                },
            )
            .unwrap();
        assert!(service.submit(tx.clone()).await.unwrap().committed);

        // Byte-identical resubmission: never included.
        let err = service.submit(tx).await.unwrap_err();
        assert_eq!(
            err,
            LedgerError::NonceMismatch {
                expected: 1,
                received: 0
            }
        );
        assert_eq!(service.get_total_incidents().await, 1);

        let stats = service.stats().await;
        assert_eq!(stats.committed, 2); // register + report
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.reverted, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_submitters_serialize_cleanly() {
        let (service, center) = deploy_service();
        let responders: Vec<Keypair> = (0..4u8)
            .map(|i| Keypair::from_seed([0x10 + i; 32]))
            .collect();
        for (i, r) in responders.iter().enumerate() {
            register(&service, &center, i as u64, r).await;
        }

        let mut handles = Vec::new();
        for r in responders {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                let mut ids = Vec::new();
                for n in 0..5u64 {
                    let tx = r
                        .sign(
                            n,
                            RegistryCall::ReportIncident {
                                description: format!("incident {n}"),
                                location: "somewhere".into(),
                            },
                        )
                        .unwrap();
                    let receipt = service.submit(tx).await.unwrap();
                    assert!(receipt.committed);
                    ids.push(receipt.output.unwrap());
                }
                ids
            }));
        }

        let mut all_ids = Vec::new();
        for handle in handles {
            let ids = handle.await.unwrap();
            // Each submitter's own ids arrive in increasing order.
            assert!(ids.windows(2).all(|w| w[0] < w[1]));
            all_ids.extend(ids);
        }

        // Interleaved or not, ids are dense 1..=20 with no duplicates.
        all_ids.sort_unstable();
        assert_eq!(all_ids, (1..=20).collect::<Vec<u64>>());
        assert_eq!(service.get_total_incidents().await, 20);
    }

    #[tokio::test]
    async fn query_api_trait_serves_collaborators() {
        // The web backend sees the registry only through the query port.
        let (service, center) = deploy_service();
        let responder = Keypair::from_seed([0x02; 32]);
        register(&service, &center, 0, &responder).await;
        let tx = responder
            .sign(
                0,
                RegistryCall::ReportIncident {
                    description: "fire".into(),
                    location: "5th ave".into(),
                },
            )
            .unwrap();
        service.submit(tx).await.unwrap();

        let api: &dyn IncidentQueryApi = &service;
        assert_eq!(api.get_total_incidents().await, 1);
        let view = api.get_incident(1).await.unwrap();
        assert_eq!(view.description, "fire");
        let info = api.get_personnel_info(responder.address()).await;
        assert!(info.is_active);
    }

    #[tokio::test]
    async fn event_log_supports_incremental_mirroring() {
        let (service, center) = deploy_service();
        let responder = Keypair::from_seed([0x02; 32]);
        register(&service, &center, 0, &responder).await;

        let mut cursor = 0u64;
        let batch = service.events_since(cursor).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].event.name(), "PersonnelRegistered");
        cursor += batch.len() as u64;

        let tx = responder
            .sign(
                0,
                RegistryCall::ReportIncident {
                    description: "d".into(),
                    location: "l".into(),
                },
            )
            .unwrap();
        service.submit(tx).await.unwrap();

        let batch = service.events_since(cursor).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].event.name(), "IncidentReported");
        assert_eq!(batch[0].sequence, cursor);
    }
}
