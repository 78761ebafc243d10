//! # Incident Lifecycle Scenarios
//!
//! End-to-end flows through the signed-transaction harness: registration,
//! reporting, assignment, resolution, and deactivation, including the
//! documented one-sided states the contract can produce.

#[cfg(test)]
use crate::integration::fixtures::{TestNet, T0};
#[cfg(test)]
use incident_ledger::prelude::*;
#[cfg(test)]
use incident_registry::prelude::check_all_invariants;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_makes_personnel_authorized_active_unassigned() {
        // Scenario: command center registers A as FIRST_RESPONDER.
        let net = TestNet::deploy();
        let a = net.a.address();

        assert!(net.ledger.state().is_authorized(a));
        let view = net.ledger.get_personnel_info(a);
        assert_eq!(view.name, "Responder A");
        assert_eq!(view.role, PersonnelRole::FirstResponder);
        assert!(view.is_active);
        assert_eq!(view.current_incident, 0);
    }

    #[test]
    fn reported_incident_starts_unassigned() {
        // Scenario: A reports ("fire", "5th ave") and gets id 1.
        let mut net = TestNet::deploy();
        let id = net.report_as_a("fire", "5th ave");
        assert_eq!(id, 1);

        let view = net.ledger.get_incident(1).expect("incident");
        assert_eq!(view.status, IncidentStatus::Reported);
        assert_eq!(view.assigned_personnel, Address::ZERO);
        assert_eq!(view.location, "5th ave");
        assert_eq!(view.reported_time, T0);
        assert_eq!(view.resolved_time, 0);
    }

    #[test]
    fn incident_count_is_monotonic_and_dense() {
        let mut net = TestNet::deploy();
        assert_eq!(net.ledger.get_total_incidents(), 0);
        for expected in 1..=4 {
            let id = net.report_as_a("d", "l");
            assert_eq!(id, expected);
            assert_eq!(net.ledger.get_total_incidents(), expected);
        }
    }

    #[test]
    fn assignment_links_both_sides_and_blocks_double_assignment() {
        // Scenario: assign(1, A) succeeds; assigning A anywhere else fails
        // with a state conflict while A is still held.
        let mut net = TestNet::deploy();
        let a = net.a.address();
        let first = net.report_as_a("fire", "5th ave");
        let second = net.report_as_a("smoke", "main st");

        let receipt = net.as_center(RegistryCall::AssignPersonnel {
            incident_id: first,
            personnel: a,
        });
        assert!(receipt.committed);
        assert_eq!(
            net.ledger.get_incident(first).unwrap().status,
            IncidentStatus::Assigned
        );
        assert_eq!(net.ledger.get_incident(first).unwrap().assigned_personnel, a);
        assert_eq!(net.ledger.get_personnel_info(a).current_incident, first);

        for target in [first, second] {
            let receipt = net.as_center(RegistryCall::AssignPersonnel {
                incident_id: target,
                personnel: a,
            });
            assert!(!receipt.committed);
            assert_eq!(receipt.kind, Some(ErrorKind::StateConflict));
        }
    }

    #[test]
    fn resolution_frees_personnel_but_keeps_assignee_on_record() {
        // Scenario: A resolves incident 1; A is freed, the incident still
        // names A as assignee.
        let mut net = TestNet::deploy();
        let a = net.a.address();
        let id = net.report_as_a("fire", "5th ave");
        net.as_center(RegistryCall::AssignPersonnel {
            incident_id: id,
            personnel: a,
        });

        net.clock.set(T0 + 60);
        let receipt = net.as_a(RegistryCall::UpdateIncidentStatus {
            incident_id: id,
            new_status: IncidentStatus::Resolved,
        });
        assert!(receipt.committed);

        let view = net.ledger.get_incident(id).unwrap();
        assert_eq!(view.status, IncidentStatus::Resolved);
        assert_eq!(view.resolved_time, T0 + 60);
        assert_eq!(view.assigned_personnel, a);
        assert_eq!(net.ledger.get_personnel_info(a).current_incident, 0);

        // Freed personnel can be assigned again.
        let next = net.report_as_a("gas leak", "elm st");
        let receipt = net.as_center(RegistryCall::AssignPersonnel {
            incident_id: next,
            personnel: a,
        });
        assert!(receipt.committed);
    }

    #[test]
    fn deactivation_clears_both_sides_and_keeps_authorization() {
        // Scenario: deactivating A mid-assignment frees the incident too,
        // and A can still report afterwards.
        let mut net = TestNet::deploy();
        let a = net.a.address();
        let id = net.report_as_a("fire", "5th ave");
        net.as_center(RegistryCall::AssignPersonnel {
            incident_id: id,
            personnel: a,
        });

        let receipt = net.as_center(RegistryCall::DeactivatePersonnel { personnel: a });
        assert!(receipt.committed);
        // No event sealed for deactivation.
        assert!(receipt.events.is_empty());

        let view = net.ledger.get_personnel_info(a);
        assert!(!view.is_active);
        assert_eq!(view.current_incident, 0);
        assert_eq!(
            net.ledger.get_incident(id).unwrap().assigned_personnel,
            Address::ZERO
        );

        // Authorization survives deactivation.
        assert!(net.ledger.state().is_authorized(a));
        let id = net.report_as_a("aftershock", "5th ave");
        assert_eq!(id, 2);

        // But an inactive responder cannot be assigned.
        let receipt = net.as_center(RegistryCall::AssignPersonnel {
            incident_id: id,
            personnel: a,
        });
        assert!(!receipt.committed);
        assert_eq!(receipt.kind, Some(ErrorKind::StateConflict));
    }

    #[test]
    fn reregistration_overwrites_and_leaves_stale_incident_pointer() {
        // Idempotent upsert plus the documented one-sided reset.
        let mut net = TestNet::deploy();
        let a = net.a.address();
        let id = net.report_as_a("fire", "5th ave");
        net.as_center(RegistryCall::AssignPersonnel {
            incident_id: id,
            personnel: a,
        });

        net.register(a, "Renamed A", PersonnelRole::OperationsChief);

        let view = net.ledger.get_personnel_info(a);
        assert_eq!(view.name, "Renamed A");
        assert_eq!(view.role, PersonnelRole::OperationsChief);
        assert!(view.is_active);
        assert_eq!(view.current_incident, 0);
        // The stale incident still names A.
        assert_eq!(net.ledger.get_incident(id).unwrap().assigned_personnel, a);
        // The auditor tolerates exactly this shape.
        assert!(check_all_invariants(net.ledger.state()).is_ok());
    }

    #[test]
    fn backward_status_moves_are_permitted() {
        let mut net = TestNet::deploy();
        let id = net.report_as_a("fire", "5th ave");

        for status in [
            IncidentStatus::Closed,
            IncidentStatus::Reported,
            IncidentStatus::InProgress,
            IncidentStatus::Resolved,
            IncidentStatus::Assigned,
        ] {
            let receipt = net.as_center(RegistryCall::UpdateIncidentStatus {
                incident_id: id,
                new_status: status,
            });
            assert!(receipt.committed, "write of {status:?} reverted");
            assert_eq!(net.ledger.get_incident(id).unwrap().status, status);
        }
    }

    #[test]
    fn event_log_records_lifecycle_in_order() {
        let mut net = TestNet::deploy();
        let a = net.a.address();
        let id = net.report_as_a("fire", "5th ave");
        net.as_center(RegistryCall::AssignPersonnel {
            incident_id: id,
            personnel: a,
        });
        net.as_a(RegistryCall::UpdateIncidentStatus {
            incident_id: id,
            new_status: IncidentStatus::Resolved,
        });

        let names: Vec<&str> = net.ledger.events().iter().map(|e| e.event.name()).collect();
        assert_eq!(
            names,
            vec![
                "PersonnelRegistered", // A
                "PersonnelRegistered", // B
                "IncidentReported",
                "PersonnelAssigned", // before the paired StatusUpdated
                "StatusUpdated",
                "StatusUpdated",
            ]
        );
        for (i, sealed) in net.ledger.events().iter().enumerate() {
            assert_eq!(sealed.sequence, i as u64);
        }
    }
}
