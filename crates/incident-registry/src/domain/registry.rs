//! # Registry Entry Points
//!
//! The six mutating operations and three read-only queries of the Incident
//! Command Registry, as methods of [`RegistryState`].
//!
//! Every entry point checks all of its guards before mutating any field
//! (compute-then-commit), so an `Err` return always leaves the state
//! untouched. This realizes the ledger's commit-or-revert semantics without
//! snapshotting.
//!
//! | Entry point | Caller constraint |
//! |-------------|-------------------|
//! | `register_personnel` | command center |
//! | `report_incident` | authorized |
//! | `assign_personnel` | command center |
//! | `update_incident_status` | authorized, and command center or assignee |
//! | `deactivate_personnel` | command center |
//! | `transfer_command_center` | command center |

use crate::domain::entities::{Incident, Personnel, RegistryState};
use crate::domain::value_objects::{Address, IncidentId, IncidentStatus, PersonnelRole};
use crate::errors::RegistryError;
use crate::events::RegistryEvent;
use serde::{Deserialize, Serialize};
use tracing::debug;

// =============================================================================
// QUERY VIEWS
// =============================================================================

/// Public read view of an incident.
///
/// `reported_by` is deliberately absent: the public read interface redacts
/// the reporter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentView {
    /// Incident identity.
    pub id: IncidentId,
    /// Free-form description.
    pub description: String,
    /// Free-form location.
    pub location: String,
    /// Current lifecycle label.
    pub status: IncidentStatus,
    /// Zero-address sentinel or the (possibly historical) assignee.
    pub assigned_personnel: Address,
    /// Ledger timestamp at creation.
    pub reported_time: u64,
    /// 0, or the timestamp of the most recent Resolved/Closed write.
    pub resolved_time: u64,
}

/// Public read view of a personnel record.
///
/// Unregistered addresses read as the zero value, the way a ledger mapping
/// reads an unwritten key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonnelView {
    /// Display name.
    pub name: String,
    /// Informational role.
    pub role: PersonnelRole,
    /// Assignment eligibility.
    pub is_active: bool,
    /// 0 or the currently held incident.
    pub current_incident: IncidentId,
}

// =============================================================================
// GUARD HELPERS
// =============================================================================

impl RegistryState {
    fn require_command_center(&self, caller: Address) -> Result<(), RegistryError> {
        if caller == self.command_center {
            Ok(())
        } else {
            Err(RegistryError::NotCommandCenter)
        }
    }

    fn require_authorized(&self, caller: Address) -> Result<(), RegistryError> {
        if self.is_authorized(caller) {
            Ok(())
        } else {
            Err(RegistryError::NotAuthorized)
        }
    }

    fn require_valid_incident(&self, id: IncidentId) -> Result<(), RegistryError> {
        if id >= 1 && id <= self.incident_counter {
            Ok(())
        } else {
            Err(RegistryError::InvalidIncidentId {
                id,
                max: self.incident_counter,
            })
        }
    }

    fn require_non_zero(address: Address) -> Result<(), RegistryError> {
        if address.is_zero() {
            Err(RegistryError::ZeroAddress)
        } else {
            Ok(())
        }
    }
}

// =============================================================================
// MUTATING ENTRY POINTS
// =============================================================================

impl RegistryState {
    /// Registers (or re-registers) personnel. Command-center only.
    ///
    /// Upserting resets `current_incident` to 0 even if the address was
    /// mid-incident; the stale incident's `assigned_personnel` field is NOT
    /// cleared. That one-sided reset is part of the contract surface and is
    /// reproduced as-is.
    pub fn register_personnel(
        &mut self,
        caller: Address,
        address: Address,
        name: String,
        role: PersonnelRole,
    ) -> Result<Vec<RegistryEvent>, RegistryError> {
        self.require_command_center(caller)?;
        Self::require_non_zero(address)?;

        self.personnel.insert(
            address,
            Personnel {
                wallet_address: address,
                name: name.clone(),
                role,
                is_active: true,
                current_incident: 0,
            },
        );
        self.authorized.insert(address, true);

        debug!(personnel = %address, ?role, "personnel registered");
        Ok(vec![RegistryEvent::PersonnelRegistered {
            personnel: address,
            name,
            role,
        }])
    }

    /// Reports a new incident. Authorized only.
    ///
    /// Returns the new 1-based incident identity together with the emitted
    /// events.
    pub fn report_incident(
        &mut self,
        caller: Address,
        now: u64,
        description: String,
        location: String,
    ) -> Result<(IncidentId, Vec<RegistryEvent>), RegistryError> {
        self.require_authorized(caller)?;

        self.incident_counter += 1;
        let id = self.incident_counter;
        self.incidents.insert(
            id,
            Incident {
                id,
                description: description.clone(),
                location: location.clone(),
                status: IncidentStatus::Reported,
                assigned_personnel: Address::ZERO,
                reported_time: now,
                resolved_time: 0,
                reported_by: caller,
            },
        );

        debug!(id, "incident reported");
        Ok((
            id,
            vec![RegistryEvent::IncidentReported {
                id,
                description,
                location,
            }],
        ))
    }

    /// Assigns personnel to an incident. Command-center only.
    ///
    /// The target must be non-zero, authorized, active, and currently
    /// unassigned; the last guard enforces the at-most-one-active-assignment
    /// invariant.
    ///
    /// Emits `PersonnelAssigned` then `StatusUpdated`, in that order.
    pub fn assign_personnel(
        &mut self,
        caller: Address,
        incident_id: IncidentId,
        personnel: Address,
    ) -> Result<Vec<RegistryEvent>, RegistryError> {
        self.require_command_center(caller)?;
        self.require_valid_incident(incident_id)?;
        Self::require_non_zero(personnel)?;
        if !self.is_authorized(personnel) {
            return Err(RegistryError::PersonnelNotAuthorized(personnel));
        }
        // An authorized-but-never-registered address (a transferred-in
        // command center) reads as the inactive zero-value record.
        let record = self.personnel.get(&personnel);
        if !record.is_some_and(|p| p.is_active) {
            return Err(RegistryError::PersonnelInactive(personnel));
        }
        let current = record.map_or(0, |p| p.current_incident);
        if current != 0 {
            return Err(RegistryError::PersonnelAlreadyAssigned { current });
        }

        // All guards passed; commit.
        if let Some(incident) = self.incidents.get_mut(&incident_id) {
            incident.assigned_personnel = personnel;
            incident.status = IncidentStatus::Assigned;
        }
        if let Some(record) = self.personnel.get_mut(&personnel) {
            record.current_incident = incident_id;
        }

        debug!(incident_id, personnel = %personnel, "personnel assigned");
        Ok(vec![
            RegistryEvent::PersonnelAssigned {
                incident_id,
                personnel,
            },
            RegistryEvent::StatusUpdated {
                incident_id,
                new_status: IncidentStatus::Assigned,
            },
        ])
    }

    /// Writes an incident's status. Authorized only, and the caller must be
    /// the command center or the incident's current assignee.
    ///
    /// Any status value may be written over any other; no transition graph
    /// is enforced, backward moves included. Writing `Resolved` or `Closed`
    /// stamps `resolved_time` (overwriting on repeats) and clears the
    /// assignee's `current_incident` back to 0 - freeing them for new
    /// assignments - while leaving `assigned_personnel` on the incident as
    /// the historical record.
    pub fn update_incident_status(
        &mut self,
        caller: Address,
        now: u64,
        incident_id: IncidentId,
        new_status: IncidentStatus,
    ) -> Result<Vec<RegistryEvent>, RegistryError> {
        self.require_authorized(caller)?;
        self.require_valid_incident(incident_id)?;

        let assignee = self
            .incidents
            .get(&incident_id)
            .map_or(Address::ZERO, |i| i.assigned_personnel);
        if caller != self.command_center && caller != assignee {
            return Err(RegistryError::NotAssigneeOrCommandCenter);
        }

        if let Some(incident) = self.incidents.get_mut(&incident_id) {
            incident.status = new_status;
            if new_status.is_terminal_write() {
                incident.resolved_time = now;
            }
        }
        if new_status.is_terminal_write() && !assignee.is_zero() {
            if let Some(record) = self.personnel.get_mut(&assignee) {
                record.current_incident = 0;
            }
        }

        debug!(incident_id, ?new_status, "status updated");
        Ok(vec![RegistryEvent::StatusUpdated {
            incident_id,
            new_status,
        }])
    }

    /// Deactivates personnel. Command-center only.
    ///
    /// Unlike terminal status writes, this path clears BOTH sides of the
    /// assignment relation: the person's `current_incident` and the
    /// incident's `assigned_personnel`. Emits no event (the contract surface
    /// has that asymmetry; it is preserved, not papered over). Does NOT
    /// revoke authorization: a deactivated person can still report incidents
    /// and update incidents they remain attached to, but can never again be
    /// the target of an assignment while inactive.
    pub fn deactivate_personnel(
        &mut self,
        caller: Address,
        personnel: Address,
    ) -> Result<Vec<RegistryEvent>, RegistryError> {
        self.require_command_center(caller)?;
        Self::require_non_zero(personnel)?;

        // Write-through semantics: deactivating an unknown address creates
        // the zero-value record, as a ledger mapping write would.
        let record = self
            .personnel
            .entry(personnel)
            .or_insert_with(|| Personnel::empty(personnel));
        record.is_active = false;
        let held = record.current_incident;
        record.current_incident = 0;

        if held != 0 {
            if let Some(incident) = self.incidents.get_mut(&held) {
                incident.assigned_personnel = Address::ZERO;
            }
        }

        debug!(personnel = %personnel, released_incident = held, "personnel deactivated");
        Ok(Vec::new())
    }

    /// Transfers the command-center role. Command-center only.
    ///
    /// Grants the new center authorization; the old center keeps its
    /// authorization (the set never shrinks).
    pub fn transfer_command_center(
        &mut self,
        caller: Address,
        new_center: Address,
    ) -> Result<Vec<RegistryEvent>, RegistryError> {
        self.require_command_center(caller)?;
        Self::require_non_zero(new_center)?;
        if new_center == self.command_center {
            return Err(RegistryError::SameCommandCenter);
        }

        let old_center = self.command_center;
        self.command_center = new_center;
        self.authorized.insert(new_center, true);

        debug!(old = %old_center, new = %new_center, "command center transferred");
        Ok(vec![RegistryEvent::CommandCenterTransferred {
            old_center,
            new_center,
        }])
    }
}

// =============================================================================
// READ-ONLY QUERIES
// =============================================================================

impl RegistryState {
    /// Fetches an incident's public fields. Anyone may call; the identity
    /// must be valid. `reported_by` is redacted from the view.
    pub fn get_incident(&self, id: IncidentId) -> Result<IncidentView, RegistryError> {
        self.require_valid_incident(id)?;
        // Valid-incident guard guarantees presence; ids are dense 1..=counter.
        let incident = self
            .incidents
            .get(&id)
            .ok_or(RegistryError::InvalidIncidentId {
                id,
                max: self.incident_counter,
            })?;
        Ok(IncidentView {
            id: incident.id,
            description: incident.description.clone(),
            location: incident.location.clone(),
            status: incident.status,
            assigned_personnel: incident.assigned_personnel,
            reported_time: incident.reported_time,
            resolved_time: incident.resolved_time,
        })
    }

    /// Fetches a personnel record's public fields. Anyone may call;
    /// unregistered addresses read as the zero value.
    #[must_use]
    pub fn get_personnel_info(&self, address: Address) -> PersonnelView {
        self.personnel
            .get(&address)
            .map_or_else(
                || {
                    let empty = Personnel::empty(address);
                    PersonnelView {
                        name: empty.name,
                        role: empty.role,
                        is_active: empty.is_active,
                        current_incident: empty.current_incident,
                    }
                },
                |p| PersonnelView {
                    name: p.name.clone(),
                    role: p.role,
                    is_active: p.is_active,
                    current_incident: p.current_incident,
                },
            )
    }

    /// Total number of incidents ever reported. Never decreases.
    #[must_use]
    pub fn get_total_incidents(&self) -> u64 {
        self.incident_counter
    }
}

// =============================================================================
// TESTS
// =============================================================================
