//! # Inbound Ports
//!
//! The read-only query surface exposed to external collaborators (the web
//! backend that mirrors events and state into its own store). Collaborators
//! never bypass the entry-point guards; this trait carries no mutators.

use crate::domain::registry::{IncidentView, PersonnelView};
use crate::domain::value_objects::{Address, IncidentId};
use crate::errors::RegistryError;
use async_trait::async_trait;

/// Public queries over registry state.
#[async_trait]
pub trait IncidentQueryApi: Send + Sync {
    /// Fetch one incident's public fields (reporter redacted).
    async fn get_incident(&self, id: IncidentId) -> Result<IncidentView, RegistryError>;

    /// Fetch a personnel record's public fields; unknown addresses read as
    /// the zero value.
    async fn get_personnel_info(&self, address: Address) -> PersonnelView;

    /// Total incidents ever reported.
    async fn get_total_incidents(&self) -> u64;
}
