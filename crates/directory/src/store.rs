//! System directory trait and in-memory implementation.

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{System, SystemId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::net::IpAddr;
use std::path::Path;

/// Read access to the set of known signage systems.
///
/// The production directory of the original deployment is a relational
/// database; that layer is out of scope here, so the trait is the seam and
/// [`MemoryDirectory`] the bundled implementation.
#[async_trait]
pub trait SystemDirectory: Send + Sync {
    /// Look up a system by its VPN source address.
    async fn system_by_address(&self, address: IpAddr) -> DirectoryResult<System>;

    /// Look up a system by its ID.
    async fn system_by_id(&self, id: SystemId) -> DirectoryResult<System>;
}

/// In-memory system directory.
pub struct MemoryDirectory {
    by_id: HashMap<SystemId, System>,
    by_address: HashMap<IpAddr, SystemId>,
}

impl MemoryDirectory {
    /// Create a directory from a list of systems.
    ///
    /// Duplicate IDs or VPN addresses are data errors: silently shadowed
    /// entries would make resolution depend on input order.
    pub fn new(systems: Vec<System>) -> DirectoryResult<Self> {
        let mut by_id = HashMap::with_capacity(systems.len());
        let mut by_address = HashMap::with_capacity(systems.len());

        for system in systems {
            if by_address.insert(system.vpn_address, system.id).is_some() {
                return Err(DirectoryError::Data(format!(
                    "duplicate VPN address: {}",
                    system.vpn_address
                )));
            }
            let id = system.id;
            if by_id.insert(id, system).is_some() {
                return Err(DirectoryError::Data(format!("duplicate system ID: {id}")));
            }
        }

        Ok(Self { by_id, by_address })
    }

    /// Load a directory from a JSON file holding an array of systems.
    pub async fn from_json_file(path: impl AsRef<Path>) -> DirectoryResult<Self> {
        let data = tokio::fs::read(path.as_ref()).await?;
        let systems: Vec<System> = serde_json::from_slice(&data)
            .map_err(|e| DirectoryError::Data(e.to_string()))?;
        Self::new(systems)
    }

    /// Number of known systems.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[async_trait]
impl SystemDirectory for MemoryDirectory {
    async fn system_by_address(&self, address: IpAddr) -> DirectoryResult<System> {
        self.by_address
            .get(&address)
            .and_then(|id| self.by_id.get(id))
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(format!("address {address}")))
    }

    async fn system_by_id(&self, id: SystemId) -> DirectoryResult<System> {
        self.by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(format!("ID {id}")))
    }
}
