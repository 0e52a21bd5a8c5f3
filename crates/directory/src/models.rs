//! System directory models.

use crate::error::{DirectoryError, DirectoryResult};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Identifier of a signage system.
pub type SystemId = u32;

/// A deployed street address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub house_number: String,
    pub zip_code: String,
    pub city: String,
}

/// A customer deployment a system is installed at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// Owning customer.
    pub customer_id: u32,
    /// Street address of the installation site.
    pub address: Address,
}

/// A digital-signage system (terminal).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    pub id: SystemId,
    /// The system's VPN address, used for source-address resolution.
    pub vpn_address: IpAddr,
    /// Deployment, if the system is installed at a customer site.
    pub deployment: Option<Deployment>,
}

impl System {
    /// The system's deployment, or an error if it has none.
    pub fn deployment(&self) -> DirectoryResult<&Deployment> {
        self.deployment
            .as_ref()
            .ok_or(DirectoryError::NotDeployed(self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deployment_required() {
        let system = System {
            id: 7,
            vpn_address: "10.200.200.7".parse().unwrap(),
            deployment: None,
        };
        assert!(matches!(
            system.deployment(),
            Err(DirectoryError::NotDeployed(7))
        ));
    }
}
