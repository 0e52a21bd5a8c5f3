//! Test fixtures.

use async_trait::async_trait;
use signcast_directory::{Address, Deployment, System};
use signcast_server::pickups::{Location, Pickup, PickupError, PickupSource};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use time::macros::date;
use tokio::io::AsyncReadExt;

/// Peer address of the deployed test system.
#[allow(dead_code)]
pub const DEPLOYED_PEER: &str = "10.200.200.1:45000";
/// Peer address of the undeployed test system.
#[allow(dead_code)]
pub const UNDEPLOYED_PEER: &str = "10.200.200.2:45000";
/// Intranet peer that is not a known system.
#[allow(dead_code)]
pub const INTRANET_PEER: &str = "10.200.200.250:45000";
/// Peer outside both the VPN and the intranet.
#[allow(dead_code)]
pub const OUTSIDE_PEER: &str = "198.51.100.9:45000";

/// Street known to the static pickup source.
#[allow(dead_code)]
pub const KNOWN_STREET: &str = "Musterstr.";
/// Street with several matching pickup locations.
#[allow(dead_code)]
pub const AMBIGUOUS_STREET: &str = "Hauptstr.";

fn address(street: &str) -> Address {
    Address {
        street: street.to_string(),
        house_number: "12".to_string(),
        zip_code: "30159".to_string(),
        city: "Hannover".to_string(),
    }
}

/// The systems known to every test server:
/// 1 is deployed at a known street, 2 has no deployment,
/// 3 is deployed at an unknown street, 4 at an ambiguous one.
pub fn test_systems() -> Vec<System> {
    vec![
        System {
            id: 1,
            vpn_address: "10.200.200.1".parse().unwrap(),
            deployment: Some(Deployment {
                customer_id: 1001,
                address: address(KNOWN_STREET),
            }),
        },
        System {
            id: 2,
            vpn_address: "10.200.200.2".parse().unwrap(),
            deployment: None,
        },
        System {
            id: 3,
            vpn_address: "10.200.200.3".parse().unwrap(),
            deployment: Some(Deployment {
                customer_id: 1003,
                address: address("Unbekannte Str."),
            }),
        },
        System {
            id: 4,
            vpn_address: "10.200.200.4".parse().unwrap(),
            deployment: Some(Deployment {
                customer_id: 1004,
                address: address(AMBIGUOUS_STREET),
            }),
        },
    ]
}

/// Pickup source with fixed answers and a call counter for cache tests.
pub struct StaticPickups {
    lookups: AtomicUsize,
}

#[allow(dead_code)]
impl StaticPickups {
    pub fn new() -> Self {
        Self {
            lookups: AtomicUsize::new(0),
        }
    }

    /// Number of times the (uncached) pickup list was fetched.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PickupSource for StaticPickups {
    async fn find_location(&self, street: &str) -> Result<Location, PickupError> {
        match street {
            KNOWN_STREET => Ok(Location {
                id: 77,
                name: KNOWN_STREET.to_string(),
            }),
            AMBIGUOUS_STREET => Err(PickupError::AmbiguousLocations {
                street: street.to_string(),
                candidates: vec![
                    "Hauptstr. Nord".to_string(),
                    "Hauptstr. Sued".to_string(),
                ],
            }),
            _ => Err(PickupError::NoLocationFound(street.to_string())),
        }
    }

    async fn pickups(
        &self,
        _location: &Location,
        _house_number: &str,
    ) -> Result<Vec<Pickup>, PickupError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(vec![
            Pickup {
                waste_type: "Restabfall".to_string(),
                date: date!(2026 - 08 - 10),
            },
            Pickup {
                waste_type: "Papier".to_string(),
                date: date!(2026 - 08 - 12),
            },
        ])
    }
}

/// Decompress and unpack a sync archive into (name, content) pairs in
/// archive order.
#[allow(dead_code)]
pub async fn unpack_archive(archive_bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut decoder = async_compression::tokio::bufread::XzDecoder::new(archive_bytes);
    let mut tar_bytes = Vec::new();
    decoder
        .read_to_end(&mut tar_bytes)
        .await
        .expect("xz decode");

    let mut archive = tar::Archive::new(std::io::Cursor::new(tar_bytes));
    let mut files = Vec::new();
    for entry in archive.entries().expect("tar entries") {
        let mut entry = entry.expect("tar entry");
        let name = entry
            .path()
            .expect("entry path")
            .to_string_lossy()
            .into_owned();
        let mut content = Vec::new();
        entry.read_to_end(&mut content).expect("entry content");
        files.push((name, content));
    }
    files
}
