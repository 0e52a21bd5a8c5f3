//! Resolution entry points.
//!
//! Two distinct, explicitly named operations instead of one function with a
//! privacy flag: the routing layer composes them onto separate routes.

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{System, SystemId};
use crate::store::SystemDirectory;
use ipnet::IpNet;
use std::net::IpAddr;

/// Resolve the calling system by the peer's source address.
pub async fn resolve_by_source_address(
    directory: &dyn SystemDirectory,
    peer: IpAddr,
) -> DirectoryResult<System> {
    directory.system_by_address(peer).await
}

/// Resolve a system by a caller-supplied ID.
///
/// Permitted only when the peer address lies within one of the given
/// intranet networks; terminals in the field may never query systems other
/// than themselves.
pub async fn resolve_by_explicit_id(
    directory: &dyn SystemDirectory,
    id: SystemId,
    peer: IpAddr,
    intranet: &[IpNet],
) -> DirectoryResult<System> {
    if !intranet.iter().any(|net| net.contains(&peer)) {
        return Err(DirectoryError::Forbidden(peer));
    }
    directory.system_by_id(id).await
}
