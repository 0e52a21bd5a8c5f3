//! System directory and resolution for the signcast server.
//!
//! Terminals authenticate implicitly by their VPN source address; operators
//! on the intranet may address any system by ID. This crate provides the
//! directory seam and the two resolution entry points the router composes.

pub mod error;
pub mod models;
pub mod resolve;
pub mod store;

pub use error::{DirectoryError, DirectoryResult};
pub use models::{Address, Deployment, System, SystemId};
pub use resolve::{resolve_by_explicit_id, resolve_by_source_address};
pub use store::{MemoryDirectory, SystemDirectory};
