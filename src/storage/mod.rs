//! Persistent storage: file-backed records behind repository traits
//!
//! All cross-entity lookups go through repository accessors returning fully
//! materialized values; there is no lazy loading across this boundary.

mod file;
pub mod repository;

pub use file::FileStorage;
pub use repository::{
    ReferenceRepository, Repository, SessionRepository, TicketRepository, UserRepository,
};
