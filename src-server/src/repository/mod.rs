//! Repository Layer
//!
//! Data access abstractions and implementations.

mod db;
mod guest_repo;
mod registry_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use db::{init_db, DbState, SharedConnection};
pub use guest_repo::SqliteGuestRepository;
pub use registry_repo::SqliteRegistryRepository;
pub use traits::{GuestRepository, RegistryRepository, Repository};
