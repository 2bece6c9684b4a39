//! Adapters for external dependencies.

pub mod users_memory;
pub mod users_sea;

pub use users_memory::UserRepoMemory;
pub use users_sea::UserRepoSea;
