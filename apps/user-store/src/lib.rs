#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod demo;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod logging;
pub mod repos;
pub mod services;
pub mod state;

// Re-exports for public API
pub use adapters::{UserRepoMemory, UserRepoSea};
pub use config::db::{DbConfig, DbKind};
pub use error::AppError;
pub use errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
pub use infra::state::{build_state, StateBuilder};
pub use repos::users::{User, UserRepo};
pub use services::users::UserService;
pub use state::app_state::AppState;
