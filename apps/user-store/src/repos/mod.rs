//! Repository traits for the domain layer.

pub mod users;

pub use users::{User, UserRepo};
