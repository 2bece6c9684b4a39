//! Error handling for the user store.

pub mod domain;

pub use domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
