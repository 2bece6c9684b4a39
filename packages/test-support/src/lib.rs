//! Shared helpers for user-store tests.
//!
//! Integration tests pull logging setup and unique fixture data from here so
//! every test binary behaves the same way.

pub mod logging;
pub mod unique_helpers;

pub use unique_helpers::{unique_email, unique_id, unique_str};
