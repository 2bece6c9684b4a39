use thiserror::Error;

use crate::errors::domain::DomainError;

/// Errors surfaced while wiring the process together.
///
/// `Connection` and `SchemaInit` are fatal at startup; `Domain` carries
/// operation failures when they bubble out of the entry point.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Database connection failed: {detail}")]
    Connection { detail: String },
    #[error("Schema initialization failed: {detail}")]
    SchemaInit { detail: String },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn connection(detail: impl Into<String>) -> Self {
        Self::Connection {
            detail: detail.into(),
        }
    }

    pub fn schema_init(detail: impl Into<String>) -> Self {
        Self::SchemaInit {
            detail: detail.into(),
        }
    }

    /// Whether the process should exit instead of carrying on.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, AppError::Domain(_))
    }
}
