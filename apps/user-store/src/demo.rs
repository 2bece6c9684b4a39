//! Example operations issued by the binary once the store is wired up.

use tracing::{info, warn};

use crate::errors::domain::DomainError;
use crate::logging::pii::Redacted;
use crate::repos::users::User;
use crate::services::users::UserService;

/// What the example run observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Whether this run inserted the example user (false if it already existed)
    pub created: bool,
    /// Whether the stored email equals the one that was written
    pub email_matches: bool,
    /// Row count after the run
    pub total_users: u64,
}

pub fn example_user() -> User {
    User::new(1, "Ivan", "ffgg@gsds.ru")
}

/// Create the example user, read it back and compare emails.
///
/// A constraint violation on create is logged and tolerated so the binary can
/// be run repeatedly against the same database.
pub async fn run_example_operations(users: &UserService) -> Result<DemoReport, DomainError> {
    let user = example_user();

    let created = match users.create_user(&user).await {
        Ok(_) => {
            info!(user_id = user.id, "example user created");
            true
        }
        Err(e) if e.is_constraint_violation() => {
            warn!(user_id = user.id, email = %Redacted(&user.email), error = %e, "example user already present");
            false
        }
        Err(e) => return Err(e),
    };

    let stored = users.get_user_by_id(user.id).await?;
    let email_matches = stored.email == user.email;
    let total_users = users.count_users().await?;

    info!(user_id = stored.id, email_matches, total_users, "example user read back");
    Ok(DemoReport {
        created,
        email_matches,
        total_users,
    })
}
