//! The create/duplicate scenario and CRUD properties, run through
//! `UserService` against every storage backend.

mod support;

use test_support::{unique_email, unique_id};
use user_store::{AppError, AppState, ConflictKind, DomainError, User};

use crate::support::{memory_state, postgres_fixture, sqlite_state};

async fn count(state: &AppState) -> u64 {
    state.users.count_users().await.expect("count users")
}

async fn run_duplicate_scenario(state: &AppState) -> Result<(), AppError> {
    let users = &state.users;
    assert_eq!(count(state).await, 0);

    users
        .create_user(&User::new(1, "John Doe", "john.doe@example.com"))
        .await?;
    assert_eq!(count(state).await, 1);

    users
        .create_user(&User::new(56, "John Uik", "johnuik@ex.ru"))
        .await?;
    assert_eq!(count(state).await, 2);

    // duplicate id
    let err = users
        .create_user(&User::new(1, "John Uik", "johnu33ik@ex.ru"))
        .await
        .expect_err("duplicate id must fail");
    assert!(err.is_constraint_violation(), "got {err:?}");
    assert_eq!(count(state).await, 2);

    // duplicate email
    let err = users
        .create_user(&User::new(344, "John Uik", "johnuik@ex.ru"))
        .await
        .expect_err("duplicate email must fail");
    assert!(err.is_constraint_violation(), "got {err:?}");
    assert_eq!(count(state).await, 2);

    Ok(())
}

async fn run_crud_properties(state: &AppState) -> Result<(), AppError> {
    let users = &state.users;
    let id = unique_id();
    let email = unique_email("crud");
    let before = count(state).await;

    users.create_user(&User::new(id, "John Doe", &email)).await?;
    assert_eq!(count(state).await, before + 1);

    let stored = users.get_user_by_id(id).await?;
    assert_eq!(stored.name, "John Doe");
    assert_eq!(stored.email, email);

    users
        .update_user(&User::new(id, "John Updated", &email))
        .await?;
    assert_eq!(users.get_user_by_id(id).await?.name, "John Updated");

    users.delete_user(id).await?;
    assert_eq!(count(state).await, before);
    match users.get_user_by_id(id).await {
        Err(DomainError::NotFound(..)) => {}
        other => panic!("Expected NotFound after delete but got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_duplicate_scenario_sqlite() -> Result<(), AppError> {
    let state = sqlite_state().await?;
    run_duplicate_scenario(&state).await
}

#[tokio::test]
async fn test_duplicate_scenario_memory() -> Result<(), AppError> {
    let state = memory_state().await?;
    run_duplicate_scenario(&state).await
}

#[tokio::test]
async fn test_crud_properties_sqlite() -> Result<(), AppError> {
    let state = sqlite_state().await?;
    run_crud_properties(&state).await
}

#[tokio::test]
async fn test_crud_properties_memory() -> Result<(), AppError> {
    let state = memory_state().await?;
    run_crud_properties(&state).await
}

#[tokio::test]
async fn test_backends_agree_on_error_kinds() -> Result<(), AppError> {
    let sqlite = sqlite_state().await?;
    let memory = memory_state().await?;

    for state in [&sqlite, &memory] {
        state
            .users
            .create_user(&User::new(1, "John Doe", "john.doe@example.com"))
            .await?;
    }

    let probes = [
        User::new(1, "Dup Id", "other@example.com"),
        User::new(2, "Dup Email", "john.doe@example.com"),
    ];
    for probe in &probes {
        let a = sqlite.users.create_user(probe).await.unwrap_err();
        let b = memory.users.create_user(probe).await.unwrap_err();
        assert_eq!(
            std::mem::discriminant(&a),
            std::mem::discriminant(&b),
            "{a:?} vs {b:?}"
        );
        match (&a, &b) {
            (DomainError::Conflict(ka, _), DomainError::Conflict(kb, _)) => assert_eq!(ka, kb),
            _ => panic!("expected conflicts, got {a:?} / {b:?}"),
        }
    }

    assert!(sqlite.users.get_user_by_id(2).await.unwrap_err().is_not_found());
    assert!(memory.users.get_user_by_id(2).await.unwrap_err().is_not_found());
    assert!(sqlite.users.delete_user(2).await.unwrap_err().is_not_found());
    assert!(memory.users.delete_user(2).await.unwrap_err().is_not_found());

    Ok(())
}

/// Real Postgres output must map to the specific constraint that tripped.
async fn run_postgres_conflict_kinds(state: &AppState) -> Result<(), AppError> {
    let users = &state.users;
    users
        .create_user(&User::new(10, "Ivan", "ffgg@gsds.ru"))
        .await?;
    users
        .create_user(&User::new(11, "Olga", "olga@gsds.ru"))
        .await?;

    let err = users
        .create_user(&User::new(10, "Dup Id", "fresh@gsds.ru"))
        .await
        .expect_err("duplicate id must fail");
    assert_eq!(err, DomainError::conflict(ConflictKind::UniqueId, "User id already exists"));

    let err = users
        .create_user(&User::new(12, "Dup Email", "ffgg@gsds.ru"))
        .await
        .expect_err("duplicate email must fail");
    assert!(
        matches!(err, DomainError::Conflict(ConflictKind::UniqueEmail, _)),
        "got {err:?}"
    );

    let err = users
        .update_user(&User::new(11, "Olga", "ffgg@gsds.ru"))
        .await
        .expect_err("taking another user's email must fail");
    assert!(
        matches!(err, DomainError::Conflict(ConflictKind::UniqueEmail, _)),
        "got {err:?}"
    );

    let err = users
        .update_user(&User::new(99, "Nobody", "n@gsds.ru"))
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "got {err:?}");
    assert!(users.delete_user(99).await.unwrap_err().is_not_found());
    assert_eq!(count(state).await, 2);

    Ok(())
}

#[tokio::test]
async fn test_duplicate_scenario_postgres() -> Result<(), AppError> {
    let Some(pg) = postgres_fixture().await? else {
        return Ok(());
    };
    run_duplicate_scenario(&pg.state).await
}

#[tokio::test]
async fn test_crud_properties_postgres() -> Result<(), AppError> {
    let Some(pg) = postgres_fixture().await? else {
        return Ok(());
    };
    run_crud_properties(&pg.state).await
}

#[tokio::test]
async fn test_conflict_kinds_postgres() -> Result<(), AppError> {
    let Some(pg) = postgres_fixture().await? else {
        return Ok(());
    };
    run_postgres_conflict_kinds(&pg.state).await
}
