mod common;

use common::CapturedLogs;
use sqlx::PgPool;
use tracing::Level;
use storage::dto::competition_type::CreateTypeRequest;
use storage::error::Result;
use storage::repository::TypeRepository;

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres instance at DATABASE_URL"]
async fn duplicate_type_names_are_allowed(pool: PgPool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    let mut repo = TypeRepository::new(&mut conn);
    let req = CreateTypeRequest::new("faculty research", "Supervisor-led work");

    let first = repo.create(&req).await?;
    let second = repo.create(&req).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(first.name, second.name);
    assert_eq!(repo.list().await.len(), 2);
    Ok(())
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres instance at DATABASE_URL"]
async fn find_by_id_returns_created_type(pool: PgPool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    let mut repo = TypeRepository::new(&mut conn);

    let created = repo
        .create(&CreateTypeRequest::new("student self-initiated", "Student-led"))
        .await?;
    let found = repo.find_by_id(created.id).await;

    assert_eq!(found, created);
    assert_eq!(found.describe, "Student-led");
    Ok(())
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres instance at DATABASE_URL"]
async fn missing_id_yields_zero_value(pool: PgPool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    let mut repo = TypeRepository::new(&mut conn);

    assert!(repo.find_by_id(9999).await.is_zero());
    assert!(repo.try_find_by_id(9999).await?.is_none());
    assert!(repo.list().await.is_empty());
    Ok(())
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres instance at DATABASE_URL"]
async fn failed_queries_degrade_reads_and_fail_writes(pool: PgPool) -> Result<()> {
    let mut tx = pool.begin().await?;
    // leaves the transaction aborted, so every later statement fails
    assert!(sqlx::query("SELECT 1/0").execute(&mut *tx).await.is_err());

    let logs = CapturedLogs::default();
    let _guard = logs.install();
    let mut repo = TypeRepository::new(&mut tx);

    assert!(repo.list().await.is_empty());
    assert!(repo.try_list().await.is_err());
    assert!(repo.find_by_id(1).await.is_zero());
    assert!(repo.try_find_by_id(1).await.is_err());
    assert!(
        repo.create(&CreateTypeRequest::new("faculty research", ""))
            .await
            .is_err()
    );

    let debug = logs.at(Level::DEBUG);
    assert_eq!(debug.len(), 2);
    assert!(debug[0].starts_with("Failed to list types"));
    assert!(debug[1].starts_with("Failed to find type 1"));
    assert!(logs.at(Level::ERROR).is_empty());
    assert_eq!(logs.events().len(), 2);
    Ok(())
}
