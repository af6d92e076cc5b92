use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Build a migrated in-memory SQLite pool for repository tests.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn setup_in_memory_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");

    pool
}
