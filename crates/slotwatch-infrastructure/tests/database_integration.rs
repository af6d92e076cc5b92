use slotwatch_infrastructure::persistence::Database;

#[tokio::test]
async fn test_creates_file_and_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("monitor.db");

    let database = Database::new(&path).await.unwrap();
    database.run_migrations().await.unwrap();

    assert!(path.exists());
}

#[tokio::test]
async fn test_reopens_an_existing_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("monitor.db");

    let first = Database::new(&path).await.unwrap();
    first.run_migrations().await.unwrap();
    drop(first);

    let second = Database::new(&path).await.unwrap();
    second.run_migrations().await.unwrap();
}
