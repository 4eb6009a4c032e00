use gamecafe::infrastructure::persistence::Database;
use uuid::Uuid;

pub struct TestDb {
    pub db: Database,
    path: String,
}

pub async fn setup_test_db() -> TestDb {
    // Install drivers for AnyPool (required for tests)
    sqlx::any::install_default_drivers();

    // Unique file per test so tests can run in parallel
    let path = format!("test_{}.db", Uuid::new_v4());
    let db_url = format!("sqlite://{}?mode=rwc", path);

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    db.run_migrations()
        .await
        .expect("Failed to run migrations");

    TestDb { db, path }
}

pub async fn teardown_test_db(test_db: TestDb) {
    test_db.db.close().await;
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{}", test_db.path, suffix));
    }
}
