use platform_read_api::db::Database;

/// Connects to the store named by `TEST_MONGODB_URL`, or returns `None` so
/// the caller can skip when no live store is available. Each test passes its
/// own database name for isolation.
pub async fn connect_test_database(database_name: &str) -> Option<Database> {
    let url = match std::env::var("TEST_MONGODB_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("TEST_MONGODB_URL not set; skipping live-store test");
            return None;
        }
    };

    let db = Database::new(&url, database_name)
        .await
        .expect("invalid TEST_MONGODB_URL");
    db.ping().await.expect("document store not reachable");
    Some(db)
}
