use goal_tracker_core::db::{self, DbPool};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Builds a throwaway database under the system temp dir, runs migrations,
/// and returns a pool backed by it. Each call gets its own database so tests
/// never see each other's rows.
pub fn setup_pool(test_id: &str) -> Arc<DbPool> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before unix epoch")
        .as_nanos();
    let data_dir = std::env::temp_dir().join(format!("goal-tracker-test-{}-{}", test_id, nanos));

    let db_path = db::init(&data_dir.to_string_lossy()).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    pool
}
