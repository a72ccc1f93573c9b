use crate::{config::AppConfig, db};
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = db::connect(&config).await?;
        db::init(&db).await?;
        Ok(Self { db, config })
    }
}

#[cfg(test)]
impl AppState {
    pub fn test_config(dir: &std::path::Path) -> AppConfig {
        AppConfig {
            database_path: dir.join("interview_wiz.db"),
            max_connections: 4,
            host: "127.0.0.1".into(),
            port: 0,
            cors_origins: Vec::new(),
        }
    }

    /// Fresh, seeded store in a temp directory; keep the `TempDir` alive for
    /// as long as the state is used.
    pub async fn for_tests() -> (Self, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = Arc::new(Self::test_config(dir.path()));
        let db = db::connect(&config).await.expect("connect test db");
        db::init(&db).await.expect("init test db");
        (Self { db, config }, dir)
    }
}
