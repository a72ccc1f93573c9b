use anyhow::Context;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    SqlitePool,
};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::info;

use crate::{config::AppConfig, questions};

/// Open the pool on the configured SQLite file, creating the file and its
/// directory when absent.
pub async fn connect(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    if let Some(dir) = config.database_path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create database directory {}", dir.display()))?;
        }
    }

    // answers may reference users/questions that do not exist
    let options = SqliteConnectOptions::new()
        .filename(&config.database_path)
        .create_if_missing(true)
        .foreign_keys(false)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .context("connect to database")?;
    Ok(pool)
}

/// Create the schema and seed sample questions. Safe to run on every start.
pub async fn init(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("apply schema")?;

    let now = utc_now()?;
    add_missing_timestamps(pool, &now).await?;

    let seeded = questions::repo::seed_if_empty(pool, &now).await?;
    if seeded > 0 {
        info!(count = seeded, "seeded sample questions");
    }
    Ok(())
}

/// Tables created before timestamps existed keep their rows; the columns are
/// added and backfilled so `updated_at` starts equal to `created_at`.
async fn add_missing_timestamps(pool: &SqlitePool, now: &str) -> anyhow::Result<()> {
    for table in ["users", "questions", "answers"] {
        for column in ["created_at", "updated_at"] {
            let present: Option<(String,)> =
                sqlx::query_as("SELECT name FROM pragma_table_info(?) WHERE name = ?")
                    .bind(table)
                    .bind(column)
                    .fetch_optional(pool)
                    .await
                    .with_context(|| format!("inspect {table}.{column}"))?;
            if present.is_some() {
                continue;
            }

            sqlx::query(&format!("ALTER TABLE {table} ADD COLUMN {column} TEXT"))
                .execute(pool)
                .await
                .with_context(|| format!("add {table}.{column}"))?;
            let filled = sqlx::query(&format!(
                "UPDATE {table} SET {column} = COALESCE(created_at, ?) WHERE {column} IS NULL"
            ))
            .bind(now)
            .execute(pool)
            .await
            .with_context(|| format!("backfill {table}.{column}"))?
            .rows_affected();
            info!(table, column, rows = filled, "added missing timestamp column");
        }
    }
    Ok(())
}

/// Current UTC time as an RFC 3339 string, the form every timestamp column uses.
pub fn utc_now() -> anyhow::Result<String> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("format timestamp")
}

pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[tokio::test]
    async fn init_is_idempotent() {
        let (state, _dir) = AppState::for_tests().await;

        let (before,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&state.db)
            .await
            .unwrap();
        assert_eq!(before as usize, questions::seed::SAMPLE_QUESTIONS.len());

        init(&state.db).await.expect("second init");
        init(&state.db).await.expect("third init");

        let (after,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&state.db)
            .await
            .unwrap();
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn reopening_an_existing_file_keeps_rows() {
        let (state, dir) = AppState::for_tests().await;
        sqlx::query(
            "INSERT INTO answers (question_id, user_id, answer, created_at, updated_at)
             VALUES (1, 'u', 'a', 't', 't')",
        )
        .execute(&state.db)
        .await
        .unwrap();
        state.db.close().await;

        let config = AppState::test_config(dir.path());
        let pool = connect(&config).await.expect("reconnect");
        init(&pool).await.expect("init on existing file");

        let (answers,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM answers")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(answers, 1);
    }

    #[tokio::test]
    async fn connect_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppState::test_config(dir.path());
        config.database_path = dir.path().join("nested").join("deeper").join("wiz.db");

        let pool = connect(&config).await.expect("connect");
        init(&pool).await.expect("init");
        assert!(config.database_path.exists());
    }

    const LEGACY_SCHEMA: [&str; 3] = [
        "CREATE TABLE users (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            password TEXT NOT NULL
        )",
        "CREATE TABLE questions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question TEXT NOT NULL,
            category TEXT NOT NULL,
            difficulty TEXT NOT NULL,
            description TEXT
        )",
        "CREATE TABLE answers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question_id INTEGER NOT NULL,
            user_id TEXT NOT NULL,
            answer TEXT NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (question_id) REFERENCES questions (id),
            FOREIGN KEY (user_id) REFERENCES users (id)
        )",
    ];

    #[tokio::test]
    async fn tables_without_timestamps_are_upgraded() {
        use crate::{
            answers,
            auth::{password::hash_password, repo_types::User},
            questions::repo_types::QuestionFilter,
        };

        let dir = tempfile::tempdir().unwrap();
        let config = AppState::test_config(dir.path());
        let pool = connect(&config).await.expect("connect");
        for ddl in LEGACY_SCHEMA {
            sqlx::query(ddl).execute(&pool).await.unwrap();
        }
        sqlx::query(
            "INSERT INTO users (id, name, email, password) VALUES ('u1', 'Old', 'old@x.com', ?)",
        )
        .bind(hash_password("p1"))
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO questions (question, category, difficulty, description)
             VALUES ('What is the OSI model?', 'Networking', 'Medium', 'layers')",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO answers (question_id, user_id, answer, created_at)
             VALUES (1, 'u1', 'seven layers', '2024-01-01 10:00:00')",
        )
        .execute(&pool)
        .await
        .unwrap();

        init(&pool).await.expect("init on legacy schema");
        init(&pool).await.expect("second init is a no-op");

        let mut conn = pool.acquire().await.unwrap();
        let listed = questions::repo::list(&mut conn, QuestionFilter::default())
            .await
            .expect("questions readable");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].created_at, listed[0].updated_at);

        let user = User::find_by_credentials(&mut conn, "old@x.com", &hash_password("p1"))
            .await
            .expect("users readable")
            .expect("legacy password still matches");
        assert_eq!(user.id, "u1");
        assert_eq!(user.created_at, user.updated_at);

        let old_answers = answers::repo::list_by_user(&mut conn, "u1")
            .await
            .expect("answers readable");
        assert_eq!(old_answers.len(), 1);
        assert_eq!(old_answers[0].created_at, "2024-01-01 10:00:00");
        assert_eq!(old_answers[0].updated_at, "2024-01-01 10:00:00");

        let fresh = answers::repo::insert(&mut conn, 1, "u1", "again", "2026-01-01T00:00:00Z")
            .await
            .expect("insert after upgrade");
        assert_eq!(fresh.updated_at, "2026-01-01T00:00:00Z");
    }

    #[tokio::test]
    async fn duplicate_email_insert_is_a_unique_violation() {
        use crate::auth::repo_types::{NewUser, User};

        let (state, _dir) = AppState::for_tests().await;
        let mut conn = state.db.acquire().await.unwrap();
        let new = |id: &'static str| NewUser {
            id,
            name: "A",
            email: "a@x.com",
            password_hash: "h",
            created_at: "t",
        };

        User::create(&mut conn, new("u1")).await.expect("first insert");
        let err = User::create(&mut conn, new("u2")).await.unwrap_err();
        assert!(is_unique_violation(&err));
    }

    #[test]
    fn utc_now_is_rfc3339_utc() {
        let ts = utc_now().unwrap();
        let parsed = OffsetDateTime::parse(&ts, &Rfc3339).expect("parses back");
        assert_eq!(parsed.offset(), time::UtcOffset::UTC);
        assert!(ts.ends_with('Z'));
    }

    #[test]
    fn non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&anyhow::anyhow!("boom")));
        assert!(!is_unique_violation(&anyhow::Error::from(sqlx::Error::RowNotFound)));
    }
}
