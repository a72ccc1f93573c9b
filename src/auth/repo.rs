use crate::auth::repo_types::{NewUser, User};
use anyhow::Context;
use sqlx::SqliteConnection;

impl User {
    /// Find a user by exact email.
    pub async fn find_by_email(
        conn: &mut SqliteConnection,
        email: &str,
    ) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await
        .context("find user by email")?;
        Ok(user)
    }

    /// Find a user whose email and stored hash both match exactly.
    pub async fn find_by_credentials(
        conn: &mut SqliteConnection,
        email: &str,
        password_hash: &str,
    ) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM users
            WHERE email = ? AND password = ?
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_optional(&mut *conn)
        .await
        .context("find user by credentials")?;
        Ok(user)
    }

    /// Insert a user; `updated_at` starts equal to `created_at`.
    pub async fn create(conn: &mut SqliteConnection, new: NewUser<'_>) -> anyhow::Result<User> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.id)
        .bind(new.name)
        .bind(new.email)
        .bind(new.password_hash)
        .bind(new.created_at)
        .bind(new.created_at)
        .execute(&mut *conn)
        .await
        .context("insert user")?;

        Ok(User {
            id: new.id.to_string(),
            name: new.name.to_string(),
            email: new.email.to_string(),
            created_at: new.created_at.to_string(),
            updated_at: new.created_at.to_string(),
        })
    }
}
