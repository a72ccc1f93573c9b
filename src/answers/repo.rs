use anyhow::Context;
use sqlx::SqliteConnection;

use super::repo_types::Answer;

/// Insert an answer stamped with `now` for both timestamps.
pub async fn insert(
    conn: &mut SqliteConnection,
    question_id: i64,
    user_id: &str,
    answer: &str,
    now: &str,
) -> anyhow::Result<Answer> {
    let id = sqlx::query(
        r#"
        INSERT INTO answers (question_id, user_id, answer, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(question_id)
    .bind(user_id)
    .bind(answer)
    .bind(now)
    .bind(now)
    .execute(&mut *conn)
    .await
    .context("insert answer")?
    .last_insert_rowid();

    Ok(Answer {
        id,
        question_id,
        user_id: user_id.to_string(),
        answer: answer.to_string(),
        created_at: now.to_string(),
        updated_at: now.to_string(),
    })
}

/// Every answer with exactly this `user_id`, in id order.
pub async fn list_by_user(conn: &mut SqliteConnection, user_id: &str) -> anyhow::Result<Vec<Answer>> {
    let rows = sqlx::query_as::<_, Answer>(
        r#"
        SELECT id, question_id, user_id, answer, created_at, updated_at
        FROM answers
        WHERE user_id = ?
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await
    .context("list answers by user")?;
    Ok(rows)
}
