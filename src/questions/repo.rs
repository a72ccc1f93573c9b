use anyhow::Context;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

use super::{
    repo_types::{Question, QuestionFilter},
    seed::SAMPLE_QUESTIONS,
};

/// Questions matching every present filter, in id order.
pub async fn list(
    conn: &mut SqliteConnection,
    filter: QuestionFilter<'_>,
) -> anyhow::Result<Vec<Question>> {
    let mut qb = QueryBuilder::<Sqlite>::new(
        "SELECT id, question, category, difficulty, description, created_at, updated_at \
         FROM questions",
    );
    let mut sep = " WHERE ";
    if let Some(category) = filter.category {
        qb.push(sep).push("category = ").push_bind(category);
        sep = " AND ";
    }
    if let Some(difficulty) = filter.difficulty {
        qb.push(sep).push("difficulty = ").push_bind(difficulty);
    }
    qb.push(" ORDER BY id");

    let rows = qb
        .build_query_as::<Question>()
        .fetch_all(&mut *conn)
        .await
        .context("list questions")?;
    Ok(rows)
}

/// Insert the sample set when the table is empty. Returns how many rows were
/// written.
pub async fn seed_if_empty(db: &SqlitePool, now: &str) -> anyhow::Result<usize> {
    let mut tx = db.begin().await.context("begin tx")?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
        .fetch_one(&mut *tx)
        .await
        .context("count questions")?;
    if count > 0 {
        return Ok(0);
    }

    for &(question, category, difficulty, description) in SAMPLE_QUESTIONS {
        sqlx::query(
            r#"
            INSERT INTO questions (question, category, difficulty, description, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(question)
        .bind(category)
        .bind(difficulty)
        .bind(description)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .context("insert sample question")?;
    }
    tx.commit().await.context("commit tx")?;

    Ok(SAMPLE_QUESTIONS.len())
}
