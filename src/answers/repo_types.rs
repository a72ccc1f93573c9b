use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Answer record in the database. Neither reference is checked on insert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub user_id: String,
    pub answer: String,
    pub created_at: String,
    pub updated_at: String,
}
