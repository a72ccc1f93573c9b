use serde::{Deserialize, Serialize};

use super::repo_types::Question;

/// `GET /questions` query string.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub question: String,
    pub category: String,
    pub difficulty: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            category: q.category,
            difficulty: q.difficulty,
            description: q.description,
            created_at: q.created_at,
            updated_at: q.updated_at,
        }
    }
}
