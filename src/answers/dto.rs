use serde::{Deserialize, Serialize};

use super::repo_types::Answer;

/// Request body for `POST /answers`.
#[derive(Debug, Deserialize)]
pub struct CreateAnswerRequest {
    #[serde(rename = "questionId")]
    pub question_id: i64,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub answer: String,
}

/// Ids are camelCase on the wire, timestamps are not.
#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub id: i64,
    #[serde(rename = "questionId")]
    pub question_id: i64,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub answer: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Answer> for AnswerResponse {
    fn from(a: Answer) -> Self {
        Self {
            id: a.id,
            question_id: a.question_id,
            user_id: a.user_id,
            answer: a.answer,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}
