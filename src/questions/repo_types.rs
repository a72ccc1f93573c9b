use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Question record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub category: String,
    pub difficulty: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Filters to AND together when listing; `None` means unconstrained.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuestionFilter<'a> {
    pub category: Option<&'a str>,
    pub difficulty: Option<&'a str>,
}

impl<'a> QuestionFilter<'a> {
    pub fn new(category: Option<&'a str>, difficulty: Option<&'a str>) -> Self {
        Self {
            category: active(category),
            difficulty: active(difficulty),
        }
    }
}

/// Empty values and the `all` sentinel (any case) mean "no filter".
fn active(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}
