use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, instrument};

use super::{
    dto::{QuestionQuery, QuestionResponse},
    repo,
    repo_types::QuestionFilter,
};
use crate::{error::ApiError, state::AppState};

pub fn question_routes() -> Router<AppState> {
    Router::new().route("/questions", get(list_questions))
}

#[instrument(skip(state))]
pub async fn list_questions(
    State(state): State<AppState>,
    Query(q): Query<QuestionQuery>,
) -> Result<Json<Vec<QuestionResponse>>, ApiError> {
    let filter = QuestionFilter::new(q.category.as_deref(), q.difficulty.as_deref());
    let mut conn = state.db.acquire().await?;
    let rows = repo::list(&mut conn, filter).await?;
    debug!(count = rows.len(), ?filter, "questions listed");
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(category: Option<&str>, difficulty: Option<&str>) -> Query<QuestionQuery> {
        Query(QuestionQuery {
            category: category.map(String::from),
            difficulty: difficulty.map(String::from),
        })
    }

    #[tokio::test]
    async fn both_filters_must_match() {
        let (state, _dir) = AppState::for_tests().await;
        let Json(rows) = list_questions(State(state), query(Some("Networking"), Some("Medium")))
            .await
            .expect("list");
        assert_eq!(rows.len(), 2);
        assert!(rows
            .iter()
            .all(|q| q.category == "Networking" && q.difficulty == "Medium"));
    }

    #[tokio::test]
    async fn unknown_category_yields_empty_list() {
        let (state, _dir) = AppState::for_tests().await;
        let Json(rows) = list_questions(State(state), query(Some("Quantum"), None))
            .await
            .expect("list");
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn response_carries_every_field() {
        let (state, _dir) = AppState::for_tests().await;
        let Json(rows) = list_questions(State(state), query(None, None)).await.expect("list");
        let json = serde_json::to_value(&rows[0]).unwrap();
        for key in [
            "id",
            "question",
            "category",
            "difficulty",
            "description",
            "created_at",
            "updated_at",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
