use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, info, instrument};

use super::{
    dto::{AnswerResponse, CreateAnswerRequest},
    repo,
};
use crate::{db::utc_now, error::ApiError, state::AppState};

pub fn answer_routes() -> Router<AppState> {
    Router::new()
        .route("/answers", post(create_answer))
        .route("/answers/:user_id", get(list_user_answers))
}

/// Stores the answer as given; the question and user are not looked up.
#[instrument(skip(state, payload))]
pub async fn create_answer(
    State(state): State<AppState>,
    Json(payload): Json<CreateAnswerRequest>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let now = utc_now()?;
    let mut conn = state.db.acquire().await?;
    let answer = repo::insert(
        &mut conn,
        payload.question_id,
        &payload.user_id,
        &payload.answer,
        &now,
    )
    .await?;

    info!(
        answer_id = answer.id,
        question_id = answer.question_id,
        user_id = %answer.user_id,
        "answer saved"
    );
    Ok(Json(answer.into()))
}

#[instrument(skip(state))]
pub async fn list_user_answers(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<AnswerResponse>>, ApiError> {
    let mut conn = state.db.acquire().await?;
    let rows = repo::list_by_user(&mut conn, &user_id).await?;
    debug!(count = rows.len(), "answers listed");
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
