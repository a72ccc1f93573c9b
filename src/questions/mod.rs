use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod seed;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::question_routes())
}
