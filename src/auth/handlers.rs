use axum::{extract::State, routing::post, Json, Router};
use sqlx::SqliteConnection;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::{
        dto::{LoginRequest, RegisterRequest, UserResponse},
        password::hash_password,
        repo_types::{NewUser, User},
    },
    db::{is_unique_violation, utc_now},
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let mut conn = state.db.acquire().await?;

    if User::find_by_email(&mut conn, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::EmailTaken);
    }

    let id = Uuid::new_v4().to_string();
    let hash = hash_password(&payload.password);
    let now = utc_now()?;

    let new = NewUser {
        id: &id,
        name: &payload.name,
        email: &payload.email,
        password_hash: &hash,
        created_at: &now,
    };
    let user = insert_user(&mut conn, new).await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(Json(user.into()))
}

/// Insert, reporting a UNIQUE hit on `email` (a registration that raced past
/// the lookup) as `EmailTaken`.
async fn insert_user(conn: &mut SqliteConnection, new: NewUser<'_>) -> Result<User, ApiError> {
    let email = new.email;
    match User::create(conn, new).await {
        Ok(u) => Ok(u),
        Err(e) if is_unique_violation(&e) => {
            warn!(%email, "email already registered");
            Err(ApiError::EmailTaken)
        }
        Err(e) => {
            error!(error = %e, "create user failed");
            Err(e.into())
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let mut conn = state.db.acquire().await?;
    let hash = hash_password(&payload.password);

    let Some(user) = User::find_by_credentials(&mut conn, &payload.email, &hash).await? else {
        warn!(email = %payload.email, "login rejected");
        return Err(ApiError::InvalidCredentials);
    };

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(user.into()))
}
