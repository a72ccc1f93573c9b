use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the database, minus the stored password hash.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Values for a user row about to be inserted.
#[derive(Debug)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str, // SHA-256 hex
    pub created_at: &'a str,
}
