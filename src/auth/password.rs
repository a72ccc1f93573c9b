use sha2::{Digest, Sha256};

/// Hex SHA-256 of the password.
///
/// Unsalted and deterministic: the same password always yields the same
/// stored value, across users too. This is a known weakness kept for
/// compatibility with rows already in the `users` table; switching to a
/// salted KDF would lock every existing account out.
pub fn hash_password(plain: &str) -> String {
    format!("{:x}", Sha256::digest(plain.as_bytes()))
}
