//! User entity model.

use kbase_core::types::DbId;

/// A registered user. Created at seed time only; there is no signup flow.
///
/// Deliberately not `Serialize`: the password hash must never reach a
/// client. The API layer exposes a `UserInfo` projection instead.
#[derive(Debug, Clone)]
pub struct User {
    pub id: DbId,
    pub username: String,
    /// Argon2id hash in PHC string format.
    pub password_hash: String,
    pub is_admin: bool,
}

/// Input for creating a user. The caller hashes the password.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}
