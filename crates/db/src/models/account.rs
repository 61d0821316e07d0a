//! Account entity model and DTOs.

use jobtrack_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full row from the `accounts` table.
///
/// Contains the password hash -- never render or serialize this directly.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new account. The password is already hashed.
#[derive(Debug)]
pub struct CreateAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
