//! Account registration, credential checks, and account removal.

use jobtrack_core::error::CoreError;
use jobtrack_core::types::DbId;
use jobtrack_core::validation::{self, MAX_NAME_LENGTH};
use jobtrack_db::models::account::{Account, CreateAccount};
use jobtrack_db::repositories::AccountRepo;
use sqlx::PgPool;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};

/// Shown when the email is already registered.
pub const EMAIL_TAKEN: &str = "User with this email already exists!";

/// Shown for any failed sign-in, whichever half was wrong.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password!";

/// Raw registration input.
#[derive(Debug, Clone, Copy)]
pub struct Registration<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Register a new account.
///
/// Fails with `Validation` on blank fields or mismatched passwords and with
/// `Conflict` if the email is already taken (including a concurrent insert
/// that wins the unique constraint).
pub async fn register(pool: &PgPool, input: &Registration<'_>) -> AppResult<Account> {
    let name = validation::require_text("Name", input.name, MAX_NAME_LENGTH)?;
    let email = validation::normalize_email(input.email)?;
    validation::check_password_confirmation(input.password, input.confirm_password)?;

    if AccountRepo::find_by_email(pool, &email).await?.is_some() {
        return Err(CoreError::Conflict(EMAIL_TAKEN.into()).into());
    }

    let password_hash = hash_password(input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let account = AccountRepo::create(
        pool,
        &CreateAccount {
            name,
            email,
            password_hash,
        },
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Core(CoreError::Conflict(EMAIL_TAKEN.into()))
        }
        other => AppError::Database(other),
    })?;

    tracing::info!(account_id = account.id, "Account registered");
    Ok(account)
}

/// Check an email/password pair.
///
/// An unknown email and a wrong password produce the same `Unauthorized`
/// error.
pub async fn authenticate(pool: &PgPool, email: &str, password: &str) -> AppResult<Account> {
    let Some(account) = AccountRepo::find_by_email(pool, email.trim()).await? else {
        return Err(invalid_credentials());
    };

    let password_valid = verify_password(password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::debug!(account_id = account.id, "Password mismatch on sign-in");
        return Err(invalid_credentials());
    }

    Ok(account)
}

/// Delete an account and every job application it owns.
pub async fn delete_account(pool: &PgPool, account_id: DbId) -> AppResult<()> {
    let deleted = AccountRepo::delete(pool, account_id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Account",
            id: account_id,
        }
        .into());
    }
    tracing::info!(account_id, "Account deleted");
    Ok(())
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()))
}
