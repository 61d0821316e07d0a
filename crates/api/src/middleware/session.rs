//! Session gate: cookie-backed sign-in state for Axum handlers.
//!
//! Protected handlers take a [`SessionAccount`] argument. When the request
//! has no valid session, or the session's account no longer exists, the
//! extractor rejects with a redirect to `/signin`, so the handler body (and
//! any side effect in it) never runs.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use cookie::Cookie;
use jobtrack_core::types::DbId;
use jobtrack_db::models::account::Account;
use jobtrack_db::repositories::AccountRepo;

use crate::auth::session_token::{issue_session_token, validate_session_token, SessionConfig};
use crate::cookies::{
    clear_session_cookie, read_cookie, redirect_with_cookies, session_cookie, SESSION_COOKIE_NAME,
};
use crate::error::{AppError, AppResult};
use crate::flash::Flash;
use crate::state::AppState;

/// Where unauthenticated requests are sent.
pub const SIGNIN_PATH: &str = "/signin";

/// Shown after being bounced to the sign-in page.
pub const LOGIN_REQUIRED: &str = "Please log in to access this page.";

/// The account acting on this request, resolved from the session cookie.
///
/// ```ignore
/// async fn my_handler(session: SessionAccount) -> AppResult<Html<String>> {
///     tracing::info!(account_id = session.account_id, "handling request");
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionAccount {
    /// The account's internal database id.
    pub account_id: DbId,
    /// The account's current display name.
    pub name: String,
}

/// Redirect to sign-in with a notice.
#[derive(Debug)]
pub struct SigninRedirect {
    secure: bool,
}

impl IntoResponse for SigninRedirect {
    fn into_response(self) -> Response {
        redirect_with_cookies(
            SIGNIN_PATH,
            &[
                clear_session_cookie(self.secure),
                Flash::error(LOGIN_REQUIRED).cookie(),
            ],
        )
    }
}

/// Rejection for protected routes.
#[derive(Debug)]
pub enum SessionRejection {
    /// No usable session; send the browser to sign in.
    SignedOut(SigninRedirect),
    /// The account lookup itself failed.
    Store(AppError),
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        match self {
            Self::SignedOut(redirect) => redirect.into_response(),
            Self::Store(err) => err.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for SessionAccount {
    type Rejection = SessionRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let config = &state.config.session;
        let reject = || {
            SessionRejection::SignedOut(SigninRedirect {
                secure: config.cookie_secure,
            })
        };

        let token = read_cookie(&parts.headers, SESSION_COOKIE_NAME).ok_or_else(reject)?;

        let claims = validate_session_token(&token, config).map_err(|e| {
            tracing::debug!(error = %e, "Rejected session token");
            reject()
        })?;

        // A token outlives its account if the account is deleted.
        let account = AccountRepo::find_by_id(&state.pool, claims.sub)
            .await
            .map_err(|e| SessionRejection::Store(e.into()))?
            .ok_or_else(|| {
                tracing::debug!(account_id = claims.sub, "Session for a deleted account");
                reject()
            })?;

        Ok(SessionAccount {
            account_id: account.id,
            name: account.name,
        })
    }
}

/// Lets public pages ask "is anyone signed in?" without redirecting.
impl OptionalFromRequestParts<AppState> for SessionAccount {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(
            <SessionAccount as FromRequestParts<AppState>>::from_request_parts(parts, state)
                .await
                .ok(),
        )
    }
}

/// Start a session for a freshly authenticated account.
///
/// Returns the cookie to set on the response.
pub fn start_session(account: &Account, config: &SessionConfig) -> AppResult<Cookie<'static>> {
    let token = issue_session_token(account.id, &account.name, config)
        .map_err(|e| AppError::InternalError(format!("Session token error: {e}")))?;

    tracing::info!(account_id = account.id, "Session started");
    Ok(session_cookie(token, config))
}

/// End the current session. Safe to call with no session present.
pub fn end_session(config: &SessionConfig) -> Cookie<'static> {
    clear_session_cookie(config.cookie_secure)
}
