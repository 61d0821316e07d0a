//! Route definitions for account and session pages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// GET  /signup          -> signup_form
/// POST /signup          -> signup
/// GET  /signin          -> signin_form
/// POST /signin          -> signin
/// GET  /signout         -> signout
/// POST /account/delete  -> delete_account (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", get(auth::signup_form).post(auth::signup))
        .route("/signin", get(auth::signin_form).post(auth::signin))
        .route("/signout", get(auth::signout))
        .route("/account/delete", post(auth::delete_account))
}
