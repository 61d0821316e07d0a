pub mod auth;
pub mod dashboard;
pub mod health;
pub mod jobs;

use axum::Router;

use crate::state::AppState;

/// Build the page route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                        redirect to dashboard or sign-in
/// /dashboard               list + counts (requires session)
///
/// /signup                  form, register (public)
/// /signin                  form, sign in (public)
/// /signout                 end session (public)
/// /account/delete          delete account (POST, requires session)
///
/// /add_job                 form, create (requires session)
/// /edit_job/{id}           form, update (requires session)
/// /delete_job/{id}         delete (POST, requires session)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(dashboard::router())
        .merge(auth::router())
        .merge(jobs::router())
}
