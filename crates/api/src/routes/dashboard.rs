//! Route definitions for the landing page and dashboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// ```text
/// GET /           -> index
/// GET /dashboard  -> dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/dashboard", get(dashboard::dashboard))
}
