//! Route definitions for job application pages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::jobs;
use crate::state::AppState;

/// All routes here require a session.
///
/// ```text
/// GET  /add_job          -> add_job_form
/// POST /add_job          -> add_job
/// GET  /edit_job/{id}    -> edit_job_form
/// POST /edit_job/{id}    -> edit_job
/// POST /delete_job/{id}  -> delete_job
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add_job", get(jobs::add_job_form).post(jobs::add_job))
        .route("/edit_job/{id}", get(jobs::edit_job_form).post(jobs::edit_job))
        .route("/delete_job/{id}", post(jobs::delete_job))
}
