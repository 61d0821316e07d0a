//! Request handlers for the tracker's HTML pages.
//!
//! Form handlers delegate to [`crate::services`] and report recoverable
//! failures by rendering the same form again with a notice. Protected
//! handlers take a [`SessionAccount`](crate::middleware::session::SessionAccount)
//! so they never run without a signed-in account.

pub mod auth;
pub mod dashboard;
pub mod jobs;

use axum::response::{Html, IntoResponse, Response};

use crate::error::AppError;
use crate::flash::Flash;

/// Answer a failed form submission.
///
/// Errors with a form notice re-render the form through `render`; anything
/// else (a missing or foreign record) becomes the error page.
fn form_failure<F>(err: AppError, render: F) -> Response
where
    F: FnOnce(&Flash) -> Html<String>,
{
    match err.form_notice() {
        Some((status, message)) => (status, render(&Flash::error(message))).into_response(),
        None => err.into_response(),
    }
}
