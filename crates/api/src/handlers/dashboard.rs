//! Handlers for the landing redirect and the dashboard.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Redirect, Response};
use jobtrack_core::dashboard::summarize;

use crate::error::AppResult;
use crate::flash::IncomingFlash;
use crate::middleware::session::{SessionAccount, SIGNIN_PATH};
use crate::services::applications;
use crate::state::AppState;
use crate::views;

pub const DASHBOARD_PATH: &str = "/dashboard";

/// GET /
pub async fn index(session: Option<SessionAccount>) -> Redirect {
    match session {
        Some(_) => Redirect::to(DASHBOARD_PATH),
        None => Redirect::to(SIGNIN_PATH),
    }
}

/// GET /dashboard
///
/// Lists the account's applications and the counts derived from them.
pub async fn dashboard(
    session: SessionAccount,
    State(state): State<AppState>,
    flash: IncomingFlash,
) -> AppResult<Response> {
    let jobs = applications::list(&state.pool, session.account_id).await?;
    let summary = summarize(jobs.iter().map(|job| job.status.as_str()));

    tracing::debug!(
        account_id = session.account_id,
        total = summary.total,
        "Rendering dashboard"
    );

    let page = views::jobs::dashboard_page(&session.name, &summary, &jobs, flash.notice());
    Ok(flash.render(StatusCode::OK, page))
}
