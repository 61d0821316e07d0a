//! Handlers for adding, editing, and deleting job applications.
//!
//! Every handler is scoped to the signed-in account; a record id that
//! belongs to someone else gets the same 404 as one that does not exist.

use axum::extract::{FromRequestParts, Path, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Form;
use chrono::Utc;
use jobtrack_core::types::DbId;
use jobtrack_core::validation::DATE_FORMAT;

use super::dashboard::DASHBOARD_PATH;
use super::form_failure;
use crate::cookies::redirect_with_cookies;
use crate::error::{AppError, AppResult};
use crate::flash::{Flash, IncomingFlash};
use crate::forms::JobForm;
use crate::middleware::session::SessionAccount;
use crate::services::applications;
use crate::state::AppState;
use crate::views;
use crate::views::jobs::JobFormMode;

pub const JOB_ADDED: &str = "Job application added successfully!";
pub const JOB_UPDATED: &str = "Job application updated successfully!";
pub const JOB_DELETED: &str = "Job application deleted successfully!";

/// The `{id}` segment of a job URL.
///
/// A segment that is not a valid id gets the same 404 page as an id that
/// does not exist.
#[derive(Debug, Clone, Copy)]
pub struct JobId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for JobId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<DbId>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Unusable job id in path");
                Err(AppError::PageNotFound)
            }
        }
    }
}

/// GET /add_job
///
/// The date field starts at today's date.
pub async fn add_job_form(session: SessionAccount, flash: IncomingFlash) -> Response {
    let form = JobForm {
        application_date: Utc::now().date_naive().format(DATE_FORMAT).to_string(),
        ..JobForm::default()
    };
    let page = views::jobs::job_form_page(JobFormMode::Add, &session.name, &form, flash.notice());
    flash.render(StatusCode::OK, page)
}

/// POST /add_job
pub async fn add_job(
    session: SessionAccount,
    State(state): State<AppState>,
    Form(form): Form<JobForm>,
) -> Response {
    match applications::create(&state.pool, session.account_id, &form.fields()).await {
        Ok(_) => redirect_with_cookies(DASHBOARD_PATH, &[Flash::success(JOB_ADDED).cookie()]),
        Err(err) => form_failure(err, |notice| {
            views::jobs::job_form_page(JobFormMode::Add, &session.name, &form, Some(notice))
        }),
    }
}

/// GET /edit_job/{id}
pub async fn edit_job_form(
    session: SessionAccount,
    State(state): State<AppState>,
    JobId(job_id): JobId,
    flash: IncomingFlash,
) -> AppResult<Response> {
    let job = applications::get_owned(&state.pool, session.account_id, job_id).await?;

    let page = views::jobs::job_form_page(
        JobFormMode::Edit(job.id),
        &session.name,
        &JobForm::from(&job),
        flash.notice(),
    );
    Ok(flash.render(StatusCode::OK, page))
}

/// POST /edit_job/{id}
///
/// Overwrites every field with the submitted values.
pub async fn edit_job(
    session: SessionAccount,
    State(state): State<AppState>,
    JobId(job_id): JobId,
    Form(form): Form<JobForm>,
) -> Response {
    match applications::update(&state.pool, session.account_id, job_id, &form.fields()).await {
        Ok(_) => redirect_with_cookies(DASHBOARD_PATH, &[Flash::success(JOB_UPDATED).cookie()]),
        Err(err) => form_failure(err, |notice| {
            views::jobs::job_form_page(
                JobFormMode::Edit(job_id),
                &session.name,
                &form,
                Some(notice),
            )
        }),
    }
}

/// POST /delete_job/{id}
pub async fn delete_job(
    session: SessionAccount,
    State(state): State<AppState>,
    JobId(job_id): JobId,
) -> Response {
    match applications::delete(&state.pool, session.account_id, job_id).await {
        Ok(()) => redirect_with_cookies(DASHBOARD_PATH, &[Flash::success(JOB_DELETED).cookie()]),
        Err(err) => match err.form_notice() {
            Some((_, message)) => {
                redirect_with_cookies(DASHBOARD_PATH, &[Flash::error(message).cookie()])
            }
            None => err.into_response(),
        },
    }
}
