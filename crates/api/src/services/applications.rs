//! Job application operations, always scoped to the acting account.
//!
//! A record owned by another account is reported exactly like a missing one
//! (`NotFound`), so callers cannot tell whether another account's record exists.

use chrono::Utc;
use jobtrack_core::error::CoreError;
use jobtrack_core::types::DbId;
use jobtrack_core::validation::{validate_job_application, JobApplicationFields};
use jobtrack_db::models::job_application::{JobApplication, JobApplicationInput};
use jobtrack_db::repositories::JobApplicationRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

const ENTITY: &str = "JobApplication";

/// The account's applications, newest application date first.
pub async fn list(pool: &PgPool, account_id: DbId) -> AppResult<Vec<JobApplication>> {
    Ok(JobApplicationRepo::list_for_account(pool, account_id).await?)
}

/// Validate and insert a new application owned by `account_id`.
pub async fn create(
    pool: &PgPool,
    account_id: DbId,
    fields: &JobApplicationFields<'_>,
) -> AppResult<JobApplication> {
    let draft = validate_job_application(fields, Utc::now().date_naive())?;
    let job = JobApplicationRepo::create(pool, account_id, &JobApplicationInput::from(draft)).await?;

    tracing::info!(job_id = job.id, account_id, "Job application created");
    Ok(job)
}

/// Fetch an application only if `account_id` owns it.
pub async fn get_owned(pool: &PgPool, account_id: DbId, job_id: DbId) -> AppResult<JobApplication> {
    JobApplicationRepo::find_owned(pool, account_id, job_id)
        .await?
        .ok_or_else(|| not_found(job_id))
}

/// Overwrite every mutable field of an owned application.
///
/// Ownership is checked before the input is validated, so a foreign id is
/// `NotFound` even when the submitted fields are also invalid.
pub async fn update(
    pool: &PgPool,
    account_id: DbId,
    job_id: DbId,
    fields: &JobApplicationFields<'_>,
) -> AppResult<JobApplication> {
    let existing = get_owned(pool, account_id, job_id).await?;
    let draft = validate_job_application(fields, existing.application_date)?;

    let job = JobApplicationRepo::update_owned(
        pool,
        account_id,
        job_id,
        &JobApplicationInput::from(draft),
    )
    .await?
    .ok_or_else(|| not_found(job_id))?;

    tracing::info!(job_id, account_id, "Job application updated");
    Ok(job)
}

/// Remove an owned application.
pub async fn delete(pool: &PgPool, account_id: DbId, job_id: DbId) -> AppResult<()> {
    if !JobApplicationRepo::delete_owned(pool, account_id, job_id).await? {
        return Err(not_found(job_id));
    }

    tracing::info!(job_id, account_id, "Job application deleted");
    Ok(())
}

fn not_found(id: DbId) -> AppError {
    CoreError::NotFound { entity: ENTITY, id }.into()
}
