//! Job application entity model and DTOs.

use jobtrack_core::application_status::ApplicationStatus;
use jobtrack_core::types::{CalendarDate, DbId, Timestamp};
use jobtrack_core::validation::JobApplicationDraft;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `job_applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobApplication {
    pub id: DbId,
    pub account_id: DbId,
    pub title: String,
    pub company: String,
    /// One of the values in `jobtrack_core::application_status::VALID_STATUSES`.
    pub status: String,
    pub application_date: CalendarDate,
    pub job_url: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

impl JobApplication {
    /// Parsed status. Rows are constrained by a check constraint, so an
    /// unknown value only appears if the schema drifts; it reads as the default.
    pub fn status(&self) -> ApplicationStatus {
        ApplicationStatus::from_str_value(&self.status).unwrap_or_default()
    }
}

/// DTO for inserting or fully overwriting a job application.
///
/// Updates replace every mutable field, so the same shape serves both.
#[derive(Debug, Clone)]
pub struct JobApplicationInput {
    pub title: String,
    pub company: String,
    pub status: String,
    pub application_date: CalendarDate,
    pub job_url: Option<String>,
    pub notes: Option<String>,
}

impl From<JobApplicationDraft> for JobApplicationInput {
    fn from(draft: JobApplicationDraft) -> Self {
        Self {
            title: draft.title,
            company: draft.company,
            status: draft.status.as_str().to_string(),
            application_date: draft.application_date,
            job_url: draft.job_url,
            notes: draft.notes,
        }
    }
}
