//! Form payloads (`application/x-www-form-urlencoded`).
//!
//! Every field defaults to empty so a missing field is reported by
//! validation with a readable message instead of an extractor rejection.
//! The same structs carry already-entered values back into re-rendered forms.

use jobtrack_core::validation::{JobApplicationFields, DATE_FORMAT};
use jobtrack_db::models::job_application::JobApplication;
use serde::Deserialize;

use crate::services::accounts::Registration;

/// `POST /signup`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn registration(&self) -> Registration<'_> {
        Registration {
            name: &self.name,
            email: &self.email,
            password: &self.password,
            confirm_password: &self.confirm_password,
        }
    }
}

/// `POST /signin`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SigninForm {
    pub email: String,
    pub password: String,
}

/// `POST /add_job` and `POST /edit_job/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub status: String,
    pub application_date: String,
    pub job_url: String,
    pub notes: String,
}

impl JobForm {
    pub fn fields(&self) -> JobApplicationFields<'_> {
        JobApplicationFields {
            title: &self.title,
            company: &self.company,
            status: &self.status,
            application_date: &self.application_date,
            job_url: &self.job_url,
            notes: &self.notes,
        }
    }
}

impl From<&JobApplication> for JobForm {
    fn from(job: &JobApplication) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            status: job.status.clone(),
            application_date: job.application_date.format(DATE_FORMAT).to_string(),
            job_url: job.job_url.clone().unwrap_or_default(),
            notes: job.notes.clone().unwrap_or_default(),
        }
    }
}
