//! Input validation for account registration and job application forms.
//!
//! Every failure is a [`CoreError::Validation`] whose message is shown to the
//! user as-is next to the form they submitted.

use chrono::NaiveDate;

use crate::application_status::ApplicationStatus;
use crate::error::CoreError;
use crate::types::CalendarDate;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Accepted format for application dates (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Maximum length of an account display name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of an account email.
pub const MAX_EMAIL_LENGTH: usize = 120;

/// Maximum length of a job title or company name.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length of a job posting URL.
pub const MAX_URL_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// Trim a required text field and check it is non-empty and within `max_len`
/// characters.
pub fn require_text(field: &str, value: &str, max_len: usize) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required.")));
    }
    if trimmed.chars().count() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max_len} characters."
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field; blank input becomes `None`.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Trim an email address and check it is plausibly shaped.
///
/// Comparison elsewhere is exact-match, so no case folding happens here.
pub fn normalize_email(value: &str) -> Result<String, CoreError> {
    let email = require_text("Email", value, MAX_EMAIL_LENGTH)?;
    if !email.contains('@') {
        return Err(CoreError::Validation(
            "Email must be a valid email address.".into(),
        ));
    }
    Ok(email)
}

/// Check that the two password entries agree and are not empty.
pub fn check_password_confirmation(password: &str, confirm: &str) -> Result<(), CoreError> {
    if password.is_empty() {
        return Err(CoreError::Validation("Password is required.".into()));
    }
    if password != confirm {
        return Err(CoreError::Validation("Passwords do not match!".into()));
    }
    Ok(())
}

/// Parse an application date in `YYYY-MM-DD` form.
///
/// A blank value falls back to `today`.
pub fn parse_application_date(raw: &str, today: CalendarDate) -> Result<CalendarDate, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(today);
    }
    let invalid = || {
        CoreError::Validation(format!(
            "Invalid application date '{trimmed}'. Expected YYYY-MM-DD."
        ))
    };
    // `%Y` alone accepts signed and short years.
    if !is_iso_date_shape(trimmed) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())
}

/// Exactly `DDDD-DD-DD` with ASCII digits.
fn is_iso_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse a status from a form value. A blank value means the default.
pub fn parse_status(raw: &str) -> Result<ApplicationStatus, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(ApplicationStatus::default());
    }
    ApplicationStatus::from_str_value(trimmed).map_err(CoreError::Validation)
}

/// True for `http://` and `https://` URLs, ignoring scheme case.
fn has_web_scheme(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

// ---------------------------------------------------------------------------
// Job application
// ---------------------------------------------------------------------------

/// Raw job application fields as submitted by a form.
#[derive(Debug, Clone, Copy)]
pub struct JobApplicationFields<'a> {
    pub title: &'a str,
    pub company: &'a str,
    pub status: &'a str,
    pub application_date: &'a str,
    pub job_url: &'a str,
    pub notes: &'a str,
}

/// A validated job application, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobApplicationDraft {
    pub title: String,
    pub company: String,
    pub status: ApplicationStatus,
    pub application_date: CalendarDate,
    pub job_url: Option<String>,
    pub notes: Option<String>,
}

/// Validate submitted job application fields.
///
/// `today` is used when the date field is left blank.
pub fn validate_job_application(
    fields: &JobApplicationFields<'_>,
    today: CalendarDate,
) -> Result<JobApplicationDraft, CoreError> {
    let title = require_text("Title", fields.title, MAX_TITLE_LENGTH)?;
    let company = require_text("Company", fields.company, MAX_TITLE_LENGTH)?;
    let status = parse_status(fields.status)?;
    let application_date = parse_application_date(fields.application_date, today)?;

    let job_url = optional_text(fields.job_url);
    if let Some(url) = &job_url {
        if url.chars().count() > MAX_URL_LENGTH {
            return Err(CoreError::Validation(format!(
                "Job URL must be at most {MAX_URL_LENGTH} characters."
            )));
        }
        if !has_web_scheme(url) {
            return Err(CoreError::Validation(
                "Job URL must start with http:// or https://.".into(),
            ));
        }
    }

    Ok(JobApplicationDraft {
        title,
        company,
        status,
        application_date,
        job_url,
        notes: optional_text(fields.notes),
    })
}
