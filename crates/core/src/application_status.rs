//! Job application status vocabulary.
//!
//! These must match the `ck_job_applications_status` check constraint in
//! `20260101000002_create_job_applications_table.sql`.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// The application has been sent and is awaiting a response.
pub const STATUS_APPLIED: &str = "applied";

/// The employer has invited the applicant to interview.
pub const STATUS_INTERVIEW: &str = "interview";

/// An offer has been extended.
pub const STATUS_OFFER: &str = "offer";

/// The application was turned down.
pub const STATUS_REJECTED: &str = "rejected";

/// All valid status strings, in the order they are offered in forms.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_APPLIED,
    STATUS_INTERVIEW,
    STATUS_OFFER,
    STATUS_REJECTED,
];

// ---------------------------------------------------------------------------
// Enum
// ---------------------------------------------------------------------------

/// Where a job application currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    /// Every status, in form order.
    pub const ALL: [Self; 4] = [
        Self::Applied,
        Self::Interview,
        Self::Offer,
        Self::Rejected,
    ];

    /// Convert from a database or form string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            STATUS_APPLIED => Ok(Self::Applied),
            STATUS_INTERVIEW => Ok(Self::Interview),
            STATUS_OFFER => Ok(Self::Offer),
            STATUS_REJECTED => Ok(Self::Rejected),
            _ => Err(format!(
                "Invalid status '{s}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => STATUS_APPLIED,
            Self::Interview => STATUS_INTERVIEW,
            Self::Offer => STATUS_OFFER,
            Self::Rejected => STATUS_REJECTED,
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Rejected => "Rejected",
        }
    }
}
