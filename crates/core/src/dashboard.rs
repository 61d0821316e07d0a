//! Dashboard aggregate counts.
//!
//! The summary is computed from an already-loaded list of applications;
//! callers pass the status strings in, one per application.

use serde::Serialize;

use crate::application_status::{STATUS_APPLIED, STATUS_INTERVIEW, STATUS_OFFER};

/// Counts shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// Number of applications in the sequence.
    pub total: usize,
    /// Applications still in the `applied` state.
    pub pending: usize,
    pub interviews: usize,
    pub offers: usize,
}

/// Summarize a sequence of application statuses in a single pass.
///
/// Statuses outside the counted set (e.g. `rejected`) only contribute to
/// `total`.
pub fn summarize<'a, I>(statuses: I) -> DashboardSummary
where
    I: IntoIterator<Item = &'a str>,
{
    statuses
        .into_iter()
        .fold(DashboardSummary::default(), |mut acc, status| {
            acc.total += 1;
            match status {
                STATUS_APPLIED => acc.pending += 1,
                STATUS_INTERVIEW => acc.interviews += 1,
                STATUS_OFFER => acc.offers += 1,
                _ => {}
            }
            acc
        })
}
