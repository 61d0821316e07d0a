//! Domain types and pure logic for the job application tracker.
//!
//! This crate has no database or HTTP dependencies. Callers load data and
//! pass it in; everything here is synchronous and side-effect free.

pub mod application_status;
pub mod dashboard;
pub mod error;
pub mod types;
pub mod validation;
