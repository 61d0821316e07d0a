//! Store operations behind the HTTP handlers.
//!
//! - [`accounts`] -- registration, authentication, account removal.
//! - [`applications`] -- job application CRUD scoped to the acting account.
//!
//! Handlers stay thin: they resolve the session, call one operation here, and
//! turn the result into a page or a redirect.

pub mod accounts;
pub mod applications;
