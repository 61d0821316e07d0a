//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row and the input DTO used for writes.

pub mod account;
pub mod job_application;
