//! Job application tracker server library.
//!
//! Exposes the building blocks (config, state, error handling, session gate,
//! services, views, routes) so integration tests and the binary entrypoint
//! can both access them.

pub mod auth;
pub mod config;
pub mod cookies;
pub mod error;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
pub mod views;
