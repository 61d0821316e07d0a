//! Request guards.
//!
//! - [`session::SessionAccount`] -- resolves the signed-in account from the
//!   session cookie, or redirects to sign-in.

pub mod session;
