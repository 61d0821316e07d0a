//! One-shot notices carried across a redirect.
//!
//! A handler that redirects attaches a [`Flash`] as a short-lived cookie; the
//! next page rendered reads it through [`IncomingFlash`] and clears it.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use cookie::Cookie;

use crate::cookies::{
    append_cookie, clear_flash_cookie, flash_cookie, read_cookie, FLASH_COOKIE_NAME,
};

/// Severity of a flash notice, used as a CSS class suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    fn from_str_value(s: &str) -> Option<Self> {
        match s {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// A notice shown once at the top of the next page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    /// Encode as `level:message`.
    pub fn encode(&self) -> String {
        format!("{}:{}", self.level.as_str(), self.message)
    }

    /// Decode a value produced by [`Flash::encode`]. Anything else is ignored.
    pub fn decode(raw: &str) -> Option<Self> {
        let (level, message) = raw.split_once(':')?;
        let level = FlashLevel::from_str_value(level)?;
        (!message.is_empty()).then(|| Self {
            level,
            message: message.to_string(),
        })
    }

    /// The cookie that carries this notice to the next page.
    pub fn cookie(&self) -> Cookie<'static> {
        flash_cookie(self.encode())
    }
}

/// The flash notice pending for this request, if any.
///
/// Extraction never fails. Pages built from it should be returned through
/// [`IncomingFlash::render`] so the cookie is cleared once shown.
#[derive(Debug, Default)]
pub struct IncomingFlash(pub Option<Flash>);

impl IncomingFlash {
    pub fn notice(&self) -> Option<&Flash> {
        self.0.as_ref()
    }

    /// Build the page response, clearing the flash cookie if one was read.
    pub fn render(self, status: StatusCode, page: Html<String>) -> Response {
        let mut response = (status, page).into_response();
        if self.0.is_some() {
            append_cookie(&mut response, &clear_flash_cookie());
        }
        response
    }
}

impl<S: Send + Sync> FromRequestParts<S> for IncomingFlash {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            read_cookie(&parts.headers, FLASH_COOKIE_NAME).and_then(|raw| Flash::decode(&raw)),
        ))
    }
}
