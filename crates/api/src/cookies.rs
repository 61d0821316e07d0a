//! HttpOnly cookies for the session token and one-shot flash notices.
//!
//! Cookie values are percent-encoded on the way out and decoded on the way
//! in, so flash text can carry spaces and punctuation.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};
use cookie::time::{Duration, OffsetDateTime};
use cookie::{Cookie, SameSite};

use crate::auth::session_token::SessionConfig;

/// Cookie name for the session token.
pub const SESSION_COOKIE_NAME: &str = "jobtrack_session";

/// Cookie name for the pending flash notice.
pub const FLASH_COOKIE_NAME: &str = "jobtrack_flash";

/// Flash notices only need to survive one redirect.
const FLASH_MAX_AGE_SECS: i64 = 60;

/// Build the HttpOnly session cookie holding `token`.
pub fn session_cookie(token: String, config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::hours(config.expiry_hours))
        .build()
}

/// Build a cookie that expires the session cookie in the browser.
pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    expired(SESSION_COOKIE_NAME, secure)
}

/// Build the cookie carrying an encoded flash notice.
pub fn flash_cookie(value: String) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(FLASH_MAX_AGE_SECS))
        .build()
}

/// Build a cookie that removes a consumed flash notice.
pub fn clear_flash_cookie() -> Cookie<'static> {
    expired(FLASH_COOKIE_NAME, false)
}

fn expired(name: &'static str, secure: bool) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
}

/// Read a cookie value from the request's `Cookie` headers.
///
/// Malformed pairs are skipped rather than failing the whole header.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| Cookie::split_parse_encoded(header.to_owned()))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

/// Append a `Set-Cookie` header to an outgoing response.
pub fn append_cookie(response: &mut Response, cookie: &Cookie<'_>) {
    match HeaderValue::from_str(&cookie.encoded().to_string()) {
        Ok(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        Err(e) => {
            tracing::warn!(cookie = cookie.name(), error = %e, "Dropping unencodable cookie");
        }
    }
}

/// A `303 See Other` redirect that also sets the given cookies.
pub fn redirect_with_cookies(to: &str, cookies: &[Cookie<'_>]) -> Response {
    let mut response = Redirect::to(to).into_response();
    for cookie in cookies {
        append_cookie(&mut response, cookie);
    }
    response
}
