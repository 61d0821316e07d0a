//! Handlers for registration, sign-in, sign-out, and account removal.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Form;

use super::dashboard::DASHBOARD_PATH;
use super::form_failure;
use crate::cookies::redirect_with_cookies;
use crate::flash::{Flash, IncomingFlash};
use crate::forms::{SigninForm, SignupForm};
use crate::middleware::session::{end_session, start_session, SessionAccount, SIGNIN_PATH};
use crate::services::accounts;
use crate::state::AppState;
use crate::views;

pub const SIGNUP_SUCCESS: &str = "Account created successfully! Please sign in.";
pub const SIGNOUT_SUCCESS: &str = "You have been signed out successfully.";
pub const ACCOUNT_DELETED: &str = "Your account and all of its job applications were deleted.";

/// GET /signup
pub async fn signup_form(flash: IncomingFlash) -> Response {
    let page = views::auth::signup_page(flash.notice(), &SignupForm::default());
    flash.render(StatusCode::OK, page)
}

/// POST /signup
///
/// On success redirects to sign-in; the new account is not signed in.
pub async fn signup(State(state): State<AppState>, Form(form): Form<SignupForm>) -> Response {
    match accounts::register(&state.pool, &form.registration()).await {
        Ok(_) => redirect_with_cookies(SIGNIN_PATH, &[Flash::success(SIGNUP_SUCCESS).cookie()]),
        Err(err) => form_failure(err, |notice| views::auth::signup_page(Some(notice), &form)),
    }
}

/// GET /signin
pub async fn signin_form(flash: IncomingFlash) -> Response {
    let page = views::auth::signin_page(flash.notice(), "");
    flash.render(StatusCode::OK, page)
}

/// POST /signin
pub async fn signin(State(state): State<AppState>, Form(form): Form<SigninForm>) -> Response {
    let session_config = &state.config.session;

    let started = match accounts::authenticate(&state.pool, &form.email, &form.password).await {
        Ok(account) => start_session(&account, session_config).map(|cookie| (account, cookie)),
        Err(err) => Err(err),
    };

    match started {
        Ok((account, session_cookie)) => {
            let welcome = Flash::success(format!("Welcome back, {}!", account.name));
            redirect_with_cookies(DASHBOARD_PATH, &[session_cookie, welcome.cookie()])
        }
        Err(err) => form_failure(err, |notice| {
            views::auth::signin_page(Some(notice), &form.email)
        }),
    }
}

/// GET /signout
///
/// Always succeeds, with or without a session.
pub async fn signout(State(state): State<AppState>) -> Response {
    redirect_with_cookies(
        SIGNIN_PATH,
        &[
            end_session(&state.config.session),
            Flash::success(SIGNOUT_SUCCESS).cookie(),
        ],
    )
}

/// POST /account/delete
///
/// Removes the signed-in account and all of its applications, then ends
/// the session.
pub async fn delete_account(session: SessionAccount, State(state): State<AppState>) -> Response {
    let session_config = &state.config.session;

    match accounts::delete_account(&state.pool, session.account_id).await {
        Ok(()) => redirect_with_cookies(
            SIGNIN_PATH,
            &[
                end_session(session_config),
                Flash::success(ACCOUNT_DELETED).cookie(),
            ],
        ),
        Err(err) => match err.form_notice() {
            // Already gone: the session is stale, so just end it.
            None => redirect_with_cookies(SIGNIN_PATH, &[end_session(session_config)]),
            Some((_, message)) => {
                redirect_with_cookies(DASHBOARD_PATH, &[Flash::error(message).cookie()])
            }
        },
    }
}
