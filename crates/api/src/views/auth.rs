//! Sign-up and sign-in pages.
//!
//! Password fields are always rendered empty, even when the form is shown
//! again after a failed submission.

use axum::response::Html;

use super::{escape, layout};
use crate::flash::Flash;
use crate::forms::SignupForm;

pub fn signup_page(flash: Option<&Flash>, form: &SignupForm) -> Html<String> {
    let body = format!(
        r#"<h1>Create an account</h1>
<form class="card" method="post" action="/signup">
<label for="name">Name</label>
<input id="name" name="name" type="text" maxlength="100" required value="{name}">
<label for="email">Email</label>
<input id="email" name="email" type="email" maxlength="120" required value="{email}">
<label for="password">Password</label>
<input id="password" name="password" type="password" required>
<label for="confirm_password">Confirm password</label>
<input id="confirm_password" name="confirm_password" type="password" required>
<p><button type="submit">Sign Up</button></p>
<p>Already registered? <a href="/signin">Sign in</a></p>
</form>"#,
        name = escape(&form.name),
        email = escape(&form.email),
    );
    layout("Sign Up", flash, None, &body)
}

pub fn signin_page(flash: Option<&Flash>, email: &str) -> Html<String> {
    let body = format!(
        r#"<h1>Sign in</h1>
<form class="card" method="post" action="/signin">
<label for="email">Email</label>
<input id="email" name="email" type="email" required value="{email}">
<label for="password">Password</label>
<input id="password" name="password" type="password" required>
<p><button type="submit">Sign In</button></p>
<p>New here? <a href="/signup">Create an account</a></p>
</form>"#,
        email = escape(email),
    );
    layout("Sign In", flash, None, &body)
}
