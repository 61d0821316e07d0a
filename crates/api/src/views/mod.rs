//! Server-rendered HTML pages.
//!
//! Pages are assembled with `format!` around [`layout`]. Every value that
//! came from a user or the database goes through [`escape`] first.

pub mod auth;
pub mod errors;
pub mod jobs;

use std::fmt::Write;

use axum::response::Html;

use crate::flash::Flash;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f5f6f8;color:#222}\
nav{background:#2b3a55;color:#fff;padding:.75rem 1.5rem;display:flex;gap:1rem;align-items:center}\
nav a{color:#fff;text-decoration:none}nav .grow{flex:1}\
main{max-width:960px;margin:1.5rem auto;padding:0 1rem}\
.flash{padding:.75rem 1rem;border-radius:4px;margin-bottom:1rem}\
.flash-success{background:#dff3e3;color:#1d5b2b}.flash-error{background:#fbe3e4;color:#8a1f24}\
form.card,.card{background:#fff;padding:1.25rem;border-radius:6px;box-shadow:0 1px 2px rgba(0,0,0,.08)}\
label{display:block;margin:.75rem 0 .25rem}input,select,textarea{width:100%;padding:.4rem;box-sizing:border-box}\
table{width:100%;border-collapse:collapse;background:#fff}th,td{padding:.5rem;border-bottom:1px solid #e3e5ea;text-align:left}\
.stats{display:flex;gap:1rem;margin-bottom:1.5rem}.stats .card{flex:1;text-align:center}\
.stats strong{display:block;font-size:1.75rem}form.inline{display:inline}\
button{padding:.4rem .9rem;cursor:pointer}.danger{color:#8a1f24}";

/// Escape text for safe interpolation into HTML element content or a
/// double-quoted attribute value.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap a page body in the shared document shell.
///
/// `signed_in_as` switches the navigation between the signed-in links
/// (dashboard, add, sign out) and the public ones (sign in, sign up).
pub fn layout(
    title: &str,
    flash: Option<&Flash>,
    signed_in_as: Option<&str>,
    body: &str,
) -> Html<String> {
    let nav = match signed_in_as {
        Some(name) => format!(
            r#"<a href="/dashboard">Dashboard</a><a href="/add_job">Add Job</a><span class="grow"></span><span>{}</span><a href="/signout">Sign Out</a>"#,
            escape(name)
        ),
        None => r#"<span class="grow"></span><a href="/signin">Sign In</a><a href="/signup">Sign Up</a>"#
            .to_string(),
    };

    let mut page = String::new();
    let _ = write!(
        page,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Job Tracker</title>
<style>{STYLE}</style>
</head>
<body>
<nav><strong>Job Tracker</strong>{nav}</nav>
<main>
{flash}{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        flash = flash.map(flash_banner).unwrap_or_default(),
    );
    Html(page)
}

fn flash_banner(flash: &Flash) -> String {
    format!(
        r#"<div class="flash flash-{}" role="alert">{}</div>
"#,
        flash.level.as_str(),
        escape(&flash.message)
    )
}
