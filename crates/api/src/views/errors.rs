use axum::http::StatusCode;
use axum::response::Html;

use super::{escape, layout};

/// A standalone error page for requests that cannot continue.
pub fn error_page(status: StatusCode, title: &str, message: &str) -> Html<String> {
    let body = format!(
        r#"<div class="card">
<h1>{code} {title}</h1>
<p>{message}</p>
<p><a href="/">Back to the tracker</a></p>
</div>"#,
        code = status.as_u16(),
        title = escape(title),
        message = escape(message),
    );
    layout(title, None, None, &body)
}
