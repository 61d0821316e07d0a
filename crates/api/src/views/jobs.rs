//! Dashboard and job application form pages.

use std::fmt::Write;

use axum::response::Html;
use jobtrack_core::application_status::ApplicationStatus;
use jobtrack_core::dashboard::DashboardSummary;
use jobtrack_core::types::DbId;
use jobtrack_core::validation::DATE_FORMAT;
use jobtrack_db::models::job_application::JobApplication;

use super::{escape, layout};
use crate::flash::Flash;
use crate::forms::JobForm;

/// Which submission a [`job_form_page`] is for.
#[derive(Debug, Clone, Copy)]
pub enum JobFormMode {
    Add,
    Edit(DbId),
}

impl JobFormMode {
    fn action(&self) -> String {
        match self {
            Self::Add => "/add_job".to_string(),
            Self::Edit(id) => format!("/edit_job/{id}"),
        }
    }

    fn heading(&self) -> &'static str {
        match self {
            Self::Add => "Add Job Application",
            Self::Edit(_) => "Edit Job Application",
        }
    }
}

pub fn dashboard_page(
    account_name: &str,
    summary: &DashboardSummary,
    jobs: &[JobApplication],
    flash: Option<&Flash>,
) -> Html<String> {
    let mut body = format!(
        r#"<h1>{name}'s applications</h1>
<div class="stats">
<div class="card"><strong>{total}</strong>Total</div>
<div class="card"><strong>{pending}</strong>Pending</div>
<div class="card"><strong>{interviews}</strong>Interviews</div>
<div class="card"><strong>{offers}</strong>Offers</div>
</div>
"#,
        name = escape(account_name),
        total = summary.total,
        pending = summary.pending,
        interviews = summary.interviews,
        offers = summary.offers,
    );

    if jobs.is_empty() {
        body.push_str(
            r#"<div class="card"><p>No job applications yet. <a href="/add_job">Add your first one</a>.</p></div>"#,
        );
    } else {
        body.push_str(
            "<table>\n<thead><tr><th>Title</th><th>Company</th><th>Status</th><th>Applied</th><th>Link</th><th></th></tr></thead>\n<tbody>\n",
        );
        for job in jobs {
            push_job_row(&mut body, job);
        }
        body.push_str("</tbody>\n</table>\n");
    }

    body.push_str(
        r#"<form class="inline" method="post" action="/account/delete" onsubmit="return confirm('Delete your account and all applications?');">
<p><button type="submit" class="danger">Delete account</button></p>
</form>"#,
    );

    layout("Dashboard", flash, Some(account_name), &body)
}

fn push_job_row(body: &mut String, job: &JobApplication) {
    let link = match job.job_url.as_deref() {
        Some(url) => format!(
            r#"<a href="{url}" rel="noopener noreferrer" target="_blank">Posting</a>"#,
            url = escape(url)
        ),
        None => String::new(),
    };

    let _ = write!(
        body,
        r#"<tr>
<td>{title}</td><td>{company}</td><td>{status}</td><td>{date}</td><td>{link}</td>
<td><a href="/edit_job/{id}">Edit</a>
<form class="inline" method="post" action="/delete_job/{id}" onsubmit="return confirm('Delete this application?');"><button type="submit" class="danger">Delete</button></form></td>
</tr>
"#,
        title = escape(&job.title),
        company = escape(&job.company),
        status = job.status().label(),
        date = job.application_date.format(DATE_FORMAT),
        id = job.id,
    );
}

/// The add/edit form, pre-filled with `form`.
pub fn job_form_page(
    mode: JobFormMode,
    account_name: &str,
    form: &JobForm,
    flash: Option<&Flash>,
) -> Html<String> {
    let mut options = String::new();
    for status in ApplicationStatus::ALL {
        let selected = if form.status == status.as_str() {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            options,
            r#"<option value="{value}"{selected}>{label}</option>"#,
            value = status.as_str(),
            label = status.label(),
        );
    }

    let body = format!(
        r#"<h1>{heading}</h1>
<form class="card" method="post" action="{action}">
<label for="title">Title</label>
<input id="title" name="title" type="text" maxlength="100" required value="{title}">
<label for="company">Company</label>
<input id="company" name="company" type="text" maxlength="100" required value="{company}">
<label for="status">Status</label>
<select id="status" name="status">
{options}</select>
<label for="application_date">Application date</label>
<input id="application_date" name="application_date" type="date" value="{date}">
<label for="job_url">Job URL</label>
<input id="job_url" name="job_url" type="url" maxlength="200" value="{job_url}">
<label for="notes">Notes</label>
<textarea id="notes" name="notes" rows="5">{notes}</textarea>
<p><button type="submit">Save</button> <a href="/dashboard">Cancel</a></p>
</form>"#,
        heading = mode.heading(),
        action = mode.action(),
        title = escape(&form.title),
        company = escape(&form.company),
        date = escape(&form.application_date),
        job_url = escape(&form.job_url),
        notes = escape(&form.notes),
    );

    layout(mode.heading(), flash, Some(account_name), &body)
}
