//! HTTP-level tests for adding, editing, listing, and deleting job
//! applications through the dashboard pages.

mod common;

use axum::http::StatusCode;
use common::{body_string, flash_of, get, location, post_form, signup_and_signin};
use jobtrack_core::types::DbId;
use jobtrack_db::models::job_application::JobApplication;
use jobtrack_db::repositories::{AccountRepo, JobApplicationRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn account_id(pool: &PgPool, email: &str) -> DbId {
    AccountRepo::find_by_email(pool, email)
        .await
        .unwrap()
        .expect("account should exist")
        .id
}

async fn jobs_of(pool: &PgPool, account_id: DbId) -> Vec<JobApplication> {
    JobApplicationRepo::list_for_account(pool, account_id)
        .await
        .unwrap()
}

fn job_fields<'a>(title: &'a str, status: &'a str, date: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("title", title),
        ("company", "Acme"),
        ("status", status),
        ("application_date", date),
        ("job_url", ""),
        ("notes", ""),
    ]
}

// ---------------------------------------------------------------------------
// Full lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn alice_tracks_one_application_end_to_end(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let session = signup_and_signin(&app, "Alice", "alice@example.com").await;
    let alice = account_id(&pool, "alice@example.com").await;

    // Add.
    let response = post_form(
        app.clone(),
        "/add_job",
        &job_fields("SWE", "applied", "2024-01-05"),
        Some(&session),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
    assert_eq!(
        flash_of(&response).as_deref(),
        Some("success:Job application added successfully!")
    );

    let jobs = jobs_of(&pool, alice).await;
    assert_eq!(jobs.len(), 1);
    let job_id = jobs[0].id;
    assert_eq!(jobs[0].title, "SWE");
    assert_eq!(jobs[0].status, "applied");
    assert_eq!(jobs[0].job_url, None);

    let dashboard = body_string(get(app.clone(), "/dashboard", Some(&session)).await).await;
    assert!(dashboard.contains("<strong>1</strong>Total"));
    assert!(dashboard.contains("<strong>1</strong>Pending"));
    assert!(dashboard.contains("<strong>0</strong>Interviews"));
    assert!(dashboard.contains("<strong>0</strong>Offers"));
    assert!(dashboard.contains("2024-01-05"));

    // Edit form is pre-filled.
    let form_page = get(app.clone(), &format!("/edit_job/{job_id}"), Some(&session)).await;
    assert_eq!(form_page.status(), StatusCode::OK);
    let form_html = body_string(form_page).await;
    assert!(form_html.contains(r#"value="SWE""#));
    assert!(form_html.contains(r#"<option value="applied" selected>"#));

    // Update status.
    let response = post_form(
        app.clone(),
        &format!("/edit_job/{job_id}"),
        &job_fields("SWE", "interview", "2024-01-05"),
        Some(&session),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        flash_of(&response).as_deref(),
        Some("success:Job application updated successfully!")
    );

    let dashboard = body_string(get(app.clone(), "/dashboard", Some(&session)).await).await;
    assert!(dashboard.contains("<strong>1</strong>Total"));
    assert!(dashboard.contains("<strong>0</strong>Pending"));
    assert!(dashboard.contains("<strong>1</strong>Interviews"));

    // Delete.
    let response = post_form(
        app.clone(),
        &format!("/delete_job/{job_id}"),
        &[],
        Some(&session),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        flash_of(&response).as_deref(),
        Some("success:Job application deleted successfully!")
    );

    assert!(jobs_of(&pool, alice).await.is_empty());
    let dashboard = body_string(get(app, "/dashboard", Some(&session)).await).await;
    assert!(dashboard.contains("No job applications yet"));
    assert!(dashboard.contains("<strong>0</strong>Total"));
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn bad_date_rerenders_form_and_creates_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let session = signup_and_signin(&app, "Alice", "alice@example.com").await;
    let alice = account_id(&pool, "alice@example.com").await;

    let response = post_form(
        app,
        "/add_job",
        &job_fields("SWE", "applied", "05/01/2024"),
        Some(&session),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("Expected YYYY-MM-DD"));
    assert!(body.contains(r#"value="SWE""#));
    assert!(jobs_of(&pool, alice).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn signed_and_short_years_are_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let session = signup_and_signin(&app, "Alice", "alice@example.com").await;
    let alice = account_id(&pool, "alice@example.com").await;

    for date in ["-262143-01-01", "+2024-01-05", "24-01-05"] {
        let response = post_form(
            app.clone(),
            "/add_job",
            &job_fields("SWE", "applied", date),
            Some(&session),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{date}");
        assert!(body_string(response).await.contains("Expected YYYY-MM-DD"), "{date}");
    }
    assert!(jobs_of(&pool, alice).await.is_empty());

    // The dashboard still renders.
    let dashboard = get(app, "/dashboard", Some(&session)).await;
    assert_eq!(dashboard.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn script_job_url_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let session = signup_and_signin(&app, "Alice", "alice@example.com").await;
    let alice = account_id(&pool, "alice@example.com").await;

    let response = post_form(
        app,
        "/add_job",
        &[
            ("title", "SWE"),
            ("company", "Acme"),
            ("status", "applied"),
            ("application_date", "2024-01-05"),
            ("job_url", "javascript:alert(document.cookie)"),
            ("notes", ""),
        ],
        Some(&session),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response)
        .await
        .contains("Job URL must start with http:// or https://."));
    assert!(jobs_of(&pool, alice).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_status_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let session = signup_and_signin(&app, "Alice", "alice@example.com").await;
    let alice = account_id(&pool, "alice@example.com").await;

    let response = post_form(
        app,
        "/add_job",
        &job_fields("SWE", "ghosted", "2024-01-05"),
        Some(&session),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response).await.contains("Invalid status"));
    assert!(jobs_of(&pool, alice).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_edit_leaves_record_unchanged(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let session = signup_and_signin(&app, "Alice", "alice@example.com").await;
    let alice = account_id(&pool, "alice@example.com").await;

    post_form(
        app.clone(),
        "/add_job",
        &job_fields("SWE", "applied", "2024-01-05"),
        Some(&session),
    )
    .await;
    let job_id = jobs_of(&pool, alice).await[0].id;

    let response = post_form(
        app,
        &format!("/edit_job/{job_id}"),
        &job_fields("", "offer", "2024-01-06"),
        Some(&session),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response).await.contains("Title is required."));

    let job = &jobs_of(&pool, alice).await[0];
    assert_eq!(job.title, "SWE");
    assert_eq!(job.status, "applied");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_date_defaults_and_optional_fields_are_kept(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let session = signup_and_signin(&app, "Alice", "alice@example.com").await;
    let alice = account_id(&pool, "alice@example.com").await;

    let response = post_form(
        app,
        "/add_job",
        &[
            ("title", "SRE"),
            ("company", "Initech"),
            ("status", ""),
            ("application_date", ""),
            ("job_url", "https://initech.example/jobs/7"),
            ("notes", "Referral from Bob"),
        ],
        Some(&session),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let job = &jobs_of(&pool, alice).await[0];
    assert_eq!(job.status, "applied");
    assert_eq!(job.application_date, chrono::Utc::now().date_naive());
    assert_eq!(job.job_url.as_deref(), Some("https://initech.example/jobs/7"));
    assert_eq!(job.notes.as_deref(), Some("Referral from Bob"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reserved_form_characters_are_stored_verbatim(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let session = signup_and_signin(&app, "Alice", "alice@example.com").await;
    let alice = account_id(&pool, "alice@example.com").await;

    let notes = "R&D 50% + bonus = yes; café ☕";
    let response = post_form(
        app,
        "/add_job",
        &[
            ("title", "C++ & Rust"),
            ("company", "Acme"),
            ("application_date", "2024-01-05"),
            ("job_url", "https://acme.example/jobs?id=7&ref=x"),
            ("notes", notes),
        ],
        Some(&session),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let job = &jobs_of(&pool, alice).await[0];
    assert_eq!(job.title, "C++ & Rust");
    assert_eq!(job.job_url.as_deref(), Some("https://acme.example/jobs?id=7&ref=x"));
    assert_eq!(job.notes.as_deref(), Some(notes));
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_lists_newest_application_date_first(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let session = signup_and_signin(&app, "Alice", "alice@example.com").await;

    for (title, date) in [
        ("Oldest", "2023-06-01"),
        ("Newest", "2024-03-01"),
        ("Middle", "2023-12-24"),
    ] {
        post_form(
            app.clone(),
            "/add_job",
            &job_fields(title, "applied", date),
            Some(&session),
        )
        .await;
    }

    let body = body_string(get(app, "/dashboard", Some(&session)).await).await;
    let newest = body.find("Newest").unwrap();
    let middle = body.find("Middle").unwrap();
    let oldest = body.find("Oldest").unwrap();
    assert!(newest < middle && middle < oldest);
}

// ---------------------------------------------------------------------------
// Ownership
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn other_accounts_cannot_touch_an_application(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice_session = signup_and_signin(&app, "Alice", "alice@example.com").await;
    let bob_session = signup_and_signin(&app, "Bob", "bob@example.com").await;
    let alice = account_id(&pool, "alice@example.com").await;

    post_form(
        app.clone(),
        "/add_job",
        &job_fields("SWE", "applied", "2024-01-05"),
        Some(&alice_session),
    )
    .await;
    let job_id = jobs_of(&pool, alice).await[0].id;

    // Bob cannot view, edit, or delete it, and gets the same answer as for a
    // record that does not exist.
    let view = get(app.clone(), &format!("/edit_job/{job_id}"), Some(&bob_session)).await;
    assert_eq!(view.status(), StatusCode::NOT_FOUND);
    let missing = get(app.clone(), "/edit_job/999999", Some(&bob_session)).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let edit = post_form(
        app.clone(),
        &format!("/edit_job/{job_id}"),
        &job_fields("Hijacked", "offer", "2024-01-05"),
        Some(&bob_session),
    )
    .await;
    assert_eq!(edit.status(), StatusCode::NOT_FOUND);

    let delete = post_form(
        app.clone(),
        &format!("/delete_job/{job_id}"),
        &[],
        Some(&bob_session),
    )
    .await;
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);

    // Bob's dashboard does not show it.
    let bob_dashboard = body_string(get(app, "/dashboard", Some(&bob_session)).await).await;
    assert!(!bob_dashboard.contains("SWE"));

    let jobs = jobs_of(&pool, alice).await;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "SWE");
    assert_eq!(jobs[0].status, "applied");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unparseable_job_id_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let session = signup_and_signin(&app, "Alice", "alice@example.com").await;

    let view = get(app.clone(), "/edit_job/abc", Some(&session)).await;
    assert_eq!(view.status(), StatusCode::NOT_FOUND);
    assert!(body_string(view).await.contains("404 Not Found"));

    let edit = post_form(
        app.clone(),
        "/edit_job/1.5",
        &job_fields("SWE", "offer", "2024-01-05"),
        Some(&session),
    )
    .await;
    assert_eq!(edit.status(), StatusCode::NOT_FOUND);
    assert!(body_string(edit).await.contains("404 Not Found"));

    let delete = post_form(
        app,
        "/delete_job/99999999999999999999",
        &[],
        Some(&session),
    )
    .await;
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);
    assert!(body_string(delete).await.contains("404 Not Found"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unauthenticated_post_changes_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    signup_and_signin(&app, "Alice", "alice@example.com").await;
    let alice = account_id(&pool, "alice@example.com").await;

    let response = post_form(
        app,
        "/add_job",
        &job_fields("SWE", "applied", "2024-01-05"),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/signin");
    assert!(jobs_of(&pool, alice).await.is_empty());
}
