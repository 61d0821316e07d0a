//! Repository for the `job_applications` table.
//!
//! Every query is scoped by `account_id`. A row owned by another account is
//! treated exactly like a missing row.

use jobtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::job_application::{JobApplication, JobApplicationInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, account_id, title, company, status, application_date, \
                       job_url, notes, created_at";

/// Provides account-scoped CRUD for job applications.
pub struct JobApplicationRepo;

impl JobApplicationRepo {
    /// Insert a new application owned by `account_id`.
    pub async fn create(
        pool: &PgPool,
        account_id: DbId,
        input: &JobApplicationInput,
    ) -> Result<JobApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_applications
                (account_id, title, company, status, application_date, job_url, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(account_id)
            .bind(&input.title)
            .bind(&input.company)
            .bind(&input.status)
            .bind(input.application_date)
            .bind(&input.job_url)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// List an account's applications, newest application date first.
    ///
    /// Ties on date are broken by id, most recently created first.
    pub async fn list_for_account(
        pool: &PgPool,
        account_id: DbId,
    ) -> Result<Vec<JobApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_applications
             WHERE account_id = $1
             ORDER BY application_date DESC, id DESC"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(account_id)
            .fetch_all(pool)
            .await
    }

    /// Find an application by ID, only if `account_id` owns it.
    pub async fn find_owned(
        pool: &PgPool,
        account_id: DbId,
        id: DbId,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_applications WHERE id = $1 AND account_id = $2"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .bind(account_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite every mutable field of an owned application.
    ///
    /// Returns `None` if no row with `id` is owned by `account_id`.
    pub async fn update_owned(
        pool: &PgPool,
        account_id: DbId,
        id: DbId,
        input: &JobApplicationInput,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        let query = format!(
            "UPDATE job_applications SET
                title = $3,
                company = $4,
                status = $5,
                application_date = $6,
                job_url = $7,
                notes = $8
             WHERE id = $1 AND account_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .bind(account_id)
            .bind(&input.title)
            .bind(&input.company)
            .bind(&input.status)
            .bind(input.application_date)
            .bind(&input.job_url)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an owned application.
    ///
    /// Returns `true` if a row was deleted, `false` if none is owned by `account_id`.
    pub async fn delete_owned(
        pool: &PgPool,
        account_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_applications WHERE id = $1 AND account_id = $2")
            .bind(id)
            .bind(account_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
