//! PostgreSQL-backed application, renewal and renewal-window stores
//!
//! Tables are created by the migrations in `migrations/`.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{ApplicationStore, RenewalSettingsStore, RenewalStore, StoreError, StoreResult};
use crate::models::{
    Application, ApplicationStatus, ApplicationType, NewApplication, NewRenewal, Renewal,
    StatusCounts,
};

/// Primary key of the single `renewal_settings` row
const RENEWAL_SETTINGS_ID: i32 = 1;

#[derive(Clone)]
pub struct PgApplicationStore {
    db_pool: PgPool,
}

impl PgApplicationStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn list(&self) -> StoreResult<Vec<Application>> {
        let applications =
            sqlx::query_as::<_, Application>("SELECT * FROM application ORDER BY application_id")
                .fetch_all(&self.db_pool)
                .await?;
        Ok(applications)
    }

    async fn list_newest_first(&self) -> StoreResult<Vec<Application>> {
        let applications = sqlx::query_as::<_, Application>(
            "SELECT * FROM application ORDER BY submission_date DESC, application_id DESC",
        )
        .fetch_all(&self.db_pool)
        .await?;
        Ok(applications)
    }

    async fn list_by_status(&self, status: ApplicationStatus) -> StoreResult<Vec<Application>> {
        let applications = sqlx::query_as::<_, Application>(
            "SELECT * FROM application WHERE status = $1 ORDER BY application_id",
        )
        .bind(status)
        .fetch_all(&self.db_pool)
        .await?;
        Ok(applications)
    }

    async fn list_for_student(&self, student_id: i64) -> StoreResult<Vec<Application>> {
        let applications = sqlx::query_as::<_, Application>(
            "SELECT * FROM application WHERE user_id = $1 ORDER BY application_id",
        )
        .bind(student_id)
        .fetch_all(&self.db_pool)
        .await?;
        Ok(applications)
    }

    async fn get(&self, id: i64) -> StoreResult<Application> {
        sqlx::query_as::<_, Application>("SELECT * FROM application WHERE application_id = $1")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or_else(|| StoreError::NotFound("Application not found".to_string()))
    }

    async fn first_for_student(&self, student_id: i64) -> StoreResult<Option<Application>> {
        let application = sqlx::query_as::<_, Application>(
            "SELECT * FROM application WHERE user_id = $1 ORDER BY application_id LIMIT 1",
        )
        .bind(student_id)
        .fetch_optional(&self.db_pool)
        .await?;
        Ok(application)
    }

    async fn create(&self, new: NewApplication) -> StoreResult<Application> {
        let application = sqlx::query_as::<_, Application>(
            r#"
            INSERT INTO application (
                user_id, student_name, first_name, last_name,
                application_type, status, year_applied, submission_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(new.student_id)
        .bind(&new.student_name)
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(ApplicationType::New)
        .bind(ApplicationStatus::Pending)
        .bind(new.year_applied)
        .bind(new.submission_date)
        .fetch_one(&self.db_pool)
        .await?;
        Ok(application)
    }

    async fn update_status(&self, id: i64, status: ApplicationStatus) -> StoreResult<Application> {
        sqlx::query_as::<_, Application>(
            "UPDATE application SET status = $1 WHERE application_id = $2 RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| StoreError::NotFound("Application not found".to_string()))
    }

    async fn archive(&self, id: i64) -> StoreResult<Application> {
        sqlx::query_as::<_, Application>(
            "UPDATE application SET archived = TRUE WHERE application_id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| StoreError::NotFound("Application not found".to_string()))
    }

    async fn status_counts(&self) -> StoreResult<StatusCounts> {
        count_by_status(&self.db_pool, "application").await
    }
}

#[derive(Clone)]
pub struct PgRenewalStore {
    db_pool: PgPool,
}

impl PgRenewalStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl RenewalStore for PgRenewalStore {
    async fn list(&self) -> StoreResult<Vec<Renewal>> {
        let renewals = sqlx::query_as::<_, Renewal>("SELECT * FROM renew ORDER BY renewal_id")
            .fetch_all(&self.db_pool)
            .await?;
        Ok(renewals)
    }

    async fn get(&self, id: i64) -> StoreResult<Renewal> {
        sqlx::query_as::<_, Renewal>("SELECT * FROM renew WHERE renewal_id = $1")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or_else(|| StoreError::NotFound("Renewal not found".to_string()))
    }

    async fn create(&self, new: NewRenewal) -> StoreResult<Renewal> {
        let renewal = sqlx::query_as::<_, Renewal>(
            r#"
            INSERT INTO renew (
                application_id, user_id, first_name, last_name, status, submission_date
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(new.application_id)
        .bind(new.student_id)
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(ApplicationStatus::Pending)
        .bind(new.submission_date)
        .fetch_one(&self.db_pool)
        .await?;
        Ok(renewal)
    }

    async fn update_status(&self, id: i64, status: ApplicationStatus) -> StoreResult<Renewal> {
        sqlx::query_as::<_, Renewal>(
            "UPDATE renew SET status = $1 WHERE renewal_id = $2 RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| StoreError::NotFound("Renewal not found".to_string()))
    }

    async fn archive(&self, id: i64) -> StoreResult<Renewal> {
        sqlx::query_as::<_, Renewal>(
            "UPDATE renew SET archived = TRUE WHERE renewal_id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| StoreError::NotFound("Renewal not found".to_string()))
    }

    async fn status_counts(&self) -> StoreResult<StatusCounts> {
        count_by_status(&self.db_pool, "renew").await
    }
}

/// `table` is one of our own table names, never user input.
async fn count_by_status(db_pool: &PgPool, table: &'static str) -> StoreResult<StatusCounts> {
    let query = format!("SELECT status, COUNT(*) FROM {} GROUP BY status", table);
    let rows = sqlx::query_as::<_, (ApplicationStatus, i64)>(&query)
        .fetch_all(db_pool)
        .await?;

    let mut counts = StatusCounts::default();
    for (status, count) in rows {
        counts.add(status, count);
    }
    Ok(counts)
}

#[derive(Clone)]
pub struct PgRenewalSettingsStore {
    db_pool: PgPool,
}

impl PgRenewalSettingsStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl RenewalSettingsStore for PgRenewalSettingsStore {
    async fn is_open(&self) -> StoreResult<bool> {
        let is_open =
            sqlx::query_scalar::<_, bool>("SELECT is_open FROM renewal_settings WHERE id = $1")
                .bind(RENEWAL_SETTINGS_ID)
                .fetch_optional(&self.db_pool)
                .await?;
        Ok(is_open.unwrap_or(false))
    }

    async fn set_open(&self, is_open: bool) -> StoreResult<bool> {
        let is_open = sqlx::query_scalar::<_, bool>(
            r#"
            INSERT INTO renewal_settings (id, is_open, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (id) DO UPDATE SET is_open = EXCLUDED.is_open, updated_at = NOW()
            RETURNING is_open
            "#,
        )
        .bind(RENEWAL_SETTINGS_ID)
        .bind(is_open)
        .fetch_one(&self.db_pool)
        .await?;
        Ok(is_open)
    }
}
