//! Storage for users, students, records, applications and renewals
//!
//! Users, students and scholarship records live in memory. Applications,
//! renewals and the renewal window sit behind traits with an in-memory and a
//! PostgreSQL implementation, selected at startup.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    Application, ApplicationStatus, NewApplication, NewRenewal, Renewal, StatusCounts,
};

mod memory;
mod postgres;
mod records;
mod students;
mod users;

pub use memory::{MemoryApplicationStore, MemoryRenewalSettingsStore, MemoryRenewalStore};
pub use postgres::{PgApplicationStore, PgRenewalSettingsStore, PgRenewalStore};
pub use records::RecordStore;
pub use students::StudentStore;
pub use users::UserStore;

/// Store-level errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    #[error("{0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn list(&self) -> StoreResult<Vec<Application>>;

    /// All applications, most recently submitted first
    async fn list_newest_first(&self) -> StoreResult<Vec<Application>>;

    async fn list_by_status(&self, status: ApplicationStatus) -> StoreResult<Vec<Application>>;

    async fn list_for_student(&self, student_id: i64) -> StoreResult<Vec<Application>>;

    async fn get(&self, id: i64) -> StoreResult<Application>;

    /// The student's earliest application, if any
    async fn first_for_student(&self, student_id: i64) -> StoreResult<Option<Application>>;

    async fn create(&self, new: NewApplication) -> StoreResult<Application>;

    async fn update_status(&self, id: i64, status: ApplicationStatus) -> StoreResult<Application>;

    async fn archive(&self, id: i64) -> StoreResult<Application>;

    async fn status_counts(&self) -> StoreResult<StatusCounts>;
}

#[async_trait]
pub trait RenewalStore: Send + Sync {
    async fn list(&self) -> StoreResult<Vec<Renewal>>;

    async fn get(&self, id: i64) -> StoreResult<Renewal>;

    async fn create(&self, new: NewRenewal) -> StoreResult<Renewal>;

    async fn update_status(&self, id: i64, status: ApplicationStatus) -> StoreResult<Renewal>;

    async fn archive(&self, id: i64) -> StoreResult<Renewal>;

    async fn status_counts(&self) -> StoreResult<StatusCounts>;
}

/// Singleton open/closed flag for the renewal window
#[async_trait]
pub trait RenewalSettingsStore: Send + Sync {
    /// Closed until set
    async fn is_open(&self) -> StoreResult<bool>;

    async fn set_open(&self, is_open: bool) -> StoreResult<bool>;
}

/// Rows plus the next id to hand out.
///
/// The counter starts above the largest seeded id and only moves forward, so
/// ids are never reused.
#[derive(Debug)]
pub(crate) struct MemoryTable<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> MemoryTable<T> {
    pub(crate) fn new(rows: Vec<T>, id_of: impl Fn(&T) -> i64) -> Self {
        let next_id = rows.iter().map(id_of).max().unwrap_or(0) + 1;
        Self { rows, next_id }
    }

    pub(crate) fn rows(&self) -> &[T] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [T] {
        &mut self.rows
    }

    /// Allocates an id and appends the row built from it
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(build(id));
        &self.rows[self.rows.len() - 1]
    }
}
