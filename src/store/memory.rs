//! In-memory application, renewal and renewal-window stores

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{
    ApplicationStore, MemoryTable, RenewalSettingsStore, RenewalStore, StoreError, StoreResult,
};
use crate::models::{
    Application, ApplicationStatus, ApplicationType, NewApplication, NewRenewal, Renewal,
    StatusCounts,
};

fn application_not_found() -> StoreError {
    StoreError::NotFound("Application not found".to_string())
}

fn renewal_not_found() -> StoreError {
    StoreError::NotFound("Renewal not found".to_string())
}

pub struct MemoryApplicationStore {
    table: RwLock<MemoryTable<Application>>,
}

impl MemoryApplicationStore {
    pub fn new(applications: Vec<Application>) -> Self {
        Self {
            table: RwLock::new(MemoryTable::new(applications, |a| a.id)),
        }
    }

    async fn filtered(&self, keep: impl Fn(&Application) -> bool) -> Vec<Application> {
        self.table
            .read()
            .await
            .rows()
            .iter()
            .filter(|a| keep(a))
            .cloned()
            .collect()
    }

    async fn modify(
        &self,
        id: i64,
        change: impl FnOnce(&mut Application),
    ) -> StoreResult<Application> {
        let mut table = self.table.write().await;
        let application = table
            .rows_mut()
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(application_not_found)?;
        change(application);
        Ok(application.clone())
    }
}

#[async_trait]
impl ApplicationStore for MemoryApplicationStore {
    async fn list(&self) -> StoreResult<Vec<Application>> {
        Ok(self.filtered(|_| true).await)
    }

    async fn list_newest_first(&self) -> StoreResult<Vec<Application>> {
        let mut applications = self.filtered(|_| true).await;
        applications.sort_by(|a, b| {
            b.submission_date
                .cmp(&a.submission_date)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(applications)
    }

    async fn list_by_status(&self, status: ApplicationStatus) -> StoreResult<Vec<Application>> {
        Ok(self.filtered(|a| a.status == status).await)
    }

    async fn list_for_student(&self, student_id: i64) -> StoreResult<Vec<Application>> {
        Ok(self.filtered(|a| a.student_id == student_id).await)
    }

    async fn get(&self, id: i64) -> StoreResult<Application> {
        self.table
            .read()
            .await
            .rows()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(application_not_found)
    }

    async fn first_for_student(&self, student_id: i64) -> StoreResult<Option<Application>> {
        Ok(self
            .table
            .read()
            .await
            .rows()
            .iter()
            .filter(|a| a.student_id == student_id)
            .min_by_key(|a| a.id)
            .cloned())
    }

    async fn create(&self, new: NewApplication) -> StoreResult<Application> {
        let mut table = self.table.write().await;
        let application = table.insert_with(|id| Application {
            id,
            student_id: new.student_id,
            student_name: new.student_name,
            first_name: new.first_name,
            last_name: new.last_name,
            kind: ApplicationType::New,
            status: ApplicationStatus::Pending,
            year_applied: new.year_applied,
            submission_date: new.submission_date,
            archived: false,
        });
        Ok(application.clone())
    }

    async fn update_status(&self, id: i64, status: ApplicationStatus) -> StoreResult<Application> {
        self.modify(id, |a| a.status = status).await
    }

    async fn archive(&self, id: i64) -> StoreResult<Application> {
        self.modify(id, |a| a.archived = true).await
    }

    async fn status_counts(&self) -> StoreResult<StatusCounts> {
        let table = self.table.read().await;
        Ok(StatusCounts::tally(table.rows().iter().map(|a| a.status)))
    }
}

pub struct MemoryRenewalStore {
    table: RwLock<MemoryTable<Renewal>>,
}

impl MemoryRenewalStore {
    pub fn new(renewals: Vec<Renewal>) -> Self {
        Self {
            table: RwLock::new(MemoryTable::new(renewals, |r| r.id)),
        }
    }

    async fn modify(&self, id: i64, change: impl FnOnce(&mut Renewal)) -> StoreResult<Renewal> {
        let mut table = self.table.write().await;
        let renewal = table
            .rows_mut()
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(renewal_not_found)?;
        change(renewal);
        Ok(renewal.clone())
    }
}

#[async_trait]
impl RenewalStore for MemoryRenewalStore {
    async fn list(&self) -> StoreResult<Vec<Renewal>> {
        Ok(self.table.read().await.rows().to_vec())
    }

    async fn get(&self, id: i64) -> StoreResult<Renewal> {
        self.table
            .read()
            .await
            .rows()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(renewal_not_found)
    }

    async fn create(&self, new: NewRenewal) -> StoreResult<Renewal> {
        let mut table = self.table.write().await;
        let renewal = table.insert_with(|id| Renewal {
            id,
            application_id: new.application_id,
            student_id: new.student_id,
            first_name: new.first_name,
            last_name: new.last_name,
            status: ApplicationStatus::Pending,
            submission_date: new.submission_date,
            archived: false,
        });
        Ok(renewal.clone())
    }

    async fn update_status(&self, id: i64, status: ApplicationStatus) -> StoreResult<Renewal> {
        self.modify(id, |r| r.status = status).await
    }

    async fn archive(&self, id: i64) -> StoreResult<Renewal> {
        self.modify(id, |r| r.archived = true).await
    }

    async fn status_counts(&self) -> StoreResult<StatusCounts> {
        let table = self.table.read().await;
        Ok(StatusCounts::tally(table.rows().iter().map(|r| r.status)))
    }
}

#[derive(Default)]
pub struct MemoryRenewalSettingsStore {
    is_open: RwLock<Option<bool>>,
}

impl MemoryRenewalSettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RenewalSettingsStore for MemoryRenewalSettingsStore {
    async fn is_open(&self) -> StoreResult<bool> {
        Ok(self.is_open.read().await.unwrap_or(false))
    }

    async fn set_open(&self, is_open: bool) -> StoreResult<bool> {
        *self.is_open.write().await = Some(is_open);
        Ok(is_open)
    }
}
