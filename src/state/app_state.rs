//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::TokenService;
use crate::db::Database;
use crate::seed::SeedData;
use crate::store::{
    ApplicationStore, MemoryApplicationStore, MemoryRenewalSettingsStore, MemoryRenewalStore,
    PgApplicationStore, PgRenewalSettingsStore, PgRenewalStore, RecordStore, RenewalSettingsStore,
    RenewalStore, StudentStore, UserStore,
};

/// Where applications, renewals and the renewal window are kept
pub enum StorageBackend {
    Memory,
    Postgres(Database),
}

impl StorageBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::Postgres(_) => "postgres",
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserStore>,
    pub students: Arc<StudentStore>,
    pub records: Arc<RecordStore>,
    pub applications: Arc<dyn ApplicationStore>,
    pub renewals: Arc<dyn RenewalStore>,
    pub renewal_settings: Arc<dyn RenewalSettingsStore>,
    pub tokens: Arc<TokenService>,
    pub database: Option<Database>,
}

impl AppState {
    pub fn new(
        tokens: TokenService,
        seed: SeedData,
        backend: StorageBackend,
        bcrypt_cost: u32,
    ) -> Self {
        tracing::info!(storage = backend.name(), "Initializing stores");

        let (applications, renewals, renewal_settings, database): (
            Arc<dyn ApplicationStore>,
            Arc<dyn RenewalStore>,
            Arc<dyn RenewalSettingsStore>,
            Option<Database>,
        ) = match backend {
            StorageBackend::Memory => (
                Arc::new(MemoryApplicationStore::new(seed.applications)),
                Arc::new(MemoryRenewalStore::new(Vec::new())),
                Arc::new(MemoryRenewalSettingsStore::new()),
                None,
            ),
            StorageBackend::Postgres(database) => {
                if !seed.applications.is_empty() {
                    tracing::debug!("Skipping demo applications, database is the source of truth");
                }
                let pool = database.pool().clone();
                (
                    Arc::new(PgApplicationStore::new(pool.clone())),
                    Arc::new(PgRenewalStore::new(pool.clone())),
                    Arc::new(PgRenewalSettingsStore::new(pool)),
                    Some(database),
                )
            }
        };

        Self {
            users: Arc::new(UserStore::new(seed.users, bcrypt_cost)),
            students: Arc::new(StudentStore::new(seed.students)),
            records: Arc::new(RecordStore::new(seed.records)),
            applications,
            renewals,
            renewal_settings,
            tokens: Arc::new(tokens),
            database,
        }
    }

    pub fn storage_name(&self) -> &'static str {
        if self.database.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
