//! Identity store

use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{MemoryTable, StoreError, StoreResult};
use crate::models::{User, UserRole};

/// In-memory user accounts, unique by email
pub struct UserStore {
    table: RwLock<MemoryTable<User>>,
    bcrypt_cost: u32,
}

impl UserStore {
    pub fn new(users: Vec<User>, bcrypt_cost: u32) -> Self {
        Self {
            table: RwLock::new(MemoryTable::new(users, |u| u.id)),
            bcrypt_cost,
        }
    }

    /// Returns the user when both email and password match.
    ///
    /// Unknown emails and wrong passwords are indistinguishable to the caller.
    pub async fn authenticate(&self, email: &str, password: &str) -> StoreResult<Option<User>> {
        let Some(user) = self
            .table
            .read()
            .await
            .rows()
            .iter()
            .find(|u| u.email == email)
            .cloned()
        else {
            return Ok(None);
        };

        let password = password.to_string();
        let hash = user.password_hash.clone();
        match run_blocking(move || bcrypt::verify(password, &hash)).await? {
            Ok(true) => Ok(Some(user)),
            Ok(false) => Ok(None),
            Err(e) => {
                tracing::warn!(user_id = user.id, error = %e, "Stored password hash is unreadable");
                Ok(None)
            }
        }
    }

    /// Adds an account, hashing `password` or the role's default password
    pub async fn create(
        &self,
        role: UserRole,
        name: &str,
        email: &str,
        password: Option<&str>,
    ) -> StoreResult<User> {
        let password = password.unwrap_or_else(|| role.default_password()).to_string();
        let cost = self.bcrypt_cost;
        let password_hash = run_blocking(move || bcrypt::hash(password, cost))
            .await?
            .map_err(|e| StoreError::Backend(format!("Failed to hash password: {}", e)))?;

        let mut table = self.table.write().await;
        if table.rows().iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail(email.to_string()));
        }

        let user = table
            .insert_with(|id| User {
                id,
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                role,
            })
            .clone();

        tracing::info!(user_id = user.id, role = %role, "User created");
        Ok(user)
    }

    pub async fn list(&self) -> Vec<User> {
        self.table.read().await.rows().to_vec()
    }

    pub async fn list_by_role(&self, role: UserRole) -> Vec<User> {
        self.table
            .read()
            .await
            .rows()
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: i64) -> StoreResult<User> {
        self.table
            .read()
            .await
            .rows()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("User not found".to_string()))
    }

    pub async fn count_by_role(&self) -> HashMap<UserRole, usize> {
        let table = self.table.read().await;
        let mut counts = HashMap::new();
        for user in table.rows() {
            *counts.entry(user.role).or_insert(0) += 1;
        }
        counts
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows().len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// bcrypt is CPU-bound; keep it off the async worker threads
async fn run_blocking<T, F>(work: F) -> StoreResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| StoreError::Backend(format!("Password task failed: {}", e)))
}
