//! Student roster store

use tokio::sync::RwLock;

use super::{MemoryTable, StoreError, StoreResult};
use crate::models::{NewStudent, Student};

/// Student roster
pub struct StudentStore {
    table: RwLock<MemoryTable<Student>>,
}

impl StudentStore {
    pub fn new(students: Vec<Student>) -> Self {
        Self {
            table: RwLock::new(MemoryTable::new(students, |s| s.id)),
        }
    }

    pub async fn list(&self) -> Vec<Student> {
        self.table.read().await.rows().to_vec()
    }

    pub async fn get(&self, id: i64) -> StoreResult<Student> {
        self.find(id)
            .await
            .ok_or_else(|| StoreError::NotFound("Student not found".to_string()))
    }

    pub async fn find(&self, id: i64) -> Option<Student> {
        self.table
            .read()
            .await
            .rows()
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    pub async fn create(&self, new: NewStudent) -> Student {
        let student = self
            .table
            .write()
            .await
            .insert_with(|id| Student {
                id,
                name: new.name,
                email: new.email,
                course: new.course,
                year: new.year,
            })
            .clone();

        tracing::info!(student_id = student.id, "Student added");
        student
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_get() {
        let store = StudentStore::new(Vec::new());
        let created = store
            .create(NewStudent {
                name: "A".to_string(),
                email: "a@x.com".to_string(),
                course: String::new(),
                year: 1,
            })
            .await;

        assert_eq!(created.id, 1);
        assert_eq!(store.get(created.id).await.unwrap(), created);
        assert!(matches!(store.get(2).await, Err(StoreError::NotFound(_))));
    }
}
