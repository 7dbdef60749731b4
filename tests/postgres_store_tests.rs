//! PostgreSQL store tests. Run with `cargo test -- --ignored` against a
//! scratch database named by `TEST_DATABASE_URL`.

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use scholarship_server::db::Database;
    use scholarship_server::models::{ApplicationStatus, NewApplication, NewRenewal};
    use scholarship_server::store::{
        ApplicationStore, PgApplicationStore, PgRenewalSettingsStore, PgRenewalStore,
        RenewalSettingsStore, RenewalStore, StoreError,
    };

    async fn setup_test_db() -> PgPool {
        let database_url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| "postgresql://localhost/scholarship_test".to_string());

        let database = Database::connect(&database_url, 1)
            .await
            .expect("Failed to connect to test database");
        database.migrate().await.expect("Failed to run migrations");
        database.ping().await.expect("Test database did not answer");
        database.pool().clone()
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_application_lifecycle() {
        let store = PgApplicationStore::new(setup_test_db().await);

        let created = store
            .create(NewApplication::new(9001, "Test Student"))
            .await
            .unwrap();
        assert_eq!(created.status, ApplicationStatus::Pending);
        assert_eq!(created.first_name, "Test");
        assert!(!created.archived);

        let updated = store
            .update_status(created.id, ApplicationStatus::UnderReview)
            .await
            .unwrap();
        assert_eq!(updated.status, ApplicationStatus::UnderReview);

        let archived = store.archive(created.id).await.unwrap();
        assert!(archived.archived);
        assert_eq!(archived.status, ApplicationStatus::UnderReview);

        let first = store.first_for_student(9001).await.unwrap().unwrap();
        assert!(first.id <= created.id);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_missing_rows_are_not_found() {
        let pool = setup_test_db().await;
        let applications = PgApplicationStore::new(pool.clone());
        let renewals = PgRenewalStore::new(pool);

        assert!(matches!(
            applications.archive(i64::MAX).await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            renewals.get(i64::MAX).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_renewal_counts_track_inserts() {
        let pool = setup_test_db().await;
        let applications = PgApplicationStore::new(pool.clone());
        let renewals = PgRenewalStore::new(pool);

        let parent = applications
            .create(NewApplication::new(9002, "Renewing Student"))
            .await
            .unwrap();
        let before = renewals.status_counts().await.unwrap();

        let renewal = renewals
            .create(NewRenewal::new(parent.id, 9002, "Renewing Student"))
            .await
            .unwrap();
        assert_eq!(renewal.application_id, parent.id);

        let after = renewals.status_counts().await.unwrap();
        assert_eq!(after.total, before.total + 1);
        assert_eq!(after.pending, before.pending + 1);

        let approved = renewals
            .update_status(renewal.id, ApplicationStatus::Approved)
            .await
            .unwrap();
        assert_eq!(approved.status, ApplicationStatus::Approved);

        let settled = renewals.status_counts().await.unwrap();
        assert_eq!(settled.approved, after.approved + 1);
        assert_eq!(settled.pending, after.pending - 1);

        assert!(matches!(
            renewals
                .update_status(i64::MAX, ApplicationStatus::Rejected)
                .await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_renewal_window_upsert_is_idempotent() {
        let store = PgRenewalSettingsStore::new(setup_test_db().await);

        assert!(store.set_open(true).await.unwrap());
        assert!(store.set_open(true).await.unwrap());
        assert!(store.is_open().await.unwrap());

        assert!(!store.set_open(false).await.unwrap());
        assert!(!store.is_open().await.unwrap());
    }
}
