//! Startup schema provisioning and seed data

use crate::core::{Result, ServerError};
use crate::db::EmployeeRepository;
use shared::models::Employee;
use sqlx::SqlitePool;

/// Employees inserted on every fresh start
pub const SEED_EMPLOYEES: [(&str, &str); 2] = [
    ("Frodo Baggins", "ring bearer"),
    ("Bilbo Baggins", "burglar"),
];

/// Apply the static schema in `migrations/`
pub async fn provision_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database schema ready");
    Ok(())
}

/// Insert [`SEED_EMPLOYEES`], failing unless each insert yields one persisted row
pub async fn seed_employees(repo: &EmployeeRepository) -> Result<Vec<Employee>> {
    let mut seeded = Vec::with_capacity(SEED_EMPLOYEES.len());

    for (name, role) in SEED_EMPLOYEES {
        let saved = repo
            .save(&Employee::new(name, role))
            .await
            .map_err(|e| ServerError::Seed(format!("{name}: {e}")))?;

        if saved.id().is_none() {
            return Err(ServerError::Seed(format!("{name}: no id assigned")));
        }

        tracing::info!(%saved, "Seeded employee");
        seeded.push(saved);
    }

    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use futures::TryStreamExt;

    #[tokio::test]
    async fn test_seed_inserts_two_rows() {
        let db = DbService::connect("sqlite::memory:", 1).await.unwrap();
        provision_schema(&db.pool).await.unwrap();

        let seeded = seed_employees(&db.employees()).await.unwrap();

        assert_eq!(
            seeded,
            vec![
                Employee::with_id(1, "Frodo Baggins", "ring bearer"),
                Employee::with_id(2, "Bilbo Baggins", "burglar"),
            ]
        );

        let repo = db.employees();
        let bagginses: Vec<Employee> = repo
            .find_by_name_contains("Baggins")
            .try_collect()
            .await
            .unwrap();
        assert_eq!(bagginses.len(), 2);

        let frodos: Vec<Employee> = repo
            .find_by_name_contains("Frodo")
            .try_collect()
            .await
            .unwrap();
        assert_eq!(frodos.len(), 1);
    }

    #[tokio::test]
    async fn test_provision_schema_is_idempotent() {
        let db = DbService::connect("sqlite::memory:", 1).await.unwrap();
        provision_schema(&db.pool).await.unwrap();
        provision_schema(&db.pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_seed_without_schema_fails() {
        let db = DbService::connect("sqlite::memory:", 1).await.unwrap();
        let err = seed_employees(&db.employees()).await.unwrap_err();
        assert!(matches!(err, ServerError::Seed(_)));
    }
}
