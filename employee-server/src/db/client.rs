//! Raw table access
//!
//! [`EmployeeRepository::save`](crate::db::EmployeeRepository::save) decides
//! between INSERT and UPDATE from whether the id is set, which is wrong for a
//! row the caller wants created under an id of its own choosing. This client
//! writes the row exactly as given.

use crate::db::RepoResult;
use shared::models::Employee;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct DataClient {
    pool: SqlitePool,
}

impl DataClient {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// `INSERT INTO employee` with every column taken from `employee`
    ///
    /// A taken id fails with [`RepoError::Duplicate`](crate::db::RepoError::Duplicate).
    pub async fn insert(&self, employee: &Employee) -> RepoResult<()> {
        sqlx::query("INSERT INTO employee (id, name, role) VALUES (?, ?, ?)")
            .bind(employee.id())
            .bind(employee.name())
            .bind(employee.role())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
