//! Employee Repository
//!
//! Multi-row reads are returned as lazy streams; callers decide whether to
//! collect them. Substring filters use `instr`, so matching is case-sensitive
//! and `%` / `_` in the needle are literal characters.

use super::{RepoError, RepoResult};
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use shared::models::Employee;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every stored employee, in id order
    pub fn find_all(&self) -> BoxStream<'_, RepoResult<Employee>> {
        sqlx::query_as::<_, Employee>("SELECT id, name, role FROM employee ORDER BY id")
            .fetch(&self.pool)
            .map_err(RepoError::from)
            .boxed()
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        let employee =
            sqlx::query_as::<_, Employee>("SELECT id, name, role FROM employee WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(employee)
    }

    pub async fn exists_by_id(&self, id: i64) -> RepoResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM employee WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Insert when `id` is unset, otherwise update the row with that id
    ///
    /// Saving an employee whose id has no row is `NotFound`; rows with a
    /// caller-chosen id are created through [`crate::db::DataClient`].
    pub async fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        match employee.id() {
            None => {
                let saved = sqlx::query_as::<_, Employee>(
                    "INSERT INTO employee (name, role) VALUES (?, ?) RETURNING id, name, role",
                )
                .bind(employee.name())
                .bind(employee.role())
                .fetch_one(&self.pool)
                .await?;
                Ok(saved)
            }
            Some(id) => sqlx::query_as::<_, Employee>(
                "UPDATE employee SET name = ?, role = ? WHERE id = ? RETURNING id, name, role",
            )
            .bind(employee.name())
            .bind(employee.role())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found"))),
        }
    }

    pub fn find_by_name_contains<'a>(
        &'a self,
        name: &'a str,
    ) -> BoxStream<'a, RepoResult<Employee>> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, name, role FROM employee WHERE instr(name, ?) > 0 ORDER BY id",
        )
        .bind(name)
        .fetch(&self.pool)
        .map_err(RepoError::from)
        .boxed()
    }

    /// Rows whose name contains `name` or whose role contains `role`
    pub fn find_by_name_contains_or_role_contains<'a>(
        &'a self,
        name: &'a str,
        role: &'a str,
    ) -> BoxStream<'a, RepoResult<Employee>> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, name, role FROM employee \
             WHERE instr(name, ?) > 0 OR instr(role, ?) > 0 ORDER BY id",
        )
        .bind(name)
        .bind(role)
        .fetch(&self.pool)
        .map_err(RepoError::from)
        .boxed()
    }
}
