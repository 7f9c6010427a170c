//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use futures::TryStreamExt;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Employee;

use crate::core::ServerState;

/// Body of the 400 returned by `/search` without a usable parameter
pub const SEARCH_USAGE: &str = "You must use either '?nameContains' or '?contains'";

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees: Vec<Employee> = state.employees.find_all().try_collect().await?;
    Ok(Json(employees))
}

/// Create a new employee; any id in the body is discarded
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<Employee>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employees
        .save(&Employee::new(payload.name(), payload.role()))
        .await?;

    tracing::info!(%employee, "Employee created");
    Ok(Json(employee))
}

/// Get employee by id; an unknown id is a 200 with an empty body
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let response = match state.employees.find_by_id(id).await? {
        Some(employee) => Json(employee).into_response(),
        None => StatusCode::OK.into_response(),
    };
    Ok(response)
}

/// Update the employee at `id`, or create it under that id
///
/// The existence check and the write are separate statements. Two
/// concurrent requests for the same new id can both take the insert
/// branch; the loser fails on the primary key and gets a 500.
pub async fn create_or_replace(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<Employee>,
) -> AppResult<Json<Employee>> {
    if state.employees.exists_by_id(id).await? {
        update(&state, id, &payload).await?;
    } else {
        insert(&state, id, &payload).await?;
    }

    let employee = state
        .employees
        .find_by_id(id)
        .await?
        .ok_or_else(|| employee_not_found(id))?;
    Ok(Json(employee))
}

async fn update(state: &ServerState, id: i64, changes: &Employee) -> AppResult<()> {
    state
        .employees
        .find_by_id(id)
        .await?
        .ok_or_else(|| employee_not_found(id))?;

    let replacement = Employee::with_id(id, changes.name(), changes.role());
    state.employees.save(&replacement).await?;

    tracing::info!(%replacement, "Employee updated");
    Ok(())
}

async fn insert(state: &ServerState, id: i64, fields: &Employee) -> AppResult<()> {
    let employee = Employee::with_id(id, fields.name(), fields.role());
    state.data_client.insert(&employee).await?;

    tracing::info!(%employee, "Employee inserted with client-supplied id");
    Ok(())
}

fn employee_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::EmployeeNotFound, format!("Employee {id} not found"))
}

/// First value of `key`; repeated keys are allowed and later values ignored
fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Substring search; `nameContains` wins over `contains`
pub async fn search(
    State(state): State<ServerState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Response> {
    let employees: Vec<Employee> = if let Some(name) = first_param(&params, "nameContains") {
        state.employees.find_by_name_contains(name).try_collect().await?
    } else if let Some(term) = first_param(&params, "contains") {
        state
            .employees
            .find_by_name_contains_or_role_contains(term, term)
            .try_collect()
            .await?
    } else {
        return Ok((StatusCode::BAD_REQUEST, SEARCH_USAGE).into_response());
    };

    Ok(Json(employees).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_param_takes_first_of_repeated_key() {
        let params = pairs(&[
            ("contains", "burglar"),
            ("nameContains", "Frodo"),
            ("nameContains", "Bilbo"),
        ]);
        assert_eq!(first_param(&params, "nameContains"), Some("Frodo"));
        assert_eq!(first_param(&params, "contains"), Some("burglar"));
        assert_eq!(first_param(&params, "role"), None);
    }

    #[test]
    fn test_first_param_keeps_empty_value() {
        let params = pairs(&[("nameContains", "")]);
        assert_eq!(first_param(&params, "nameContains"), Some(""));
    }
}
