use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::models::{Employee, EmployeeFields, EmployeeUpsert};
use crate::state::AppState;

/// Add a new employee to a pet store
///
/// Always creates; updating an existing employee goes through the PUT
/// route.
#[utoipa::path(
    post,
    path = "/api/stores/{store_id}/employees",
    tag = "employees",
    params(
        ("store_id" = i64, Path, description = "Pet store ID")
    ),
    request_body = EmployeeFields,
    responses(
        (status = 201, description = "Employee created successfully", body = Employee),
        (status = 404, description = "Pet store not found")
    )
)]
pub async fn add_employee_to_store(
    State(state): State<AppState>,
    Path(store_id): Path<i64>,
    Json(payload): Json<EmployeeFields>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    tracing::info!(
        "Received a request to add employee to pet store with ID={}",
        store_id
    );
    let employee = state.stores.add_employee(store_id, payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update an employee of a pet store
///
/// The employee must already belong to the store named in the path.
#[utoipa::path(
    put,
    path = "/api/stores/{store_id}/employees/{employee_id}",
    tag = "employees",
    params(
        ("store_id" = i64, Path, description = "Pet store ID"),
        ("employee_id" = i64, Path, description = "Employee ID")
    ),
    request_body = EmployeeFields,
    responses(
        (status = 200, description = "Employee updated successfully", body = Employee),
        (status = 400, description = "Employee belongs to a different pet store"),
        (status = 404, description = "Pet store or employee not found")
    )
)]
pub async fn update_store_employee(
    State(state): State<AppState>,
    Path((store_id, employee_id)): Path<(i64, i64)>,
    Json(payload): Json<EmployeeFields>,
) -> AppResult<Json<Employee>> {
    tracing::info!(
        "Updating employee with ID={} at pet store with ID={}",
        employee_id,
        store_id
    );
    let employee = state
        .stores
        .save_employee(
            store_id,
            EmployeeUpsert::Update {
                id: employee_id,
                fields: payload,
            },
        )
        .await?;
    Ok(Json(employee))
}
