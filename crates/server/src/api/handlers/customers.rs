use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::models::{AttachCustomerRequest, Customer, CustomerAttach};
use crate::state::AppState;

/// Attach a customer to a pet store
///
/// A request without a customer ID creates a new customer and associates
/// it with the store. A request with a customer ID attaches an existing
/// customer, which must already be associated with the store.
#[utoipa::path(
    post,
    path = "/api/stores/{store_id}/customers",
    tag = "customers",
    params(
        ("store_id" = i64, Path, description = "Pet store ID")
    ),
    request_body = AttachCustomerRequest,
    responses(
        (status = 201, description = "Customer attached successfully", body = Customer),
        (status = 400, description = "Customer is not associated with the pet store"),
        (status = 404, description = "Pet store or customer not found")
    )
)]
pub async fn add_customer_to_store(
    State(state): State<AppState>,
    Path(store_id): Path<i64>,
    Json(payload): Json<AttachCustomerRequest>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    tracing::info!(
        "Received a request to add customer to pet store with ID={}",
        store_id
    );
    let attach = CustomerAttach::from(&payload);
    let customer = state.stores.add_customer(store_id, attach).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}
