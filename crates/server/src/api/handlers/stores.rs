use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::models::{StoreData, StoreFields, StoreUpsert};
use crate::state::AppState;

/// Response body for a store deletion
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteStoreResponse {
    pub message: String,
}

/// Create a new pet store
#[utoipa::path(
    post,
    path = "/api/stores",
    tag = "stores",
    request_body = StoreFields,
    responses(
        (status = 201, description = "Pet store created successfully", body = StoreData)
    )
)]
pub async fn create_pet_store(
    State(state): State<AppState>,
    Json(payload): Json<StoreFields>,
) -> AppResult<(StatusCode, Json<StoreData>)> {
    tracing::info!("Received a request to create pet store: {:?}", payload);
    let store = state.stores.save_store(StoreUpsert::Create(payload)).await?;
    Ok((StatusCode::CREATED, Json(store)))
}

/// Update an existing pet store
#[utoipa::path(
    put,
    path = "/api/stores/{store_id}",
    tag = "stores",
    params(
        ("store_id" = i64, Path, description = "Pet store ID")
    ),
    request_body = StoreFields,
    responses(
        (status = 200, description = "Pet store updated successfully", body = StoreData),
        (status = 404, description = "Pet store not found")
    )
)]
pub async fn update_pet_store(
    State(state): State<AppState>,
    Path(store_id): Path<i64>,
    Json(payload): Json<StoreFields>,
) -> AppResult<Json<StoreData>> {
    tracing::info!("Updating pet store with ID={}", store_id);
    let store = state
        .stores
        .save_store(StoreUpsert::Update {
            id: store_id,
            fields: payload,
        })
        .await?;
    Ok(Json(store))
}

/// Get all pet stores
///
/// Customer collections are suppressed in this listing; fetch a single
/// store to see its customers.
#[utoipa::path(
    get,
    path = "/api/stores",
    tag = "stores",
    responses(
        (status = 200, description = "List of all pet stores", body = Vec<StoreData>)
    )
)]
pub async fn get_pet_stores(State(state): State<AppState>) -> AppResult<Json<Vec<StoreData>>> {
    tracing::info!("Received a request to retrieve all pet stores");
    let stores = state.stores.get_all().await?;
    Ok(Json(stores))
}

/// Get a pet store by ID
#[utoipa::path(
    get,
    path = "/api/stores/{store_id}",
    tag = "stores",
    params(
        ("store_id" = i64, Path, description = "Pet store ID")
    ),
    responses(
        (status = 200, description = "Pet store with employees and customers", body = StoreData),
        (status = 404, description = "Pet store not found")
    )
)]
pub async fn get_pet_store(
    State(state): State<AppState>,
    Path(store_id): Path<i64>,
) -> AppResult<Json<StoreData>> {
    tracing::info!("Received a request to retrieve pet store with ID={}", store_id);
    let store = state.stores.get_by_id(store_id).await?;
    Ok(Json(store))
}

/// Delete a pet store
///
/// Employees owned by the store are removed with it; associated customers
/// survive and only lose the membership.
#[utoipa::path(
    delete,
    path = "/api/stores/{store_id}",
    tag = "stores",
    params(
        ("store_id" = i64, Path, description = "Pet store ID")
    ),
    responses(
        (status = 200, description = "Pet store deleted successfully", body = DeleteStoreResponse),
        (status = 404, description = "Pet store not found")
    )
)]
pub async fn delete_pet_store(
    State(state): State<AppState>,
    Path(store_id): Path<i64>,
) -> AppResult<Json<DeleteStoreResponse>> {
    tracing::info!("Received a request to delete pet store with ID={}", store_id);
    state.stores.delete(store_id).await?;
    Ok(Json(DeleteStoreResponse {
        message: format!(
            "Pet store with ID {} has been deleted successfully.",
            store_id
        ),
    }))
}
