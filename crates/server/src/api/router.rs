use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{openapi::ApiDoc, state::AppState};

use super::handlers;

pub fn create_router(state: AppState) -> (Router, utoipa::openapi::OpenApi) {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(handlers::create_pet_store, handlers::get_pet_stores))
        .routes(routes!(
            handlers::get_pet_store,
            handlers::update_pet_store,
            handlers::delete_pet_store
        ))
        .routes(routes!(handlers::add_employee_to_store))
        .routes(routes!(handlers::update_store_employee))
        .routes(routes!(handlers::add_customer_to_store))
        .with_state(state)
        .split_for_parts();

    (router, api)
}
