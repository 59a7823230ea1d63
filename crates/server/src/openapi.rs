use utoipa::OpenApi;

use crate::api::handlers::DeleteStoreResponse;
use crate::models::{
    AttachCustomerRequest, Customer, Employee, EmployeeFields, Store, StoreData, StoreFields,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet Store API",
        version = "1.0.0"
    ),
    tags(
        (name = "stores", description = "Pet store management endpoints"),
        (name = "employees", description = "Store employee endpoints"),
        (name = "customers", description = "Store customer endpoints")
    ),
    components(schemas(
        Store,
        StoreFields,
        StoreData,
        Employee,
        EmployeeFields,
        Customer,
        AttachCustomerRequest,
        DeleteStoreResponse
    ))
)]
pub struct ApiDoc;
