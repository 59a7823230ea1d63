mod customers;
mod employees;
mod stores;

// Re-export all handlers
pub use customers::add_customer_to_store;
pub use employees::{add_employee_to_store, update_store_employee};
pub use stores::{
    create_pet_store, delete_pet_store, get_pet_store, get_pet_stores, update_pet_store,
    DeleteStoreResponse,
};

// Re-export utoipa path structs for OpenAPI routing
#[doc(hidden)]
pub use customers::__path_add_customer_to_store;
#[doc(hidden)]
pub use employees::{__path_add_employee_to_store, __path_update_store_employee};
#[doc(hidden)]
pub use stores::{
    __path_create_pet_store, __path_delete_pet_store, __path_get_pet_store, __path_get_pet_stores,
    __path_update_pet_store,
};
