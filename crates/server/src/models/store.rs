use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Customer, Employee};

/// Pet store main entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Store {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
}

/// Descriptive store fields carried by create and update requests
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreFields {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
}

/// Create-vs-update request variant, chosen by the transport layer.
/// The identifier of an existing store is never carried in the body.
#[derive(Debug, Clone)]
pub enum StoreUpsert {
    Create(StoreFields),
    Update { id: i64, fields: StoreFields },
}

/// A store with its relational collections
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreData {
    #[serde(flatten)]
    pub store: Store,
    /// Employees owned by this store
    pub employees: Vec<Employee>,
    /// Customers associated with this store; suppressed (empty) in list
    /// responses
    pub customers: Vec<Customer>,
}
