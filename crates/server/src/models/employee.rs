use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store employee; belongs to exactly one store
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Employee {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Owning store
    pub store_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub job_title: String,
}

/// Descriptive employee fields carried by create and update requests
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeFields {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub job_title: String,
}

/// Create-vs-update request variant, chosen by the transport layer
#[derive(Debug, Clone)]
pub enum EmployeeUpsert {
    Create(EmployeeFields),
    Update { id: i64, fields: EmployeeFields },
}
