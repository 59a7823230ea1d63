use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Customer; may be associated with any number of stores
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Customer {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Unset for customers created through the attach endpoint
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// Request body for attaching a customer to a store
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttachCustomerRequest {
    /// Existing customer to attach; absent means a new customer is created
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Attach variant, chosen by the transport layer from the request body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerAttach {
    New,
    Existing(i64),
}

impl From<&AttachCustomerRequest> for CustomerAttach {
    fn from(req: &AttachCustomerRequest) -> Self {
        match req.customer_id {
            Some(id) => CustomerAttach::Existing(id),
            None => CustomerAttach::New,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_variant_follows_request_id() {
        let with_id: AttachCustomerRequest =
            serde_json::from_str(r#"{"customer_id": 7}"#).unwrap();
        assert_eq!(CustomerAttach::from(&with_id), CustomerAttach::Existing(7));

        let without_id: AttachCustomerRequest =
            serde_json::from_str(r#"{"first_name": "Al"}"#).unwrap();
        assert_eq!(CustomerAttach::from(&without_id), CustomerAttach::New);
    }
}
