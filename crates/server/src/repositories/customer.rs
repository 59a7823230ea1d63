use sqlx::SqlitePool;

use crate::models::Customer;

/// Common SELECT fields for customer queries
const SELECT_CUSTOMER: &str = r#"
    SELECT id, created_at, updated_at, first_name, last_name, email
    FROM customer
"#;

pub struct CustomerRepository;

impl CustomerRepository {
    /// Create a customer with all descriptive fields unset
    pub async fn create_blank(pool: &SqlitePool) -> Result<Customer, sqlx::Error> {
        let result = sqlx::query("INSERT INTO customer DEFAULT VALUES RETURNING id")
            .fetch_one(pool)
            .await?;

        let id: i64 = sqlx::Row::get(&result, "id");
        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get a customer by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_CUSTOMER);
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Get all customers associated with a store
    pub async fn get_by_store_id(
        pool: &SqlitePool,
        store_id: i64,
    ) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!(
            "{} WHERE id IN (SELECT customer_id FROM pet_store_customer WHERE store_id = $1) ORDER BY id",
            SELECT_CUSTOMER
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(store_id)
            .fetch_all(pool)
            .await
    }

    /// Store membership set of a customer
    pub async fn store_ids(pool: &SqlitePool, customer_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT store_id FROM pet_store_customer WHERE customer_id = $1 ORDER BY store_id",
        )
        .bind(customer_id)
        .fetch_all(pool)
        .await
    }

    /// Record the store/customer association. Idempotent: re-attaching an
    /// already associated customer is a no-op.
    pub async fn add_to_store(
        pool: &SqlitePool,
        store_id: i64,
        customer_id: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT OR IGNORE INTO pet_store_customer (store_id, customer_id) VALUES ($1, $2)")
            .bind(store_id)
            .bind(customer_id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
