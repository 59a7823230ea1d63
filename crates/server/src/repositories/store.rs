use sqlx::SqlitePool;

use crate::models::{Store, StoreFields};

/// Common SELECT fields for store queries
const SELECT_STORE: &str = r#"
    SELECT id, created_at, updated_at, name, address, city, state, zip, phone
    FROM pet_store
"#;

pub struct StoreRepository;

impl StoreRepository {
    /// Create a new store
    pub async fn create(pool: &SqlitePool, fields: StoreFields) -> Result<Store, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO pet_store (name, address, city, state, zip, phone)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.address)
        .bind(&fields.city)
        .bind(&fields.state)
        .bind(&fields.zip)
        .bind(&fields.phone)
        .fetch_one(pool)
        .await?;

        let id: i64 = sqlx::Row::get(&result, "id");
        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get a store by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Store>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_STORE);
        sqlx::query_as::<_, Store>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Get all stores
    pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Store>, sqlx::Error> {
        let query = format!("{} ORDER BY id", SELECT_STORE);
        sqlx::query_as::<_, Store>(&query).fetch_all(pool).await
    }

    /// Overwrite the descriptive fields of an existing store.
    /// The identifier is never touched.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        fields: StoreFields,
    ) -> Result<Option<Store>, sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE pet_store SET
                name = $1,
                address = $2,
                city = $3,
                state = $4,
                zip = $5,
                phone = $6,
                updated_at = datetime('now')
            WHERE id = $7
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.address)
        .bind(&fields.city)
        .bind(&fields.state)
        .bind(&fields.zip)
        .bind(&fields.phone)
        .bind(id)
        .execute(pool)
        .await?;

        Self::get_by_id(pool, id).await
    }

    /// Delete a store by ID. Owned employees and membership rows are
    /// removed by the foreign-key cascade.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pet_store WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
