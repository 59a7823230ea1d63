use sqlx::SqlitePool;

use crate::models::{Employee, EmployeeFields};

/// Common SELECT fields for employee queries
const SELECT_EMPLOYEE: &str = r#"
    SELECT id, created_at, updated_at, store_id, first_name, last_name, phone, job_title
    FROM employee
"#;

pub struct EmployeeRepository;

impl EmployeeRepository {
    /// Create a new employee linked to a store
    pub async fn create(
        pool: &SqlitePool,
        store_id: i64,
        fields: EmployeeFields,
    ) -> Result<Employee, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO employee (store_id, first_name, last_name, phone, job_title)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(store_id)
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.phone)
        .bind(&fields.job_title)
        .fetch_one(pool)
        .await?;

        let id: i64 = sqlx::Row::get(&result, "id");
        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get an employee by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_EMPLOYEE);
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Get all employees of a store
    pub async fn get_by_store_id(
        pool: &SqlitePool,
        store_id: i64,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("{} WHERE store_id = $1 ORDER BY id", SELECT_EMPLOYEE);
        sqlx::query_as::<_, Employee>(&query)
            .bind(store_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the descriptive fields of an existing employee and re-link
    /// it to the given store
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        store_id: i64,
        fields: EmployeeFields,
    ) -> Result<Option<Employee>, sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE employee SET
                store_id = $1,
                first_name = $2,
                last_name = $3,
                phone = $4,
                job_title = $5,
                updated_at = datetime('now')
            WHERE id = $6
            "#,
        )
        .bind(store_id)
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.phone)
        .bind(&fields.job_title)
        .bind(id)
        .execute(pool)
        .await?;

        Self::get_by_id(pool, id).await
    }
}
