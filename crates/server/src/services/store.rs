use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::{
    Customer, CustomerAttach, Employee, EmployeeFields, EmployeeUpsert, Store, StoreData,
    StoreUpsert,
};
use crate::repositories::{CustomerRepository, EmployeeRepository, StoreRepository};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Pet store with ID={0} does not exist")]
    StoreNotFound(i64),
    #[error("Employee with ID={0} not found")]
    EmployeeNotFound(i64),
    #[error("Customer with ID={0} not found")]
    CustomerNotFound(i64),
    #[error("Employee {employee_id} does not belong to pet store {store_id}")]
    EmployeeStoreMismatch { employee_id: i64, store_id: i64 },
    #[error("Customer {customer_id} is not associated with pet store {store_id}")]
    CustomerNotAssociated { customer_id: i64, store_id: i64 },
}

/// Service for managing pet stores and their employee and customer
/// associations.
///
/// Stateless apart from the storage handle, which is injected once at
/// construction. Every operation is a single read-modify-write against the
/// database; ordering between concurrent requests touching the same store
/// is left to the storage layer.
pub struct StoreService {
    db: SqlitePool,
}

impl StoreService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Create a store, or overwrite an existing store's descriptive fields.
    ///
    /// The identifier is assigned by storage on create and never mutated on
    /// update. Returns the full representation including both collections.
    pub async fn save_store(&self, upsert: StoreUpsert) -> Result<StoreData, StoreError> {
        let store = match upsert {
            StoreUpsert::Create(fields) => StoreRepository::create(&self.db, fields).await?,
            StoreUpsert::Update { id, fields } => StoreRepository::update(&self.db, id, fields)
                .await?
                .ok_or(StoreError::StoreNotFound(id))?,
        };

        self.store_data(store).await
    }

    /// Add a newly created employee to an existing store. Always creates;
    /// the fields struct carries no identifier by construction.
    pub async fn add_employee(
        &self,
        store_id: i64,
        fields: EmployeeFields,
    ) -> Result<Employee, StoreError> {
        self.load_store(store_id).await?;

        Ok(EmployeeRepository::create(&self.db, store_id, fields).await?)
    }

    /// Create an employee under the store, or overwrite an existing one.
    ///
    /// The update arm verifies the employee already belongs to the given
    /// store before touching it; a mismatch is a validation error, not a
    /// re-parenting.
    pub async fn save_employee(
        &self,
        store_id: i64,
        upsert: EmployeeUpsert,
    ) -> Result<Employee, StoreError> {
        self.load_store(store_id).await?;

        match upsert {
            EmployeeUpsert::Create(fields) => {
                Ok(EmployeeRepository::create(&self.db, store_id, fields).await?)
            }
            EmployeeUpsert::Update { id, fields } => {
                let employee = EmployeeRepository::get_by_id(&self.db, id)
                    .await?
                    .ok_or(StoreError::EmployeeNotFound(id))?;

                if employee.store_id != store_id {
                    return Err(StoreError::EmployeeStoreMismatch {
                        employee_id: id,
                        store_id,
                    });
                }

                EmployeeRepository::update(&self.db, id, store_id, fields)
                    .await?
                    .ok_or(StoreError::EmployeeNotFound(id))
            }
        }
    }

    /// Attach a customer to a store.
    ///
    /// A new customer is created with all descriptive fields unset. An
    /// existing customer must already be a member of the store; this branch
    /// never creates a new association. Either way the membership row is
    /// (re-)recorded, which is a no-op for an existing member.
    pub async fn add_customer(
        &self,
        store_id: i64,
        attach: CustomerAttach,
    ) -> Result<Customer, StoreError> {
        self.load_store(store_id).await?;

        let customer = match attach {
            CustomerAttach::New => CustomerRepository::create_blank(&self.db).await?,
            CustomerAttach::Existing(id) => {
                let customer = CustomerRepository::get_by_id(&self.db, id)
                    .await?
                    .ok_or(StoreError::CustomerNotFound(id))?;

                let memberships = CustomerRepository::store_ids(&self.db, id).await?;
                if !memberships.contains(&store_id) {
                    return Err(StoreError::CustomerNotAssociated {
                        customer_id: id,
                        store_id,
                    });
                }

                customer
            }
        };

        CustomerRepository::add_to_store(&self.db, store_id, customer.id).await?;

        Ok(customer)
    }

    /// All stores, with employees included and the customer collection
    /// suppressed to keep the response bounded.
    pub async fn get_all(&self) -> Result<Vec<StoreData>, StoreError> {
        let stores = StoreRepository::get_all(&self.db).await?;
        let mut result = Vec::with_capacity(stores.len());

        for store in stores {
            let employees = EmployeeRepository::get_by_store_id(&self.db, store.id).await?;
            result.push(StoreData {
                store,
                employees,
                customers: Vec::new(),
            });
        }

        Ok(result)
    }

    /// One store with both collections
    pub async fn get_by_id(&self, store_id: i64) -> Result<StoreData, StoreError> {
        let store = self.load_store(store_id).await?;
        self.store_data(store).await
    }

    /// Delete a store. Owned employees and membership rows are removed by
    /// the storage layer's cascade; the customers themselves survive.
    pub async fn delete(&self, store_id: i64) -> Result<(), StoreError> {
        self.load_store(store_id).await?;
        StoreRepository::delete(&self.db, store_id).await?;

        Ok(())
    }

    async fn load_store(&self, store_id: i64) -> Result<Store, StoreError> {
        StoreRepository::get_by_id(&self.db, store_id)
            .await?
            .ok_or(StoreError::StoreNotFound(store_id))
    }

    async fn store_data(&self, store: Store) -> Result<StoreData, StoreError> {
        let employees = EmployeeRepository::get_by_store_id(&self.db, store.id).await?;
        let customers = CustomerRepository::get_by_store_id(&self.db, store.id).await?;

        Ok(StoreData {
            store,
            employees,
            customers,
        })
    }
}
