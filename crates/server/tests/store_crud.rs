use server::models::{CustomerAttach, EmployeeFields, EmployeeUpsert, StoreFields, StoreUpsert};
use server::repositories::{CustomerRepository, EmployeeRepository};
use server::services::{StoreError, StoreService};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

async fn setup() -> (SqlitePool, StoreService) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::migrate!("../../migrations").run(&pool).await.unwrap();

    let service = StoreService::new(pool.clone());
    (pool, service)
}

fn store_fields(name: &str, city: &str) -> StoreFields {
    StoreFields {
        name: name.to_string(),
        address: "1 Main St".to_string(),
        city: city.to_string(),
        state: "IL".to_string(),
        zip: "62704".to_string(),
        phone: "555-0100".to_string(),
    }
}

fn employee_fields(first_name: &str, job_title: &str) -> EmployeeFields {
    EmployeeFields {
        first_name: first_name.to_string(),
        last_name: "Smith".to_string(),
        phone: "555-0199".to_string(),
        job_title: job_title.to_string(),
    }
}

#[tokio::test]
async fn create_store_assigns_id_and_copies_fields() {
    let (_pool, service) = setup().await;

    let created = service
        .save_store(StoreUpsert::Create(store_fields("Pets Inc", "Springfield")))
        .await
        .unwrap();

    assert!(created.store.id > 0);
    assert_eq!(created.store.name, "Pets Inc");
    assert_eq!(created.store.address, "1 Main St");
    assert_eq!(created.store.city, "Springfield");
    assert_eq!(created.store.state, "IL");
    assert_eq!(created.store.zip, "62704");
    assert_eq!(created.store.phone, "555-0100");
    assert!(created.employees.is_empty());
    assert!(created.customers.is_empty());
}

#[tokio::test]
async fn created_stores_get_distinct_ids() {
    let (_pool, service) = setup().await;

    let first = service
        .save_store(StoreUpsert::Create(store_fields("First", "Springfield")))
        .await
        .unwrap();
    let second = service
        .save_store(StoreUpsert::Create(store_fields("Second", "Shelbyville")))
        .await
        .unwrap();

    assert_ne!(first.store.id, second.store.id);
}

#[tokio::test]
async fn update_store_overwrites_fields_and_preserves_id() {
    let (_pool, service) = setup().await;

    let created = service
        .save_store(StoreUpsert::Create(store_fields("Pets Inc", "Springfield")))
        .await
        .unwrap();

    let mut fields = store_fields("Pets Incorporated", "Shelbyville");
    fields.phone = "555-0123".to_string();
    let updated = service
        .save_store(StoreUpsert::Update {
            id: created.store.id,
            fields,
        })
        .await
        .unwrap();

    assert_eq!(updated.store.id, created.store.id);
    assert_eq!(updated.store.name, "Pets Incorporated");
    assert_eq!(updated.store.city, "Shelbyville");
    assert_eq!(updated.store.phone, "555-0123");
}

#[tokio::test]
async fn update_missing_store_is_not_found() {
    let (_pool, service) = setup().await;

    let err = service
        .save_store(StoreUpsert::Update {
            id: 42,
            fields: store_fields("Ghost", "Nowhere"),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::StoreNotFound(42)));
}

#[tokio::test]
async fn add_employee_to_missing_store_is_not_found() {
    let (_pool, service) = setup().await;

    let err = service
        .add_employee(7, employee_fields("Al", "Groomer"))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::StoreNotFound(7)));
}

#[tokio::test]
async fn add_employee_links_to_store() {
    let (_pool, service) = setup().await;

    let store = service
        .save_store(StoreUpsert::Create(store_fields("Pets Inc", "Springfield")))
        .await
        .unwrap();

    let employee = service
        .add_employee(store.store.id, employee_fields("Al", "Groomer"))
        .await
        .unwrap();

    assert!(employee.id > 0);
    assert_eq!(employee.store_id, store.store.id);
    assert_eq!(employee.first_name, "Al");
    assert_eq!(employee.job_title, "Groomer");
}

#[tokio::test]
async fn save_employee_create_registers_in_store_collection() {
    let (_pool, service) = setup().await;

    let store = service
        .save_store(StoreUpsert::Create(store_fields("Pets Inc", "Springfield")))
        .await
        .unwrap();

    let employee = service
        .save_employee(
            store.store.id,
            EmployeeUpsert::Create(employee_fields("Bea", "Vet")),
        )
        .await
        .unwrap();

    let loaded = service.get_by_id(store.store.id).await.unwrap();
    assert_eq!(loaded.employees.len(), 1);
    assert_eq!(loaded.employees[0].id, employee.id);
}

#[tokio::test]
async fn save_employee_update_overwrites_fields_and_keeps_link() {
    let (_pool, service) = setup().await;

    let store = service
        .save_store(StoreUpsert::Create(store_fields("Pets Inc", "Springfield")))
        .await
        .unwrap();
    let employee = service
        .add_employee(store.store.id, employee_fields("Al", "Groomer"))
        .await
        .unwrap();

    let updated = service
        .save_employee(
            store.store.id,
            EmployeeUpsert::Update {
                id: employee.id,
                fields: employee_fields("Alfred", "Senior Groomer"),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, employee.id);
    assert_eq!(updated.store_id, store.store.id);
    assert_eq!(updated.first_name, "Alfred");
    assert_eq!(updated.job_title, "Senior Groomer");
}

#[tokio::test]
async fn save_employee_rejects_employee_of_another_store() {
    let (pool, service) = setup().await;

    let first = service
        .save_store(StoreUpsert::Create(store_fields("First", "Springfield")))
        .await
        .unwrap();
    let second = service
        .save_store(StoreUpsert::Create(store_fields("Second", "Shelbyville")))
        .await
        .unwrap();
    let employee = service
        .add_employee(first.store.id, employee_fields("Al", "Groomer"))
        .await
        .unwrap();

    let err = service
        .save_employee(
            second.store.id,
            EmployeeUpsert::Update {
                id: employee.id,
                fields: employee_fields("Al", "Groomer"),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::EmployeeStoreMismatch { .. }));

    // The rejected update must not have re-parented the employee
    let loaded = EmployeeRepository::get_by_id(&pool, employee.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.store_id, first.store.id);
}

#[tokio::test]
async fn save_employee_update_missing_employee_is_not_found() {
    let (_pool, service) = setup().await;

    let store = service
        .save_store(StoreUpsert::Create(store_fields("Pets Inc", "Springfield")))
        .await
        .unwrap();

    let err = service
        .save_employee(
            store.store.id,
            EmployeeUpsert::Update {
                id: 99,
                fields: employee_fields("Al", "Groomer"),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::EmployeeNotFound(99)));
}

#[tokio::test]
async fn attach_new_customer_creates_blank_record() {
    let (_pool, service) = setup().await;

    let store = service
        .save_store(StoreUpsert::Create(store_fields("Pets Inc", "Springfield")))
        .await
        .unwrap();

    let customer = service
        .add_customer(store.store.id, CustomerAttach::New)
        .await
        .unwrap();

    assert!(customer.id > 0);
    assert!(customer.first_name.is_none());
    assert!(customer.last_name.is_none());
    assert!(customer.email.is_none());

    let loaded = service.get_by_id(store.store.id).await.unwrap();
    assert_eq!(loaded.customers.len(), 1);
    assert_eq!(loaded.customers[0].id, customer.id);
}

#[tokio::test]
async fn attach_existing_customer_requires_membership() {
    let (_pool, service) = setup().await;

    let first = service
        .save_store(StoreUpsert::Create(store_fields("First", "Springfield")))
        .await
        .unwrap();
    let second = service
        .save_store(StoreUpsert::Create(store_fields("Second", "Shelbyville")))
        .await
        .unwrap();
    let customer = service
        .add_customer(first.store.id, CustomerAttach::New)
        .await
        .unwrap();

    let err = service
        .add_customer(second.store.id, CustomerAttach::Existing(customer.id))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::CustomerNotAssociated { .. }));
}

#[tokio::test]
async fn attach_existing_member_succeeds_and_stays_single() {
    let (_pool, service) = setup().await;

    let store = service
        .save_store(StoreUpsert::Create(store_fields("Pets Inc", "Springfield")))
        .await
        .unwrap();
    let customer = service
        .add_customer(store.store.id, CustomerAttach::New)
        .await
        .unwrap();

    let reattached = service
        .add_customer(store.store.id, CustomerAttach::Existing(customer.id))
        .await
        .unwrap();
    assert_eq!(reattached.id, customer.id);

    let loaded = service.get_by_id(store.store.id).await.unwrap();
    assert_eq!(loaded.customers.len(), 1);
}

#[tokio::test]
async fn attach_missing_customer_is_not_found() {
    let (_pool, service) = setup().await;

    let store = service
        .save_store(StoreUpsert::Create(store_fields("Pets Inc", "Springfield")))
        .await
        .unwrap();

    let err = service
        .add_customer(store.store.id, CustomerAttach::Existing(123))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::CustomerNotFound(123)));
}

#[tokio::test]
async fn customer_can_belong_to_multiple_stores() {
    let (pool, service) = setup().await;

    let first = service
        .save_store(StoreUpsert::Create(store_fields("First", "Springfield")))
        .await
        .unwrap();
    let second = service
        .save_store(StoreUpsert::Create(store_fields("Second", "Shelbyville")))
        .await
        .unwrap();
    let customer = service
        .add_customer(first.store.id, CustomerAttach::New)
        .await
        .unwrap();

    CustomerRepository::add_to_store(&pool, second.store.id, customer.id)
        .await
        .unwrap();

    let memberships = CustomerRepository::store_ids(&pool, customer.id)
        .await
        .unwrap();
    assert_eq!(memberships, vec![first.store.id, second.store.id]);

    // With the membership in place, an attach by ID is accepted at both
    service
        .add_customer(second.store.id, CustomerAttach::Existing(customer.id))
        .await
        .unwrap();
}

#[tokio::test]
async fn list_stores_suppresses_customers() {
    let (_pool, service) = setup().await;

    let store = service
        .save_store(StoreUpsert::Create(store_fields("Pets Inc", "Springfield")))
        .await
        .unwrap();
    service
        .add_employee(store.store.id, employee_fields("Al", "Groomer"))
        .await
        .unwrap();
    service
        .add_customer(store.store.id, CustomerAttach::New)
        .await
        .unwrap();

    let listed = service.get_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].employees.len(), 1);
    assert!(listed[0].customers.is_empty());

    // The association itself is intact
    let loaded = service.get_by_id(store.store.id).await.unwrap();
    assert_eq!(loaded.customers.len(), 1);
}

#[tokio::test]
async fn get_missing_store_is_not_found() {
    let (_pool, service) = setup().await;

    let err = service.get_by_id(5).await.unwrap_err();
    assert!(matches!(err, StoreError::StoreNotFound(5)));
}

#[tokio::test]
async fn delete_store_cascades_employees_but_spares_customers() {
    let (pool, service) = setup().await;

    let store = service
        .save_store(StoreUpsert::Create(store_fields("Pets Inc", "Springfield")))
        .await
        .unwrap();
    let employee = service
        .add_employee(store.store.id, employee_fields("Al", "Groomer"))
        .await
        .unwrap();
    let customer = service
        .add_customer(store.store.id, CustomerAttach::New)
        .await
        .unwrap();

    service.delete(store.store.id).await.unwrap();

    let err = service.get_by_id(store.store.id).await.unwrap_err();
    assert!(matches!(err, StoreError::StoreNotFound(_)));

    // Owned employee is gone with the store
    assert!(EmployeeRepository::get_by_id(&pool, employee.id)
        .await
        .unwrap()
        .is_none());

    // The customer survives, only the membership is gone
    assert!(CustomerRepository::get_by_id(&pool, customer.id)
        .await
        .unwrap()
        .is_some());
    assert!(CustomerRepository::store_ids(&pool, customer.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn delete_missing_store_is_not_found() {
    let (_pool, service) = setup().await;

    let err = service.delete(11).await.unwrap_err();
    assert!(matches!(err, StoreError::StoreNotFound(11)));
}
