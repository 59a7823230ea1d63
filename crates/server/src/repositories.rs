mod customer;
mod employee;
mod store;

pub use customer::CustomerRepository;
pub use employee::EmployeeRepository;
pub use store::StoreRepository;
