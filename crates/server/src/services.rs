mod store;

pub use store::{StoreError, StoreService};
