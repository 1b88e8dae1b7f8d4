//! Customers domain module.
//!
//! Customer identity, the pending → active approval lifecycle, and account
//! categories. The lifecycle gate lives here: a customer may not transact
//! until an admin has approved them.

pub mod customer;
pub mod lifecycle;
pub mod store;

pub use customer::{Categories, Category, Customer, CustomerStatus, Profile};
pub use lifecycle::{LifecycleError, LifecycleManager, Registration};
pub use store::CustomerStore;
