//! Storage seam for customers.

use std::sync::Arc;

use minibank_core::{CustomerId, StoreError};

use crate::customer::Customer;

/// Customer storage.
pub trait CustomerStore: Send + Sync {
    /// Insert a new customer. [`StoreError::Duplicate`] on id or username
    /// collision.
    fn create(&self, customer: Customer) -> Result<Customer, StoreError>;

    fn find(&self, id: CustomerId) -> Result<Option<Customer>, StoreError>;

    /// Replace the stored record. [`StoreError::NotFound`] if absent.
    fn update(&self, customer: Customer) -> Result<(), StoreError>;

    /// Customers awaiting approval, oldest registration first.
    fn pending(&self) -> Result<Vec<Customer>, StoreError>;
}

impl<S> CustomerStore for Arc<S>
where
    S: CustomerStore + ?Sized,
{
    fn create(&self, customer: Customer) -> Result<Customer, StoreError> {
        (**self).create(customer)
    }

    fn find(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        (**self).find(id)
    }

    fn update(&self, customer: Customer) -> Result<(), StoreError> {
        (**self).update(customer)
    }

    fn pending(&self) -> Result<Vec<Customer>, StoreError> {
        (**self).pending()
    }
}
