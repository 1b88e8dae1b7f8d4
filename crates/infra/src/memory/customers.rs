//! In-memory customer store.

use std::collections::HashMap;
use std::sync::RwLock;

use minibank_core::{CustomerId, StoreError};
use minibank_customers::{Customer, CustomerStatus, CustomerStore};

/// Customers keyed by id. Username uniqueness is enforced on create, the
/// way the registration screen expects.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    inner: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerStore for InMemoryCustomerStore {
    fn create(&self, customer: Customer) -> Result<Customer, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        if map.contains_key(&customer.id) {
            return Err(StoreError::Duplicate(customer.id.to_string()));
        }
        if map.values().any(|c| c.username == customer.username) {
            return Err(StoreError::Duplicate(customer.username.clone()));
        }
        map.insert(customer.id, customer.clone());
        Ok(customer)
    }

    fn find(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.get(&id).cloned())
    }

    fn update(&self, customer: Customer) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        match map.get_mut(&customer.id) {
            Some(slot) => {
                *slot = customer;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    fn pending(&self) -> Result<Vec<Customer>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut out: Vec<Customer> = map
            .values()
            .filter(|c| c.status == CustomerStatus::Pending)
            .cloned()
            .collect();
        out.sort_by_key(|c| (c.registered_at, c.id.to_string()));
        Ok(out)
    }
}
