//! Account lifecycle management: registration and approval.
//!
//! The lifecycle gate is a two-state machine per customer:
//!
//! ```text
//! Pending ──approve(category)──► Active   (terminal)
//! ```
//!
//! Registration creates the customer in `Pending` together with their
//! zero-balance account; approval flips the gate exactly once and binds the
//! account-type category. Approving an already-active customer is rejected,
//! not tolerated, so a misbehaving admin screen surfaces immediately.

use chrono::Utc;
use thiserror::Error;

use minibank_accounts::{Account, AccountStore};
use minibank_core::{BankId, CategoryId, CustomerId, StoreError};

use crate::customer::{Categories, Customer, CustomerStatus, Profile};
use crate::store::CustomerStore;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("unknown customer: {0}")]
    UnknownCustomer(CustomerId),

    #[error("customer {0} is already active")]
    AlreadyActive(CustomerId),

    #[error("unknown account category: {0}")]
    UnknownCategory(CategoryId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Input captured by the (excluded) registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub profile: Profile,
    pub username: String,
    /// Already-hashed credential; this layer never sees cleartext.
    pub password_hash: String,
    pub bank: BankId,
}

/// Orchestrates the customer lifecycle against the storage seams.
pub struct LifecycleManager<C, A> {
    customers: C,
    accounts: A,
    categories: Categories,
}

impl<C, A> LifecycleManager<C, A>
where
    C: CustomerStore,
    A: AccountStore,
{
    pub fn new(customers: C, accounts: A, categories: Categories) -> Self {
        Self {
            customers,
            accounts,
            categories,
        }
    }

    /// Register a new customer: a `Pending` customer record plus their
    /// zero-balance account, created as one unit.
    pub fn register(
        &self,
        registration: Registration,
    ) -> Result<(Customer, Account), LifecycleError> {
        let customer = Customer {
            id: CustomerId::new(),
            profile: registration.profile,
            username: registration.username,
            password_hash: registration.password_hash,
            status: CustomerStatus::Pending,
            account_type: None,
            registered_at: Utc::now(),
        };

        let customer = self.customers.create(customer)?;
        let account = self
            .accounts
            .create(Account::open(customer.id, registration.bank))?;

        tracing::info!(customer = %customer.id, account = %account.number, "customer registered");
        Ok((customer, account))
    }

    /// Approve a pending customer, binding their account-type category.
    ///
    /// Valid only from `Pending`; a second approval fails with
    /// [`LifecycleError::AlreadyActive`].
    pub fn approve(
        &self,
        customer_id: CustomerId,
        category_id: CategoryId,
    ) -> Result<Customer, LifecycleError> {
        if !self.categories.contains(category_id) {
            return Err(LifecycleError::UnknownCategory(category_id));
        }

        let mut customer = self
            .customers
            .find(customer_id)?
            .ok_or(LifecycleError::UnknownCustomer(customer_id))?;

        if customer.status == CustomerStatus::Active {
            return Err(LifecycleError::AlreadyActive(customer_id));
        }

        customer.status = CustomerStatus::Active;
        customer.account_type = Some(category_id);
        self.customers.update(customer.clone())?;

        tracing::info!(customer = %customer_id, category = %category_id, "customer approved");
        Ok(customer)
    }

    /// Customers awaiting approval (read-only, for the admin screen).
    pub fn pending(&self) -> Result<Vec<Customer>, LifecycleError> {
        Ok(self.customers.pending()?)
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }
}
