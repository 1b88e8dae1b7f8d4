//! Customer and account-category models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use minibank_core::{CategoryId, CustomerId};

/// Customer approval lifecycle.
///
/// `Pending` is the initial state; `Active` is terminal for this model
/// (no suspension or closure exists). The transition happens exactly once,
/// through [`crate::LifecycleManager::approve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Pending,
    Active,
}

/// Identity and contact details captured at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub address: String,
    pub contact: String,
    /// Government identity number (SSN or equivalent).
    pub government_id: String,
}

/// A registered customer.
///
/// `password_hash` is an opaque stored credential; hashing and verification
/// belong to the (excluded) web layer. `account_type` is bound at approval
/// time and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub profile: Profile,
    pub username: String,
    pub password_hash: String,
    pub status: CustomerStatus,
    pub account_type: Option<CategoryId>,
    pub registered_at: DateTime<Utc>,
}

impl Customer {
    /// Whether this customer's accounts may move money.
    pub fn can_transact(&self) -> bool {
        self.status == CustomerStatus::Active
    }
}

/// An account type used only for display classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
}

/// Static registry of account categories.
///
/// Reference data: loaded once at startup, never mutated by the ledger.
#[derive(Debug, Clone, Default)]
pub struct Categories {
    by_id: HashMap<CategoryId, Category>,
}

impl Categories {
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            by_id: categories.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.by_id.get(&id)
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.by_id.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_customers_cannot_transact() {
        let customer = Customer {
            id: CustomerId::new(),
            profile: Profile {
                name: "Ada".into(),
                address: "1 Analytical Way".into(),
                contact: "ada@example.com".into(),
                government_id: "000-00-0000".into(),
            },
            username: "ada".into(),
            password_hash: "$2b$12$unused".into(),
            status: CustomerStatus::Pending,
            account_type: None,
            registered_at: Utc::now(),
        };
        assert!(!customer.can_transact());
    }

    #[test]
    fn category_registry_lookup() {
        let savings = Category {
            id: CategoryId::new(),
            label: "Savings".into(),
        };
        let registry = Categories::new([savings.clone()]);
        assert!(registry.contains(savings.id));
        assert_eq!(registry.get(savings.id), Some(&savings));
        assert!(!registry.contains(CategoryId::new()));
    }
}
