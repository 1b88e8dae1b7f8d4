//! Accounts domain module.
//!
//! This crate contains the balance-holding `Account` record and the
//! `AccountStore` storage seam. No IO, no HTTP; storage backends live in
//! `minibank-infra`.

pub mod account;
pub mod store;

pub use account::{Account, AccountNumber, CardNumber};
pub use store::AccountStore;
