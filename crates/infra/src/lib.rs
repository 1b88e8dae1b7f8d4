//! Infrastructure backends for the minibank storage seams.
//!
//! The target deployment is a single node with a single backing store; the
//! in-memory implementations here are that store. Everything above them
//! (engine, lifecycle manager) talks only to the traits, so a persistent
//! backend can be slotted in without touching domain code.

pub mod memory;


pub use memory::{InMemoryAccountStore, InMemoryCustomerStore, InMemoryTransactionLog};
