//! Transaction records and the atomic ledger entry.
//!
//! A record becomes immutable the moment it is appended; corrections are
//! made by appending compensating records, never by editing history. The
//! split between [`PendingRecord`] (built by the engine) and
//! [`TransactionRecord`] (sequence id assigned by the log at append) keeps
//! "not yet committed" and "committed" apart in the type system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use minibank_accounts::AccountNumber;
use minibank_core::{EntryId, Money};

/// Fixed counterparty label recorded on card purchases.
pub const MERCHANT_LABEL: &str = "card-network";

/// Monotonic sequence number assigned by the transaction log.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Money-movement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    TransferDebit,
    TransferCredit,
    CardPurchase,
}

/// The other side of a money movement. Always present; the variant says
/// what kind of counterparty it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Counterparty {
    /// The other account of a transfer (sender on a credit, receiver on a
    /// debit).
    Account(AccountNumber),
    /// The bank officer who performed a cash deposit.
    Teller(String),
    /// The merchant side of a card purchase.
    Merchant(String),
}

/// A record not yet committed to the log (no sequence id yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRecord {
    pub entry_id: EntryId,
    pub account: AccountNumber,
    pub counterparty: Counterparty,
    /// Signed: negative for funds leaving `account`, positive for funds
    /// arriving.
    pub amount: Money,
    pub kind: TransactionKind,
    pub timestamp: DateTime<Utc>,
}

impl PendingRecord {
    /// Commit this record with the sequence id the log assigned.
    pub fn committed(self, id: RecordId) -> TransactionRecord {
        TransactionRecord {
            id,
            entry_id: self.entry_id,
            account: self.account,
            counterparty: self.counterparty,
            amount: self.amount,
            kind: self.kind,
            timestamp: self.timestamp,
        }
    }
}

/// One immutable money-movement record, filed against `account`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: RecordId,
    pub entry_id: EntryId,
    pub account: AccountNumber,
    pub counterparty: Counterparty,
    pub amount: Money,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub timestamp: DateTime<Utc>,
}

/// The unit of atomic append: one leg, or the matched pair of a transfer.
///
/// A transfer's debit and credit legs are carried in a single value so the
/// log can commit them together or not at all; no caller can ever observe
/// one leg without the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEntry {
    Single(PendingRecord),
    Pair {
        debit: PendingRecord,
        credit: PendingRecord,
    },
}

impl LedgerEntry {
    /// A cash deposit performed by a bank officer.
    pub fn deposit(
        account: AccountNumber,
        amount: Money,
        teller: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        LedgerEntry::Single(PendingRecord {
            entry_id: EntryId::new(),
            account,
            counterparty: Counterparty::Teller(teller.to_string()),
            amount,
            kind: TransactionKind::Deposit,
            timestamp,
        })
    }

    /// A two-legged transfer. Both legs share the entry id and timestamp;
    /// the debit amount is the exact negative of the credit amount.
    pub fn transfer(
        sender: AccountNumber,
        receiver: AccountNumber,
        amount: Money,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let entry_id = EntryId::new();
        LedgerEntry::Pair {
            debit: PendingRecord {
                entry_id,
                account: sender.clone(),
                counterparty: Counterparty::Account(receiver.clone()),
                amount: -amount,
                kind: TransactionKind::TransferDebit,
                timestamp,
            },
            credit: PendingRecord {
                entry_id,
                account: receiver,
                counterparty: Counterparty::Account(sender),
                amount,
                kind: TransactionKind::TransferCredit,
                timestamp,
            },
        }
    }

    /// A debit-card purchase against the fixed merchant label.
    pub fn card_purchase(account: AccountNumber, amount: Money, timestamp: DateTime<Utc>) -> Self {
        LedgerEntry::Single(PendingRecord {
            entry_id: EntryId::new(),
            account,
            counterparty: Counterparty::Merchant(MERCHANT_LABEL.to_string()),
            amount: -amount,
            kind: TransactionKind::CardPurchase,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn transfer_legs_are_exact_negatives_with_shared_entry_id() {
        let entry = LedgerEntry::transfer("aaaa".into(), "bbbb".into(), money("40.00"), Utc::now());
        let LedgerEntry::Pair { debit, credit } = entry else {
            panic!("transfer must build a pair");
        };

        assert_eq!(debit.entry_id, credit.entry_id);
        assert_eq!(debit.timestamp, credit.timestamp);
        assert_eq!(debit.amount.checked_add(credit.amount), Some(Money::ZERO));
        assert!(debit.amount.is_negative());
        assert!(credit.amount.is_positive());
        assert_eq!(debit.kind, TransactionKind::TransferDebit);
        assert_eq!(credit.kind, TransactionKind::TransferCredit);
        assert_eq!(debit.counterparty, Counterparty::Account("bbbb".into()));
        assert_eq!(credit.counterparty, Counterparty::Account("aaaa".into()));
    }

    #[test]
    fn deposit_leg_is_positive_and_names_the_teller() {
        let entry = LedgerEntry::deposit("aaaa".into(), money("25.00"), "officer1", Utc::now());
        let LedgerEntry::Single(leg) = entry else {
            panic!("deposit must build a single leg");
        };
        assert!(leg.amount.is_positive());
        assert_eq!(leg.counterparty, Counterparty::Teller("officer1".into()));
    }

    #[test]
    fn card_purchase_leg_is_negative_against_the_merchant() {
        let entry = LedgerEntry::card_purchase("aaaa".into(), money("10.00"), Utc::now());
        let LedgerEntry::Single(leg) = entry else {
            panic!("purchase must build a single leg");
        };
        assert!(leg.amount.is_negative());
        assert_eq!(
            leg.counterparty,
            Counterparty::Merchant(MERCHANT_LABEL.into())
        );
    }

    #[test]
    fn record_serializes_with_explicit_type_tag_and_fixed_fields() {
        let entry = LedgerEntry::deposit("aaaa".into(), money("25.00"), "officer1", Utc::now());
        let LedgerEntry::Single(leg) = entry else {
            unreachable!();
        };
        let record = leg.committed(RecordId(7));

        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object["type"], "deposit");
        for field in ["id", "entry_id", "account", "counterparty", "amount", "timestamp"] {
            assert!(object.contains_key(field), "missing field {field}");
        }
        assert_eq!(object["counterparty"]["teller"], "officer1");

        let back: TransactionRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
