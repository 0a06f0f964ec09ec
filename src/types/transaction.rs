//! Transaction-related types for the Rust Banking Ledger
//!
//! This module defines the transaction kinds and the timestamped log record
//! appended to an account's history by every balance-mutating operation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account identifier
///
/// An opaque 8-character token assigned by the registry at creation time.
/// Used as the registry key and entered by users in the CLI shell.
pub type AccountId = String;

/// Transaction kinds recorded in an account's history
///
/// Each variant represents a different balance-affecting event. The serialized
/// names (snake_case) are used in CSV statement exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Account opened with its initial balance
    AccountCreated,

    /// Funds credited to the account
    Deposit,

    /// Funds debited from the account
    ///
    /// Requires sufficient balance; recorded with a negative amount.
    Withdrawal,

    /// Interest accrued on the current balance
    ///
    /// A negative balance accrues negative interest.
    InterestAdded,

    /// Loan issued; credited to the balance and owed on the loan balance
    LoanTaken,

    /// Loan repayment; recorded with a negative amount
    LoanRepaid,

    /// Outgoing side of a transfer; recorded with a negative amount
    TransferOut,

    /// Incoming side of a transfer
    TransferIn,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::AccountCreated => "Account Created",
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::InterestAdded => "Interest Added",
            TransactionKind::LoanTaken => "Loan Taken",
            TransactionKind::LoanRepaid => "Loan Repaid",
            TransactionKind::TransferOut => "Transfer Out",
            TransactionKind::TransferIn => "Transfer In",
        };
        f.write_str(label)
    }
}

/// One entry in an account's transaction log
///
/// Records are append-only and immutable once written. Every balance-mutating
/// operation appends exactly one record (transfers: one per account involved)
/// whose `balance_after` equals the account balance immediately after the
/// mutation.
///
/// # Signed Amount Convention
///
/// Credits are recorded positive (`AccountCreated`, `Deposit`,
/// `InterestAdded`, `LoanTaken`, `TransferIn`), debits negative
/// (`Withdrawal`, `LoanRepaid`, `TransferOut`). As a consequence, the signed
/// amounts of an account's full history always sum to its current balance.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// The kind of event this record captures
    pub kind: TransactionKind,

    /// Signed amount: positive for credits, negative for debits
    pub amount: Decimal,

    /// Account balance immediately after the mutation
    pub balance_after: Decimal,

    /// Wall-clock time the record was appended (UTC)
    pub timestamp: DateTime<Utc>,
}

impl TransactionRecord {
    /// Create a record stamped with the current wall-clock time
    pub fn new(kind: TransactionKind, amount: Decimal, balance_after: Decimal) -> Self {
        TransactionRecord {
            kind,
            amount,
            balance_after,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_labels() {
        assert_eq!(TransactionKind::AccountCreated.to_string(), "Account Created");
        assert_eq!(TransactionKind::Deposit.to_string(), "Deposit");
        assert_eq!(TransactionKind::LoanRepaid.to_string(), "Loan Repaid");
        assert_eq!(TransactionKind::TransferOut.to_string(), "Transfer Out");
    }

    #[test]
    fn test_new_record_carries_amount_and_balance() {
        let record = TransactionRecord::new(
            TransactionKind::Deposit,
            Decimal::new(50000, 2),
            Decimal::new(150000, 2),
        );

        assert_eq!(record.kind, TransactionKind::Deposit);
        assert_eq!(record.amount, Decimal::new(50000, 2));
        assert_eq!(record.balance_after, Decimal::new(150000, 2));
    }
}
