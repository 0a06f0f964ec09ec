//! Error types for the Rust Banking Ledger
//!
//! This module defines all error types that can occur while operating on the
//! ledger. Errors are designed to be descriptive and user-friendly for CLI
//! output.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Non-positive amounts, negative opening balances
//! - **Balance Errors**: Insufficient funds for withdrawals and transfers
//! - **Lookup Errors**: Unknown account identifiers
//! - **Arithmetic Errors**: Overflow, underflow in balance calculations

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the banking ledger
///
/// This enum represents all possible errors that can occur while mutating or
/// querying accounts. Each variant includes relevant context to help diagnose
/// and resolve the issue. Every error is recoverable at the call site: a
/// failed operation leaves account state and transaction history untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Non-positive amount supplied to a mutating operation
    ///
    /// Deposits, withdrawals, loans, repayments, and transfers all require
    /// a strictly positive amount. This is a recoverable error - the
    /// operation is rejected with no side effects.
    #[error("Invalid amount {amount} for {operation}: amount must be positive")]
    InvalidAmount {
        /// Operation that rejected the amount
        operation: String,
        /// The offending amount
        amount: Decimal,
    },

    /// Insufficient balance for a withdrawal or transfer
    ///
    /// This is a recoverable error - the operation is rejected and the
    /// account state remains unchanged.
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account identifier
        account: String,
        /// Current balance
        balance: Decimal,
        /// Requested debit amount
        requested: Decimal,
    },

    /// Account lookup by an unknown identifier
    ///
    /// This is a recoverable error - the caller supplied an identifier the
    /// registry has never issued.
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The identifier that was not found
        account: String,
    },

    /// Account creation with a negative opening balance
    ///
    /// Opening balances must be zero or positive. This is a recoverable
    /// error - no account is created.
    #[error("Cannot open an account with negative initial balance {amount}")]
    NegativeInitialBalance {
        /// The rejected opening balance
        amount: Decimal,
    },

    /// Transfer where sender and recipient are the same account
    ///
    /// This is a recoverable error - the transfer is rejected before any
    /// lock is taken.
    #[error("Cannot transfer from account {account} to itself")]
    SelfTransfer {
        /// The account named on both sides of the transfer
        account: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// This is a recoverable error - the operation is rejected to maintain
    /// account integrity.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account identifier
        account: String,
    },

    /// Arithmetic underflow would occur
    ///
    /// This is a recoverable error - the operation is rejected to maintain
    /// account integrity.
    #[error("Arithmetic underflow in {operation} for account {account}")]
    ArithmeticUnderflow {
        /// Operation that would underflow
        operation: String,
        /// Account identifier
        account: String,
    },
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(operation: &str, amount: Decimal) -> Self {
        LedgerError::InvalidAmount {
            operation: operation.to_string(),
            amount,
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account: account.to_string(),
            balance,
            requested,
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: &str) -> Self {
        LedgerError::AccountNotFound {
            account: account.to_string(),
        }
    }

    /// Create a NegativeInitialBalance error
    pub fn negative_initial_balance(amount: Decimal) -> Self {
        LedgerError::NegativeInitialBalance { amount }
    }

    /// Create a SelfTransfer error
    pub fn self_transfer(account: &str) -> Self {
        LedgerError::SelfTransfer {
            account: account.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }

    /// Create an ArithmeticUnderflow error
    pub fn arithmetic_underflow(operation: &str, account: &str) -> Self {
        LedgerError::ArithmeticUnderflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::invalid_amount(
        LedgerError::InvalidAmount { operation: "deposit".to_string(), amount: Decimal::new(-500, 2) },
        "Invalid amount -5.00 for deposit: amount must be positive"
    )]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds { account: "a1b2c3d4".to_string(), balance: Decimal::new(5000, 2), requested: Decimal::new(10000, 2) },
        "Insufficient funds in account a1b2c3d4: balance 50.00, requested 100.00"
    )]
    #[case::account_not_found(
        LedgerError::AccountNotFound { account: "deadbeef".to_string() },
        "Account deadbeef not found"
    )]
    #[case::negative_initial_balance(
        LedgerError::NegativeInitialBalance { amount: Decimal::new(-100, 2) },
        "Cannot open an account with negative initial balance -1.00"
    )]
    #[case::self_transfer(
        LedgerError::SelfTransfer { account: "a1b2c3d4".to_string() },
        "Cannot transfer from account a1b2c3d4 to itself"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "deposit".to_string(), account: "a1b2c3d4".to_string() },
        "Arithmetic overflow in deposit for account a1b2c3d4"
    )]
    #[case::arithmetic_underflow(
        LedgerError::ArithmeticUnderflow { operation: "withdraw".to_string(), account: "a1b2c3d4".to_string() },
        "Arithmetic underflow in withdraw for account a1b2c3d4"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_amount(
        LedgerError::invalid_amount("deposit", Decimal::new(-500, 2)),
        LedgerError::InvalidAmount { operation: "deposit".to_string(), amount: Decimal::new(-500, 2) }
    )]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds("a1b2c3d4", Decimal::new(5000, 2), Decimal::new(10000, 2)),
        LedgerError::InsufficientFunds { account: "a1b2c3d4".to_string(), balance: Decimal::new(5000, 2), requested: Decimal::new(10000, 2) }
    )]
    #[case::account_not_found(
        LedgerError::account_not_found("deadbeef"),
        LedgerError::AccountNotFound { account: "deadbeef".to_string() }
    )]
    #[case::self_transfer(
        LedgerError::self_transfer("a1b2c3d4"),
        LedgerError::SelfTransfer { account: "a1b2c3d4".to_string() }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }
}
