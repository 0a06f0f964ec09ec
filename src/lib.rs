//! Rust Banking Ledger Library
//! # Overview
//!
//! This library provides a single-process, in-memory banking ledger: named
//! accounts with deposits, withdrawals, interest accrual, loans, and
//! peer-to-peer transfers, each account keeping a timestamped transaction
//! log.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, TransactionRecord, LedgerError)
//! - [`core`] - Business logic components:
//!   - [`core::registry`] - Account collection, identifier generation, and
//!     transfer coordination
//! - [`io`] - CSV output (dashboard export, statement export)
//! - [`cli`] - Argument parsing and the interactive menu shell
//!
//! # Account Operations
//!
//! Each account supports seven balance-mutating operations:
//!
//! - **Deposit**: Credit funds to the account
//! - **Withdraw**: Debit funds (requires sufficient balance)
//! - **Apply Interest**: Accrue 5% of the current balance
//! - **Take Loan**: Credit the balance and owe the amount on the loan balance
//! - **Repay Loan**: Pay down the loan; overpayment is capped to a full payoff
//! - **Transfer**: Atomic paired debit/credit across two accounts
//!
//! Every mutation appends exactly one log record (transfers: one per side)
//! carrying the signed amount and the resulting balance, so an account's
//! history always sums to its balance.
//!
//! # Concurrency
//!
//! Mutations are serialized per account; transfers lock both accounts in
//! identifier order, so no partial transfer is ever observable and opposing
//! transfers cannot deadlock.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::AccountRegistry;
pub use io::{write_accounts_csv, write_statement_csv};
pub use types::{
    Account, AccountId, AccountSnapshot, LedgerError, TransactionKind, TransactionRecord,
};
