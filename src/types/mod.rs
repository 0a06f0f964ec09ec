//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account state and balance operations
//! - `transaction`: Transaction kinds, log records, and identifiers
//! - `error`: Error types for the banking ledger

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountSnapshot};
pub use error::LedgerError;
pub use transaction::{AccountId, TransactionKind, TransactionRecord};
