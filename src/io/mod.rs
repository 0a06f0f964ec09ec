//! I/O module
//!
//! Handles CSV output of account listings and statements.
//!
//! # Components
//!
//! - `csv_report` - CSV rendering (dashboard export, statement export)

pub mod csv_report;

pub use csv_report::{write_accounts_csv, write_statement_csv};
