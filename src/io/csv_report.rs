//! CSV rendering of account listings and statements
//!
//! This module centralizes the CSV output concerns of the ledger:
//! - Admin dashboard export (one row per account)
//! - Per-account statement export (one row per transaction record)
//!
//! All functions are pure writers over `io::Write` for easy testing.

use crate::types::{AccountSnapshot, TransactionKind, TransactionRecord};
use serde::Serialize;
use std::io::Write;

/// One row of a statement export
///
/// Amounts are formatted to two decimal places and timestamps to RFC 3339 so
/// the output is stable across runs of the same log.
#[derive(Debug, Serialize)]
struct StatementRow {
    timestamp: String,
    kind: TransactionKind,
    amount: String,
    balance: String,
}

/// Write account snapshots to CSV format
///
/// Writes accounts in CSV format with columns: account, owner, balance,
/// loan_balance. Rows appear in the order given, which the registry supplies
/// as creation order.
///
/// # Arguments
///
/// * `accounts` - Slice of account snapshots to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_accounts_csv(
    accounts: &[AccountSnapshot],
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["account", "owner", "balance", "loan_balance"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for account in accounts {
        writer
            .write_record(&[
                account.id.clone(),
                account.owner_name.clone(),
                format!("{:.2}", account.balance),
                format!("{:.2}", account.loan_balance),
            ])
            .map_err(|e| format!("Failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

/// Write a transaction log to CSV format
///
/// Writes records in CSV format with columns: timestamp, kind, amount,
/// balance. Rows appear in log order (oldest first) with RFC 3339 timestamps
/// and snake_case kind names.
///
/// # Arguments
///
/// * `records` - The ordered transaction log to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_statement_csv(
    records: &[TransactionRecord],
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    for record in records {
        let row = StatementRow {
            timestamp: record.timestamp.to_rfc3339(),
            kind: record.kind,
            amount: format!("{:.2}", record.amount),
            balance: format!("{:.2}", record.balance_after),
        };
        writer
            .serialize(row)
            .map_err(|e| format!("Failed to write statement record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn snapshot(id: &str, owner: &str, balance: Decimal, loan: Decimal) -> AccountSnapshot {
        AccountSnapshot {
            id: id.to_string(),
            owner_name: owner.to_string(),
            balance,
            loan_balance: loan,
        }
    }

    #[rstest]
    #[case::single_account(
        vec![snapshot("a1b2c3d4", "Alice", Decimal::new(100000, 2), Decimal::ZERO)],
        "account,owner,balance,loan_balance\na1b2c3d4,Alice,1000.00,0.00\n"
    )]
    #[case::multiple_accounts_in_given_order(
        vec![
            snapshot("a1b2c3d4", "Alice", Decimal::new(57500, 2), Decimal::ZERO),
            snapshot("e5f6a7b8", "Bob", Decimal::new(100000, 2), Decimal::new(50000, 2)),
        ],
        "account,owner,balance,loan_balance\na1b2c3d4,Alice,575.00,0.00\ne5f6a7b8,Bob,1000.00,500.00\n"
    )]
    #[case::negative_balance(
        vec![snapshot("a1b2c3d4", "Alice", Decimal::new(-20000, 2), Decimal::ZERO)],
        "account,owner,balance,loan_balance\na1b2c3d4,Alice,-200.00,0.00\n"
    )]
    #[case::empty_registry(
        vec![],
        "account,owner,balance,loan_balance\n"
    )]
    fn test_write_accounts_csv(
        #[case] accounts: Vec<AccountSnapshot>,
        #[case] expected_output: &str,
    ) {
        let mut output = Vec::new();
        let result = write_accounts_csv(&accounts, &mut output);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, expected_output);
    }

    #[test]
    fn test_write_statement_csv() {
        let records = vec![
            TransactionRecord {
                kind: TransactionKind::AccountCreated,
                amount: Decimal::new(100000, 2),
                balance_after: Decimal::new(100000, 2),
                timestamp: Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap(),
            },
            TransactionRecord {
                kind: TransactionKind::Withdrawal,
                amount: Decimal::new(-30000, 2),
                balance_after: Decimal::new(70000, 2),
                timestamp: Utc.with_ymd_and_hms(2026, 1, 15, 9, 31, 0).unwrap(),
            },
        ];

        let mut output = Vec::new();
        write_statement_csv(&records, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "timestamp,kind,amount,balance\n\
             2026-01-15T09:30:00+00:00,account_created,1000.00,1000.00\n\
             2026-01-15T09:31:00+00:00,withdrawal,-300.00,700.00\n"
        );
    }

    #[test]
    fn test_write_statement_csv_empty_log() {
        let mut output = Vec::new();
        write_statement_csv(&[], &mut output).unwrap();

        // The csv writer emits headers from the first serialized row, so an
        // empty log produces empty output.
        assert!(output.is_empty());
    }
}
