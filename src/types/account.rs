//! Account state and balance operations for the Rust Banking Ledger
//!
//! This module defines the `Account` structure, which owns its balance, loan
//! balance, and transaction log, and exposes the validated mutating
//! operations of the ledger. Accounts never print or perform I/O; outcomes
//! are reported through `Result` values and the shell renders them.

use crate::types::error::LedgerError;
use crate::types::transaction::{AccountId, TransactionKind, TransactionRecord};
use rust_decimal::Decimal;
use serde::Serialize;

/// Ledger account for a single holder
///
/// Owns the cash balance, the outstanding loan balance, and the append-only
/// transaction log. All mutations go through the methods below, each of which
/// validates its input, computes the new balances with checked arithmetic,
/// and only then assigns state and appends a log record. A failed operation
/// therefore never leaves partial state behind.
///
/// The cash balance is signed: loan repayment can push it below zero, but
/// withdrawals and transfers are rejected before they would.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Registry-assigned identifier, immutable after creation
    id: AccountId,

    /// Display name of the holder, immutable after creation
    owner_name: String,

    /// Current cash balance (signed)
    balance: Decimal,

    /// Outstanding loan balance (never negative)
    loan_balance: Decimal,

    /// Append-only transaction log, oldest first
    transactions: Vec<TransactionRecord>,
}

/// Read-only view of an account for display and reporting
///
/// Carries everything the shell and the CSV reports need without exposing
/// the account's mutable state or requiring its lock to be held.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSnapshot {
    /// Registry-assigned identifier
    pub id: AccountId,

    /// Display name of the holder
    pub owner_name: String,

    /// Current cash balance
    pub balance: Decimal,

    /// Outstanding loan balance
    pub loan_balance: Decimal,
}

impl Account {
    /// Annual interest rate applied by [`Account::apply_interest`] (5%)
    pub fn interest_rate() -> Decimal {
        Decimal::new(5, 2)
    }

    /// Create an account with its opening balance
    ///
    /// The log starts with one `AccountCreated` record carrying the initial
    /// balance as both amount and resulting balance. Validation of the
    /// initial balance (non-negative) is the registry's responsibility, which
    /// is why construction is crate-private.
    pub(crate) fn new(id: AccountId, owner_name: String, initial_balance: Decimal) -> Self {
        let mut account = Account {
            id,
            owner_name,
            balance: initial_balance,
            loan_balance: Decimal::ZERO,
            transactions: Vec::new(),
        };
        account.log(TransactionKind::AccountCreated, initial_balance);
        account
    }

    /// Registry-assigned identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name of the holder
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// Current cash balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Outstanding loan balance
    pub fn loan_balance(&self) -> Decimal {
        self.loan_balance
    }

    /// Credit funds to the account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - Adding the amount to the balance would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount("deposit", amount));
        }

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", &self.id))?;

        self.balance = new_balance;
        self.log(TransactionKind::Deposit, amount);

        Ok(())
    }

    /// Debit funds from the account
    ///
    /// Requires sufficient balance; the withdrawal must not drive the balance
    /// negative. Recorded with a negative amount.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - The amount exceeds the current balance
    /// - Subtracting the amount from the balance would underflow
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount("withdraw", amount));
        }
        if amount > self.balance {
            return Err(LedgerError::insufficient_funds(
                &self.id,
                self.balance,
                amount,
            ));
        }

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_underflow("withdraw", &self.id))?;

        self.balance = new_balance;
        self.log(TransactionKind::Withdrawal, -amount);

        Ok(())
    }

    /// Accrue interest on the current balance at [`Account::interest_rate`]
    ///
    /// There is no failure condition besides arithmetic limits: a zero
    /// balance accrues zero interest and a negative balance accrues negative
    /// interest.
    ///
    /// # Returns
    ///
    /// The interest amount that was credited.
    ///
    /// # Errors
    ///
    /// Returns an error if the interest computation or the balance update
    /// would overflow.
    pub fn apply_interest(&mut self) -> Result<Decimal, LedgerError> {
        let interest = self
            .balance
            .checked_mul(Self::interest_rate())
            .ok_or_else(|| LedgerError::arithmetic_overflow("apply_interest", &self.id))?;

        let new_balance = self
            .balance
            .checked_add(interest)
            .ok_or_else(|| LedgerError::arithmetic_overflow("apply_interest", &self.id))?;

        self.balance = new_balance;
        self.log(TransactionKind::InterestAdded, interest);

        Ok(interest)
    }

    /// Issue a loan
    ///
    /// The amount is credited to the cash balance and owed on the loan
    /// balance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - Either balance update would overflow
    pub fn take_loan(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount("take_loan", amount));
        }

        let new_loan_balance = self
            .loan_balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("take_loan", &self.id))?;

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("take_loan", &self.id))?;

        self.loan_balance = new_loan_balance;
        self.balance = new_balance;
        self.log(TransactionKind::LoanTaken, amount);

        Ok(())
    }

    /// Repay an outstanding loan
    ///
    /// A repayment exceeding the outstanding loan is silently capped to a
    /// full payoff; that is policy, not an error. The capped amount is
    /// debited from the cash balance, which may go negative as a result.
    /// Recorded with a negative amount.
    ///
    /// # Returns
    ///
    /// The amount actually repaid (the requested amount, or the prior loan
    /// balance when capped).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - Either balance update would underflow
    pub fn repay_loan(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount("repay_loan", amount));
        }

        let repaid = amount.min(self.loan_balance);

        let new_loan_balance = self
            .loan_balance
            .checked_sub(repaid)
            .ok_or_else(|| LedgerError::arithmetic_underflow("repay_loan", &self.id))?;

        let new_balance = self
            .balance
            .checked_sub(repaid)
            .ok_or_else(|| LedgerError::arithmetic_underflow("repay_loan", &self.id))?;

        self.loan_balance = new_loan_balance;
        self.balance = new_balance;
        self.log(TransactionKind::LoanRepaid, -repaid);

        Ok(repaid)
    }

    /// Transfer funds to another account
    ///
    /// The paired debit/credit is atomic: both new balances are computed
    /// before either account is touched, so a failure leaves both accounts
    /// and both logs unchanged. The sender gains a `TransferOut` record
    /// (negative amount) and the recipient a `TransferIn` record (positive
    /// amount).
    ///
    /// Callers holding accounts behind locks must acquire both before
    /// calling; the registry does so in identifier order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - The amount exceeds the sender's balance
    /// - Either balance update would overflow or underflow
    pub fn transfer(
        &mut self,
        recipient: &mut Account,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount("transfer", amount));
        }
        if amount > self.balance {
            return Err(LedgerError::insufficient_funds(
                &self.id,
                self.balance,
                amount,
            ));
        }

        let sender_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_underflow("transfer", &self.id))?;

        let recipient_balance = recipient
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("transfer", &recipient.id))?;

        self.balance = sender_balance;
        recipient.balance = recipient_balance;
        self.log(TransactionKind::TransferOut, -amount);
        recipient.log(TransactionKind::TransferIn, amount);

        Ok(())
    }

    /// Read-only view of the account for display and reporting
    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            id: self.id.clone(),
            owner_name: self.owner_name.clone(),
            balance: self.balance,
            loan_balance: self.loan_balance,
        }
    }

    /// The ordered transaction log, oldest first
    pub fn history(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    /// Append a log record for a mutation that has already been applied
    fn log(&mut self, kind: TransactionKind, amount: Decimal) {
        self.transactions
            .push(TransactionRecord::new(kind, amount, self.balance));
    }
}
