//! Account registry
//!
//! This module provides the `AccountRegistry`, which owns the collection of
//! accounts keyed by their identifier. The registry creates accounts
//! (including identifier generation), routes single-account operations, and
//! coordinates transfers that touch two accounts.
//!
//! # Concurrency
//!
//! Accounts are stored as `Arc<Mutex<Account>>` entries inside a `DashMap`,
//! so every mutating operation runs under that account's exclusive lock and
//! balance/log updates are atomic with respect to concurrent callers. A
//! transfer acquires both accounts' locks in ascending identifier order,
//! which makes opposing transfers deadlock-free. No partial transfer (debit
//! without matching credit) is ever observable.

use crate::types::{Account, AccountId, AccountSnapshot, LedgerError, TransactionRecord};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// Length of the account tokens handed out to users
const ACCOUNT_ID_LEN: usize = 8;

/// Registry owning all accounts, keyed by identifier
///
/// The registry owns identifier generation and lookup; it does not own
/// transaction data, which lives inside each [`Account`]. Creation order is
/// tracked separately so the admin dashboard can enumerate accounts in the
/// order they were opened.
pub struct AccountRegistry {
    /// Concurrent map of account identifiers to lock-guarded accounts
    accounts: DashMap<AccountId, Arc<Mutex<Account>>>,

    /// Identifiers in the order their accounts were created
    creation_order: Mutex<Vec<AccountId>>,
}

/// Lock an account handle, recovering the guard if a panicking thread
/// poisoned the mutex
fn lock(handle: &Arc<Mutex<Account>>) -> MutexGuard<'_, Account> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

impl AccountRegistry {
    /// Create a registry with no accounts
    pub fn new() -> Self {
        AccountRegistry {
            accounts: DashMap::new(),
            creation_order: Mutex::new(Vec::new()),
        }
    }

    /// Open a new account and return its identifier
    ///
    /// Generates a unique 8-character token, stores the account, and appends
    /// its `AccountCreated` record (amount and resulting balance both equal
    /// to the initial balance).
    ///
    /// # Errors
    ///
    /// Returns `NegativeInitialBalance` if `initial_balance < 0`.
    pub fn create_account(
        &self,
        owner_name: &str,
        initial_balance: Decimal,
    ) -> Result<AccountId, LedgerError> {
        if initial_balance < Decimal::ZERO {
            return Err(LedgerError::negative_initial_balance(initial_balance));
        }

        loop {
            let id = generate_token();
            let inserted = match self.accounts.entry(id.clone()) {
                Entry::Occupied(_) => false,
                Entry::Vacant(slot) => {
                    let account =
                        Account::new(id.clone(), owner_name.to_string(), initial_balance);
                    slot.insert(Arc::new(Mutex::new(account)));
                    true
                }
            };

            if inserted {
                self.creation_order
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(id.clone());
                tracing::info!(account = %id, owner = owner_name, "account created");
                return Ok(id);
            }
        }
    }

    /// Run a closure against an account under its exclusive lock
    ///
    /// This is the single-account mutation entry point: the closure receives
    /// a mutable reference to the account and whatever it returns is passed
    /// through.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the identifier is unknown, otherwise
    /// whatever the closure returns.
    pub fn with_account<T, F>(&self, id: &str, f: F) -> Result<T, LedgerError>
    where
        F: FnOnce(&mut Account) -> Result<T, LedgerError>,
    {
        let handle = self.handle(id)?;
        let mut account = lock(&handle);
        f(&mut account)
    }

    /// Read-only snapshot of an account's balances
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the identifier is unknown.
    pub fn snapshot(&self, id: &str) -> Result<AccountSnapshot, LedgerError> {
        let handle = self.handle(id)?;
        let account = lock(&handle);
        Ok(account.snapshot())
    }

    /// Copy of an account's ordered transaction log
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the identifier is unknown.
    pub fn history(&self, id: &str) -> Result<Vec<TransactionRecord>, LedgerError> {
        let handle = self.handle(id)?;
        let account = lock(&handle);
        Ok(account.history().to_vec())
    }

    /// Transfer funds between two accounts
    ///
    /// Resolves both identifiers, then locks both accounts in ascending
    /// identifier order and delegates to [`Account::transfer`]. Both log
    /// appends and both balance updates happen under the two locks, or not
    /// at all.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Sender and recipient are the same account (`SelfTransfer`)
    /// - Either identifier is unknown (`AccountNotFound`)
    /// - The transfer itself fails (invalid amount, insufficient funds)
    pub fn transfer_between(
        &self,
        sender_id: &str,
        recipient_id: &str,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        if sender_id == recipient_id {
            return Err(LedgerError::self_transfer(sender_id));
        }

        let sender = self.handle(sender_id)?;
        let recipient = self.handle(recipient_id)?;

        // Ascending-identifier lock order keeps opposing transfers from
        // deadlocking.
        let (mut sender_guard, mut recipient_guard) = if sender_id < recipient_id {
            let sender_guard = lock(&sender);
            let recipient_guard = lock(&recipient);
            (sender_guard, recipient_guard)
        } else {
            let recipient_guard = lock(&recipient);
            let sender_guard = lock(&sender);
            (sender_guard, recipient_guard)
        };

        sender_guard.transfer(&mut recipient_guard, amount)?;
        tracing::info!(from = sender_id, to = recipient_id, %amount, "transfer completed");

        Ok(())
    }

    /// Snapshots of all accounts, in creation order
    ///
    /// Used by the admin dashboard and the CSV export.
    pub fn list_all(&self) -> Vec<AccountSnapshot> {
        let order = self
            .creation_order
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        order
            .iter()
            .filter_map(|id| {
                self.accounts
                    .get(id)
                    .map(|entry| lock(entry.value()).snapshot())
            })
            .collect()
    }

    /// Number of accounts in the registry
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the registry holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Resolve an identifier to its account handle
    fn handle(&self, id: &str) -> Result<Arc<Mutex<Account>>, LedgerError> {
        self.accounts
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| LedgerError::account_not_found(id))
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate an 8-character account token from a random UUID
fn generate_token() -> AccountId {
    let uuid = Uuid::new_v4().simple().to_string();
    uuid[..ACCOUNT_ID_LEN].to_string()
}
