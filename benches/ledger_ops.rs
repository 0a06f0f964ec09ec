//! Benchmark suite for ledger operations
//!
//! Measures the per-operation cost of single-account mutations and paired
//! transfers under the registry's locking scheme, using the divan
//! benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```

use rust_banking_ledger::AccountRegistry;
use rust_decimal::Decimal;

fn main() {
    divan::main();
}

/// Benchmark 1,000 deposits into a single account
#[divan::bench]
fn deposits_single_account() {
    let registry = AccountRegistry::new();
    let id = registry
        .create_account("bench", Decimal::ZERO)
        .expect("account creation failed");

    for _ in 0..1_000 {
        registry
            .with_account(&id, |account| account.deposit(Decimal::ONE))
            .expect("deposit failed");
    }
}

/// Benchmark 1,000 transfers bouncing between a pair of accounts
#[divan::bench]
fn transfers_between_pair() {
    let registry = AccountRegistry::new();
    let alice = registry
        .create_account("alice", Decimal::new(100000, 2))
        .expect("account creation failed");
    let bob = registry
        .create_account("bob", Decimal::new(100000, 2))
        .expect("account creation failed");

    for i in 0..1_000 {
        let (from, to) = if i % 2 == 0 {
            (&alice, &bob)
        } else {
            (&bob, &alice)
        };
        registry
            .transfer_between(from, to, Decimal::ONE)
            .expect("transfer failed");
    }
}

/// Benchmark account creation including identifier generation
#[divan::bench]
fn account_creation() {
    let registry = AccountRegistry::new();

    for i in 0..1_000 {
        registry
            .create_account(&format!("holder-{}", i), Decimal::ZERO)
            .expect("account creation failed");
    }
}
