//! Core business logic module
//!
//! This module contains the ledger's coordinating component:
//! - `registry` - Account collection, identifier generation, and transfer
//!   coordination

pub mod registry;

pub use registry::AccountRegistry;
