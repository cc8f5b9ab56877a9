//! Persistence contracts and implementations.
//!
//! # Responsibility
//! - Define the key-value store contract the session relies on.
//! - Keep SQLite details out of orchestration code.
//!
//! # Invariants
//! - Store failures are returned as `StoreError`, never raised as panics.

pub mod kv_repo;
