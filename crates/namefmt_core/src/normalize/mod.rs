//! Name-list normalization pipeline.
//!
//! # Responsibility
//! - Turn arbitrary buffer text into canonical name-list text.
//!
//! # Invariants
//! - Pure and total: no I/O, no errors, always terminates.

pub mod pipeline;
