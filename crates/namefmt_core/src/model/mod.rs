//! Domain model for the persisted name list.
//!
//! # Responsibility
//! - Define the canonical `NameList` shape produced by the normalizer.
//!
//! # Invariants
//! - A `NameList` value is always canonical; raw buffer text stays a `String`.

pub mod name_list;
