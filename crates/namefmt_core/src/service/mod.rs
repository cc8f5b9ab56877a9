//! Use-case orchestration over normalizer and store.
//!
//! # Responsibility
//! - Map shell actions (format, save, clear, copy, load) to core calls.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod names_service;
