//! Flutter bridge for the name formatter core.

pub mod api;
