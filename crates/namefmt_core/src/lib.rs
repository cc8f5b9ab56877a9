//! Core logic for the name formatter.
//! Owns the normalization pipeline and the persistence contract.

pub mod db;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::name_list::{is_name_whitespace, NameList, NameListValidationError};
pub use normalize::pipeline::{canonicalize_line, normalize, normalize_lines, sanitize_line};
pub use repo::kv_repo::{KvStore, SqliteKvStore, StoreError, StoreResult, NAMES_KEY};
pub use service::names_service::{
    Clipboard, LoadOutcome, NamesSession, Notice, NoticeKind, Notifier, ShellAction,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
