//! FFI use-case API for the Flutter shell.
//!
//! # Responsibility
//! - Expose normalize/load/save/format to Dart via FRB.
//! - Return envelopes so the shell drives clipboard and alerts itself.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Pure calls are `sync`; store-backed calls are async on the Dart side.
//! - A failed write is always reported with `ok = false`.

use namefmt_core::db::open_db;
use namefmt_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    normalize as normalize_inner, ping as ping_inner, LoadOutcome, NamesSession, SqliteKvStore,
    StoreError,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const NAMES_DB_FILE_NAME: &str = "namefmt_names.sqlite3";
const NAMES_DB_PATH_ENV: &str = "NAMEFMT_DB_PATH";
static NAMES_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Normalizes buffer text without touching storage.
///
/// # FFI contract
/// - Sync call, pure, never fails.
#[flutter_rust_bridge::frb(sync)]
pub fn names_normalize(text: String) -> String {
    normalize_inner(&text)
}

/// Response envelope for save/format actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamesActionResponse {
    /// Whether the buffer was durably stored.
    pub ok: bool,
    /// Buffer the shell should display (normalized for format).
    pub text: String,
    /// Notice title for the shell's alert.
    pub message: String,
}

/// Response envelope for startup hydration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamesLoadResponse {
    /// Whether a stored list was found.
    pub found: bool,
    /// Stored list, or empty when nothing was found.
    pub text: String,
    /// Human-readable diagnostics message.
    pub message: String,
}

/// Loads the stored list for startup hydration.
///
/// # FFI contract
/// - Async on the Dart side; DB-backed.
/// - Read failures are reported as `found = false`, never as errors.
pub fn names_load() -> NamesLoadResponse {
    let outcome = with_session(String::new(), |session| {
        let outcome = session.load();
        (outcome, session.buffer().to_string())
    });
    match outcome {
        Ok((LoadOutcome::Hydrated, text)) => NamesLoadResponse {
            found: true,
            text,
            message: "Names loaded.".to_string(),
        },
        Ok((LoadOutcome::Empty, _)) => NamesLoadResponse {
            found: false,
            text: String::new(),
            message: "No saved names.".to_string(),
        },
        Ok((LoadOutcome::Unavailable, _)) => NamesLoadResponse {
            found: false,
            text: String::new(),
            message: "Saved names unavailable.".to_string(),
        },
        Err(err) => {
            log::warn!("event=ffi_names_load module=ffi status=degraded error={err}");
            NamesLoadResponse {
                found: false,
                text: String::new(),
                message: format!("names_load failed: {err}"),
            }
        }
    }
}

/// Stores the buffer as typed.
///
/// # FFI contract
/// - Async on the Dart side; DB-backed.
/// - Returns the unchanged buffer in `text`.
pub fn names_save(text: String) -> NamesActionResponse {
    let result = with_session(text.clone(), |session| session.save());
    action_response(result, text, "Names saved.")
}

/// Normalizes the buffer, then stores the normalized text.
///
/// # FFI contract
/// - Async on the Dart side; DB-backed.
/// - `text` carries the normalized buffer even when storing fails.
pub fn names_format(text: String) -> NamesActionResponse {
    let fallback = normalize_inner(&text);
    match with_session(text, |session| (session.format(), session.buffer().to_string())) {
        Ok((result, normalized)) => action_response(Ok(result), normalized, "Names formatted."),
        Err(err) => action_response(Err(err), fallback, "Names formatted."),
    }
}

fn action_response(
    result: Result<Result<(), StoreError>, String>,
    text: String,
    success_message: &str,
) -> NamesActionResponse {
    match result.and_then(|stored| stored.map_err(|err| err.to_string())) {
        Ok(()) => NamesActionResponse {
            ok: true,
            text,
            message: success_message.to_string(),
        },
        Err(err) => {
            log::warn!("event=ffi_names_persist module=ffi status=error error={err}");
            NamesActionResponse {
                ok: false,
                text,
                message: format!("Could not save names: {err}"),
            }
        }
    }
}

fn resolve_names_db_path() -> PathBuf {
    NAMES_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(NAMES_DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(NAMES_DB_FILE_NAME)
        })
        .clone()
}

fn with_session<T>(
    buffer: String,
    f: impl FnOnce(&mut NamesSession<SqliteKvStore<'_>>) -> T,
) -> Result<T, String> {
    let db_path = resolve_names_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("names DB open failed: {err}"))?;
    let mut session = NamesSession::new(SqliteKvStore::new(&conn));
    session.edit(buffer);
    Ok(f(&mut session))
}
