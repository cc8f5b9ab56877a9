//! Name-list session orchestration.
//!
//! # Responsibility
//! - Own the in-memory buffer the shell renders.
//! - Compose normalizer and store into the shell's user actions.
//! - Translate store outcomes into user notices.
//!
//! # Invariants
//! - Store failures never escape as panics; they come back as `StoreResult`.
//! - A read failure at load time degrades to "no prior data".
//! - A write failure suppresses the success notice and emits a failure notice.
//! - Buffer and store copies only meet on explicit load/save/format.

use crate::normalize::pipeline::normalize;
use crate::repo::kv_repo::{KvStore, StoreResult, NAMES_KEY};
use log::{info, warn};

/// Kind of user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Fire-and-forget notice handed to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: Option<String>,
}

impl Notice {
    fn success(title: &str, message: Option<&str>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.to_string(),
            message: message.map(str::to_string),
        }
    }

    fn failure(title: &str, message: &str) -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: title.to_string(),
            message: Some(message.to_string()),
        }
    }
}

/// Receives user notices (alerts, toasts).
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Receives text destined for the system clipboard.
pub trait Clipboard {
    fn set_text(&self, text: &str);
}

/// User-triggered actions the shell dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    /// Normalize the buffer, then persist it.
    Format,
    /// Persist the buffer as typed.
    Save,
    /// Empty the buffer without touching the store.
    Clear,
    /// Hand a non-empty buffer to the clipboard.
    Copy,
}

/// Result of startup hydration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A stored value replaced the buffer.
    Hydrated,
    /// Nothing was stored; buffer untouched.
    Empty,
    /// The store could not be read; buffer untouched.
    Unavailable,
}

const SAVE_FAILED_TITLE: &str = "Could not save names";
const SAVE_FAILED_MESSAGE: &str = "Your list may not be saved on this device.";

/// One user session over a store.
pub struct NamesSession<S: KvStore> {
    store: S,
    buffer: String,
}

impl<S: KvStore> NamesSession<S> {
    /// Starts a session with an empty buffer.
    pub fn new(store: S) -> Self {
        Self {
            store,
            buffer: String::new(),
        }
    }

    /// Current buffer text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replaces the buffer with user-typed text.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Hydrates the buffer from the store at startup.
    pub fn load(&mut self) -> LoadOutcome {
        match self.store.get(NAMES_KEY) {
            Ok(Some(value)) => {
                info!(
                    "event=names_load module=service status=ok present=true value_len={}",
                    value.len()
                );
                self.buffer = value;
                LoadOutcome::Hydrated
            }
            Ok(None) => {
                info!("event=names_load module=service status=ok present=false");
                LoadOutcome::Empty
            }
            Err(err) => {
                warn!(
                    "event=names_load module=service status=degraded error_code={} error={}",
                    err.code(),
                    err
                );
                LoadOutcome::Unavailable
            }
        }
    }

    /// Normalizes the buffer in place, then persists the result.
    ///
    /// The normalized buffer is kept even when persisting fails.
    pub fn format(&mut self) -> StoreResult<()> {
        self.buffer = normalize(&self.buffer);
        self.persist("format")
    }

    /// Persists the buffer without normalizing it.
    pub fn save(&self) -> StoreResult<()> {
        self.persist("save")
    }

    /// Empties the buffer. The stored copy is left alone.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Copies the buffer to `clipboard` unless it is empty.
    ///
    /// Returns whether anything was copied.
    pub fn copy(&self, clipboard: &dyn Clipboard) -> bool {
        if self.buffer.is_empty() {
            return false;
        }
        clipboard.set_text(&self.buffer);
        true
    }

    /// Runs one shell action and reports its outcome through `notifier`.
    pub fn run_action(
        &mut self,
        action: ShellAction,
        notifier: &dyn Notifier,
        clipboard: &dyn Clipboard,
    ) -> StoreResult<()> {
        match action {
            ShellAction::Format => {
                let result = self.format();
                notify_persisted(notifier, &result, "Names formatted", "Ready to copy.");
                result
            }
            ShellAction::Save => {
                let result = self.save();
                notify_persisted(notifier, &result, "Names saved", "Stored on this device.");
                result
            }
            ShellAction::Clear => {
                self.clear();
                Ok(())
            }
            ShellAction::Copy => {
                if self.copy(clipboard) {
                    notifier.notify(Notice::success("Names copied", None));
                }
                Ok(())
            }
        }
    }

    /// Gives back the store, consuming the session.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&self, action: &'static str) -> StoreResult<()> {
        let result = self.store.set(NAMES_KEY, &self.buffer);
        match &result {
            Ok(()) => info!(
                "event=names_persist module=service status=ok action={action} value_len={}",
                self.buffer.len()
            ),
            Err(err) => warn!(
                "event=names_persist module=service status=error action={action} error_code={}",
                err.code()
            ),
        }
        result
    }
}

fn notify_persisted(
    notifier: &dyn Notifier,
    result: &StoreResult<()>,
    success_title: &str,
    success_message: &str,
) {
    let notice = match result {
        Ok(()) => Notice::success(success_title, Some(success_message)),
        Err(_) => Notice::failure(SAVE_FAILED_TITLE, SAVE_FAILED_MESSAGE),
    };
    notifier.notify(notice);
}
