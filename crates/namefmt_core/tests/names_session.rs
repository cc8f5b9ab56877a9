use namefmt_core::db::open_db_in_memory;
use namefmt_core::{
    Clipboard, KvStore, LoadOutcome, NamesSession, Notice, NoticeKind, Notifier, ShellAction,
    SqliteKvStore, StoreError, StoreResult, NAMES_KEY,
};
use std::cell::RefCell;

#[derive(Default)]
struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

impl RecordingNotifier {
    fn kinds(&self) -> Vec<NoticeKind> {
        self.notices.borrow().iter().map(|notice| notice.kind).collect()
    }
}

#[derive(Default)]
struct RecordingClipboard {
    copied: RefCell<Vec<String>>,
}

impl Clipboard for RecordingClipboard {
    fn set_text(&self, text: &str) {
        self.copied.borrow_mut().push(text.to_string());
    }
}

/// Store whose reads and writes can be made to fail.
#[derive(Default)]
struct FlakyStore {
    value: RefCell<Option<String>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl KvStore for FlakyStore {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        if self.fail_reads {
            return Err(StoreError::Unavailable(injected_error()));
        }
        Ok(self.value.borrow().clone())
    }

    fn set(&self, _key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::WriteFailed(injected_error()));
        }
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

fn injected_error() -> namefmt_core::db::DbError {
    rusqlite::Error::InvalidQuery.into()
}

#[test]
fn load_on_empty_store_leaves_buffer_empty() {
    let conn = open_db_in_memory().unwrap();
    let mut session = NamesSession::new(SqliteKvStore::new(&conn));

    assert_eq!(session.load(), LoadOutcome::Empty);
    assert_eq!(session.buffer(), "");
}

#[test]
fn format_normalizes_buffer_and_persists_result() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKvStore::new(&conn);
    let mut session = NamesSession::new(&store);

    session.edit("john\njohn\nJOHN");
    session.format().unwrap();

    assert_eq!(session.buffer(), "JOHN\nJohn");
    assert_eq!(store.get(NAMES_KEY).unwrap().as_deref(), Some("JOHN\nJohn"));
}

#[test]
fn save_persists_buffer_unnormalized_and_next_session_loads_it() {
    let conn = open_db_in_memory().unwrap();
    {
        let mut session = NamesSession::new(SqliteKvStore::new(&conn));
        session.edit("bob 2\nann");
        session.save().unwrap();
    }

    let mut next = NamesSession::new(SqliteKvStore::new(&conn));
    assert_eq!(next.load(), LoadOutcome::Hydrated);
    assert_eq!(next.buffer(), "bob 2\nann");
}

#[test]
fn clear_empties_buffer_without_touching_store() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKvStore::new(&conn);
    let mut session = NamesSession::new(&store);
    session.edit("Ann");
    session.save().unwrap();

    session.clear();

    assert_eq!(session.buffer(), "");
    assert_eq!(store.get(NAMES_KEY).unwrap().as_deref(), Some("Ann"));
}

#[test]
fn read_failure_degrades_to_no_prior_data() {
    let store = FlakyStore {
        fail_reads: true,
        ..FlakyStore::default()
    };
    let mut session = NamesSession::new(store);
    session.edit("typed before load");

    assert_eq!(session.load(), LoadOutcome::Unavailable);
    assert_eq!(session.buffer(), "typed before load");
}

#[test]
fn write_failure_on_save_keeps_buffer_and_emits_failure_notice_only() {
    let store = FlakyStore {
        fail_writes: true,
        ..FlakyStore::default()
    };
    let mut session = NamesSession::new(store);
    let notifier = RecordingNotifier::default();
    let clipboard = RecordingClipboard::default();
    session.edit("ann\nbob");

    let err = session
        .run_action(ShellAction::Save, &notifier, &clipboard)
        .unwrap_err();

    assert!(matches!(err, StoreError::WriteFailed(_)));
    assert_eq!(session.buffer(), "ann\nbob");
    assert_eq!(notifier.kinds(), vec![NoticeKind::Failure]);
    assert_eq!(session.into_store().value.into_inner(), None);
}

#[test]
fn write_failure_on_format_keeps_normalized_buffer() {
    let store = FlakyStore {
        fail_writes: true,
        ..FlakyStore::default()
    };
    let mut session = NamesSession::new(store);
    let notifier = RecordingNotifier::default();
    let clipboard = RecordingClipboard::default();
    session.edit("bob\nann");

    assert!(session
        .run_action(ShellAction::Format, &notifier, &clipboard)
        .is_err());
    assert_eq!(session.buffer(), "Ann\nBob");
    assert_eq!(notifier.kinds(), vec![NoticeKind::Failure]);
}

#[test]
fn successful_format_emits_success_notice() {
    let mut session = NamesSession::new(FlakyStore::default());
    let notifier = RecordingNotifier::default();
    let clipboard = RecordingClipboard::default();
    session.edit("o'brien");

    session
        .run_action(ShellAction::Format, &notifier, &clipboard)
        .unwrap();

    let notices = notifier.notices.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Success);
    assert_eq!(notices[0].title, "Names formatted");
    assert_eq!(session.buffer(), "O'brien");
}

#[test]
fn copy_skips_empty_buffer() {
    let mut session = NamesSession::new(FlakyStore::default());
    let notifier = RecordingNotifier::default();
    let clipboard = RecordingClipboard::default();

    session
        .run_action(ShellAction::Copy, &notifier, &clipboard)
        .unwrap();
    assert!(clipboard.copied.borrow().is_empty());
    assert!(notifier.kinds().is_empty());

    session.edit("Ann");
    session
        .run_action(ShellAction::Copy, &notifier, &clipboard)
        .unwrap();
    assert_eq!(clipboard.copied.borrow().as_slice(), ["Ann".to_string()]);
    assert_eq!(notifier.kinds(), vec![NoticeKind::Success]);
}

#[test]
fn clear_action_does_not_notify_or_persist() {
    let mut session = NamesSession::new(FlakyStore::default());
    let notifier = RecordingNotifier::default();
    let clipboard = RecordingClipboard::default();
    session.edit("Ann");

    session
        .run_action(ShellAction::Clear, &notifier, &clipboard)
        .unwrap();

    assert_eq!(session.buffer(), "");
    assert!(notifier.kinds().is_empty());
    assert_eq!(session.into_store().value.into_inner(), None);
}
