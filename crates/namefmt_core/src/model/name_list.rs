//! NameList domain model.
//!
//! # Responsibility
//! - Hold the canonical, ordered list of display names.
//! - Serialize to and from the newline-joined text the store persists.
//!
//! # Invariants
//! - Entries contain only ASCII letters, apostrophes and whitespace.
//! - Entries carry no leading or trailing whitespace.
//! - A non-empty entry starts with a character that has no lowercase form left.
//! - Entries are strictly increasing in ordinal order, which implies uniqueness.
//!
//! Raw buffer text has no invariants; only lists produced by the normalizer
//! (or accepted by [`NameList::validate`]) are `NameList` values.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Separator used by the serialized text form.
pub const LINE_SEPARATOR: char = '\n';

/// Canonical name list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct NameList {
    entries: Vec<String>,
}

/// Reasons a sequence of strings is not a canonical name list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameListValidationError {
    /// Entry at `index` contains a character outside the allowed set.
    ForbiddenCharacter { index: usize, character: char },
    /// Entry at `index` has leading or trailing whitespace.
    Untrimmed { index: usize },
    /// Entry at `index` starts with a lowercase letter.
    NotCapitalized { index: usize },
    /// Entry at `index` is equal to or sorts before its predecessor.
    OutOfOrder { index: usize },
}

impl Display for NameListValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ForbiddenCharacter { index, character } => write!(
                f,
                "entry {index} contains forbidden character {character:?}"
            ),
            Self::Untrimmed { index } => {
                write!(f, "entry {index} has leading or trailing whitespace")
            }
            Self::NotCapitalized { index } => {
                write!(f, "entry {index} must start with an uppercase letter")
            }
            Self::OutOfOrder { index } => write!(
                f,
                "entry {index} must sort strictly after entry {}",
                index.saturating_sub(1)
            ),
        }
    }
}

impl Error for NameListValidationError {}

impl NameList {
    /// Builds a list from entries already known to be canonical.
    ///
    /// # Errors
    /// Returns the first invariant violation found.
    pub fn new(entries: Vec<String>) -> Result<Self, NameListValidationError> {
        let list = Self { entries };
        list.validate()?;
        Ok(list)
    }

    /// Crate-internal constructor for the normalizer, which upholds the
    /// invariants by construction.
    pub(crate) fn from_canonical(entries: Vec<String>) -> Self {
        debug_assert!(Self::new(entries.clone()).is_ok());
        Self { entries }
    }

    /// Parses persisted text, accepting it only when already canonical.
    ///
    /// `""` parses as a list holding one empty entry, mirroring how the
    /// normalizer treats empty input.
    pub fn from_text(text: &str) -> Result<Self, NameListValidationError> {
        Self::new(text.split(LINE_SEPARATOR).map(str::to_string).collect())
    }

    /// Joins entries with [`LINE_SEPARATOR`].
    pub fn to_text(&self) -> String {
        self.entries.join("\n")
    }

    /// Returns entries in canonical order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries, the empty entry included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True only for a list with no entries; normalizer output never is.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns entries that hold an actual name.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(String::as_str)
            .filter(|entry| !entry.is_empty())
    }

    /// Checks every list invariant.
    pub fn validate(&self) -> Result<(), NameListValidationError> {
        let mut previous: Option<&str> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            if let Some(character) = entry.chars().find(|ch| !is_allowed_char(*ch)) {
                return Err(NameListValidationError::ForbiddenCharacter { index, character });
            }
            if entry.trim_matches(is_name_whitespace) != entry {
                return Err(NameListValidationError::Untrimmed { index });
            }
            if entry.chars().next().is_some_and(|first| first.is_lowercase()) {
                return Err(NameListValidationError::NotCapitalized { index });
            }
            if previous.is_some_and(|prev| prev >= entry.as_str()) {
                return Err(NameListValidationError::OutOfOrder { index });
            }
            previous = Some(entry);
        }
        Ok(())
    }
}

impl Display for NameList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl TryFrom<Vec<String>> for NameList {
    type Error = NameListValidationError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NameList> for Vec<String> {
    fn from(value: NameList) -> Self {
        value.entries
    }
}

/// Character set surviving sanitization.
pub fn is_allowed_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || is_name_whitespace(ch) || ch == '\''
}

/// Whitespace kept inside names and stripped at their ends.
///
/// ECMAScript's whitespace and line terminators: unlike Unicode
/// `White_Space` it includes U+FEFF and excludes U+0085.
pub fn is_name_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
