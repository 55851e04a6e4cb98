//! Findings reported while extracting a supermark document.
//!
//! Nothing here aborts extraction. Every problem found in a header is turned
//! into a [`SupermarkError`] and collected on the result, so a caller sees all
//! of them at once.

use crate::property::PropertyName;
use serde::{Serialize, Serializer};

/// Broad category of a [`SupermarkError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The header could not be located or a line could not be read.
    Structural,
    /// A line was readable but does not fit the property schema.
    Schema,
    /// A property value breaks a validation rule.
    Validation,
}

/// A single problem found in a supermark document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SupermarkError {
    /// No header block followed by a delimiter line at the start of the document.
    #[error("Could not find a valid supermark header")]
    MissingHeader,

    /// Line without a colon, or with nothing before it.
    #[error("Couldn't make sense of line: `{line}`")]
    UnparsableLine { line: String },

    /// Property name outside the schema.
    #[error("Property `{name}` is not a valid property")]
    UnknownProperty { name: String },

    /// Scalar property declared without a value.
    #[error("Property `{name}` did not have a value and is not a list")]
    MissingValue { name: PropertyName },

    /// List property given an inline value instead of list items.
    #[error("Property `{name}` should be a list, string given")]
    InlineList { name: PropertyName },

    /// List item following a scalar property.
    #[error("List item `{item}` had a non-list parent: `{parent}`")]
    NonListParent { item: String, parent: String },

    /// List item appearing before any property was declared.
    #[error("List item `{item}` does not belong to any property")]
    OrphanListItem { item: String },

    /// The header parsed to an empty property map.
    #[error("No valid supermark properties found in header")]
    NoProperties,

    #[error("Required property `Title` not found in header")]
    MissingTitle,

    #[error(
        "`Slug` is explicitly defined, but does not have a valid value. \
         Must adhere to the following regular expression: /^[a-zA-Z0-9_!().-]+$/"
    )]
    InvalidSlug,

    #[error(
        "`Date` must be a parsable date or date-time. \
         We recommend sticking with dates in ISO-8601 format."
    )]
    InvalidDate,

    #[error("`Status` must be either `Published` or `Draft`")]
    InvalidStatus,

    #[error("`Visibility` must be either `Public` or `Private`")]
    InvalidVisibility,

    /// A list entry is empty or whitespace-only.
    #[error("All entries in `{property}` must be valid strings")]
    InvalidListEntry { property: PropertyName },

    /// A list contains the same entry twice.
    #[error("All entries in `{property}` must be unique")]
    DuplicateListEntry { property: PropertyName },
}

impl SupermarkError {
    /// The category this finding belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SupermarkError::MissingHeader | SupermarkError::UnparsableLine { .. } => {
                ErrorKind::Structural
            }
            SupermarkError::UnknownProperty { .. }
            | SupermarkError::MissingValue { .. }
            | SupermarkError::InlineList { .. }
            | SupermarkError::NonListParent { .. }
            | SupermarkError::OrphanListItem { .. } => ErrorKind::Schema,
            SupermarkError::NoProperties
            | SupermarkError::MissingTitle
            | SupermarkError::InvalidSlug
            | SupermarkError::InvalidDate
            | SupermarkError::InvalidStatus
            | SupermarkError::InvalidVisibility
            | SupermarkError::InvalidListEntry { .. }
            | SupermarkError::DuplicateListEntry { .. } => ErrorKind::Validation,
        }
    }

    /// Whether this was found while reading the header rather than validating it.
    pub fn is_parse_error(&self) -> bool {
        self.kind() != ErrorKind::Validation
    }
}

impl Serialize for SupermarkError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
