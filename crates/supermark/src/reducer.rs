//! Folding header lines into properties.
//!
//! Header lines come in two shapes:
//!
//! - property lines, `Name: value`, or a bare `Name:` that opens a list
//! - list-item lines, `- item`, `* item`, `+ item` or `1 item`
//!
//! The reducer walks the lines in order, threading a [`ParseState`] through
//! each step. List items attach to the most recently declared property, so
//! the state remembers which property is currently open.
//!
//! A bad line never stops the fold. It records a [`SupermarkError`] and the
//! next line is read as if nothing happened.

use regex::Regex;
use std::sync::LazyLock;
use supermark_core::{Properties, PropertyName, SupermarkError};

static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*+0-9]\s*(.*)$").expect("Invalid list item regex"));

/// How a single header line reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// A list entry, with the marker and surrounding whitespace removed.
    ListItem(&'a str),
    /// `name: value`, both trimmed. `value` may be empty.
    Property { name: &'a str, value: &'a str },
    /// Neither of the above.
    Unparsable,
}

impl<'a> Line<'a> {
    /// Classify a header line.
    ///
    /// List markers are checked first, so a line starting with a digit is
    /// always a list item.
    pub fn classify(line: &'a str) -> Self {
        if let Some(item) = LIST_ITEM_RE.captures(line).and_then(|caps| caps.get(1)) {
            return Line::ListItem(item.as_str().trim());
        }

        match line.split_once(':') {
            Some((name, value)) if !name.trim().is_empty() => Line::Property {
                name: name.trim(),
                value: value.trim(),
            },
            _ => Line::Unparsable,
        }
    }
}

/// Accumulator threaded through the fold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseState {
    props: Properties,
    errors: Vec<SupermarkError>,
    last_item: Option<PropertyName>,
}

impl ParseState {
    /// Properties collected so far.
    pub fn props(&self) -> &Properties {
        &self.props
    }

    /// Errors collected so far, in line order.
    pub fn errors(&self) -> &[SupermarkError] {
        &self.errors
    }

    /// The property that list items currently attach to.
    pub fn last_item(&self) -> Option<PropertyName> {
        self.last_item
    }

    /// Split into the property map and the error list.
    pub fn into_parts(self) -> (Properties, Vec<SupermarkError>) {
        (self.props, self.errors)
    }

    fn push_error(mut self, error: SupermarkError) -> Self {
        log::trace!("header line rejected: {error}");
        self.errors.push(error);
        self
    }
}

/// Fold header lines into a fresh [`ParseState`].
///
/// # Example
///
/// ```rust
/// use supermark::reducer::reduce_lines;
/// use supermark::PropertyName;
///
/// let state = reduce_lines(["Title: Hello", "Tags:", "* one", "* two"]);
///
/// assert!(state.errors().is_empty());
/// assert_eq!(state.props().get_str(PropertyName::Title), Some("Hello"));
/// assert_eq!(state.props().get_list(PropertyName::Tags).unwrap(), ["one", "two"]);
/// ```
pub fn reduce_lines<'a, I>(lines: I) -> ParseState
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .fold(ParseState::default(), reduce_line)
}

/// Apply a single header line to the state.
pub fn reduce_line(state: ParseState, line: &str) -> ParseState {
    match Line::classify(line) {
        Line::ListItem(item) => reduce_list_item(state, item),
        Line::Property { name, value } => reduce_property(state, name, value),
        Line::Unparsable => state.push_error(SupermarkError::UnparsableLine {
            line: line.to_string(),
        }),
    }
}

fn reduce_property(mut state: ParseState, raw_name: &str, value: &str) -> ParseState {
    let Some(name) = PropertyName::from_header(raw_name) else {
        return state.push_error(SupermarkError::UnknownProperty {
            name: raw_name.to_string(),
        });
    };

    if value.is_empty() {
        if !name.is_list() {
            return state.push_error(SupermarkError::MissingValue { name });
        }
    } else if name.is_list() {
        state = state.push_error(SupermarkError::InlineList { name });
    } else {
        log::trace!("{} = {value:?}", name.key());
        state.props.set_scalar(name, value);
    }

    state.last_item = Some(name);
    state
}

fn reduce_list_item(mut state: ParseState, item: &str) -> ParseState {
    let Some(parent) = state.last_item else {
        return state.push_error(SupermarkError::OrphanListItem {
            item: item.to_string(),
        });
    };

    let list = if parent.is_list() {
        state.props.list_entry(parent)
    } else {
        None
    };

    match list {
        Some(list) => {
            list.push(item.to_string());
            state
        }
        None => state.push_error(SupermarkError::NonListParent {
            item: item.to_string(),
            parent: parent.key().to_string(),
        }),
    }
}

// ============================================================================
// Tests
// ============================================================================
