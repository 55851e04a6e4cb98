//! Locating the supermark header block.
//!
//! A header starts at the very beginning of a document with `<word>:` and
//! runs until the first delimiter line. A delimiter is any markdown
//! horizontal rule:
//!
//! ```markdown
//! ---
//! - - -
//! ___
//! ***
//!    * * *
//! ```
//!
//! That is three or more `-`, `_` or `*` characters (all the same), each
//! optionally followed by up to two spaces, indented by at most three spaces.

use regex::Regex;
use std::sync::LazyLock;

/// A horizontal rule, without indentation or line ending.
const RULE: &str = r"(?:(?:-+ {0,2}){3,}|(?:_+ {0,2}){3,}|(?:\*+ {0,2}){3,})";

// The header body is captured lazily so the first delimiter line wins.
// The rule line must end in a newline. Whitespace after the rule is consumed
// up to the last newline of that run.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^([[:word:]]+:[\s\S]*?)\n {{0,3}}{RULE}\s*\n"
    ))
    .expect("Invalid header regex")
});

static DELIMITER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^ {{0,3}}{RULE}\s*$")).expect("Invalid delimiter regex")
});

/// A header block found at the start of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMatch<'a> {
    header: &'a str,
    body: &'a str,
}

impl<'a> HeaderMatch<'a> {
    /// Header text, without the delimiter line.
    pub fn header(&self) -> &'a str {
        self.header
    }

    /// Everything after the delimiter line.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Non-empty header lines, in order.
    pub fn lines(&self) -> impl Iterator<Item = &'a str> {
        header_lines(self.header)
    }
}

/// Find the header block at the start of `source`.
///
/// Returns `None` when the document does not open with a `<word>:` line or no
/// delimiter line closes the header.
///
/// # Example
///
/// ```rust
/// use supermark::header::extract_header;
///
/// let found = extract_header("Title: foo\n- - -\nBody").unwrap();
/// assert_eq!(found.header(), "Title: foo");
/// assert_eq!(found.body(), "Body");
///
/// assert!(extract_header("# Just markdown\n---\n").is_none());
/// ```
pub fn extract_header(source: &str) -> Option<HeaderMatch<'_>> {
    let caps = HEADER_RE.captures(source)?;
    let whole = caps.get(0)?;
    let header = caps.get(1)?;
    Some(HeaderMatch {
        header: header.as_str(),
        body: &source[whole.end()..],
    })
}

/// Split header text into lines, dropping empty ones.
///
/// Whitespace-only lines are kept so the reducer can report them.
pub fn header_lines(header: &str) -> impl Iterator<Item = &str> {
    header.split('\n').filter(|line| !line.is_empty())
}

/// Whether `line` would close a header.
pub fn is_delimiter(line: &str) -> bool {
    DELIMITER_RE.is_match(line)
}

// ============================================================================
// Tests
// ============================================================================
