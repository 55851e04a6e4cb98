//! The extraction pipeline.
//!
//! ```text
//! source ─► header::extract_header ─► reducer::reduce_lines ─► validate::validate
//!                     │                                               │
//!                     └──── body ─► read-more split ─► ExtractionResult ◄┘
//! ```
//!
//! Parse errors come first in the result, in line order, followed by
//! validation errors in validation order.

use crate::config::ExtractOptions;
use crate::header::extract_header;
use crate::reducer::reduce_lines;
use crate::validate::validate;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use supermark_core::{Properties, PropertyName, PropertyValue, SupermarkError};

static READ_MORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<!--\s*read\s+more\s*-->").expect("Invalid read-more regex")
});

/// Properties, body and errors extracted from a supermark document.
///
/// Serializes to a flat object: each property becomes a top-level field next
/// to `document`, `intro` (only when the read-more marker was found) and
/// `errors` (as messages).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    #[serde(flatten)]
    props: Properties,
    document: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    intro: Option<String>,
    errors: Vec<SupermarkError>,
}

impl ExtractionResult {
    /// The extracted properties.
    pub fn props(&self) -> &Properties {
        &self.props
    }

    /// Document body with the header and read-more marker removed.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Body text before the read-more marker, if there was one.
    pub fn intro(&self) -> Option<&str> {
        self.intro.as_deref()
    }

    /// Every problem found, parse errors first.
    pub fn errors(&self) -> &[SupermarkError] {
        &self.errors
    }

    /// Whether the document had no problems at all.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get a property value.
    pub fn get(&self, name: PropertyName) -> Option<&PropertyValue> {
        self.props.get(name)
    }

    /// Get a scalar property.
    pub fn get_str(&self, name: PropertyName) -> Option<&str> {
        self.props.get_str(name)
    }

    /// Get a list property's entries.
    ///
    /// Returns an empty slice if the property is missing.
    pub fn get_list(&self, name: PropertyName) -> &[String] {
        self.props.get_list(name).unwrap_or_default()
    }

    /// Take the result apart.
    pub fn into_parts(self) -> (Properties, String, Option<String>, Vec<SupermarkError>) {
        (self.props, self.document, self.intro, self.errors)
    }
}

/// Extract a supermark document with the default options.
///
/// # Behavior
///
/// - No header found: the result carries only
///   [`SupermarkError::MissingHeader`], no properties, and the source as its
///   document. Nothing is parsed or validated.
/// - Otherwise every header line is parsed, the properties are validated, and
///   all errors are reported together.
///
/// # Example
///
/// ```rust
/// use supermark::{extract, PropertyName};
///
/// let result = extract("Title: foo\nTags:\n* Foo\n* Bar\n---\nIntro<!-- read more -->Rest");
///
/// assert!(result.is_valid());
/// assert_eq!(result.get_list(PropertyName::Tags), ["Foo", "Bar"]);
/// assert_eq!(result.intro(), Some("Intro"));
/// assert_eq!(result.document(), "IntroRest");
/// ```
pub fn extract(source: &str) -> ExtractionResult {
    extract_with(source, &ExtractOptions::default())
}

/// Extract a supermark document with explicit options.
pub fn extract_with(source: &str, options: &ExtractOptions) -> ExtractionResult {
    let Some(found) = extract_header(source) else {
        log::debug!("no supermark header in {} bytes of input", source.len());
        return ExtractionResult {
            props: Properties::new(),
            document: source.to_string(),
            intro: None,
            errors: vec![SupermarkError::MissingHeader],
        };
    };

    let (props, mut errors) = reduce_lines(found.lines()).into_parts();
    if options.validate {
        errors.extend(validate(&props));
    }

    let (intro, document) = if options.split_intro {
        split_read_more(found.body())
    } else {
        (None, found.body().to_string())
    };

    log::debug!(
        "extracted {} properties with {} errors",
        props.len(),
        errors.len()
    );

    ExtractionResult {
        props,
        document,
        intro,
        errors,
    }
}

/// Split a body at the first read-more marker.
///
/// Returns the text before the marker (if found) and the body with the marker
/// removed.
pub fn split_read_more(body: &str) -> (Option<String>, String) {
    match READ_MORE_RE.find(body) {
        Some(marker) => {
            let intro = &body[..marker.start()];
            let rest = &body[marker.end()..];
            (Some(intro.to_string()), format!("{intro}{rest}"))
        }
        None => (None, body.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================
