//! Per-property validation rules.
//!
//! Validation runs on a finished property map and never looks at the header
//! text. Each property may have a [`Validator`]: a plain function from the
//! property's value (absent for required properties that were not declared)
//! to an optional error.
//!
//! | Property     | Rule                                                |
//! |--------------|-----------------------------------------------------|
//! | `title`      | required, non-blank                                 |
//! | `slug`       | matches `^[a-zA-Z0-9_!().-]+$`                      |
//! | `date`       | parsable by [`parse_date`], not the Unix epoch      |
//! | `status`     | `published` or `draft`, any case                    |
//! | `visibility` | `public` or `private`, any case                     |
//! | `tags`       | entries non-blank, then unique                      |
//! | `categories` | entries non-blank, then unique                      |

use crate::date::parse_date;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use supermark_core::{Properties, PropertyName, PropertyValue, SupermarkError};

/// Properties every header must declare.
pub const REQUIRED: &[PropertyName] = &[PropertyName::Title];

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_!().-]+$").expect("Invalid slug regex"));

/// A validation rule for one property.
pub type Validator = fn(Option<&PropertyValue>) -> Option<SupermarkError>;

/// The validator registered for a property, if any.
pub fn validator_for(name: PropertyName) -> Option<Validator> {
    match name {
        PropertyName::Title => Some(validate_title),
        PropertyName::Slug => Some(validate_slug),
        PropertyName::Date => Some(validate_date),
        PropertyName::Status => Some(validate_status),
        PropertyName::Visibility => Some(validate_visibility),
        PropertyName::Tags => Some(validate_tags),
        PropertyName::Categories => Some(validate_categories),
        PropertyName::Excerpt | PropertyName::Author => None,
    }
}

/// Validate a property map, returning every error found.
///
/// Declared properties are checked in declaration order, followed by any
/// required property that was never declared. An empty map yields only
/// [`SupermarkError::NoProperties`].
///
/// # Example
///
/// ```rust
/// use supermark::validate::validate;
/// use supermark::{Properties, PropertyName, SupermarkError};
///
/// let mut props = Properties::new();
/// props.set_scalar(PropertyName::Status, "Archived");
///
/// assert_eq!(
///     validate(&props),
///     vec![SupermarkError::InvalidStatus, SupermarkError::MissingTitle]
/// );
/// ```
pub fn validate(props: &Properties) -> Vec<SupermarkError> {
    if props.is_empty() {
        return vec![SupermarkError::NoProperties];
    }

    let mut keys: Vec<PropertyName> = props.names().collect();
    for required in REQUIRED {
        if !keys.contains(required) {
            keys.push(*required);
        }
    }

    keys.into_iter()
        .filter_map(|name| validator_for(name).and_then(|check| check(props.get(name))))
        .collect()
}

/// Whether `slug` is a valid `Slug` value.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

fn validate_title(title: Option<&PropertyValue>) -> Option<SupermarkError> {
    match title.and_then(PropertyValue::as_str) {
        Some(title) if has_value(title) => None,
        _ => Some(SupermarkError::MissingTitle),
    }
}

fn validate_slug(slug: Option<&PropertyValue>) -> Option<SupermarkError> {
    match slug?.as_str() {
        Some(slug) if is_valid_slug(slug) => None,
        _ => Some(SupermarkError::InvalidSlug),
    }
}

/// The Unix epoch itself is rejected along with unparsable input.
fn validate_date(date: Option<&PropertyValue>) -> Option<SupermarkError> {
    match date?.as_str().and_then(parse_date) {
        Some(dt) if dt.and_utc().timestamp_millis() != 0 => None,
        _ => Some(SupermarkError::InvalidDate),
    }
}

fn validate_status(status: Option<&PropertyValue>) -> Option<SupermarkError> {
    match status?.as_str() {
        Some(s) if one_of(s, &["published", "draft"]) => None,
        _ => Some(SupermarkError::InvalidStatus),
    }
}

fn validate_visibility(visibility: Option<&PropertyValue>) -> Option<SupermarkError> {
    match visibility?.as_str() {
        Some(v) if one_of(v, &["public", "private"]) => None,
        _ => Some(SupermarkError::InvalidVisibility),
    }
}

fn validate_tags(tags: Option<&PropertyValue>) -> Option<SupermarkError> {
    validate_list(PropertyName::Tags, tags?)
}

fn validate_categories(categories: Option<&PropertyValue>) -> Option<SupermarkError> {
    validate_list(PropertyName::Categories, categories?)
}

/// Blank entries are reported before duplicates.
fn validate_list(property: PropertyName, value: &PropertyValue) -> Option<SupermarkError> {
    let Some(items) = value.as_list() else {
        return Some(SupermarkError::InvalidListEntry { property });
    };

    if !items.iter().all(|item| has_value(item)) {
        return Some(SupermarkError::InvalidListEntry { property });
    }

    let mut seen = HashSet::with_capacity(items.len());
    if !items.iter().all(|item| seen.insert(item.as_str())) {
        return Some(SupermarkError::DuplicateListEntry { property });
    }

    None
}

fn has_value(value: &str) -> bool {
    !value.trim().is_empty()
}

fn one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.iter().any(|a| value.eq_ignore_ascii_case(a))
}

// ============================================================================
// Tests
// ============================================================================
