//! The supermark property schema.
//!
//! A header may only declare the properties named by [`PropertyName`].
//! Names are matched case-sensitively as written in the header (`Title`,
//! `Tags`, ...) and stored under their lower-case key (`title`, `tags`, ...).
//!
//! Each name fixes its value kind: `Tags` and `Categories` are lists, all
//! other properties are scalar strings.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// A property a supermark header is allowed to declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyName {
    Title,
    Excerpt,
    Slug,
    Date,
    Status,
    Visibility,
    Author,
    Tags,
    Categories,
}

impl PropertyName {
    /// Every valid property, in schema order.
    pub const ALL: [PropertyName; 9] = [
        PropertyName::Title,
        PropertyName::Excerpt,
        PropertyName::Slug,
        PropertyName::Date,
        PropertyName::Status,
        PropertyName::Visibility,
        PropertyName::Author,
        PropertyName::Tags,
        PropertyName::Categories,
    ];

    /// Look up a property by the name written in a header line.
    ///
    /// The match is case-sensitive: `Title` is valid, `title` is not.
    ///
    /// # Examples
    ///
    /// ```
    /// use supermark_core::PropertyName;
    ///
    /// assert_eq!(PropertyName::from_header("Tags"), Some(PropertyName::Tags));
    /// assert_eq!(PropertyName::from_header("tags"), None);
    /// ```
    pub fn from_header(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.header_name() == name)
    }

    /// The spelling used in header lines.
    pub fn header_name(self) -> &'static str {
        match self {
            PropertyName::Title => "Title",
            PropertyName::Excerpt => "Excerpt",
            PropertyName::Slug => "Slug",
            PropertyName::Date => "Date",
            PropertyName::Status => "Status",
            PropertyName::Visibility => "Visibility",
            PropertyName::Author => "Author",
            PropertyName::Tags => "Tags",
            PropertyName::Categories => "Categories",
        }
    }

    /// The canonical lower-case key used in the property map.
    pub fn key(self) -> &'static str {
        match self {
            PropertyName::Title => "title",
            PropertyName::Excerpt => "excerpt",
            PropertyName::Slug => "slug",
            PropertyName::Date => "date",
            PropertyName::Status => "status",
            PropertyName::Visibility => "visibility",
            PropertyName::Author => "author",
            PropertyName::Tags => "tags",
            PropertyName::Categories => "categories",
        }
    }

    /// Whether this property holds a list of strings rather than a scalar.
    pub fn is_list(self) -> bool {
        matches!(self, PropertyName::Tags | PropertyName::Categories)
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header_name())
    }
}

/// The value held by a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// A single trimmed string.
    Scalar(String),
    /// List entries in declaration order. Duplicates are kept.
    List(Vec<String>),
}

impl PropertyValue {
    /// The scalar string, if this is a scalar value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Scalar(s) => Some(s),
            PropertyValue::List(_) => None,
        }
    }

    /// The list entries, if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PropertyValue::Scalar(_) => None,
            PropertyValue::List(items) => Some(items),
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            PropertyValue::Scalar(s) => serializer.serialize_str(s),
            PropertyValue::List(items) => items.serialize(serializer),
        }
    }
}

/// Properties collected from a header, kept in first-declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(PropertyName, PropertyValue)>,
}

impl Properties {
    /// Create an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of properties present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no property has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the property is present.
    pub fn contains(&self, name: PropertyName) -> bool {
        self.get(name).is_some()
    }

    /// Get a property's value.
    pub fn get(&self, name: PropertyName) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Get a scalar property as a string slice.
    pub fn get_str(&self, name: PropertyName) -> Option<&str> {
        self.get(name)?.as_str()
    }

    /// Get a list property's entries.
    pub fn get_list(&self, name: PropertyName) -> Option<&[String]> {
        self.get(name)?.as_list()
    }

    /// Assign a scalar value.
    ///
    /// Re-assigning an existing property replaces its value in place, so the
    /// property keeps the position of its first declaration.
    pub fn set_scalar(&mut self, name: PropertyName, value: impl Into<String>) {
        let value = PropertyValue::Scalar(value.into());
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Get the list stored under `name`, creating an empty one if absent.
    ///
    /// Returns `None` when the property already holds a scalar.
    pub fn list_entry(&mut self, name: PropertyName) -> Option<&mut Vec<String>> {
        let index = match self.entries.iter().position(|(n, _)| *n == name) {
            Some(index) => index,
            None => {
                self.entries.push((name, PropertyValue::List(Vec::new())));
                self.entries.len() - 1
            }
        };
        match &mut self.entries[index].1 {
            PropertyValue::List(items) => Some(items),
            PropertyValue::Scalar(_) => None,
        }
    }

    /// Iterate over properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyName, &PropertyValue)> {
        self.entries.iter().map(|(n, v)| (*n, v))
    }

    /// Property names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = PropertyName> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name.key(), value)?;
        }
        map.end()
    }
}

// ============================================================================
// Tests
// ============================================================================
