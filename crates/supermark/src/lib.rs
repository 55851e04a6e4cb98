//! Supermark header extraction and validation.
//!
//! A supermark document starts with a small header of `Name: value` lines,
//! closed by a horizontal rule, followed by the document body:
//!
//! ```markdown
//! Title: Why the build broke
//! Date: 2015-12-30T00:11:19.411Z
//! Tags:
//! * List
//! * Ramblings
//! ---
//!
//! # The body starts here
//! ```
//!
//! [`extract`] turns such a document into its properties, its body, and a
//! list of every problem found along the way. It never fails: a document
//! without a header still produces a result, carrying a single error.
//!
//! # Modules
//!
//! - [`header`]: Locating the header block and its delimiter line
//! - [`reducer`]: Folding header lines into properties
//! - [`validate`]: Per-property validation rules
//! - [`date`]: Lenient date parsing used by `Date` validation
//! - [`document`]: The extraction pipeline and read-more splitting
//! - [`config`]: Extraction options
//!
//! # Example
//!
//! ```rust
//! use supermark::{extract, PropertyName};
//!
//! let result = extract("Title: foo\nSlug: a-valid-slug\n---\nZing");
//!
//! assert!(result.errors().is_empty());
//! assert_eq!(result.get_str(PropertyName::Slug), Some("a-valid-slug"));
//! assert_eq!(result.document(), "Zing");
//! ```

#![doc = include_str!("../README.md")]

pub mod config;
pub mod date;
pub mod document;
pub mod header;
pub mod reducer;
pub mod validate;

mod proptests;

// Re-export commonly used types
pub use config::ExtractOptions;
pub use document::{extract, extract_with, ExtractionResult};
pub use supermark_core::{
    Error, ErrorKind, Properties, PropertyName, PropertyValue, Result, SupermarkError,
};
