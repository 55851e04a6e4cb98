//! Supermark Core — property schema, diagnostics, and errors.
//!
//! This crate provides the foundational types shared by the supermark
//! pipeline. It has no internal supermark dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Fallible-API error type and Result alias
//! - [`diagnostic`]: Per-document findings reported by parsing and validation
//! - [`property`]: The fixed property schema and the ordered property map

#![doc = include_str!("../README.md")]

pub mod diagnostic;
pub mod error;
pub mod property;

// Re-export key types at crate root for convenience
pub use diagnostic::{ErrorKind, SupermarkError};
pub use error::{Error, Result};
pub use property::{Properties, PropertyName, PropertyValue};
