//! Extraction options.
//!
//! The defaults give the full pipeline. Options can be built in code or read
//! from TOML, which lets tooling keep them next to the rest of its config:
//!
//! ```toml
//! validate = true
//! split_intro = false
//! ```

use serde::{Deserialize, Serialize};
use supermark_core::{Error, Result};

/// Options controlling [`extract_with`](crate::extract_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractOptions {
    /// Run property validation after parsing.
    pub validate: bool,
    /// Split the body at the read-more marker into `intro` and `document`.
    pub split_intro: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            validate: true,
            split_intro: true,
        }
    }
}

impl ExtractOptions {
    /// Parse options from a TOML document. Missing keys keep their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use supermark::ExtractOptions;
    ///
    /// let options = ExtractOptions::from_toml_str("split_intro = false").unwrap();
    /// assert!(options.validate);
    /// assert!(!options.split_intro);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Invalid extract options: {e}")))
    }

    /// Set whether validation runs.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Set whether the read-more marker is resolved.
    pub fn with_intro_split(mut self, split_intro: bool) -> Self {
        self.split_intro = split_intro;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_run_everything() {
        let options = ExtractOptions::default();
        assert!(options.validate);
        assert!(options.split_intro);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let options = ExtractOptions::from_toml_str("").unwrap();
        assert_eq!(options, ExtractOptions::default());
    }

    #[test]
    fn test_toml_overrides() {
        let options =
            ExtractOptions::from_toml_str("validate = false\nsplit_intro = false").unwrap();
        assert_eq!(
            options,
            ExtractOptions::default()
                .with_validation(false)
                .with_intro_split(false)
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ExtractOptions::from_toml_str("strict = true").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().starts_with("Configuration error: Invalid extract options"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        assert!(ExtractOptions::from_toml_str("validate = \"yes\"").is_err());
    }
}
