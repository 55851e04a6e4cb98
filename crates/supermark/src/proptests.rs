//! Property-based tests for the extraction pipeline.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::header::is_delimiter;
    use crate::{extract, ErrorKind, SupermarkError};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_is_idempotent(source in "\\PC*(\n\\PC*){0,8}") {
            prop_assert_eq!(extract(&source), extract(&source));
        }

        #[test]
        fn test_headerless_input_yields_single_error(body in "[^A-Za-z0-9_]\\PC*") {
            let result = extract(&body);
            prop_assert_eq!(result.errors(), &[SupermarkError::MissingHeader][..]);
            prop_assert!(result.props().is_empty());
        }

        #[test]
        fn test_title_only_header_is_clean(
            title in "[A-Za-z][A-Za-z0-9 ]{0,40}",
            body in "[a-z \n]{0,80}",
        ) {
            let source = format!("Title: {title}\n---\n{body}");
            let result = extract(&source);
            prop_assert!(result.is_valid());
            prop_assert!(!result.document().contains("Title:"));
            prop_assert!(source.ends_with(result.document()));
        }

        #[test]
        fn test_unknown_names_never_stored(name in "[A-Z][a-z]{2,12}") {
            prop_assume!(crate::PropertyName::from_header(&name).is_none());
            let result = extract(&format!("Title: foo\n{name}: value\n---\n"));
            prop_assert_eq!(result.props().len(), 1);
            prop_assert_eq!(result.errors().len(), 1);
            prop_assert_eq!(result.errors()[0].kind(), ErrorKind::Schema);
        }

        #[test]
        fn test_dash_rules_are_delimiters(count in 3usize..12, indent in 0usize..4) {
            let line = format!("{}{}", " ".repeat(indent), "-".repeat(count));
            prop_assert!(is_delimiter(&line));
        }
    }
}
