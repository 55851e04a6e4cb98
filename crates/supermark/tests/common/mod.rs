//! Fixture documents shared by the integration tests.

#![allow(dead_code)]

pub const BASIC: &str = "\
Title: Why Espen shouldn't be allowed to stay up late
Date: 2015-12-30T00:11:19.411Z
Tags:
  - List
  - Ramblings

---

# Why?

Because.
";

pub const FULL: &str = "\
Title: Full document: The real test.
Excerpt: It ain't easy coming up with sample text.
Slug: full-document-the-real-test
Date: 2015-12-30T00:11:19.411Z
Status: Draft
Visibility: Private
Author: Espen
Tags:
* List
* Random
* Tags
Categories:
+ Testing
+ Blogging
- - -

# Full document

Some *markdown* with a rule:

---

The end.
";

pub const STAR_HR: &str = "\
Title: Starred horizontal rules are the worst
Excerpt: But they are valid markup, so what the heck.
   * * *
# Bip-bop.

Boop.
";

pub const READ_MORE: &str = "\
Title: Teaser
---
The intro.

<!-- Read More -->

The rest.
";

pub const NO_HEADER: &str = "# Just a markdown document\n\nWith no header.\n";

pub const INVALID_PROPS: &str = "Foo: bar\nBar: baz\n---\nBody\n";

pub const UNKNOWN_PROPS: &str = "Title: foo\nSingle unknown prop: yes\n---\nBody\n";

pub const INVALID_HEADER_PROP: &str = "Title: foo\nInvalid header prop\n---\nBody\n";

pub const EXCERPT_AS_LIST: &str = "Title: foo\nExcerpt:\n- one\n- two\n---\nBody\n";

pub const NO_TITLE: &str = "Slug: no-title-here\n---\nBody\n";

pub const LIST_AS_CSV: &str = "Title: foo\nTags: a, b\nCategories: c, d\n---\nBody\n";

/// Error messages of a result, for order-sensitive assertions.
pub fn messages(result: &supermark::ExtractionResult) -> Vec<String> {
    result.errors().iter().map(ToString::to_string).collect()
}
