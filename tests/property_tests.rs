//! Property-based tests for extension routing and format round trips.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Unsupported extensions always fail with `UnsupportedFormat`
//! - Extension routing is case-sensitive
//! - Documents survive save/load for every supported extension

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use docio::{Document, Error, Format, Map, Value};
use proptest::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Scalars every supported format can hold. Floats are kept to exactly
/// representable values so text round trips compare equal.
fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1000i32..1000).prop_map(|n| Value::from(f64::from(n) / 4.0)),
        "[a-zA-Z0-9 _.-]{0,16}".prop_map(Value::String),
    ]
}

fn nested_value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z][a-z0-9_]{0,8}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn mapping_document() -> impl Strategy<Value = Document> {
    prop::collection::btree_map("[a-z][a-z0-9_]{0,8}", nested_value(), 0..6)
        .prop_map(|m| Document::Mapping(m.into_iter().collect::<Map<String, Value>>()))
}

fn supported_extension() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["json", "yaml", "yml", "toml"])
}

proptest! {
    /// Property: any extension outside the supported set is rejected by
    /// both load and save, and the message names the extension and path.
    #[test]
    fn prop_unsupported_extension_rejected(
        stem in "[a-z]{1,8}",
        ext in "[a-z]{1,6}".prop_filter("supported", |e| Format::from_extension(e).is_none()),
    ) {
        let name = format!("{stem}.{ext}");

        let err = docio::load(&name).unwrap_err();
        let is_unsupported = matches!(&err, Error::UnsupportedFormat { .. });
        prop_assert!(is_unsupported);
        let message = err.to_string();
        let dotted = format!(".{ext}");
        prop_assert!(message.contains(&dotted));
        prop_assert!(message.contains(&name));

        let err = docio::save(&Document::new(), &name).unwrap_err();
        let is_unsupported = matches!(err, Error::UnsupportedFormat { .. });
        prop_assert!(is_unsupported);
    }

    /// Property: a supported extension with any uppercase letter is rejected.
    #[test]
    fn prop_uppercase_extension_rejected(
        ext in supported_extension(),
        mask in prop::collection::vec(any::<bool>(), 4),
    ) {
        let mixed: String = ext
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assume!(mixed != ext);
        let path = format!("file.{mixed}");

        let err = Format::from_path(Path::new(&path)).unwrap_err();
        let dotted = format!(".{mixed}");
        let is_unsupported = matches!(
            &err,
            Error::UnsupportedFormat { extension, .. } if *extension == dotted
        );
        prop_assert!(is_unsupported);
        prop_assert!(docio::load(&path).is_err());
    }

    /// Property: save followed by load returns an equal document.
    #[test]
    fn prop_save_load_round_trip(doc in mapping_document(), ext in supported_extension()) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(format!("doc.{ext}"));

        docio::save(&doc, &path).unwrap();
        let loaded = docio::load(&path).unwrap();
        prop_assert_eq!(loaded, doc);
    }
}
