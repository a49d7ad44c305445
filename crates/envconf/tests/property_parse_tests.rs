//! Property-based tests for the text format.
//!
//! Test coverage:
//! - Any key and plain value written as `key = value` under a header parse
//!   back to the trimmed value.
//! - Any store rendered by `render` parses back to the same sections.

use envconf::{Store, Syntax, parse_str};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_.-]{0,15}".prop_map(String::from)
}

fn section_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,10}".prop_map(String::from)
}

/// Values without the comment marker, quotes, or line breaks.
fn plain_value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _.:/@=,-]{0,24}".prop_map(String::from)
}

proptest! {
    #[test]
    fn prop_written_line_parses_to_trimmed_value(
        section in section_strategy(),
        key in key_strategy(),
        value in plain_value_strategy(),
    ) {
        let text = format!("[{section}]\n{key} = {value}\n");
        let sections = parse_str(&text, Syntax::default());
        let got = sections[&section].get_conf(&key);
        prop_assert_eq!(got.as_str(), value.trim());
    }

    #[test]
    fn prop_render_then_parse_preserves_sections(
        entries in prop::collection::btree_map(
            section_strategy(),
            prop::collection::btree_map(key_strategy(), plain_value_strategy(), 0..5),
            0..4,
        )
    ) {
        let mut store = Store::new();
        for (section, pairs) in &entries {
            for (key, value) in pairs {
                store.section_mut(section).put(key, value.clone()).unwrap();
            }
            store.section_mut(section);
        }

        let parsed = parse_str(&store.render(), Syntax::default());
        let reparsed: std::collections::BTreeMap<_, _> = parsed
            .iter()
            .map(|(name, section)| {
                let pairs: std::collections::BTreeMap<String, String> = section
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                (name.clone(), pairs)
            })
            .collect();
        prop_assert_eq!(reparsed, store.snapshot());
    }
}
