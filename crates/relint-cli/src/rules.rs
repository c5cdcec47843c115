//! Loading redirect rules from `redirects.json`.
//!
//! The rule file has grown several shapes over time and all of them stay
//! accepted:
//!
//! - an object with a `"data"` array of entries (`key`/`value`, `from`/`to`,
//!   `source`/`target`, `src`/`dest` aliases)
//! - a plain object of `source: destination`
//! - an array of entries, either objects with the alias keys or
//!   two-element arrays
//!
//! Entries that do not fit any shape are skipped; a file that is not JSON
//! at all is a hard precondition failure surfaced to the caller.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use relint_core::Rule;

/// Load redirect rules from a `redirects.json` file, in file order.
///
/// # Errors
///
/// Fails when the file cannot be read or is not valid JSON.
pub fn load(path: &Path) -> Result<Vec<Rule>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to load redirects from {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to load redirects from {}", path.display()))?;
    Ok(parse_rules(&value))
}

fn parse_rules(value: &Value) -> Vec<Rule> {
    match value {
        Value::Object(map) => {
            if let Some(Value::Array(entries)) = map.get("data") {
                entries
                    .iter()
                    .filter_map(|entry| {
                        entry_rule(entry, &["key", "from", "source", "src"], &[
                            "value", "to", "target", "dest",
                        ])
                    })
                    .collect()
            } else {
                map.iter()
                    .filter_map(|(source, destination)| {
                        scalar_string(destination)
                            .map(|destination| Rule::new(source.clone(), destination))
                    })
                    .collect()
            }
        },
        Value::Array(entries) => entries
            .iter()
            .filter_map(|entry| match entry {
                Value::Object(_) => entry_rule(entry, &["from", "source", "src"], &[
                    "to", "target", "dest",
                ]),
                Value::Array(pair) if pair.len() >= 2 => {
                    let source = scalar_string(&pair[0])?;
                    let destination = scalar_string(&pair[1])?;
                    Some(Rule::new(source, destination))
                },
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn entry_rule(entry: &Value, source_keys: &[&str], destination_keys: &[&str]) -> Option<Rule> {
    let object = entry.as_object()?;
    let source = source_keys
        .iter()
        .find_map(|key| object.get(*key).and_then(scalar_string))?;
    let destination = destination_keys
        .iter()
        .find_map(|key| object.get(*key).and_then(scalar_string))?;
    Some(Rule::new(source, destination))
}

/// Stringify scalar JSON values; arrays, objects, and null are skipped.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<Rule> {
        parse_rules(&serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_data_array_with_key_value_entries() {
        let rules = parse(
            r#"{"data": [
                {"key": "/old/", "value": "/new/"},
                {"from": "/a/", "to": "/b/"},
                {"source": "/c/", "dest": "/d/"}
            ]}"#,
        );

        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0], Rule::new("/old/", "/new/"));
        assert_eq!(rules[1], Rule::new("/a/", "/b/"));
        assert_eq!(rules[2], Rule::new("/c/", "/d/"));
    }

    #[test]
    fn test_plain_object_map() {
        let rules = parse(r#"{"/old/": "/new/", "/faq/": "https://example.com/faq/"}"#);

        assert_eq!(rules.len(), 2);
        assert!(rules.contains(&Rule::new("/old/", "/new/")));
    }

    #[test]
    fn test_plain_object_preserves_file_order() {
        // Keys deliberately out of alphabetical order; rule order must
        // follow the file, not a sorted map.
        let rules = parse(r#"{"/z/": "/1/", "/a/": "/2/", "/m/": "/3/"}"#);

        let sources: Vec<_> = rules.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(sources, vec!["/z/", "/a/", "/m/"]);
    }

    #[test]
    fn test_plain_object_last_write_wins_follows_file_order() {
        // "/old/" and "/old" are distinct JSON keys but the same
        // normalized source; the file-last rule must govern traversal.
        let rules = parse(r#"{"/old/": "/a", "/old": "/b"}"#);
        assert_eq!(rules, vec![Rule::new("/old/", "/a"), Rule::new("/old", "/b")]);

        let (map, duplicates) = relint_core::RedirectMap::build(&rules);
        assert_eq!(duplicates, vec!["/old".to_string()]);
        assert_eq!(map.destination("/old"), Some("/b"));
    }

    #[test]
    fn test_array_of_pairs_preserves_file_order() {
        let rules = parse(r#"[["/z/", "/1/"], ["/a/", "/2/"], ["/m/", "/3/"]]"#);

        let sources: Vec<_> = rules.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(sources, vec!["/z/", "/a/", "/m/"]);
    }

    #[test]
    fn test_array_of_objects_and_pairs() {
        let rules = parse(
            r#"[
                {"from": "/a/", "to": "/b/"},
                ["/c/", "/d/"],
                ["/only-one"],
                "not an entry"
            ]"#,
        );

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0], Rule::new("/a/", "/b/"));
        assert_eq!(rules[1], Rule::new("/c/", "/d/"));
    }

    #[test]
    fn test_incomplete_entries_skipped() {
        let rules = parse(
            r#"{"data": [
                {"key": "/old/"},
                {"value": "/new/"},
                {"key": "/ok/", "value": "/fine/"}
            ]}"#,
        );

        assert_eq!(rules, vec![Rule::new("/ok/", "/fine/")]);
    }

    #[test]
    fn test_file_order_preserved() {
        let rules = parse(
            r#"{"data": [
                {"key": "/z/", "value": "/1/"},
                {"key": "/a/", "value": "/2/"},
                {"key": "/m/", "value": "/3/"}
            ]}"#,
        );

        let sources: Vec<_> = rules.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(sources, vec!["/z/", "/a/", "/m/"]);
    }

    #[test]
    fn test_scalar_values_stringified() {
        let rules = parse(r#"{"data": [{"key": "/old/", "value": 301}]}"#);
        assert_eq!(rules, vec![Rule::new("/old/", "301")]);
    }

    #[test]
    fn test_unrecognized_top_level_yields_no_rules() {
        assert!(parse("42").is_empty());
        assert!(parse("\"just a string\"").is_empty());
    }
}
