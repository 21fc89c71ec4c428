//! Splits an argument string into a preamble and prefixed values.
//!
//! `tokenize("1 n/Bob t/a t/b", &[PREFIX_NAME, PREFIX_TAG])` yields preamble
//! `"1"`, `n/` → `["Bob"]`, `t/` → `["a", "b"]`.
//!
//! A marker only counts when it starts the string or follows whitespace, so
//! `https://x.org/n/1` stays intact inside a value. Markers that were not
//! declared are left in the surrounding value verbatim.

use std::collections::HashMap;

use super::syntax::Prefix;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognized marker, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`. Earlier repeats are ignored.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn are_prefixes_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.contains(*p))
    }
}

pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let positions = find_prefix_positions(args, prefixes);

    let preamble_end = positions.first().map(|(pos, _)| *pos).unwrap_or(args.len());
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (pos, prefix)) in positions.iter().enumerate() {
        let start = pos + prefix.as_str().len();
        let end = positions.get(i + 1).map(|(next, _)| *next).unwrap_or(args.len());
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }

    multimap
}

/// Byte offsets of every delimiting marker, ascending.
fn find_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut positions = Vec::new();
    for &prefix in prefixes {
        let marker = prefix.as_str();
        let mut from = 0;
        while let Some(offset) = args[from..].find(marker) {
            let pos = from + offset;
            if starts_token(args, pos) {
                positions.push((pos, prefix));
            }
            from = pos + marker.len();
        }
    }
    positions.sort_by_key(|(pos, _)| *pos);
    positions
}

fn starts_token(args: &str, pos: usize) -> bool {
    args[..pos].chars().next_back().map_or(true, char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::*;

    const CONTACT: &[Prefix] = &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_TAG];

    #[test]
    fn test_contact_fields() {
        let map = tokenize("n/Alice p/123 e/a@b.com a/Street t/x t/y", CONTACT);
        assert_eq!(map.preamble(), "");
        assert_eq!(map.value(PREFIX_NAME), Some("Alice"));
        assert_eq!(map.value(PREFIX_PHONE), Some("123"));
        assert_eq!(map.value(PREFIX_EMAIL), Some("a@b.com"));
        assert_eq!(map.value(PREFIX_ADDRESS), Some("Street"));
        assert_eq!(map.all_values(PREFIX_TAG), &["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_no_prefixes() {
        let map = tokenize("  some random text  ", CONTACT);
        assert_eq!(map.preamble(), "some random text");
        assert!(!map.contains(PREFIX_NAME));
        assert!(map.all_values(PREFIX_TAG).is_empty());
    }

    #[test]
    fn test_preamble_and_values() {
        let map = tokenize("  2 n/Bob Lee   p/999 ", CONTACT);
        assert_eq!(map.preamble(), "2");
        assert_eq!(map.value(PREFIX_NAME), Some("Bob Lee"));
        assert_eq!(map.value(PREFIX_PHONE), Some("999"));
    }

    #[test]
    fn test_last_value_wins() {
        let map = tokenize("n/First n/Second", CONTACT);
        assert_eq!(map.value(PREFIX_NAME), Some("Second"));
        assert_eq!(map.all_values(PREFIX_NAME).len(), 2);
    }

    #[test]
    fn test_marker_inside_word_is_not_a_delimiter() {
        let prefixes = &[PREFIX_DESCRIPTION, PREFIX_LINK, PREFIX_TAG];
        let map = tokenize("desc/Read docs link/https://example.com/t/x?a=n/1 t/reading", prefixes);
        assert_eq!(map.value(PREFIX_DESCRIPTION), Some("Read docs"));
        assert_eq!(map.value(PREFIX_LINK), Some("https://example.com/t/x?a=n/1"));
        assert_eq!(map.all_values(PREFIX_TAG), &["reading".to_string()]);
    }

    #[test]
    fn test_unrecognized_marker_stays_in_value() {
        let map = tokenize("n/Alice x/unknown p/123", CONTACT);
        assert_eq!(map.value(PREFIX_NAME), Some("Alice x/unknown"));
        assert_eq!(map.value(PREFIX_PHONE), Some("123"));
    }

    #[test]
    fn test_overlapping_marker_names() {
        let prefixes = &[PREFIX_DATE, PREFIX_STARTDATE, PREFIX_DESCRIPTION, PREFIX_CONTACT_INDEX];
        let map = tokenize("desc/Trip startdate/01-01-2025 date/02-01-2025 c/3", prefixes);
        assert_eq!(map.value(PREFIX_STARTDATE), Some("01-01-2025"));
        assert_eq!(map.value(PREFIX_DATE), Some("02-01-2025"));
        assert_eq!(map.value(PREFIX_DESCRIPTION), Some("Trip"));
        assert_eq!(map.value(PREFIX_CONTACT_INDEX), Some("3"));
    }

    #[test]
    fn test_empty_value() {
        let map = tokenize("1 t/", CONTACT);
        assert_eq!(map.all_values(PREFIX_TAG), &["".to_string()]);
        assert!(map.are_prefixes_present(&[PREFIX_TAG]));
        assert!(!map.are_prefixes_present(&[PREFIX_TAG, PREFIX_NAME]));
    }
}
