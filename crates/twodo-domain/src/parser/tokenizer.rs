//! Splits `n/NAME t/TAG ...` style arguments by prefix.

use std::collections::HashMap;

pub const PREFIX_NAME: &str = "n/";
pub const PREFIX_DESCRIPTION: &str = "d/";
pub const PREFIX_START: &str = "s/";
pub const PREFIX_END: &str = "e/";
pub const PREFIX_TAG: &str = "t/";

pub const ALL_PREFIXES: [&str; 5] = [
    PREFIX_NAME,
    PREFIX_DESCRIPTION,
    PREFIX_START,
    PREFIX_END,
    PREFIX_TAG,
];

/// Arguments grouped by prefix.
///
/// A prefix only counts at the start of the input or right after whitespace,
/// so `d/see n/a` splits but `and/or` does not.
#[derive(Debug, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<&'static str, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn tokenize(args: &str, prefixes: &[&'static str]) -> Self {
        let mut positions: Vec<(usize, &'static str)> = Vec::new();
        let mut previous: Option<char> = None;
        for (i, c) in args.char_indices() {
            if previous.map_or(true, char::is_whitespace) {
                if let Some(prefix) = prefixes.iter().find(|p| args[i..].starts_with(**p)) {
                    positions.push((i, *prefix));
                }
            }
            previous = Some(c);
        }

        let preamble_end = positions.first().map_or(args.len(), |(i, _)| *i);
        let mut map = Self {
            preamble: args[..preamble_end].trim().to_string(),
            values: HashMap::new(),
        };

        for (n, (start, prefix)) in positions.iter().enumerate() {
            let end = positions.get(n + 1).map_or(args.len(), |(i, _)| *i);
            let value = args[start + prefix.len()..end].trim().to_string();
            map.values.entry(*prefix).or_default().push(value);
        }
        map
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for a prefix.
    pub fn value(&self, prefix: &str) -> Option<&str> {
        self.values
            .get(prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: &str) -> &[String] {
        self.values
            .get(prefix)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.values.contains_key(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_and_values() {
        let map = ArgumentMultimap::tokenize(" 2 n/Buy milk d/two litres ", &ALL_PREFIXES);
        assert_eq!(map.preamble(), "2");
        assert_eq!(map.value(PREFIX_NAME), Some("Buy milk"));
        assert_eq!(map.value(PREFIX_DESCRIPTION), Some("two litres"));
        assert!(!map.contains(PREFIX_TAG));
    }

    #[test]
    fn test_repeated_prefix() {
        let map = ArgumentMultimap::tokenize("n/first n/second t/a t/b", &ALL_PREFIXES);
        assert_eq!(map.value(PREFIX_NAME), Some("second"));
        assert_eq!(map.all_values(PREFIX_TAG), ["a", "b"]);
    }

    #[test]
    fn test_prefix_inside_word_is_text() {
        let map = ArgumentMultimap::tokenize("n/read and/or write", &ALL_PREFIXES);
        assert_eq!(map.value(PREFIX_NAME), Some("read and/or write"));
        assert!(!map.contains(PREFIX_DESCRIPTION));
    }

    #[test]
    fn test_empty_value_is_present() {
        let map = ArgumentMultimap::tokenize("1 t/", &ALL_PREFIXES);
        assert!(map.contains(PREFIX_TAG));
        assert_eq!(map.value(PREFIX_TAG), Some(""));
    }

    #[test]
    fn test_no_prefixes() {
        let map = ArgumentMultimap::tokenize("  just text ", &ALL_PREFIXES);
        assert_eq!(map.preamble(), "just text");
        assert!(map.all_values(PREFIX_NAME).is_empty());
    }
}
