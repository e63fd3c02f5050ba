// Copyright 2026 the Pressable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Token resolution: join tokens into a class value or substitute them
//! through a module map.
//!
//! The module-map path mirrors CSS-modules consumption: the style layer
//! hands over a map from authored token names to generated names, and every
//! token must pass through it. A token with no entry is dropped silently
//! rather than emitted raw; downstream layers rely on never seeing an
//! unmapped name.

use alloc::string::String;
use hashbrown::HashMap;

/// A mapping from authored class tokens to generated (emitted) names.
///
/// Built by the host from whatever its bundler or style pipeline produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleMap {
    entries: HashMap<String, String>,
}

impl ModuleMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a token → emitted-name entry, replacing any previous one.
    pub fn insert(&mut self, token: impl Into<String>, emitted: impl Into<String>) {
        self.entries.insert(token.into(), emitted.into());
    }

    /// Looks up the emitted name for a token.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ModuleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (token, emitted) in iter {
            map.insert(token, emitted);
        }
        map
    }
}

/// Resolves a token sequence into the final class value.
///
/// Without a map, tokens are joined with single spaces and whitespace is
/// normalized: empty tokens contribute nothing, and a token containing
/// internal whitespace is split into its words. With a map, every token is
/// substituted; tokens absent from the map are dropped silently.
#[must_use]
pub fn resolve<S: AsRef<str>>(tokens: &[S], map: Option<&ModuleMap>) -> String {
    let mut value = String::new();
    for token in tokens {
        let token = token.as_ref();
        match map {
            Some(map) => {
                if let Some(emitted) = map.get(token) {
                    push_word(&mut value, emitted);
                }
            }
            None => {
                for word in token.split_whitespace() {
                    push_word(&mut value, word);
                }
            }
        }
    }
    value
}

/// Resolves a single token (e.g. a child-part name like `pressable__bubble`).
///
/// Without a map the token passes through unchanged; with a map a missing
/// entry yields `None`, matching the silent-drop rule of [`resolve`].
#[must_use]
pub fn resolve_one(token: &str, map: Option<&ModuleMap>) -> Option<String> {
    match map {
        Some(map) => map.get(token).map(String::from),
        None => Some(String::from(token)),
    }
}

fn push_word(value: &mut String, word: &str) {
    if word.is_empty() {
        return;
    }
    if !value.is_empty() {
        value.push(' ');
    }
    value.push_str(word);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_without_map_uses_single_spaces() {
        let tokens = ["a", "b", "c"];
        assert_eq!(resolve(&tokens, None), "a b c");
    }

    #[test]
    fn join_normalizes_whitespace() {
        let tokens = ["a", "", "  b   c ", "d"];
        assert_eq!(resolve(&tokens, None), "a b c d");
    }

    #[test]
    fn empty_token_list_resolves_to_empty_value() {
        let tokens: [&str; 0] = [];
        assert_eq!(resolve(&tokens, None), "");
    }

    #[test]
    fn map_substitutes_every_token() {
        let map = ModuleMap::from_iter([("a", "x1"), ("b", "y2")]);
        let tokens = ["a", "b"];
        assert_eq!(resolve(&tokens, Some(&map)), "x1 y2");
    }

    #[test]
    fn unmapped_tokens_are_dropped_not_passed_through() {
        let map = ModuleMap::from_iter([("a", "x1")]);
        let tokens = ["a", "missing", "also-missing"];
        assert_eq!(resolve(&tokens, Some(&map)), "x1");
    }

    #[test]
    fn all_tokens_unmapped_yields_empty_value() {
        let map = ModuleMap::new();
        let tokens = ["a", "b"];
        assert_eq!(resolve(&tokens, Some(&map)), "");
    }

    #[test]
    fn resolve_one_passes_through_without_map() {
        assert_eq!(
            resolve_one("pressable__bubble", None).as_deref(),
            Some("pressable__bubble"),
        );
    }

    #[test]
    fn resolve_one_drops_unmapped_token() {
        let map = ModuleMap::from_iter([("pressable__bubble", "bb_q7")]);
        assert_eq!(resolve_one("pressable__bubble", Some(&map)).as_deref(), Some("bb_q7"));
        assert_eq!(resolve_one("pressable__wrapper", Some(&map)), None);
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut map = ModuleMap::new();
        map.insert("a", "first");
        map.insert("a", "second");
        assert_eq!(map.get("a"), Some("second"));
        assert_eq!(map.len(), 1);
    }
}
