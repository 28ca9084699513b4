// SPDX-FileCopyrightText: 2026 The contentline developers
//
// SPDX-License-Identifier: Apache-2.0

//! Ordered, case-insensitive parameter mapping.

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use crate::quoting::quote_if_needed;

/// A parameter name, compared case-insensitively.
///
/// The canonical (upper-cased) form drives equality, hashing and
/// serialization; the source form retains the spelling found in the
/// input for callers that need to report or echo it.
#[derive(Debug, Clone, Eq)]
pub struct ParamKey {
    canonical: String,
    source: String,
}

impl ParamKey {
    fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            canonical: source.to_uppercase(),
            source,
        }
    }

    /// Upper-cased form used for comparison and serialization.
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The spelling this key had when it was inserted or parsed.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl PartialEq for ParamKey {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Hash for ParamKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

/// Insertion-ordered mapping from parameter name to a scalar value.
///
/// Lookup is case-insensitive. A parameter that had no `=value` in the
/// source maps to the empty string, and an empty value serializes back
/// to the bare name. Enumeration via [`iter`](Parameters::iter) follows
/// insertion order; the serialized form emitted by `Display` is sorted
/// by canonical key, so equal mappings always serialize identically.
///
/// ```
/// use contentline::Parameters;
///
/// let mut params = Parameters::new();
/// params.insert("Role", "REQ-PARTICIPANT");
/// assert_eq!(params.get("ROLE"), Some("REQ-PARTICIPANT"));
/// assert_eq!(params.to_string(), "ROLE=REQ-PARTICIPANT");
/// ```
#[derive(Debug, Clone, Default, Eq)]
pub struct Parameters {
    entries: Vec<(ParamKey, String)>,
}

impl Parameters {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a parameter, replacing any entry whose name matches
    /// case-insensitively.
    ///
    /// Replacement keeps the entry's position and adopts the new key
    /// spelling; the previous value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = ParamKey::new(key);
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((k, v)) => {
                *k = key;
                Some(std::mem::replace(v, value))
            }
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up a parameter value, ignoring the case of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let canonical = key.to_uppercase();
        self.entries
            .iter()
            .find(|(k, _)| k.canonical == canonical)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a parameter with this name exists, ignoring case.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove a parameter by name, ignoring case, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let canonical = key.to_uppercase();
        let pos = self
            .entries
            .iter()
            .position(|(k, _)| k.canonical == canonical)?;
        Some(self.entries.remove(pos).1)
    }

    /// Iterate over entries in insertion order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.entries.iter())
    }
}

impl PartialEq for Parameters {
    /// Compared as an unordered, case-insensitive map.
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.get(k.canonical()) == Some(v.as_str()))
    }
}

impl Display for Parameters {
    /// The serialized parameter block: `KEY=value` entries joined with
    /// `;`, sorted by canonical key, values quoted as needed. An empty
    /// value emits the bare key with no `=`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<&(ParamKey, String)> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.canonical().cmp(b.0.canonical()));
        for (i, (key, value)) in entries.into_iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            if value.is_empty() {
                write!(f, "{key}")?;
            } else {
                write!(f, "{key}={}", quote_if_needed(value))?;
            }
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Parameters {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Iterator over parameter entries in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a>(std::slice::Iter<'a, (ParamKey, String)>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a ParamKey, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k, v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a ParamKey, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let params = Parameters::from_iter([("VALUE", "datetime")]);
        assert_eq!(params.get("value"), Some("datetime"));
        assert_eq!(params.get("Value"), Some("datetime"));
        assert_eq!(params.get("other"), None);
        assert!(params.contains_key("vAlUe"));
    }

    #[test]
    fn keys_normalize_but_remember_their_spelling() {
        let params = Parameters::from_iter([("tzid", "Europe/Copenhagen")]);
        let (key, value) = params.iter().next().unwrap();
        assert_eq!(key.canonical(), "TZID");
        assert_eq!(key.source(), "tzid");
        assert_eq!(value, "Europe/Copenhagen");
    }

    #[test]
    fn replacement_keeps_position() {
        let mut params = Parameters::from_iter([("A", "1"), ("B", "2"), ("C", "3")]);
        assert_eq!(params.insert("b", "два"), Some("2".to_owned()));
        let keys: Vec<_> = params.iter().map(|(k, _)| k.canonical()).collect();
        assert_eq!(keys, ["A", "B", "C"]);
        assert_eq!(params.get("B"), Some("два"));
    }

    #[test]
    fn enumeration_follows_insertion_order() {
        let params = Parameters::from_iter([("ROLE", "REQ-PARTICIPANT"), ("CN", "Max Rasmussen")]);
        let entries: Vec<_> = params.iter().map(|(k, v)| (k.canonical(), v)).collect();
        assert_eq!(
            entries,
            [("ROLE", "REQ-PARTICIPANT"), ("CN", "Max Rasmussen")]
        );
    }

    #[test]
    fn serialization_sorts_and_quotes() {
        let params = Parameters::from_iter([("ROLE", "REQ-PARTICIPANT"), ("CN", "Max Rasmussen")]);
        assert_eq!(
            params.to_string(),
            r#"CN="Max Rasmussen";ROLE=REQ-PARTICIPANT"#
        );
    }

    #[test]
    fn empty_value_serializes_as_bare_key() {
        let params = Parameters::from_iter([("RSVP", "")]);
        assert_eq!(params.to_string(), "RSVP");
    }

    #[test]
    fn equality_is_unordered_and_caseless() {
        let a = Parameters::from_iter([("A", "1"), ("B", "2")]);
        let b = Parameters::from_iter([("b", "2"), ("a", "1")]);
        assert_eq!(a, b);
        let c = Parameters::from_iter([("A", "1")]);
        assert_ne!(a, c);
    }

    #[test]
    fn remove_by_any_case() {
        let mut params = Parameters::from_iter([("X-FLAG", "on")]);
        assert_eq!(params.remove("x-flag"), Some("on".to_owned()));
        assert!(params.is_empty());
    }
}
