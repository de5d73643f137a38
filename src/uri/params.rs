//! Ordered parameter collection and token normalization.
//!
//! [`Parameters`] keeps endpoint options in the order they were written,
//! because re-serialized URIs and diagnostics must stay stable. A name
//! seen once holds a [`ParamValue::Single`]; the second occurrence
//! promotes it to [`ParamValue::Multi`].

use indexmap::IndexMap;
use percent_encoding::percent_decode_str;
use serde::Serialize;

use super::query::{self, AMPERSAND};
use super::scanner::Token;
use crate::error::UriSyntaxError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Multi(Vec<String>),
}

impl ParamValue {
    /// The value when exactly one was given.
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::Multi(_) => None,
        }
    }

    /// All values in first-seen order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        match self {
            Self::Single(s) => std::slice::from_ref(s),
            Self::Multi(list) => list,
        }
    }

    fn push(&mut self, value: String) {
        match self {
            Self::Single(existing) => {
                let first = std::mem::take(existing);
                *self = Self::Multi(vec![first, value]);
            }
            Self::Multi(list) => list.push(value),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multi(values)
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(s) => f.write_str(s),
            Self::Multi(list) => write!(f, "[{}]", list.join(", ")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Parameters {
    entries: IndexMap<String, ParamValue>,
}

impl Parameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.get(name)
    }

    /// Shorthand for a parameter that appears exactly once.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(ParamValue::as_single)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut ParamValue> {
        self.entries.values_mut()
    }

    /// Set `name`, replacing any previous value in place.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.entries.insert(name.into(), value.into())
    }

    /// Remove `name`, keeping the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.entries.shift_remove(name)
    }

    /// Record one more occurrence of `name`.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.entries.entry(name.into()) {
            indexmap::map::Entry::Occupied(mut slot) => slot.get_mut().push(value),
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(ParamValue::Single(value));
            }
        }
    }

    /// Decode a scanned token and record it.
    ///
    /// Keys are always decoded. Values are kept verbatim when the token is
    /// raw or `use_raw` is set; otherwise every `%` is escaped to `%25`
    /// before decoding, so escape sequences in values survive as literal
    /// text.
    pub fn add_token(&mut self, token: Token, use_raw: bool) -> Result<(), UriSyntaxError> {
        let name = form_decode(&token.key)?;
        let value = if token.raw || use_raw {
            token.value
        } else {
            form_decode(&token.value.replace('%', "%25"))?
        };
        self.add(name, value);
        Ok(())
    }

    /// Move every entry whose name starts with `prefix` into a new
    /// collection, with the prefix stripped from its name.
    pub fn extract_properties(&mut self, prefix: &str) -> Self {
        let matching: Vec<String> = self
            .entries
            .keys()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect();

        let mut extracted = Self::new();
        for name in matching {
            if let Some(value) = self.entries.shift_remove(&name) {
                extracted.insert(&name[prefix.len()..], value);
            }
        }
        extracted
    }

    /// Sort entries by name; values of a multi-valued name keep their order.
    pub fn sort_keys(&mut self) {
        self.entries.sort_keys();
    }

    /// Serialize with multi-valued names flattened into repeated pairs.
    #[must_use]
    pub fn to_query_string(&self, separator: &str, encode: bool) -> String {
        query::create_query_string(
            self.entries.iter().flat_map(|(name, value)| {
                value
                    .values()
                    .iter()
                    .map(move |v| (name.as_str(), Some(v.as_str())))
            }),
            separator,
            encode,
        )
    }
}

impl std::fmt::Display for Parameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query_string(AMPERSAND, false))
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Parameters {
    type Item = (String, ParamValue);
    type IntoIter = indexmap::map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Decode `application/x-www-form-urlencoded` text: `+` is a space and
/// `%XX` is a UTF-8 byte. A `%` not followed by two hex digits is an
/// error.
pub fn form_decode(input: &str) -> Result<String, UriSyntaxError> {
    decode(input, true)
}

/// Decode `%XX` escapes only, leaving `+` alone.
pub(crate) fn uri_decode(input: &str) -> Result<String, UriSyntaxError> {
    decode(input, false)
}

fn decode(input: &str, plus_as_space: bool) -> Result<String, UriSyntaxError> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(UriSyntaxError::new(
                    input,
                    format!("Invalid percent-encoding at index {i}"),
                ));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    if plus_as_space && input.contains('+') {
        let spaced = input.replace('+', " ");
        Ok(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
    } else {
        Ok(percent_decode_str(input).decode_utf8_lossy().into_owned())
    }
}
