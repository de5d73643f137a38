//! URI-level helpers built on the query engine.
//!
//! These functions work on whole endpoint URIs in either of the two forms
//! components use: authority-based (`scheme://host/path?query`) and
//! scheme-specific (`scheme:path?query`). They operate on the string as
//! written rather than on a strict RFC 3986 parse, since endpoint URIs
//! routinely carry characters a strict parser would reject.

use std::borrow::Cow;
use std::fmt::Display;

use super::params::{uri_decode, ParamValue, Parameters};
use super::query::AMPERSAND;
use super::scanner::{RAW_TOKEN_END, RAW_TOKEN_START};
use super::{parse_query, parse_query_with, ParseOptions};
use crate::error::UriSyntaxError;

/// The URI without its query.
#[must_use]
pub fn strip_query(uri: &str) -> &str {
    uri.split_once('?').map_or(uri, |(before, _)| before)
}

/// Everything after the first `?`, if there is one.
#[must_use]
pub fn extract_query(uri: &str) -> Option<&str> {
    uri.split_once('?').map(|(_, after)| after)
}

/// Split `scheme:rest`, returning `None` when the prefix is not a valid
/// scheme name.
#[must_use]
pub fn split_scheme(uri: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = uri.split_once(':')?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some((scheme, rest))
}

/// The scheme-specific part of an endpoint URI, without a leading `//`
/// and without the query. This is the "remaining" path components receive.
#[must_use]
pub fn extract_remainder_path(uri: &str) -> &str {
    let rest = split_scheme(uri).map_or(uri, |(_, rest)| rest);
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    strip_query(rest)
}

fn prepare_query(uri: &str) -> Option<&str> {
    extract_query(uri).map(|q| q.strip_prefix('?').unwrap_or(q))
}

/// Rewrite every `%` that does not start a `%XX` escape as `%25`, so a
/// literal percent sign survives the decoding pass.
fn escape_lone_percent(query: &str) -> Cow<'_, str> {
    let bytes = query.as_bytes();
    let is_escape = |i: usize| {
        bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    };

    if !(0..bytes.len()).any(|i| bytes[i] == b'%' && !is_escape(i)) {
        return Cow::Borrowed(query);
    }

    let mut out = String::with_capacity(query.len() + 8);
    for (i, ch) in query.char_indices() {
        if ch == '%' && !is_escape(i) {
            out.push_str("%25");
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

/// Parse the query parameters of a full endpoint URI.
///
/// Escapes in the query are decoded once before tokenizing, as a URI
/// parser would when handing out the query component. A `%` that is not
/// part of an escape is kept as written, so `RAW(50%off)` and `50%off`
/// both come through. A URI without a query yields an empty collection.
pub fn parse_parameters(uri: &str) -> Result<Parameters, UriSyntaxError> {
    parse_parameters_with(uri, ParseOptions::default())
}

pub fn parse_parameters_with(
    uri: &str,
    options: ParseOptions,
) -> Result<Parameters, UriSyntaxError> {
    let Some(query) = prepare_query(uri) else {
        return Ok(Parameters::new());
    };
    let decoded = uri_decode(&escape_lone_percent(query))
        .map_err(|e| UriSyntaxError::new(uri, format!("Invalid query: {}", e.reason())))?;
    parse_query_with(&decoded, options)
}

/// Whether `value` is wrapped in `RAW(` ... `)`.
#[must_use]
pub fn is_raw_value(value: &str) -> bool {
    resolve_raw(value).is_some()
}

/// The payload of a `RAW(...)` value.
#[must_use]
pub fn resolve_raw(value: &str) -> Option<&str> {
    value
        .strip_prefix(RAW_TOKEN_START)
        .and_then(|rest| rest.strip_suffix(RAW_TOKEN_END))
}

/// Replace every `RAW(x)` value with `x`, including inside lists.
pub fn resolve_raw_parameter_values(parameters: &mut Parameters) {
    fn resolve_in_place(value: &mut String) {
        if let Some(raw) = resolve_raw(value).map(str::to_string) {
            *value = raw;
        }
    }

    for value in parameters.values_mut() {
        match value {
            ParamValue::Single(s) => resolve_in_place(s),
            ParamValue::Multi(list) => list.iter_mut().for_each(resolve_in_place),
        }
    }
}

/// Replace the query of `uri`, keeping any `#fragment`.
#[must_use]
pub fn create_uri_with_query(uri: &str, query: Option<&str>) -> String {
    let fragment = uri.split_once('#').map(|(_, f)| f);
    let base = uri
        .split_once('?')
        .or_else(|| uri.split_once('#'))
        .map_or(uri, |(before, _)| before);

    let mut s = String::with_capacity(uri.len() + query.map_or(0, str::len) + 1);
    s.push_str(base);
    if let Some(query) = query {
        s.push('?');
        s.push_str(query);
    }
    if let Some(fragment) = fragment {
        if !s.contains('#') {
            s.push('#');
            s.push_str(fragment);
        }
    }
    s
}

/// Rebuild `uri` with `parameters` as its query (encoded). An empty
/// collection drops the query altogether.
#[must_use]
pub fn create_remaining_uri(uri: &str, parameters: &Parameters) -> String {
    let query = parameters.to_query_string(AMPERSAND, true);
    create_uri_with_query(uri, (!query.is_empty()).then_some(query.as_str()))
}

/// Merge `new_parameters` into the query of `uri`. Existing names keep
/// their position and take the new value; unknown names are appended.
pub fn append_parameters_to_uri(
    uri: &str,
    new_parameters: &Parameters,
) -> Result<String, UriSyntaxError> {
    let normalized = normalize_uri(uri)?;
    let mut parameters = parse_parameters(&normalized)?;
    for (name, value) in new_parameters.iter() {
        parameters.insert(name, value.clone());
    }
    Ok(create_remaining_uri(&normalized, &parameters))
}

/// Normalize an endpoint URI so equivalent spellings compare equal.
///
/// The result always uses `scheme://`, and query parameters are sorted
/// by name. The query is only rebuilt when the order actually changes, so
/// an already-normalized URI comes back unchanged.
pub fn normalize_uri(uri: &str) -> Result<String, UriSyntaxError> {
    let uri = text_block_to_single_line(uri);
    let Some((scheme, rest)) = split_scheme(&uri) else {
        return Ok(uri.to_string());
    };
    let rest = rest.strip_prefix("//").unwrap_or(rest);

    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, query.strip_prefix('?').unwrap_or(query)),
        None => (rest, ""),
    };

    if query.is_empty() {
        return Ok(format!("{scheme}://{path}"));
    }

    let mut parameters = parse_query(query)?;
    let sorted = parameters
        .keys()
        .zip(parameters.keys().skip(1))
        .all(|(a, b)| a <= b);

    if parameters.len() <= 1 || sorted {
        return Ok(format!("{scheme}://{path}?{query}"));
    }

    parameters.sort_keys();
    let query = parameters.to_query_string(AMPERSAND, true);
    tracing::trace!(%scheme, %query, "reordered endpoint parameters");
    Ok(format!("{scheme}://{path}?{query}"))
}

/// Join path fragments with single `/` separators.
#[must_use]
pub fn join_paths(paths: &[&str]) -> String {
    let mut joined = String::new();
    let mut added_last = false;

    for (i, &path) in paths.iter().enumerate().rev() {
        if path.is_empty() {
            continue;
        }
        let path = if added_last {
            strip_suffix(path, "/")
        } else {
            path
        };
        added_last = true;

        if path.starts_with('/') || i == 0 {
            joined.insert_str(0, path);
        } else {
            joined.insert_str(0, path);
            joined.insert(0, '/');
        }
    }
    joined
}

/// `key=v1&key=v2&...` for every value.
#[must_use]
pub fn build_multi_value_query<I>(key: &str, values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut sb = String::new();
    for v in values {
        if !sb.is_empty() {
            sb.push('&');
        }
        sb.push_str(key);
        sb.push('=');
        sb.push_str(&v.to_string());
    }
    sb
}

/// Remove whitespace that follows `&` in the query, so endpoint URIs can be
/// written across several lines. Spaces inside values are kept.
#[must_use]
pub fn remove_noise_from_uri(uri: &str) -> Cow<'_, str> {
    let Some((before, after)) = uri.split_once('?') else {
        return Cow::Borrowed(uri);
    };

    let mut changed = String::with_capacity(after.len());
    let mut chars = after.chars().peekable();
    while let Some(ch) = chars.next() {
        changed.push(ch);
        if ch == '&' {
            while chars.next_if(|c| c.is_whitespace()).is_some() {}
        }
    }
    let changed = changed.trim();

    if changed == after {
        Cow::Borrowed(uri)
    } else {
        Cow::Owned(format!("{}?{changed}", before.trim()))
    }
}

/// Collapse a multi-line URI (newline plus indentation) onto one line.
#[must_use]
pub fn text_block_to_single_line(uri: &str) -> Cow<'_, str> {
    if !uri.contains('\n') {
        return Cow::Borrowed(uri);
    }

    let mut out = String::with_capacity(uri.len());
    let mut chars = uri.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\n' {
            while chars.next_if(|c| c.is_whitespace()).is_some() {}
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out.trim().to_string())
}

/// `value` without `prefix`, or `value` unchanged.
#[must_use]
pub fn strip_prefix<'a>(value: &'a str, prefix: &str) -> &'a str {
    value.strip_prefix(prefix).unwrap_or(value)
}

/// `value` without `suffix`, or `value` unchanged.
#[must_use]
pub fn strip_suffix<'a>(value: &'a str, suffix: &str) -> &'a str {
    value.strip_suffix(suffix).unwrap_or(value)
}
