//! The endpoint-URI parameter engine.
//!
//! A query string flows through three stages:
//!
//! - [`scanner`] splits it into `(key, value, raw)` tokens, keeping `&`
//!   and `=` inside `RAW(...)` values and dropping `{{placeholder}}` keys.
//! - [`params`] decodes the tokens into an ordered [`Parameters`]
//!   collection, promoting repeated names to lists.
//! - [`query`] turns a collection back into a query string, leaving raw
//!   values untouched so they survive a round trip.
//!
//! [`support`] and [`sanitize`] build URI-level operations on top. All
//! functions are pure and hold no shared state.

pub mod params;
pub mod query;
pub mod sanitize;
pub mod scanner;
pub mod support;

pub use params::{ParamValue, Parameters};
pub use query::{create_query_string, AMPERSAND, XML_AMPERSAND};
pub use sanitize::{sanitize_parameters, sanitize_path, sanitize_uri};
pub use support::{
    append_parameters_to_uri, build_multi_value_query, create_remaining_uri,
    create_uri_with_query, extract_query, extract_remainder_path, is_raw_value, join_paths,
    normalize_uri, parse_parameters, parse_parameters_with, remove_noise_from_uri, resolve_raw,
    resolve_raw_parameter_values, strip_prefix, strip_query, strip_suffix,
    text_block_to_single_line,
};

use crate::error::UriSyntaxError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Keep every value exactly as written, as if all were `RAW(...)`.
    pub use_raw: bool,
    /// Ignore a trailing `&` instead of rejecting the query.
    pub lenient: bool,
}

/// Parse a raw query string (the part after `?`).
pub fn parse_query(query: &str) -> Result<Parameters, UriSyntaxError> {
    parse_query_with(query, ParseOptions::default())
}

pub fn parse_query_with(query: &str, options: ParseOptions) -> Result<Parameters, UriSyntaxError> {
    let mut parameters = Parameters::new();
    for token in scanner::tokenize(query, options.lenient)? {
        parameters.add_token(token, options.use_raw)?;
    }
    Ok(parameters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_query() {
        let params = parse_query("password=RAW(++?w0rd)&serviceName=some+chat&to=a&to=b").unwrap();
        assert_eq!(params.get_str("password"), Some("RAW(++?w0rd)"));
        assert_eq!(params.get_str("serviceName"), Some("some chat"));
        assert_eq!(params.get("to").unwrap().values(), ["a", "b"]);
    }

    #[test]
    fn use_raw_skips_decoding_for_every_value() {
        let options = ParseOptions {
            use_raw: true,
            ..ParseOptions::default()
        };
        let params = parse_query_with("a=x+y%21", options).unwrap();
        assert_eq!(params.get_str("a"), Some("x+y%21"));
    }

    #[test]
    fn lenient_option_reaches_scanner() {
        let options = ParseOptions {
            lenient: true,
            ..ParseOptions::default()
        };
        let params = parse_query_with("password=secret&serviceName=somechat&", options).unwrap();
        assert_eq!(params.len(), 2);
        assert!(parse_query("password=secret&serviceName=somechat&").is_err());
    }
}
