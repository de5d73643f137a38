//! Serde data structures for endpoint-definition files.
//!
//! Contains [`Config`] (the root), [`Defaults`] and [`Endpoint`]. All
//! types derive `Serialize` and `Deserialize` with `deny_unknown_fields`
//! for strict parsing.

use serde::{Deserialize, Serialize};

use crate::error::UriSyntaxError;
use crate::uri::{self, ParseOptions, Parameters};

fn is_false(v: &bool) -> bool {
    !*v
}

fn is_default_defaults(v: &Defaults) -> bool {
    !v.use_raw && !v.lenient
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "is_default_defaults")]
    pub defaults: Defaults,

    pub endpoints: Vec<Endpoint>,
}

impl Config {
    /// Parse options for `endpoint`, with its own overrides applied.
    #[must_use]
    pub fn options_for(&self, endpoint: &Endpoint) -> ParseOptions {
        ParseOptions {
            use_raw: endpoint.use_raw.unwrap_or(self.defaults.use_raw),
            lenient: endpoint.lenient.unwrap_or(self.defaults.lenient),
        }
    }

    /// Parse the query of `endpoint` the way the runtime would.
    pub fn parameters_of(&self, endpoint: &Endpoint) -> Result<Parameters, UriSyntaxError> {
        uri::parse_parameters_with(&endpoint.flattened_uri(), self.options_for(endpoint))
    }

    /// Total number of distinct parameter names across all endpoints that
    /// parse successfully.
    #[must_use]
    pub fn total_parameters(&self) -> usize {
        self.endpoints
            .iter()
            .filter_map(|e| self.parameters_of(e).ok())
            .map(|p| p.len())
            .sum()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    #[serde(default, skip_serializing_if = "is_false")]
    pub use_raw: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub lenient: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Endpoint {
    pub id: String,

    pub uri: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_raw: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lenient: Option<bool>,
}

impl Endpoint {
    /// The URI with multi-line formatting removed.
    #[must_use]
    pub fn flattened_uri(&self) -> String {
        let single = uri::text_block_to_single_line(&self.uri);
        uri::remove_noise_from_uri(&single).into_owned()
    }
}
