//! uriparam is the parameter engine behind endpoint URIs.
//!
//! It splits the query of an endpoint URI such as
//! `ftp://host/in?password=RAW(a&b)&delay=5&to=x&to=y` into an ordered
//! parameter collection, keeps `RAW(...)` values exactly as written, and
//! rebuilds query strings from a collection so URIs survive a round trip.
//!
//! # Architecture
//!
//! - [`uri`] -- The engine: query tokenizer, parameter normalizer, query
//!   serializer, plus URI-level helpers and secret masking.
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (parse, build, normalize,
//!   sanitize, validate, init).
//! - [`config`] -- Endpoint-definition files and their validation.
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `yaml` | YAML endpoint file support _(enabled by default)_ |
//! | `json` | JSON endpoint file support |
//! | `toml` | TOML endpoint file support |
//! | `file-backends` | All file formats |
//! | `full` | All features |

// Public functions document their errors through the error types.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod uri;

pub use error::{UriParamError, UriSyntaxError};
pub use uri::{
    create_query_string, parse_parameters, parse_query, parse_query_with, strip_query,
    ParamValue, Parameters, ParseOptions,
};
