//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands (parse, build, normalize, sanitize, validate, init) and
//! their argument structs. Logging flags are global and have an
//! environment variable equivalent.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "uriparam",
    version,
    about = "Inspect, build and normalize endpoint URIs",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        uriparam parse 'ftp://host/in?password=RAW(a&b)&delay=5'   Show parameters\n  \
        uriparam build delay=5 flag --base seda:work                Build a URI\n  \
        uriparam init                                               Create an endpoint file\n  \
        uriparam validate endpoints.yaml                            Check an endpoint file"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log level
    #[arg(short, long, global = true, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, global = true, conflicts_with = "pretty")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse the query parameters of an endpoint URI
    Parse(ParseArgs),

    /// Build a query string or URI from name=value pairs
    Build(BuildArgs),

    /// Print the normalized form of an endpoint URI
    Normalize(UriArg),

    /// Print an endpoint URI with secrets masked
    Sanitize(UriArg),

    /// Validate an endpoint file
    Validate(ValidateArgs),

    /// Generate a starter endpoint file
    Init(InitArgs),
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        uriparam parse 'jms:queue:a?to=x&to=y'              Repeated keys become lists\n  \
        uriparam parse --query 'a=1&b=RAW(x&y)'             Parse a bare query string\n  \
        uriparam parse --resolve-raw --format json 'x:y?k=RAW(v)'")]
pub struct ParseArgs {
    /// Endpoint URI, or a query string with --query
    pub input: String,

    /// Treat the input as a bare query string (the part after '?')
    #[arg(long)]
    pub query: bool,

    /// Keep every value exactly as written
    #[arg(long)]
    pub raw: bool,

    /// Accept a trailing '&'
    #[arg(long)]
    pub lenient: bool,

    /// Unwrap RAW(...) values after parsing
    #[arg(long)]
    pub resolve_raw: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        uriparam build a=1 b='x y'                    a=1&b=x+y\n  \
        uriparam build verbose --base direct:start    direct:start?verbose\n  \
        uriparam build a=1 b=2 --xml                  a=1&amp;b=2")]
pub struct BuildArgs {
    /// Parameters as NAME=VALUE, or NAME alone for a flag
    pub params: Vec<String>,

    /// Base URI the query is attached to
    #[arg(long)]
    pub base: Option<String>,

    /// Separate parameters with '&amp;' for XML contexts
    #[arg(long)]
    pub xml: bool,

    /// Emit names and values without percent-encoding
    #[arg(long)]
    pub no_encode: bool,
}

#[derive(Args)]
pub struct UriArg {
    /// Endpoint URI
    pub uri: String,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Endpoint file to validate
    #[arg(default_value = "endpoints.yaml")]
    pub file: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        uriparam init                              Minimal endpoint file (yaml)\n  \
        uriparam init --full                       Documented template\n  \
        uriparam init -f toml -o endpoints.toml    TOML format")]
pub struct InitArgs {
    /// Output format
    #[arg(short, long, default_value = "yaml")]
    pub format: ConfigFormat,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include full documentation as comments
    #[arg(long)]
    pub full: bool,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
