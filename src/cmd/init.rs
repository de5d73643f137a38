//! `uriparam init`: generate a starter endpoint file.
//!
//! Creates a YAML, JSON, or TOML endpoint file with either a minimal
//! or a fully documented template.

use std::path::PathBuf;

use crate::cli::{ConfigFormat, InitArgs};
use crate::error::UriParamError;

pub fn execute(args: &InitArgs) -> Result<(), UriParamError> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("endpoints.{}", args.format.extension())));

    if output.exists() {
        return Err(UriParamError::FileExists { path: output });
    }

    std::fs::write(&output, template(&args.format, args.full))?;
    println!("Created {}", output.display());
    Ok(())
}

#[must_use]
pub const fn template(format: &ConfigFormat, full: bool) -> &'static str {
    match (format, full) {
        (ConfigFormat::Yaml, false) => YAML_MINIMAL,
        (ConfigFormat::Yaml, true) => YAML_FULL,
        (ConfigFormat::Json, false) => JSON_MINIMAL,
        (ConfigFormat::Json, true) => JSON_FULL,
        (ConfigFormat::Toml, false) => TOML_MINIMAL,
        (ConfigFormat::Toml, true) => TOML_FULL,
    }
}

const YAML_MINIMAL: &str = r#"# uriparam endpoint file

endpoints:
  - id: example
    uri: "seda:example?size=100"
"#;

const YAML_FULL: &str = r#"# uriparam endpoint file
#
# All values shown are defaults. Uncomment and modify as needed.

# Parse options applied to every endpoint unless overridden
defaults:
  use_raw: false     # Keep every value exactly as written
  lenient: false     # Accept a trailing '&' in the query

endpoints:
  # Simple: scheme, path and a few options
  - id: example
    uri: "seda:example?size=100"

  # Repeated names become a list, RAW(...) keeps '&' and '+' as written
  # - id: mail
  #   uri: "smtp://mail.example.com?to=a@example.com&to=b@example.com&password=RAW(s3cr&t+x)"
  #   lenient: true    # Override the default for this endpoint

  # Long URIs can span several lines
  # - id: report
  #   uri: |
  #     file:/var/reports
  #     ?include=*.csv
  #     &delay=5000
"#;

const JSON_MINIMAL: &str = r#"{
  "endpoints": [
    { "id": "example", "uri": "seda:example?size=100" }
  ]
}
"#;

const JSON_FULL: &str = r#"{
  "defaults": {
    "use_raw": false,
    "lenient": false
  },
  "endpoints": [
    { "id": "example", "uri": "seda:example?size=100" },
    {
      "id": "mail",
      "uri": "smtp://mail.example.com?to=a@example.com&to=b@example.com&password=RAW(s3cr&t+x)",
      "lenient": true
    }
  ]
}
"#;

const TOML_MINIMAL: &str = r#"# uriparam endpoint file

[[endpoints]]
id = "example"
uri = "seda:example?size=100"
"#;

const TOML_FULL: &str = r#"# uriparam endpoint file
#
# All values shown are defaults. Uncomment and modify as needed.

[defaults]
# use_raw = false     # Keep every value exactly as written
# lenient = false     # Accept a trailing '&' in the query

[[endpoints]]
id = "example"
uri = "seda:example?size=100"

# [[endpoints]]
# id = "mail"
# uri = "smtp://mail.example.com?to=a@example.com&to=b@example.com&password=RAW(s3cr&t+x)"
# lenient = true
"#;
