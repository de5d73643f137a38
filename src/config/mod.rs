//! Endpoint-definition files.
//!
//! An endpoint file lists named endpoint URIs together with the parse
//! options each one should be read with. [`load_file`] reads and
//! deserializes a file by extension, [`parse_config_str`] does the same
//! for an in-memory string. Submodules hold the data model and the
//! validation rules.

pub mod model;
pub mod validation;

use std::path::Path;

use crate::error::UriParamError;
use model::Config;

/// Parse an endpoint file body based on file extension.
pub fn parse_config_str(
    ext: &str,
    content: &str,
    path_display: &str,
) -> Result<Config, UriParamError> {
    match ext {
        #[cfg(feature = "yaml")]
        "yaml" | "yml" => serde_yml::from_str(content).map_err(|e| UriParamError::ConfigParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        #[cfg(feature = "json")]
        "json" => serde_json::from_str(content).map_err(|e| UriParamError::ConfigParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        #[cfg(feature = "toml")]
        "toml" => toml::from_str(content).map_err(|e| UriParamError::ConfigParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        other => Err(UriParamError::UnsupportedFormat(other.to_string())),
    }
}

/// Read and deserialize an endpoint file. Does not validate it.
pub fn load_file(path: &Path) -> Result<Config, UriParamError> {
    if !path.exists() {
        return Err(UriParamError::ConfigFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let config = parse_config_str(ext, &content, &path.display().to_string())?;

    tracing::debug!(
        path = %path.display(),
        endpoints = config.endpoints.len(),
        "endpoint file loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "yaml")]
    #[test]
    fn parses_yaml_with_defaults() {
        let yaml = r#"
defaults:
  lenient: true
endpoints:
  - id: orders
    uri: "jms:queue:orders?concurrentConsumers=5"
  - id: ftp
    uri: "ftp://host/in?password=RAW(a&b)"
    use_raw: true
"#;
        let config = parse_config_str("yaml", yaml, "test.yaml").unwrap();
        assert!(config.defaults.lenient);
        assert!(!config.defaults.use_raw);
        assert_eq!(config.endpoints.len(), 2);
        assert_eq!(config.endpoints[1].use_raw, Some(true));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn rejects_unknown_fields() {
        let yaml = "endpoints:\n  - id: a\n    uri: direct:a\n    timeout: 5\n";
        let err = parse_config_str("yaml", yaml, "test.yaml").unwrap_err();
        assert!(matches!(err, UriParamError::ConfigParse { .. }));
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let err = parse_config_str("ini", "", "test.ini").unwrap_err();
        assert!(matches!(err, UriParamError::UnsupportedFormat(ref ext) if ext == "ini"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_file(Path::new("does/not/exist.yaml")).unwrap_err();
        assert!(matches!(err, UriParamError::ConfigFileNotFound { .. }));
    }
}
