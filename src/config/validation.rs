//! Endpoint-definition validation with detailed error reporting.
//!
//! The [`validate`] function checks a parsed [`Config`] for structural
//! errors such as missing ids, duplicate ids, URIs without a scheme and
//! queries the engine rejects. Returns a list of [`ValidationError`]
//! values with per-field suggestions.

use super::model::Config;
use crate::error::{UriSyntaxError, ValidationError};
use crate::uri::{self, sanitize_uri};

/// Validate the scheme of an endpoint URI. Returns `Ok(())` or a
/// human-readable error.
pub fn validate_scheme(endpoint_uri: &str) -> Result<(), String> {
    if endpoint_uri.trim().is_empty() {
        return Err("uri cannot be empty".into());
    }
    match uri::support::split_scheme(endpoint_uri) {
        Some(_) => Ok(()),
        None => Err(format!(
            "'{}' has no valid scheme (expected 'scheme:path?options')",
            sanitize_uri(endpoint_uri)
        )),
    }
}

fn suggestion_for(err: &UriSyntaxError) -> Option<String> {
    let reason = err.reason();
    if reason.contains("Trailing &") {
        Some("remove the trailing '&'".into())
    } else if reason.contains("percent-encoding") {
        Some("write '%' as '%25' or wrap the value in RAW(...)".into())
    } else {
        None
    }
}

pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.endpoints.is_empty() {
        errors.push(ValidationError {
            endpoint: "(root)".into(),
            field: "endpoints".into(),
            message: "at least one endpoint must be defined".into(),
            suggestion: None,
        });
        return Err(errors);
    }

    let mut seen_ids = std::collections::HashSet::new();

    for (i, endpoint) in config.endpoints.iter().enumerate() {
        let endpoint_id = if endpoint.id.trim().is_empty() {
            format!("endpoints[{i}]")
        } else {
            endpoint.id.clone()
        };

        if endpoint.id.trim().is_empty() {
            errors.push(ValidationError {
                endpoint: endpoint_id.clone(),
                field: "id".into(),
                message: "id cannot be empty".into(),
                suggestion: None,
            });
        } else if !seen_ids.insert(endpoint.id.as_str()) {
            errors.push(ValidationError {
                endpoint: endpoint_id.clone(),
                field: "id".into(),
                message: "duplicate endpoint id".into(),
                suggestion: None,
            });
        }

        let flattened = endpoint.flattened_uri();
        if let Err(msg) = validate_scheme(&flattened) {
            errors.push(ValidationError {
                endpoint: endpoint_id.clone(),
                field: "uri".into(),
                message: msg,
                suggestion: None,
            });
            continue;
        }

        if let Err(err) = config.parameters_of(endpoint) {
            errors.push(ValidationError {
                endpoint: endpoint_id.clone(),
                field: "uri".into(),
                message: err.reason().to_string(),
                suggestion: suggestion_for(&err),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[must_use]
pub fn format_validation_report(path: &str, config: &Config) -> String {
    let mut lines = vec![format!(
        "  {} endpoints, {} parameters\n",
        config.endpoints.len(),
        config.total_parameters()
    )];

    for endpoint in &config.endpoints {
        let flattened = endpoint.flattened_uri();
        let scheme = uri::support::split_scheme(&flattened).map_or("?", |(s, _)| s);
        let count = config.parameters_of(endpoint).map_or(0, |p| p.len());
        let options = config.options_for(endpoint);

        lines.push(format!(
            "  {}  -> {} ({} parameters)",
            endpoint.id, scheme, count
        ));
        lines.push(format!("    uri: {}", sanitize_uri(&flattened)));
        if options.use_raw || options.lenient {
            lines.push(format!(
                "    options: use_raw={}, lenient={}",
                options.use_raw, options.lenient
            ));
        }
    }

    format!("{} is valid\n{}", path, lines.join("\n"))
}
