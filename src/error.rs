//! Unified error types for uriparam.
//!
//! [`UriSyntaxError`] is the single failure kind of the parsing engine:
//! it carries the offending input and a human-readable reason.
//! [`UriParamError`] is the crate-level error used by the command-line
//! surface, and [`ValidationError`] describes one problem found in an
//! endpoint-definition file. Messages include hints to guide the user
//! toward a fix.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}: {input}")]
pub struct UriSyntaxError {
    input: String,
    reason: String,
}

impl UriSyntaxError {
    #[must_use]
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// The raw string that failed to parse or encode.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub endpoint: String,
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "  endpoint {}: {} - {}",
            self.endpoint, self.field, self.message
        )?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " ({suggestion})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

fn format_errors(errors: &[ValidationError]) -> String {
    use std::fmt::Write;
    let mut buf = String::new();
    for (i, e) in errors.iter().enumerate() {
        if i > 0 {
            buf.push('\n');
        }
        // writing to a String cannot fail
        let _ = write!(buf, "{e}");
    }
    buf
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum UriParamError {
    #[error("Invalid URI syntax: {0}")]
    Syntax(#[from] UriSyntaxError),

    #[error("Endpoint file not found: {}", path.display())]
    ConfigFileNotFound { path: PathBuf },

    #[error("Endpoint file parse error in {path}:\n  {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Endpoint file validation failed:\n{}", format_errors(.errors))]
    ConfigValidation { errors: Vec<ValidationError> },

    #[error("Unsupported endpoint file format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument { argument: String, message: String },

    #[error("File already exists: {}", path.display())]
    FileExists { path: PathBuf },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_display_names_reason_and_input() {
        let err = UriSyntaxError::new("a=1&", "Trailing & marker found");
        assert_eq!(err.to_string(), "Trailing & marker found: a=1&");
        assert_eq!(err.input(), "a=1&");
        assert_eq!(err.reason(), "Trailing & marker found");
    }

    #[test]
    fn validation_errors_are_listed_one_per_line() {
        let err = UriParamError::ConfigValidation {
            errors: vec![
                ValidationError {
                    endpoint: "orders".into(),
                    field: "uri".into(),
                    message: "uri cannot be empty".into(),
                    suggestion: None,
                },
                ValidationError {
                    endpoint: "audit".into(),
                    field: "uri".into(),
                    message: "trailing '&'".into(),
                    suggestion: Some("remove the trailing '&'".into()),
                },
            ],
        };
        let text = err.to_string();
        assert!(text.contains("endpoint orders: uri - uri cannot be empty"));
        assert!(text.contains("(remove the trailing '&')"));
        assert_eq!(text.lines().count(), 3);
    }
}
