//! `uriparam validate`: check an endpoint file for errors.
//!
//! Loads and validates the file, reporting results in either
//! human-readable text or machine-readable JSON format.

use crate::cli::{OutputFormat, ValidateArgs};
use crate::config::{self, validation};
use crate::error::UriParamError;

pub fn execute(args: &ValidateArgs) -> Result<(), UriParamError> {
    let path = &args.file;
    let config = config::load_file(path)?;

    if let Err(errors) = validation::validate(&config) {
        match args.format {
            OutputFormat::Text => {
                eprintln!("\u{2717} {} has {} errors\n", path.display(), errors.len());
                for error in &errors {
                    eprintln!("{error}");
                }
            }
            OutputFormat::Json => {
                let json_errors: Vec<serde_json::Value> = errors
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "endpoint": e.endpoint,
                            "field": e.field,
                            "message": e.message,
                            "suggestion": e.suggestion,
                        })
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::json!({
                        "valid": false,
                        "errors": json_errors,
                    })
                );
            }
        }
        return Err(UriParamError::ConfigValidation { errors });
    }

    match args.format {
        OutputFormat::Text => {
            println!(
                "\u{2713} {}",
                validation::format_validation_report(&path.display().to_string(), &config)
            );
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "valid": true,
                    "endpoints": config.endpoints.len(),
                    "parameters": config.total_parameters(),
                })
            );
        }
    }

    Ok(())
}
