//! `uriparam parse`: show the parameters of an endpoint URI.

use std::fmt::Write;

use crate::cli::{OutputFormat, ParseArgs};
use crate::error::UriParamError;
use crate::uri::{self, ParseOptions, Parameters};

pub fn execute(args: &ParseArgs) -> Result<(), UriParamError> {
    let options = ParseOptions {
        use_raw: args.raw,
        lenient: args.lenient,
    };

    let mut parameters = if args.query {
        uri::parse_query_with(&args.input, options)?
    } else {
        uri::parse_parameters_with(&args.input, options)?
    };

    if args.resolve_raw {
        uri::resolve_raw_parameter_values(&mut parameters);
    }

    tracing::debug!(
        input = %uri::sanitize_uri(&args.input),
        parameters = parameters.len(),
        "parsed endpoint parameters"
    );

    let path = (!args.query).then(|| uri::strip_query(&args.input));

    match args.format {
        OutputFormat::Text => print!("{}", format_parameters(path, &parameters)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "path": path,
                "count": parameters.len(),
                "parameters": parameters,
            })
        ),
    }
    Ok(())
}

/// One line per parameter, lists shown in brackets.
#[must_use]
pub fn format_parameters(path: Option<&str>, parameters: &Parameters) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    if let Some(path) = path {
        let _ = writeln!(out, "{path}");
    }
    if parameters.is_empty() {
        out.push_str("  (no parameters)\n");
    }
    for (name, value) in parameters.iter() {
        let _ = writeln!(out, "  {name} = {value}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_single_and_multi_values() {
        let params = uri::parse_query("to=a&to=b&size=5").unwrap();
        let text = format_parameters(Some("seda:work"), &params);
        assert_eq!(text, "seda:work\n  to = [a, b]\n  size = 5\n");
    }

    #[test]
    fn empty_collection_says_so() {
        let text = format_parameters(None, &Parameters::new());
        assert_eq!(text, "  (no parameters)\n");
    }
}
