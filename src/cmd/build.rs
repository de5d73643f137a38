//! `uriparam build`: assemble a query string or URI from arguments.

use crate::cli::BuildArgs;
use crate::error::UriParamError;
use crate::uri::{create_query_string, create_uri_with_query, AMPERSAND, XML_AMPERSAND};

/// Split a `NAME=VALUE` argument. A bare `NAME` is a flag with no value.
pub fn parse_pair(arg: &str) -> Result<(String, Option<String>), UriParamError> {
    let (name, value) = match arg.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (arg, None),
    };
    if name.is_empty() {
        return Err(UriParamError::InvalidArgument {
            argument: arg.to_string(),
            message: "parameter name cannot be empty".into(),
        });
    }
    Ok((name.to_string(), value.map(str::to_string)))
}

/// Build the output for `args` without printing it.
pub fn render(args: &BuildArgs) -> Result<String, UriParamError> {
    let pairs = args
        .params
        .iter()
        .map(|p| parse_pair(p))
        .collect::<Result<Vec<_>, _>>()?;

    let separator = if args.xml { XML_AMPERSAND } else { AMPERSAND };
    let query = create_query_string(
        pairs.iter().map(|(name, value)| (name, value.as_deref())),
        separator,
        !args.no_encode,
    );

    Ok(match args.base {
        Some(ref base) => {
            create_uri_with_query(base, (!query.is_empty()).then_some(query.as_str()))
        }
        None => query,
    })
}

pub fn execute(args: &BuildArgs) -> Result<(), UriParamError> {
    println!("{}", render(args)?);
    Ok(())
}
