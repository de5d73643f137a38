//! `uriparam normalize`: print the canonical form of an endpoint URI.

use crate::cli::UriArg;
use crate::error::UriParamError;
use crate::uri;

pub fn execute(args: &UriArg) -> Result<(), UriParamError> {
    let normalized = uri::normalize_uri(&args.uri)?;
    tracing::debug!(uri = %uri::sanitize_uri(&normalized), "normalized endpoint uri");
    println!("{normalized}");
    Ok(())
}
