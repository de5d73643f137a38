//! `uriparam sanitize`: print an endpoint URI with secrets masked.

use crate::cli::UriArg;
use crate::error::UriParamError;
use crate::uri;

pub fn execute(args: &UriArg) -> Result<(), UriParamError> {
    println!("{}", uri::sanitize_uri(&args.uri));
    Ok(())
}
