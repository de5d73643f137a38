//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function sets up logging and routes the parsed CLI to
//! the matching subcommand handler. Each handler lives in its own
//! submodule and prints its result to stdout.

pub mod build;
pub mod init;
pub mod normalize;
pub mod parse;
pub mod sanitize;
pub mod validate;

use crate::cli::{Cli, Commands};
use crate::error::UriParamError;
use crate::logging;

pub fn dispatch(cli: Cli) -> Result<(), UriParamError> {
    let format = logging::resolve_format(cli.pretty, cli.json);
    logging::init(&cli.log_level, format);

    match cli.command {
        Some(Commands::Parse(ref args)) => parse::execute(args),
        Some(Commands::Build(ref args)) => build::execute(args),
        Some(Commands::Normalize(ref args)) => normalize::execute(args),
        Some(Commands::Sanitize(ref args)) => sanitize::execute(args),
        Some(Commands::Validate(ref args)) => validate::execute(args),
        Some(Commands::Init(ref args)) => init::execute(args),
        None => {
            print_welcome();
            Ok(())
        }
    }
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  uriparam v{version}: endpoint URI parameter engine\n\n  \
         No command provided. To get started:\n\n    \
         uriparam parse 'seda:work?size=5&to=a&to=b'   Show the parameters of a URI\n    \
         uriparam normalize 'seda:work?b=2&a=1'        Sort parameters into canonical form\n    \
         uriparam init                                 Generate a starter endpoint file\n    \
         uriparam --help                               See all commands and options\n"
    );
}
