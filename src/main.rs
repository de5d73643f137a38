use clap::Parser;

fn main() {
    let cli = uriparam::cli::Cli::parse();
    if let Err(e) = uriparam::cmd::dispatch(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
