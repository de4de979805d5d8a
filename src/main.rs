//! Install OpenType/TrueType fonts from local files, URLs, and archives.

use anyhow::Result;
use clap::Parser;
use font_install::core;

/// Run the installer with the given CLI arguments.
fn run_app(cli_args: core::cli::CliArgs) -> Result<()> {
    core::app::run(cli_args)
}

fn main() {
    let cli_args = core::cli::CliArgs::parse();
    match run_app(cli_args) {
        Ok(()) => {}
        Err(error) => {
            eprintln!();
            eprintln!("Error: {error:#}");
            eprintln!();
            eprintln!("Try running with --help for usage information.");
            std::process::exit(1);
        }
    }
}
