use anyhow::Result;
use clap::Parser;

use pwncheck::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    pwncheck::output::set_quiet(cli.quiet);
    pwncheck::cli::check::run(cli)
}
