use clap::Parser;
use miette::Result;
use grimoire::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => grimoire::cli::convert::run(args)?,
        Commands::Check(args) => grimoire::cli::check::run(args)?,
        Commands::Completions(args) => grimoire::cli::completions::run(args)?,
    }

    Ok(())
}
