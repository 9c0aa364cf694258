use clap::Parser;
mod cli;
mod commands;
mod logging;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;
    cli.execute()?;
    Ok(())
}
