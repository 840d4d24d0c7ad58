use anyhow::Context;
use clap::Parser;
use greeting::utils::logger;
use greeting::{get_message, CliConfig};
use std::io::Write;

fn print_greeting() -> greeting::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", get_message())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = print_greeting() {
        tracing::error!("Failed to write greeting: {}", e);
        return Err(e).context("writing greeting to stdout");
    }

    Ok(())
}
