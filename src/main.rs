mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::Cli;
use colored::*;
use log::debug;
use std::io::{self, Write};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let path = match &cli.path {
        Some(path) => path,
        None => bail!("path is required"),
    };

    debug!("Measuring {} with {:?}", path.display(), cli.policy());
    let size = path_size::get_path_size(path, cli.recursive, cli.human, cli.all)?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}\t{}", size, path.display())
        .and_then(|_| stdout.flush())
        .context("failed to write to stdout")?;
    Ok(())
}
