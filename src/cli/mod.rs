//! Command-line interface for keyword-merge
//!
//! Three independent flags select what runs: `--process`, `--update` and
//! `--rankfalcon`. They run in that order; with no flag nothing happens.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::Config;
use crate::pipeline;

/// Merge keyword research files and score keywords
#[derive(Parser, Debug)]
#[command(name = "keyword-merge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Merge all keyword files into the research file
    #[arg(long)]
    pub process: bool,

    /// Recalculate quality and potential after editing the research file by hand
    #[arg(long)]
    pub update: bool,

    /// Create the RankFalcon keyword tracking import file
    #[arg(long)]
    pub rankfalcon: bool,

    /// Folder containing the keyword files
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".", env = "KEYWORD_MERGE_DIR")]
    pub dir: PathBuf,

    /// Path to config file (keyword-merge.toml or .yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of keywords to include in the RankFalcon import
    #[arg(long, value_name = "N")]
    pub cutoff: Option<usize>,

    /// Research file name, relative to --dir
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// RankFalcon import file name, relative to --dir
    #[arg(long, value_name = "FILE")]
    pub rankfalcon_output: Option<String>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    execute(&cli)
}

fn execute(cli: &Cli) -> Result<()> {
    if !(cli.process || cli.update || cli.rankfalcon) {
        tracing::debug!("No action requested");
        return Ok(());
    }

    let config = resolve_config(cli)?;

    if cli.process {
        pipeline::process(&config).context("Failed to process keyword files")?;
        print_processed(&config);
    }

    if cli.update {
        pipeline::update(&config)
            .with_context(|| format!("Failed to update {}", config.output_file))?;
        println!("{} has been updated.", config.output_file);
    }

    if cli.rankfalcon {
        let outcome = pipeline::rank_tracking(&config)
            .context("Failed to create the RankFalcon import file")?;
        if outcome.processed {
            print_processed(&config);
        }
        println!(
            "{} has been created. You are now ready to import your keywords into the \
             RankFalcon keyword tracking tool.",
            config.rank_tracking_output_file
        );
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    if !cli.dir.is_dir() {
        anyhow::bail!("Keyword folder is not a directory: {}", cli.dir.display());
    }
    let config = load_config(&cli.dir, cli.config.as_deref())?;
    let overrides = CliOverrides {
        cutoff: cli.cutoff,
        output_file: cli.output.clone(),
        rank_tracking_output_file: cli.rankfalcon_output.clone(),
    };
    Ok(merge_cli_with_config(config, overrides))
}

fn print_processed(config: &Config) {
    println!("Keyword files processed. {} has been created.", config.output_file);
}
