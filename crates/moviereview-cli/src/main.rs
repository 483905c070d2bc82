use clap::{ArgAction, Parser};
use color_eyre::eyre::{eyre, Context};
use moviereview_config::{Config, PathManager};
use std::path::PathBuf;

mod demo;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "moviereview")]
#[command(about = "Write, edit and rate movie reviews (demonstration run)")]
#[command(version)]
struct Cli {
    /// Path to the configuration file (defaults to the platform config dir)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => PathManager::default().config_file(),
    };
    let config = Config::load_or_default(&config_path)
        .map_err(|e| eyre!("{}", e))
        .wrap_err_with(|| format!("Failed to load config from {}", config_path.display()))?;

    logging::init_logging(cli.verbose, cli.quiet, &config.logging)
        .map_err(|e| eyre!("{}", e))
        .wrap_err("Failed to initialize logging")?;

    config
        .validate()
        .map_err(|e| eyre!("{}", e))
        .wrap_err("Invalid configuration")?;

    let output = output::Output::new(cli.output, cli.quiet);

    demo::run_demo(&config.demo, &output)
}
