mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tvguide_core::ScheduleConfig;
use tvguide_core::constants::DEFAULT_OUTPUT;

#[derive(Parser)]
#[command(name = "tvguide")]
#[command(about = "Scrape a TV schedule and export it as a tab-separated EPG feed")]
#[command(version)]
struct Cli {
    /// Where to write the feed
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Write the feed to stdout instead of --output
    #[arg(long)]
    stdout: bool,

    /// Config file (defaults to ~/.config/tvguide/config.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Schedule page to scrape
    #[arg(long)]
    url: Option<String>,

    /// Channel name written on every row
    #[arg(long)]
    channel: Option<String>,

    /// Offset of the listed times (e.g. "+05:30")
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn load_config(&self) -> Result<ScheduleConfig> {
        let mut config = ScheduleConfig::load(self.config.as_deref())?;

        if let Some(url) = &self.url {
            config.source_url = url.clone();
        }
        if let Some(channel) = &self.channel {
            config.channel = channel.clone();
        }
        if let Some(offset) = &self.utc_offset {
            config.utc_offset = offset.clone();
        }

        config.validate().context("Invalid command-line override")?;
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info,tvguide_core=info",
        _ => "debug,tvguide_core=debug",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.load_config()?;
    tracing::debug!(
        source = %config.source_url,
        channel = %config.channel,
        offset = %config.utc_offset,
        "loaded config"
    );

    let target = if cli.stdout {
        commands::export::Target::Stdout
    } else {
        commands::export::Target::File(cli.output)
    };

    commands::export::run(&config, target).await
}
