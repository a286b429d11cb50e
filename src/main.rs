use anyhow::Result;
use clap::Parser;
use foryou::{util, App, Config};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

/// A small greeting, one section at a time
#[derive(Debug, Parser)]
#[command(name = "foryou", version, about)]
struct Cli {
    /// Config file to read instead of ~/.foryou/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Data directory (default: ~/.foryou)
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Base URL of the content store
    #[arg(long, value_name = "URL", conflicts_with = "messages_file")]
    content_url: Option<String>,

    /// Read messages from a local JSON file
    #[arg(long, value_name = "PATH")]
    messages_file: Option<PathBuf>,

    /// Never start background audio
    #[arg(long)]
    no_audio: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir);

    // Initialize logging to file (~/.foryou/logs/foryou.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let mut config = match cli.config {
        Some(path) => Config::load_from(&path),
        None => Config::load(),
    };
    if let Some(url) = cli.content_url {
        config = config.with_content_url(url);
    }
    if let Some(path) = cli.messages_file {
        config = config.with_messages_file(path);
    }
    if cli.no_audio {
        config = config.without_audio();
    }

    let mut app = App::from_config(config)?;
    app.run().await
}
