use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clipsight_core::ConfigStore;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", (secs / 60.0).floor(), secs % 60.0)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> Self {
        matches!(toggle, Toggle::On)
    }
}

#[derive(Parser)]
#[command(name = "clipsight")]
#[command(about = "Send a video link to your analysis webhook and render the report it returns")]
#[command(version)]
struct Cli {
    /// Path of the stored configuration file
    #[arg(long = "config", global = true, env = "CLIPSIGHT_CONFIG")]
    config_path: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a video link through the configured webhook
    Analyze {
        /// Video URL
        link: String,

        /// Use the built-in sample report instead of calling the webhook
        #[arg(long)]
        sample: bool,

        /// Webhook URL for this run only (not saved)
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Print the normalized record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Normalize a raw webhook payload from a file (or stdin) and print it as JSON
    Normalize {
        /// Payload file; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// Inspect or change the stored settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the current settings
    Show,

    /// Set the webhook URL
    SetEndpoint { url: String },

    /// Turn sample mode on or off
    Sample { state: Toggle },

    /// Restore the default settings
    Reset,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "clipsight=debug,clipsight_core=debug,warn"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = match cli.config_path {
        Some(path) => ConfigStore::at(path),
        None => ConfigStore::default_location(),
    };

    match cli.command {
        Command::Analyze {
            link,
            sample,
            endpoint,
            json,
        } => commands::analyze(&store, &link, sample, endpoint, json).await,
        Command::Normalize { file } => commands::normalize_payload(file.as_deref()),
        Command::Config(ConfigCommand::Show) => commands::show_config(&store),
        Command::Config(ConfigCommand::SetEndpoint { url }) => {
            commands::update_config(&store, |config| config.endpoint_url = url)
        }
        Command::Config(ConfigCommand::Sample { state }) => {
            commands::update_config(&store, |config| config.use_sample_data = state.into())
        }
        Command::Config(ConfigCommand::Reset) => commands::reset_config(&store),
    }
}
