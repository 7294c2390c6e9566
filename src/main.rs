//! Waterwatch CLI
//!
//! Terminal renderer for the Delhi Water Bodies Monitor:
//! - Dashboard summary with critical alerts
//! - Risk assessment report (table, JSON, CSV)
//! - Map marker layer as JSON
//! - Dataset and config file tooling

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use waterwatch::terminal::{self, RenderResult, ReportFormat, SummaryFormat};
use waterwatch::{generate_default_config, Config, Dataset};

#[derive(Parser)]
#[command(name = "waterwatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Delhi water bodies risk monitor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dataset file to use instead of the built-in water bodies
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Config file (default: search standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show critical alerts, fixed figures and the status chart
    Summary {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Text)]
        format: SummaryFormat,
    },

    /// Print the risk assessment report
    Report {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,
        /// Disable colored risk labels
        #[arg(long)]
        no_color: bool,
    },

    /// Print the map layer (base map and markers) as JSON
    Markers,

    /// Validate a dataset file
    Validate {
        /// Path to a water body TOML file
        path: PathBuf,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path).with_context(|| format!("loading {path:?}"))?,
        None => Config::load_default(),
    };
    init_logging(&config);

    tracing::debug!("Waterwatch v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Summary { format } => {
            let dataset = load_dataset(cli.data.as_deref())?;
            let out = std::io::stdout().lock();
            ignore_broken_pipe(terminal::write_summary(dataset.bodies(), &config, format, out))?;
        }

        Commands::Report { format, no_color } => {
            let dataset = load_dataset(cli.data.as_deref())?;
            let color = !no_color && std::io::stdout().is_terminal();
            let out = std::io::stdout().lock();
            ignore_broken_pipe(terminal::write_report(dataset.bodies(), format, color, out))?;
        }

        Commands::Markers => {
            let dataset = load_dataset(cli.data.as_deref())?;
            let out = std::io::stdout().lock();
            ignore_broken_pipe(terminal::write_markers(dataset.bodies(), &config.map, out))?;
        }

        Commands::Validate { path } => {
            let dataset = Dataset::load(&path).with_context(|| format!("loading {path:?}"))?;
            println!("{:?}: {} water bodies, all valid", path, dataset.len());
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {path:?}"))?;
                    tracing::info!("Wrote default config to {:?}", path);
                }
                None => print!("{content}"),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));
    let json = config.logging.format == "json";

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn load_dataset(path: Option<&Path>) -> anyhow::Result<Dataset> {
    match path {
        Some(path) => Dataset::load(path).with_context(|| format!("loading {path:?}")),
        None => Ok(Dataset::seed().clone()),
    }
}

/// A closed stdout (`waterwatch report | head`) is a normal exit
fn ignore_broken_pipe(result: RenderResult<()>) -> anyhow::Result<()> {
    match result {
        Err(e) if e.is_broken_pipe() => Ok(()),
        other => Ok(other?),
    }
}
