use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use folio_cli::catalog;
use folio_cli::{PlayEnd, PlayOptions, Showcase, play};
use folio_config::{ConfigLoad, ConfigLoader};
use folio_model::SkillCategory;
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
#[command(about = "Portfolio showcase: carousels, projects and skills")]
struct Cli {
    /// Configuration file (TOML or JSON); overrides FOLIO_CONFIG_PATH
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a carousel in real time, reading commands from stdin
    /// (next, prev, goto N, hover, leave, resize PX, swipe FROM TO,
    /// wait 2s, quit)
    Play {
        #[arg(value_enum)]
        showcase: Showcase,
        /// Viewport width in pixels
        #[arg(long, default_value_t = 1280)]
        width: u32,
        /// Stop after this long, e.g. 30s or 2m
        #[arg(long, value_parser = humantime::parse_duration)]
        duration: Option<Duration>,
        /// Print each state change as a JSON snapshot
        #[arg(long)]
        json: bool,
    },
    /// List showcase projects
    Projects {
        /// Only featured projects
        #[arg(long)]
        featured: bool,
        #[arg(long)]
        json: bool,
    },
    /// Show one project by id
    Project {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// List skills grouped by category
    Skills {
        #[arg(long)]
        category: Option<SkillCategory>,
    },
    /// Print the effective carousel configuration
    Config {
        #[arg(long, value_enum, default_value = "toml")]
        format: ConfigFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConfigFormat {
    Toml,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,folio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Play {
            showcase,
            width,
            duration,
            json,
        } => {
            let load = load_config(cli.config)?;
            let options = PlayOptions {
                showcase,
                width,
                duration,
                json,
            };
            let input = BufReader::new(tokio::io::stdin());
            let shutdown = async {
                if let Err(err) = tokio::signal::ctrl_c().await {
                    warn!("failed to listen for Ctrl-C: {err}");
                    std::future::pending::<()>().await;
                }
            };
            let end = play(
                options,
                showcase.config(&load.config),
                input,
                &mut out,
                shutdown,
            )
            .await?;
            if end == PlayEnd::Interrupted {
                info!("interrupted");
            }
        }
        Command::Projects { featured, json } => {
            catalog::list_projects(&mut out, featured, json)?;
        }
        Command::Project { id, json } => {
            catalog::show_project(&mut out, &id, json)?;
        }
        Command::Skills { category } => {
            catalog::list_skills(&mut out, category)?;
        }
        Command::Config { format } => {
            let load = load_config(cli.config)?;
            let rendered = match format {
                ConfigFormat::Toml => {
                    writeln!(out, "# source: {}", load.source)?;
                    load.config.to_toml_string()?
                }
                ConfigFormat::Json => load.config.to_json_string()?,
            };
            writeln!(out, "{}", rendered.trim_end())?;
        }
    }

    out.flush()?;
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ConfigLoad> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = path {
        loader = loader.with_config_path(path);
    }
    let load = loader.load().context("failed to load configuration")?;
    info!(source = %load.source, "configuration loaded");
    Ok(load)
}
