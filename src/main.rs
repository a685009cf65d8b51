use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use tokio::sync::Mutex;
use tracing::{info, warn};

use fixture_board::config::Config;
use fixture_board::constants::{DEFAULT_CONFIG_PATH, REMOTE_EMPTY_HINT};
use fixture_board::render::Renderer;
use fixture_board::server::{self, AppState, Board, StaticBoard};
use fixture_board::sources::{upcoming_only, RemoteSource, StaticSource};
use fixture_board::store::InMemoryMatchStore;
use fixture_board::{logging, metrics};

#[derive(Parser)]
#[command(name = "fixture_board")]
#[command(about = "Renders upcoming sporting fixtures as category cards")]
#[command(version)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SourceKind {
    /// Matches listed in the fixtures file
    Static,
    /// Upcoming events from the configured league feeds
    Remote,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page once and write it to disk
    Render {
        #[arg(long, value_enum, default_value = "static")]
        source: SourceKind,
        /// Output file; defaults to render.output from the config
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the canonical match records as JSON
    List {
        #[arg(long, value_enum, default_value = "static")]
        source: SourceKind,
    },
    /// Serve the page over HTTP
    Serve {
        #[arg(long, value_enum, default_value = "static")]
        source: SourceKind,
        /// Port to listen on; defaults to server.port from the config
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn static_board(config: &Config) -> StaticBoard {
    let mut board = StaticSource::new(
        InMemoryMatchStore::new(),
        config.render.target(),
        Renderer::from_config(&config.render),
    );
    board.render();

    let fixtures = Path::new(&config.render.fixtures);
    if fixtures.exists() {
        if let Err(e) = board.seed_from_file(fixtures) {
            warn!("Could not load fixtures from {}: {}", fixtures.display(), e);
        }
    } else {
        warn!("No fixtures file at {}, rendering an empty board", fixtures.display());
    }
    board
}

fn remote_renderer(config: &Config) -> Renderer {
    Renderer::from_config(&config.render).with_empty_hint(REMOTE_EMPTY_HINT)
}

async fn render_page(config: &Config, source: SourceKind) -> Result<String> {
    let page = match source {
        SourceKind::Static => static_board(config).target().page()?,
        SourceKind::Remote => {
            let remote = RemoteSource::from_config(&config.feeds)?;
            let mut target = config.render.target();
            let shown = remote
                .refresh(&remote_renderer(config), &mut target, Utc::now())
                .await;
            info!("Rendering {} upcoming matches", shown.len());
            target.page()?
        }
    };
    Ok(page)
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    logging::init_logging(&config.logging);

    match cli.command {
        Commands::Render { source, out } => {
            let html = render_page(&config, source).await?;
            let out = out.unwrap_or_else(|| PathBuf::from(&config.render.output));
            write_page(&out, &html)?;
            println!("✅ Wrote {}", out.display());
        }
        Commands::List { source } => {
            let matches = match source {
                SourceKind::Static => static_board(&config).matches().to_vec(),
                SourceKind::Remote => {
                    let remote = RemoteSource::from_config(&config.feeds)?;
                    upcoming_only(remote.fetch_matches().await, Utc::now())
                }
            };
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        Commands::Serve { source, port } => {
            metrics::init_metrics();
            let board = match source {
                SourceKind::Static => Board::Static(Mutex::new(static_board(&config))),
                SourceKind::Remote => Board::Remote {
                    source: RemoteSource::from_config(&config.feeds)?,
                    renderer: remote_renderer(&config),
                    template: config.render.target(),
                },
            };
            let port = port.unwrap_or(config.server.port);
            server::start_server(AppState::new(board), port).await?;
        }
    }
    Ok(())
}
