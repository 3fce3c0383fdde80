//! HexPaint - terminal hex grid painter
//!
//! Paints a hexagonal grid with colors picked from a generative palette and a
//! swatch board, and exports the grid as PNG.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hexpaint::config::Config;
use hexpaint::constants::{APP_BINARY_NAME, APP_NAME};
use hexpaint::controller::InteractionController;
use hexpaint::export;
use hexpaint::geometry::HexGeometry;
use hexpaint::grid::HexGridStore;
use hexpaint::models::RgbColor;
use hexpaint::tui;

/// HexPaint - paint hexagonal grids in the terminal and export them as PNG
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Hexagon edge length in canvas pixels
    #[arg(short, long, value_name = "N")]
    size: Option<i32>,

    /// Virtual canvas width in pixels, tool panel included
    #[arg(long, value_name = "W")]
    screen_width: Option<i32>,

    /// Virtual canvas height in pixels
    #[arg(long, value_name = "H")]
    screen_height: Option<i32>,

    /// Color of unpainted hexes (#RRGGBB)
    #[arg(long, value_name = "COLOR", value_parser = RgbColor::from_hex)]
    grid_color: Option<RgbColor>,

    /// Directory for exported hexgrid_NNN.png files
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Config file to use instead of the platform default
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Export the empty grid as PNG and exit without starting the UI
    #[arg(long)]
    export_blank: bool,
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Config::load_from(path)?
            }
            None => Config::load()?,
        };

        if let Some(size) = self.size {
            config.canvas.side_len = size;
        }
        if let Some(width) = self.screen_width {
            config.canvas.width = width;
        }
        if let Some(height) = self.screen_height {
            config.canvas.height = height;
        }
        if let Some(color) = self.grid_color {
            config.colors.grid_default = color;
        }
        if let Some(dir) = &self.output_dir {
            config.export.output_dir.clone_from(dir);
        }

        config.validate().with_context(|| {
            format!("Invalid settings; run `{APP_BINARY_NAME} --help` for the options")
        })?;
        Ok(config)
    }
}

/// Sends tracing output to stderr.
fn init_stderr_logging(filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Sends tracing output to the log file, since the terminal UI owns stdout.
fn init_file_logging(filter: &str) -> Result<PathBuf> {
    let log_path = Config::log_file_path()?;
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).context(format!(
            "Failed to create log directory: {}",
            parent.display()
        ))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(&log_path)
        .context(format!("Failed to open log file: {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(log_path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = if cli.verbose { "debug" } else { "info" };

    if cli.export_blank {
        init_stderr_logging(filter);
    } else {
        let log_path = init_file_logging(filter)?;
        info!("{} v{} logging to {}", APP_NAME, env!("CARGO_PKG_VERSION"), log_path.display());
    }

    let config = cli.resolve_config()?;
    let layout = config.canvas_layout()?;
    let geometry = HexGeometry::from_config(layout.geometry());
    info!(
        "Canvas {}x{}, hex side {}, grid radius {}",
        layout.width(),
        layout.height(),
        geometry.config().side,
        geometry.radius()
    );
    let grid = HexGridStore::new(geometry, config.colors.grid_default);

    if cli.export_blank {
        let path = export::export_png(&grid, layout.grid_area(), &config.export.output_dir)?;
        println!("{}", path.display());
        return Ok(());
    }

    let controller = InteractionController::new(layout, grid);
    let mut app_state = tui::AppState::new(controller, config.export.output_dir);

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut app_state, &mut terminal);
    tui::restore_terminal(terminal)?;

    result
}
