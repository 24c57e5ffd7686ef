//! Storefront - browse a sample catalog from the terminal

use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, EnvFilter};

use storefront_tui::app::{App, EventHandler, StorefrontConfig};

/// Terminal storefront
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append logs to this file; logs are discarded otherwise
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Override how long the splash screen stays up, in milliseconds
    #[arg(long, value_name = "MS")]
    splash_ms: Option<u64>,

    /// Use the high-contrast palette
    #[arg(long)]
    high_contrast: bool,

    /// Save the effective configuration and exit
    #[arg(long)]
    write_config: bool,
}

impl Args {
    fn load_config(&self) -> StorefrontConfig {
        let mut config = match &self.config {
            Some(path) => StorefrontConfig::load_from(path),
            None => StorefrontConfig::load(),
        };
        if let Some(ms) = self.splash_ms {
            config.splash_delay_ms = ms;
        }
        if self.high_contrast {
            config.high_contrast = true;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.load_config();

    if args.write_config {
        let path = match &args.config {
            Some(path) => {
                config.save_to(path)?;
                path.clone()
            }
            None => config.save()?,
        };
        println!("Wrote {}", path.display());
        return Ok(());
    }

    init_logging(args.log_file.as_deref(), &config.log_filter)?;

    // Set up panic hook to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_app(config).await;

    if let Err(e) = &result {
        tracing::error!("Application error: {:#}", e);
    }

    result
}

/// Install the global subscriber
///
/// Output never goes to the terminal the UI is drawing on.
fn init_logging(log_file: Option<&std::path::Path>, default_filter: &str) -> Result<()> {
    let writer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::sink),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("storefront_tui=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_ansi(false).with_writer(writer))
        .with(filter)
        .init();

    Ok(())
}

/// Main application runner
async fn run_app(config: StorefrontConfig) -> Result<()> {
    tracing::info!(?config, "starting storefront");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::spawn(config.tick_rate());
    let mut app = App::new(config, events.sender());
    let result = app.run(&mut terminal, &mut events).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(items = app.cart.item_count(), "storefront closed");
    result
}
