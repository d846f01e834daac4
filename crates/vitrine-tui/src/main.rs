//! `vitrine` — terminal catalog browser for a second-hand phone
//! storefront.
//!
//! Built on [ratatui](https://ratatui.rs). The product collection is
//! fetched once at startup from the catalog API; filtering, search, and
//! pagination all happen client-side. Ordering opens a WhatsApp deep
//! link.
//!
//! Logs are written to a file (default `/tmp/vitrine.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and
//! app launch.

mod action;
mod app;
mod carousel;
mod component;
mod event;
mod fetch;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use vitrine_api::{CatalogClient, TransportConfig};

use crate::app::App;

/// Terminal catalog browser for the Vitrine storefront.
#[derive(Parser, Debug)]
#[command(name = "vitrine", version, about)]
struct Cli {
    /// Catalog API base URL (e.g., https://shop.example/api)
    #[arg(short = 'u', long, env = "VITRINE_URL")]
    url: Option<String>,

    /// WhatsApp number for order deep links
    #[arg(short = 'w', long, env = "VITRINE_WHATSAPP")]
    whatsapp: Option<String>,

    /// Log file path (defaults to /tmp/vitrine.log)
    #[arg(long, default_value = "/tmp/vitrine.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that
/// would corrupt the TUI output. Returns a guard that must be held for
/// the lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "vitrine={log_level},vitrine_api={log_level},vitrine_core={log_level}"
        ))
    });

    let log_dir = cli.log_file.parent().unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("vitrine.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    // CLI flags > VITRINE_* env > config file > defaults
    let config = vitrine_config::load_config()
        .map_err(|e| eyre!("failed to load configuration: {e}"))?;
    let base_url = cli.url.clone().unwrap_or(config.api.base_url);
    let whatsapp = cli.whatsapp.clone().unwrap_or(config.order.whatsapp);

    info!(url = %base_url, "starting vitrine");

    let transport = TransportConfig {
        timeout: Duration::from_secs(config.api.timeout),
        ..TransportConfig::default()
    };
    let client = CatalogClient::new(&base_url, &transport)
        .map_err(|e| eyre!("invalid catalog URL {base_url:?}: {e}"))?;

    let mut app = App::new(Arc::new(client), whatsapp);
    app.run().await?;

    Ok(())
}
