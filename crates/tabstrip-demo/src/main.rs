//! `tabstrip-demo`: interactive playground for the `tabstrip` tab bar.
//!
//! Tabs and layout options come from a TOML config (see [`config`]) and can
//! be overridden on the command line. Clicking a tab label activates it.
//!
//! Logs are written to a file (default `/tmp/tabstrip-demo.log`) so they
//! never interleave with the drawn terminal.

mod app;
mod config;
mod tui;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tabstrip::{TabHeaders, segments_to_line};

use crate::app::App;
use crate::config::Config;

/// Clickable tab header bar in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tabstrip-demo", version, about)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(short = 'c', long, env = "TABSTRIP_CONFIG")]
    config: Option<PathBuf>,

    /// Name of the initially active tab
    #[arg(short = 'a', long)]
    active: Option<String>,

    /// Fixed width of the tab bar in cells
    #[arg(short = 'w', long)]
    width: Option<u16>,

    /// Fixed padding around each label (computed when unset)
    #[arg(short = 'p', long)]
    padding: Option<u16>,

    /// Opacity of inactive tabs, 0.0 to 1.0
    #[arg(short = 'o', long)]
    opacity: Option<f32>,

    /// Draw the bar once below the prompt and exit
    #[arg(long)]
    inline: bool,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Log file path
    #[arg(long, default_value = "/tmp/tabstrip-demo.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Apply CLI overrides on top of the loaded config.
    fn apply(&self, cfg: &mut Config) {
        if let Some(active) = &self.active {
            cfg.layout.active = Some(active.clone());
        }
        if let Some(width) = self.width {
            cfg.layout.width = Some(width);
        }
        if let Some(padding) = self.padding {
            cfg.layout.tab_padding = Some(padding);
        }
        if let Some(opacity) = self.opacity {
            cfg.layout.inactive_opacity = opacity;
        }
    }
}

/// File-based tracing. Returns a guard that must outlive the app so the
/// non-blocking writer flushes.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("tabstrip={log_level},tabstrip_demo={log_level}"))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("tabstrip-demo.log"));

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

/// Draw the bar once into an inline viewport.
fn print_inline(headers: &mut TabHeaders) -> Result<()> {
    let mut terminal = tui::inline(1)?;
    terminal.draw(|frame| {
        let area = frame.area();
        let line = segments_to_line(headers.render(area.width));
        frame.render_widget(line, area);
    })?;
    println!();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tui::install_hooks()?;
    let _log_guard = setup_tracing(&cli);

    let path = cli.config.clone().unwrap_or_else(config::config_path);
    let mut cfg = config::load_config(&path)?;
    cli.apply(&mut cfg);
    info!(config = %path.display(), tabs = cfg.tabs.len(), "starting tabstrip-demo");

    if cli.print_config {
        print!("{}", config::to_toml(&cfg)?);
        return Ok(());
    }

    let mut headers = TabHeaders::new(cfg.tabs, cfg.layout)?;

    if cli.inline {
        return print_inline(&mut headers);
    }

    let mut tui = tui::Tui::new()?;
    App::new(headers).run(&mut tui)
}
