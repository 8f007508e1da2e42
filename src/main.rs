//! TinyLingo - touch-first flash cards for kids
//!
//! Features:
//! - English and Mandarin word/sentence decks with pinyin
//! - Swipe left/right between cards, tap to hear a card
//! - Swipe up for settings, swipe down back to the lesson menu
//! - Mouse drags behave exactly like touch swipes

mod backend;
mod config;
mod error;
mod input;
mod shell;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "tinylingo")]
#[command(about = "Touch-first flash cards for kids learning English and Mandarin", long_about = None)]
struct Args {
    /// Config file (default: $XDG_CONFIG_HOME/tinylingo/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(short, long)]
    debug: bool,

    /// Window size as WIDTHxHEIGHT
    #[arg(long, default_value = "480x800")]
    size: String,

    /// Turn off swipe up/down (settings and menu become unreachable)
    #[arg(long)]
    disable_up_swipe: bool,
}

fn state_dir() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|h| PathBuf::from(h).join(".local/state")))
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
        .join("tinylingo")
}

fn main() -> Result<()> {
    // Log panics before crashing
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        let crash_log = state_dir().join("crash.log");
        if let Ok(mut f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&crash_log)
        {
            use std::io::Write;
            let _ = writeln!(f, "[{}] PANIC: {}", chrono::Local::now(), panic_info);
        }
    }));

    let log_dir = state_dir();
    std::fs::create_dir_all(&log_dir).ok();

    let args = Args::parse();

    // Config is read before logging is up so its debug flag can pick the filter
    let config_path = args.config.clone().unwrap_or_else(Config::default_path);
    let loaded = Config::load(&config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;
    let config_found = loaded.is_some();
    let mut config = loaded.unwrap_or_default();
    if args.disable_up_swipe {
        config.gestures.enable_up_swipe = false;
    }
    let (width, height) = config::parse_size(&args.size)?;

    // File appender - rotates daily
    let file_appender = rolling::daily(&log_dir, "tinylingo.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // Quiet by default, verbose with --debug or `debug = true`
    let default_filter = if args.debug || config.debug {
        "debug,tinylingo=debug"
    } else {
        "warn,tinylingo=info"
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    info!(log_path = %log_dir.display(), "TinyLingo starting");
    if config_found {
        info!("Loaded config from {}", config_path.display());
    } else {
        info!("No config at {}, using defaults", config_path.display());
    }
    info!(up_swipe = config.gestures.enable_up_swipe, "Gesture config ready");

    backend::winit::run(config, width, height)
}
