//! oxhex entrypoint.
//!
//! Loads each path into its own window, optionally jumps to an address and
//! prints the visible page of every window (plain text or JSON snapshot).
use anyhow::{Context, Result};
use clap::Parser;
use core_config::load_from;
use core_source::MemorySource;
use core_window::{Window, WindowManager, WindowState};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

mod dump;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "oxhex", version, about = "oxhex binary viewer")]
struct Args {
    /// Files to open, one window each. With no path an empty buffer is shown.
    pub paths: Vec<PathBuf>,
    /// Optional configuration file path (overrides discovery of `oxhex.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Bytes per row (overrides the config file).
    #[arg(long)]
    pub width: Option<usize>,
    /// Visible rows (overrides the config file).
    #[arg(long)]
    pub height: Option<usize>,
    /// Address to place the cursor on: decimal or `0x`-prefixed hex.
    #[arg(long, value_parser = parse_address)]
    pub goto: Option<u64>,
    /// Emit the window snapshots as JSON instead of a hex dump.
    #[arg(long)]
    pub json: bool,
}

fn parse_address(s: &str) -> Result<u64, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|e| format!("invalid address `{s}`: {e}"))
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join("oxhex.log");
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, "oxhex.log");
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .try_init()
    {
        Ok(_) => Some(guard),
        // Global subscriber already installed; drop guard so writer shuts down.
        Err(_err) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn open_source(path: &Path) -> Result<(MemorySource, String)> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let source = core_source::load_reader(BufReader::new(file))
        .with_context(|| format!("reading {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("file")
        .to_string();
    tracing::debug!(target: "io", file = %path.display(), size_bytes = source.as_bytes().len(), "file_read_ok");
    Ok((source, name))
}

fn open_windows(args: &Args, width: usize) -> Result<WindowManager<MemorySource>> {
    let mut manager = WindowManager::new();
    if args.paths.is_empty() {
        manager.open(Window::new(MemorySource::default(), "", width)?);
    }
    for path in &args.paths {
        let (source, name) = open_source(path)?;
        manager.open(Window::new(source, name, width)?);
    }
    Ok(manager)
}

fn snapshots(
    manager: &mut WindowManager<MemorySource>,
    goto: Option<u64>,
    height: usize,
) -> Result<Vec<WindowState>> {
    let ids: Vec<_> = manager.ids().collect();
    let mut states = Vec::with_capacity(ids.len());
    for id in ids {
        let Some(window) = manager.get_mut(id) else {
            continue;
        };
        if let Some(address) = goto {
            window.cursor_goto(address, height);
            if window.cursor() != address {
                warn!(target: "runtime", window = window.name(), requested = address, clamped = window.cursor(), "goto_clamped");
            }
        }
        states.push(window.state(height)?);
    }
    Ok(states)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    let config = load_from(args.config.clone())?.with_overrides(args.width, args.height);
    let (width, height) = (config.width(), config.height());
    let mut manager = open_windows(&args, width)?;
    info!(
        target: "runtime.startup",
        windows = manager.len(),
        width,
        height,
        config_override = args.config.is_some(),
        "bootstrap_complete"
    );

    let states = snapshots(&mut manager, args.goto, height)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&states)?);
    } else {
        let pages: Vec<String> = states
            .iter()
            .map(|s| dump::render(s).join("\n"))
            .collect();
        println!("{}", pages.join("\n\n"));
    }
    info!(target: "runtime", "shutdown");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_hex_addresses() {
        assert_eq!(parse_address("1300"), Ok(1300));
        assert_eq!(parse_address("0x514"), Ok(0x514));
        assert_eq!(parse_address("0XfF"), Ok(255));
        assert!(parse_address("0xzz").is_err());
        assert!(parse_address("-1").is_err());
    }

    #[test]
    fn args_accept_multiple_paths_and_overrides() {
        let args =
            Args::try_parse_from(["oxhex", "a.bin", "b.bin", "--width", "8", "--goto", "0x10"])
                .unwrap();
        assert_eq!(args.paths.len(), 2);
        assert_eq!(args.width, Some(8));
        assert_eq!(args.goto, Some(16));
        assert!(!args.json);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = open_source(Path::new("__definitely_missing__.bin")).unwrap_err();
        assert!(format!("{err:#}").contains("__definitely_missing__.bin"));
    }

    #[test]
    fn empty_invocation_opens_one_empty_window() {
        let args = Args::try_parse_from(["oxhex"]).unwrap();
        let mut manager = open_windows(&args, 16).unwrap();
        let states = snapshots(&mut manager, Some(40), 4).unwrap();
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].length, 0);
        assert_eq!(states[0].cursor, 0);
        assert_eq!(states[0].bytes.len(), 64);
    }
}
