//! Entry point for the TypefaceR font settings panel.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load application configuration from `conf/config.toml`.
//! - Merge the persisted font settings over the defaults.
//! - Launch the GUI, or run one of the headless print modes.

mod app;
mod cancellation;
mod config;
mod debounce;
mod settings;
mod style;

use crate::app::run_app;
use crate::config::{AppConfig, load_config, serialize_config};
use crate::settings::{FontConfig, initialize, load_persisted};
use crate::style::StyleSheets;
use anyhow::{Context, Result, bail};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";
const USAGE: &str = "Usage: typefacer [--print-css | --print-config] [CONFIG_PATH]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Panel,
    PrintCss,
    PrintConfig,
}

#[derive(Debug)]
struct Args {
    mode: Mode,
    config_path: PathBuf,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    let config = load_config(&args.config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        config = %args.config_path.display(),
        settings = %config.settings_path,
        level = %config.log_level,
        theme = %config.theme,
        "Starting TypefaceR"
    );

    match args.mode {
        Mode::PrintConfig => {
            print!("{}", serialize_config(&config)?);
            Ok(())
        }
        Mode::PrintCss => print_css(&config),
        Mode::Panel => {
            let settings = load_settings(&config);
            run_app(settings, config).context("Failed to start the settings panel")?;
            Ok(())
        }
    }
}

fn load_settings(config: &AppConfig) -> FontConfig {
    let persisted = load_persisted(Path::new(&config.settings_path));
    if persisted.is_none() {
        info!("No saved font settings; starting from defaults");
    }
    initialize(persisted.as_ref())
}

fn print_css(config: &AppConfig) -> Result<()> {
    let settings = load_settings(config);
    let mut sheets = StyleSheets::install(Path::new(&config.style_dir))?;
    sheets.apply_all(&settings);
    info!(
        imports = %sheets.imports.path().display(),
        rules = %sheets.rules.path().display(),
        "Wrote style elements"
    );
    println!("{}", sheets.imports.text());
    print!("{}", sheets.rules.text());
    Ok(())
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut mode = Mode::Panel;
    let mut config_path = None;
    for arg in args {
        match arg.as_str() {
            "--print-css" | "--print-config" if mode != Mode::Panel => {
                bail!("Only one print mode may be given\n{USAGE}");
            }
            "--print-css" => mode = Mode::PrintCss,
            "--print-config" => mode = Mode::PrintConfig,
            "-h" | "--help" => bail!("{USAGE}"),
            flag if flag.starts_with("--") => bail!("Unknown option {flag}\n{USAGE}"),
            path if config_path.is_none() => config_path = Some(PathBuf::from(path)),
            _ => bail!("{USAGE}"),
        }
    }
    Ok(Args {
        mode,
        config_path: config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
    })
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
