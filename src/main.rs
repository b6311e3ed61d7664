use anyhow::Context;
use clap::Parser;
use click_counter::config::Config;
use click_counter::logging::init_tracing;
use click_counter::shutdown::ShutdownHandle;
use click_counter::ui::runtime;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "click-counter", version, about = "A terminal click counter")]
struct Cli {
    /// Config file to load instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start the counter at this value
    #[arg(long, value_name = "N")]
    start: Option<u64>,

    /// Log filter directive, e.g. "debug" (RUST_LOG takes precedence)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;

    let log_path = config.log_path();
    init_tracing(&log_path, &config.logging.level)
        .with_context(|| format!("logging setup failed ({})", log_path.display()))?;

    let shutdown = ShutdownHandle::new();
    shutdown
        .register_signals()
        .context("failed to register signal handlers")?;

    runtime::run(&config, shutdown).context("terminal UI failed")?;
    Ok(())
}

/// Loads the config file, then applies CLI overrides on top.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(start) = cli.start {
        config.counter.initial = start;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.no_mouse {
        config.ui.mouse = false;
    }
    Ok(config)
}
