use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hanoi_tui::config::{AppConfig, LoggingConfig};
use hanoi_tui::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play the Towers of Hanoi in the terminal.
#[derive(Parser)]
#[command(name = "hanoi", about = "Towers of Hanoi in the terminal")]
struct Cli {
    /// Number of disks (overrides the config file)
    #[arg(long)]
    size: Option<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "hanoi.toml")]
    config: PathBuf,

    /// Also show the solver's move list
    #[arg(long)]
    show_solution: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(size) = cli.size {
        config.puzzle.size = size;
    }
    if cli.show_solution {
        config.display.show_solution = true;
    }
    if let Some(path) = cli.log_file {
        config.logging.file = Some(path);
    }
    config.validate().context("invalid configuration")?;

    init_logging(&config.logging)?;
    info!(size = config.puzzle.size, "starting");

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err).context("entering alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(err).context("creating terminal");
        }
    };

    // Create app and run
    let mut app = App::new(config.puzzle.size, config.display.show_solution);
    let res = app.run(&mut terminal);

    // Restore terminal, even when the loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("event loop failed")
}

/// Send tracing output to the configured file. Without a file nothing is
/// installed, since stdout and stderr are owned by the terminal UI.
fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let Some(path) = &logging.file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&logging.filter)
        .with_context(|| format!("parsing log filter '{}'", logging.filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
