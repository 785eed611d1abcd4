//! bucket_tui - Interactive TUI for exploring how damage buckets multiply

use bucket_core::{
    config::{default_preset, load_preset, BuildPreset, ConfigError},
    simulation::DEFAULT_SHOTS,
};
use bucket_tui::{app::App, logger, report::Report, ui};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, process::ExitCode};
use thiserror::Error;

#[derive(Clone, Copy, Debug, clap::ValueEnum, PartialEq, Eq)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML build preset to start from
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Print a one-shot evaluation and exit
    #[arg(long)]
    report: bool,

    /// Print the report as JSON (implies --report)
    #[arg(long)]
    json: bool,

    /// Print the active preset as TOML and exit
    #[arg(long)]
    dump_preset: bool,

    /// Seed for the crit simulation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Shots rolled by the crit simulation
    #[arg(long, default_value_t = DEFAULT_SHOTS)]
    shots: u32,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Error, Debug)]
enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write TOML: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = if args.report || args.json || args.dump_preset {
        run_batch(&args)
    } else {
        run_tui(&args)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Report and dump modes: stderr logging, hard failure on a bad preset
fn run_batch(args: &Args) -> Result<(), AppError> {
    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .format_timestamp(None)
        .parse_default_env()
        .try_init()?;

    let preset = match &args.preset {
        Some(path) => load_preset(path)?,
        None => default_preset(),
    };

    if args.dump_preset {
        println!("{}", toml::to_string_pretty(&preset)?);
        return Ok(());
    }

    let report = Report::build(&preset, args.seed, args.shots);
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}

/// Preset for the interactive session; load errors go to the log tab
fn tui_preset(path: Option<&PathBuf>) -> BuildPreset {
    match path {
        Some(path) => load_preset(path).unwrap_or_else(|e| {
            log::error!("{}: {}", path.display(), e);
            log::warn!("falling back to the built-in preset");
            default_preset()
        }),
        None => default_preset(),
    }
}

fn run_tui(args: &Args) -> Result<(), AppError> {
    let console = logger::init(args.log_level.into())?;

    let preset = tui_preset(args.preset.as_ref());
    let mut app = App::new(preset, args.seed, args.shots).with_console(console);
    log::info!("loaded '{}' ({} simulated shots)", app.preset.name, app.shots);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), AppError> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                let shift = key.modifiers.contains(KeyModifiers::SHIFT);
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char(c @ '1'..='6'), _) => {
                        app.set_tab(c as usize - '1' as usize)
                    }
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(shift),
                    (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(shift),
                    (KeyCode::Char('H'), _) => app.on_left(true),
                    (KeyCode::Char('L'), _) => app.on_right(true),
                    (KeyCode::Char('r'), _) => app.reset(),
                    (KeyCode::Char('s'), _) => app.resimulate(),
                    _ => {}
                }
            }
        }
    }

    Ok(())
}
