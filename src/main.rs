mod app;
mod clock;
mod domain;
mod input;
mod persistence;
mod ui;

use anyhow::Result;
use app::{AppState, Command};
use clap::Parser;
use clock::Now;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::TaskStore;
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ticklist")]
#[command(about = "A small terminal TODO list with undo and JSON storage", long_about = None)]
struct Cli {
    /// Write debug logs to this file
    #[arg(short, long)]
    log_file: Option<PathBuf>,
}

/// What the event loop does after running a batch of commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit { saved: bool },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let store = TaskStore::discover()?;
    let storage = store.initial_location();
    let tasks = store.load(storage, Now::current().millis);
    log::info!(
        "Starting with {} tasks from {}",
        tasks.len(),
        store.path(storage).display()
    );

    let mut app = AppState::new(tasks, storage);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app, &store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result {
        Ok(Flow::Quit { saved: false }) => {
            eprintln!("Error saving tasks to {}", store.path(app.storage).display());
        }
        Err(err) => {
            // Best effort, the loop died before it could save
            store.save(app.storage, &app.tasks);
            eprintln!("Error: {}", err);
        }
        Ok(_) => {}
    }

    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let log_file = File::create(path)?;
    WriteLogger::init(LevelFilter::Debug, log_config, log_file)?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    store: &TaskStore,
) -> Result<Flow> {
    let tick_rate = clock::tick_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout so notices expire on time
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let now = Now::current();
                    let commands = input::handle_key(app, key, now);
                    if let Flow::Quit { saved } = execute_commands(app, store, commands, now) {
                        return Ok(Flow::Quit { saved });
                    }
                }
            }
        }

        app.expire(Now::current().instant);
    }
}

/// Run the side effects requested by a transition, in order
fn execute_commands(app: &mut AppState, store: &TaskStore, commands: Vec<Command>, now: Now) -> Flow {
    for command in commands {
        match command {
            Command::Persist => {
                let ok = store.save(app.storage, &app.tasks);
                app.save_finished(ok, false, now);
            }
            Command::Save => {
                let ok = store.save(app.storage, &app.tasks);
                app.save_finished(ok, true, now);
            }
            Command::Reload(location) => {
                let tasks = store.load(location, now.millis);
                log::info!("Switched to {} storage", location.name());
                app.reload_finished(tasks);
            }
            Command::Exit => {
                let saved = store.save(app.storage, &app.tasks);
                log::info!("Exiting (saved: {})", saved);
                return Flow::Quit { saved };
            }
        }
    }
    Flow::Continue
}
