use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    fs::{self, OpenOptions},
    io::{self, stdin},
    path::{Path, PathBuf},
    time::Duration,
};
use typist::{
    app::{App, Flow},
    config::Config,
    difficulty::Difficulty,
    quotes::QuoteBank,
    runtime::{AppEvent, CrosstermEventSource, EventSource, FixedTicker, Runner, Ticker},
    storage::{FileStore, KeyValueStore},
    TICK_RATE_MS,
};

/// quote-based typing speed trainer
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type a random quote as fast and as accurately as you can. Tracks words per minute, accuracy and a best score for each difficulty."
)]
pub struct Cli {
    /// difficulty tier to draw quotes from (remembered for next time)
    #[clap(short = 'd', long, value_enum)]
    difficulty: Option<Difficulty>,

    /// file holding the selected difficulty and best scores
    #[clap(long)]
    state_file: Option<PathBuf>,

    /// file to write logs to (level via RUST_LOG)
    #[clap(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let config = Config::with_overrides(cli.state_file.clone(), cli.log_file.clone());
    if let Err(e) = init_logging(&config.log_file) {
        eprintln!("typist: logging disabled: {e}");
    }
    log::info!("typist starting, state in {}", config.state_file.display());

    let bank = QuoteBank::embedded()?;
    let store = FileStore::open(&config.state_file);
    let mut app = App::new(bank, store, cli.difficulty);

    enable_raw_mode()?;
    let mut terminal = undo_on_err(enter_alternate_screen(), disable_raw_mode)?;

    let mut runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );
    let result = start_tui(&mut terminal, &mut app, &mut runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("exiting on error: {e}");
    }
    result
}

fn enter_alternate_screen() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Runs `undo` when `result` is an error, keeping the original error.
fn undo_on_err<T, E: std::fmt::Display>(
    result: Result<T, E>,
    undo: impl FnOnce() -> io::Result<()>,
) -> Result<T, E> {
    if let Err(e) = &result {
        log::error!("terminal setup failed: {e}");
        if let Err(undo_err) = undo() {
            log::warn!("failed to restore terminal: {undo_err}");
        }
    }
    result
}

/// Logs go to a file; stderr would draw over the alternate screen.
fn init_logging(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn start_tui<B: Backend, S: KeyValueStore, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
    runner: &mut Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        match runner.step() {
            AppEvent::Tick(dt) => {
                let shown_secs = app.session().elapsed_secs();
                let was_animating = app.celebration.is_active;

                app.on_tick(dt);

                // only redraw when something visible moved
                if app.session().elapsed_secs() != shown_secs
                    || was_animating
                    || app.celebration.is_active
                {
                    terminal.draw(|f| f.render_widget(&*app, f.area()))?;
                }
            }
            AppEvent::Resize => {
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
            AppEvent::Key(key) => {
                let was_running = app.session().is_running();
                if app.on_key(key) == Flow::Quit {
                    break;
                }
                if !was_running && app.session().is_running() {
                    runner.resync();
                }
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
            AppEvent::Closed => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "terminal input closed",
                )
                .into());
            }
        }
    }

    Ok(())
}
