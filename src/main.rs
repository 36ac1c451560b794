pub mod app;
pub mod catalog;
pub mod detail;
pub mod form;
pub mod library;
pub mod recipe;
pub mod runtime;
pub mod timer;
pub mod toast;
pub mod ui;

use crate::{
    app::{App, Tab},
    runtime::{AppEvent, CrosstermEventSource, FixedTicker, Runner},
    ui::ui,
};
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
    io::{self, stdin},
    path::PathBuf,
};

/// terminal recipe book with step timers and a community feed
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Browse your recipe library, explore community dishes, and cook along with per-step countdown timers, all from the terminal."
)]
pub struct Cli {
    /// tab to open at startup
    #[clap(short = 't', long, value_enum, default_value_t = Tab::Recipes)]
    tab: Tab,

    /// extra recipes to load into the library from a JSON file
    #[clap(short = 'r', long)]
    recipes: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let mut library = catalog::seed_library();
    if let Some(path) = &cli.recipes {
        let mut extra = catalog::load_recipes_from_path(path)?;
        extra.append(&mut library);
        library = extra;
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_recipes(cli.tab, library, catalog::seed_explore());
    let result = run_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::per_second());

    terminal.draw(|f| ui(app, f))?;

    while !app.should_quit {
        match runner.step() {
            AppEvent::Key(key) => app.handle_key(key),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize => {}
        }

        terminal.draw(|f| ui(app, f))?;
    }

    Ok(())
}
