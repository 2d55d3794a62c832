//! Detective Quest: O Julgamento Final
//!
//! Explore the mansion, collect clues and accuse the culprit.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use detective_quest::cli::Args;
use detective_quest::console::run_console;
use detective_quest::game::{narrative, Game};
use detective_quest::tui::App;
use detective_quest::WorldConfig;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise stay quiet unless --verbose
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if args.verbose {
        EnvFilter::new("detective_quest=debug")
    } else {
        EnvFilter::new("detective_quest=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    debug!("Logging initialized (verbose={})", args.verbose);

    let world = match &args.world {
        Some(path) => WorldConfig::load(path)?,
        None => WorldConfig::mansion(),
    };
    let game = Game::new(&world)?;

    if args.tui {
        run_tui(&game, &args)?;
    } else {
        let stdin = io::stdin();
        run_console(&game, args.variant, stdin.lock(), stdout().lock())?;
    }

    Ok(())
}

fn run_tui(game: &Game, args: &Args) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(game, args.variant);

    // Main loop
    while app.running {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        if !app.handle_input()? {
            break;
        }
    }

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(verdict) = &app.verdict {
        println!("{}", narrative::verdict_line(verdict));
    }
    println!("{}", narrative::FAREWELL);

    Ok(())
}
