use std::io::stdout;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use navpage::app::App;
use navpage::cli::Cli;
use navpage::config;
use navpage::page::PageReader;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();

    // Read the page before touching the terminal so errors print plainly
    let page = PageReader::read_page(cli.file.as_deref())?;
    let source = cli
        .file
        .as_deref()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stdin".to_string());
    let config = config::load();

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    // Run the application
    let result = run(terminal, App::new(page, source, &config));

    // Restore terminal (automatic cleanup)
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events, waiting at most one animation tick
        if event::poll(app.tick_rate())? {
            app.handle_event(event::read()?);
        }

        // Advance the scroll animation
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
