use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::time::Duration;

mod api;
mod app;
mod clipboard;
mod config;
mod help;
mod input;
mod notification;
mod results;
mod search;
mod selection;
#[cfg(test)]
mod test_utils;
mod theme;
mod widgets;

use app::{App, OutputMode};

/// Interactive character picker
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Search and multi-select Rick and Morty characters as you type"
)]
struct Args {
    /// Initial search query
    query: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/charsel-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/charsel-debug.log")
            .expect("Failed to open /tmp/charsel-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== CHARSEL DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    let terminal = init_terminal()?;

    let mut app = App::new(&config_result.config);
    if let Some(query) = &args.query {
        app.input.textarea.insert_str(query);
    }

    let result = run(terminal, app, config_result);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    handle_output(&app);

    #[cfg(debug_assertions)]
    log::debug!("=== CHARSEL DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_result: config::ConfigResult,
) -> Result<App> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    setup_search_worker(&mut app, &config_result.config);

    // Fetch on startup, even with an empty query, so the pane starts full
    app.trigger_fetch();

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

/// Set up the search worker thread and channels
fn setup_search_worker(app: &mut App, config: &config::Config) {
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.search.set_channels(request_tx, response_rx);

    api::worker::spawn_worker(
        config.api.base_url.clone(),
        Duration::from_millis(config.api.timeout_ms),
        request_rx,
        response_tx,
    );
}

/// Handle output after terminal is restored
fn handle_output(app: &App) {
    match app.output_mode() {
        Some(OutputMode::Selection) => {
            let names = app.selection.joined_names();
            if !names.is_empty() {
                println!("{}", names);
            }
        }
        Some(OutputMode::Query) => {
            println!("{}", app.query());
        }
        None => {
            // Exited with Ctrl+C or q
        }
    }
}
