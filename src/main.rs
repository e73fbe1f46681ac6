use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

mod app;
mod completion;
mod config;
mod editor;
mod error;
mod notification;
mod syntax_highlight;
#[cfg(test)]
mod test_utils;

use app::App;
use editor::EditorState;

/// Terminal Verilog editor with inline AI code completions
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal Verilog editor with inline AI code completions"
)]
struct Args {
    /// Verilog file to edit (created on first save if missing)
    file: Option<PathBuf>,

    /// Generate endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Number of suggestions kept for display
    #[arg(long)]
    cache_size: Option<usize>,

    /// Pause in typing before a completion is requested
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Turn inline completions off
    #[arg(long)]
    no_completions: bool,
}

impl Args {
    fn apply_to(&self, config: &mut config::Config) {
        if let Some(endpoint) = &self.endpoint {
            config.completion.endpoint = endpoint.clone();
        }
        if let Some(cache_size) = self.cache_size {
            config.completion.cache_size = cache_size;
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.completion.debounce_ms = debounce_ms;
        }
        if self.no_completions {
            config.completion.enabled = false;
        }
    }
}

fn main() -> Result<()> {
    init_logging();

    color_eyre::install()?;

    let args = Args::parse();

    let mut config_result = config::load_config();
    args.apply_to(&mut config_result.config);
    if let Some(warning) = config::sanitize(&mut config_result.config) {
        config_result.warning.get_or_insert(warning);
    }

    // Open before entering the alternate screen so read errors reach stderr
    let editor = match &args.file {
        Some(path) => EditorState::open(&config_result.config.editor, path)?,
        None => EditorState::new(&config_result.config.editor),
    };
    let app = App::new(editor, &config_result.config);

    let terminal = init_terminal()?;
    let result = run(terminal, app, config_result);
    restore_terminal()?;

    let mut app = result?;
    app.shutdown();

    log::debug!("=== HDLPAD SESSION ENDED ===");

    Ok(())
}

/// Writes to <temp dir>/hdlpad-debug.log; DEBUG in debug builds, WARN in release
fn init_logging() {
    use std::io::Write;

    let log_path = std::env::temp_dir().join("hdlpad-debug.log");
    let log_file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled, cannot open {}: {}", log_path.display(), e);
            return;
        }
    };

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
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

    log::debug!("=== HDLPAD SESSION STARTED ===");
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
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
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

    setup_completion_worker(&mut app, &config_result.config);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

/// Set up the completion worker thread and channels
fn setup_completion_worker(app: &mut App, config: &config::Config) {
    if !config.completion.enabled {
        log::debug!("Inline completions disabled");
        return;
    }

    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();

    match completion::worker::spawn_worker(
        &config.completion,
        request_rx,
        response_tx,
        app.completion.shutdown_token(),
    ) {
        Ok(_) => app.completion.set_channels(request_tx, response_rx),
        Err(e) => {
            log::error!("Failed to spawn completion worker: {}", e);
            app.notification
                .show_warning("Inline completions unavailable: worker failed to start");
        }
    }
}
