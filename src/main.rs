use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableFocusChange, DisableMouseCapture,
        EnableBracketedPaste, EnableFocusChange, EnableMouseCapture, Event,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use miette::Result;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};

use plain_edit::{App, Config, logging, ui::StatusBar};

/// Longest wait for input before the loop runs again
const MAX_POLL: Duration = Duration::from_millis(50);

/// A plain-text editor for the terminal
#[derive(Parser)]
#[command(name = "plain-edit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Initial document text (defaults to the configured welcome text)
    #[arg(long)]
    text: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize default configuration file
    InitConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_file) = &cli.log_file {
        let level = logging::parse_level(&cli.log_level)?;
        logging::init_file_logging(log_file, level)?;
    }

    if let Some(Commands::InitConfig) = cli.command {
        return init_config(cli.config);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default(),
    };

    let mut app = match cli.text {
        Some(text) => App::with_text(config, &text),
        None => App::new(config),
    };

    // Setup terminal
    let mut terminal = setup_or_restore(setup_terminal, restore_terminal_quietly)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().map_err(|e| miette::miette!("Failed to disable raw mode: {}", e))?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .map_err(|e| miette::miette!("Failed to leave alternate screen: {}", e))?;
    terminal
        .show_cursor()
        .map_err(|e| miette::miette!("Failed to show cursor: {}", e))?;

    if let Err(e) = &res {
        tracing::error!(error = %e, "editor loop failed");
    }
    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().map_err(|e| miette::miette!("Failed to enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        EnableFocusChange
    )
    .map_err(|e| miette::miette!("Failed to enter alternate screen: {}", e))?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| miette::miette!("Failed to create terminal: {}", e))
}

/// Best-effort undo of `setup_terminal` when it fails part way
fn restore_terminal_quietly() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        DisableFocusChange,
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
}

/// Run `setup`, calling `restore` before returning its error
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    setup().inspect_err(|_| restore())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Draw UI
        terminal
            .draw(|f| {
                let main_chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Min(1),    // Editor
                        Constraint::Length(1), // Status bar
                    ])
                    .split(f.area());
                let editor_area = main_chunks[0];
                app.set_editor_area(editor_area);

                let editor = app.editor_widget();
                let cursor = app
                    .caret_visible()
                    .then(|| editor.cursor_screen_position(editor_area))
                    .flatten();
                f.render_widget(editor, editor_area);

                let mut status_bar =
                    StatusBar::new(app.status()).with_style(app.editor().style());
                if let Some(message) = app.status_message() {
                    status_bar = status_bar.with_message(message);
                }
                f.render_widget(status_bar, main_chunks[1]);

                if let Some(position) = cursor {
                    f.set_cursor_position(position);
                }
            })
            .map_err(|e| miette::miette!("Failed to draw terminal: {}", e))?;

        // Handle input, waking up in time for the next caret blink
        let timeout = app.poll_timeout(Instant::now(), MAX_POLL);
        if event::poll(timeout).map_err(|e| miette::miette!("Failed to poll events: {}", e))? {
            match event::read().map_err(|e| miette::miette!("Failed to read event: {}", e))? {
                Event::Key(key) => {
                    app.handle_key(key);
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                }
                Event::Paste(text) => {
                    app.handle_paste(&text);
                }
                Event::FocusGained => app.handle_focus(true),
                Event::FocusLost => app.handle_focus(false),
                _ => {}
            }
        }

        app.tick(Instant::now());

        // Check if should quit
        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Initialize default configuration file
fn init_config(path: Option<PathBuf>) -> Result<()> {
    let config = Config::default();
    let config_path = path.unwrap_or_else(Config::default_config_path);

    if config_path.exists() {
        eprintln!("Config file already exists at: {}", config_path.display());
        eprintln!("Remove it first or edit it manually.");
        return Ok(());
    }

    config.save_to_file(&config_path)?;

    let keys = &config.keybindings;
    println!(
        "Created default config file at: {}\n\n\
         Default keybindings:\n\
         Select all:          {}\n\
         Copy / Cut / Paste:  {} / {} / {}\n\
         Bold / Italic / Underline: {} / {} / {}\n\
         Colour / Font:       {} / {}\n\
         Font size + / -:     {} / {}\n\
         Clear document:      {}\n\
         Quit:                {}\n\n\
         You can edit this file to customize your keybindings.",
        config_path.display(),
        keys.select_all.display(),
        keys.copy.display(),
        keys.cut.display(),
        keys.paste.display(),
        keys.toggle_bold.display(),
        keys.toggle_italic.display(),
        keys.toggle_underline.display(),
        keys.cycle_color.display(),
        keys.cycle_font.display(),
        keys.font_size_up.display(),
        keys.font_size_down.display(),
        keys.clear.display(),
        keys.quit.display()
    );
    tracing::info!(path = %config_path.display(), "wrote default config");

    Ok(())
}
