use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use zoomiz::app::App;
use zoomiz::config::{self, ConfigResult};
use zoomiz::input::InputReader;
use zoomiz::jump::CharsetMode;

/// Search the text on screen and jump to a match by typing its label
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File to view (reads stdin if not provided)
    file: Option<PathBuf>,

    /// Match letter case exactly
    #[arg(long)]
    case_sensitive: bool,

    /// Label characters to use
    #[arg(long, value_enum)]
    charset: Option<CharsetMode>,

    /// Labels for `--charset custom`
    #[arg(long, value_name = "CHARS")]
    custom_charset: Option<String>,

    /// Config file (defaults to ~/.config/zoomiz/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    zoomiz::logging::init();

    let args = Args::parse();

    // Read the text before the terminal switches to raw mode
    let text = InputReader::read_text(args.file.as_deref())?;

    let ConfigResult {
        config: mut config,
        warning,
    } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };

    if args.case_sensitive {
        config.jump.case_sensitive = true;
    }
    if let Some(mode) = args.charset {
        config.jump.label_charset = mode;
    }
    if args.custom_charset.is_some() {
        config.jump.custom_charset = args.custom_charset;
    }

    let mut app = App::new(text, &config);
    if let Some(warning) = warning {
        app.add_status(warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result?;
    println!("{}", app.cursor_display());
    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;
    }
    Ok(())
}
