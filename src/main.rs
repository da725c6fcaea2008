use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::{GameSession, Token};
use connect_four::input::parse_token;
use connect_four::ui::{console, App};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Player that moves first: white or black (w/b/1/2)
    #[arg(long, value_parser = parse_first)]
    first: Option<Token>,

    /// Use the line-oriented console instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn parse_first(raw: &str) -> Result<Token, String> {
    parse_token(raw).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(first) = cli.first {
        config.game.first_player = first;
    }

    if cli.plain {
        run_console(&config, cli.first.is_none())
    } else {
        run_tui(&config).context("running terminal UI")
    }
}

fn run_console(config: &AppConfig, ask_first: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let first = if ask_first {
        console::choose_first_player(&mut input, &mut output)?
    } else {
        config.game.first_player
    };

    let mut session = GameSession::new(config.game.rows, config.game.cols, first);
    console::play(&mut session, &mut input, &mut output).context("playing console game")?;
    Ok(())
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
