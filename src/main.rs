use clap::Parser;
use killyank::app::App;
use killyank::keybindings::handle_input;
use killyank::logging;
use killyank::settings::Settings;
use killyank::ui;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "killyank")]
#[command(about = "A small terminal editor with an Emacs-style kill ring")]
struct Args {
    /// Files to open
    paths: Vec<String>,

    /// Enable debug logging
    #[arg(long)]
    log: bool,

    /// Log file path (requires --log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log kill ring operations (requires --log)
    #[arg(long)]
    ring: bool,

    /// Log all key inputs (requires --log)
    #[arg(long)]
    keys: bool,

    /// Number of kills remembered per editor
    #[arg(long, value_name = "N")]
    kill_ring_size: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse arguments BEFORE terminal init
    let args = Args::parse();

    let mut settings = Settings::default();
    if let Some(size) = args.kill_ring_size {
        settings.kill_ring_capacity = size;
    }
    if let Some(path) = args.log_file {
        settings.log_path = path;
    }

    if args.log {
        logging::init(&settings.log_path)?;
        logging::configure(args.ring, args.keys);
        log::info!("killyank starting with logging enabled");
        if args.ring {
            log::info!("Kill ring logging enabled");
        }
        if args.keys {
            log::info!("Key input logging enabled");
        }
    }

    let mut app = App::new(settings);
    for path_str in &args.paths {
        app.open_path(&App::expand_path(path_str));
    }
    if app.workspace.is_empty() {
        app.open_scratch();
    }

    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn run_app(
    terminal: &mut Terminal<impl ratatui::backend::Backend>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        match event::poll(Duration::from_millis(500))? {
            true => match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events (Windows sends both Press and Release)
                    if key.kind == KeyEventKind::Press && !handle_input(app, key) {
                        break;
                    }
                }
                _ => {}
            },
            false => {}
        }
    }

    log::info!("killyank exiting");
    Ok(())
}
