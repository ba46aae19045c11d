use std::env;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::library::scan;
use crate::logging;

mod event_loop;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_problem) = settings::load_settings();

    // Kept alive until the end of `run` so buffered events are flushed.
    let _log_guard = match logging::init(&settings.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("segue: logging disabled: {e}");
            None
        }
    };
    if let Some(msg) = config_problem {
        warn!("{msg}");
    }

    let paths = startup::resolve_paths(env::args_os().skip(1), &settings.library);
    let tracks = scan(&paths, &settings.library);

    let mut app = App::new(tracks);
    app.set_current_dir(startup::paths_label(&paths));
    startup::apply_playback_defaults(&mut app, &settings, rand::random());
    if !app.has_tracks() {
        app.set_message("No audio files found");
    }

    let mut player = AudioPlayer::open_default()?;

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut player);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("shutting down");
    run_result
}
