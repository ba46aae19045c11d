use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::{App, PlaybackState, Removal};
use crate::audio::AudioPlayer;
use crate::config;
use crate::playlist::{PlaybackSequence, Track};
use crate::ui;

/// Main terminal event loop: handles input, UI drawing and auto-advance.
/// Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    player: &mut AudioPlayer,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick = Duration::from_millis(settings.ui.tick_ms);

    loop {
        if app.playback == PlaybackState::Playing && player.is_finished() {
            advance_after_finish(app, player);
        }

        terminal.draw(|f| ui::draw(f, app, player.elapsed(), settings))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, player) {
                    break;
                }
            }
        }
    }

    player.stop();
    Ok(())
}

fn advance_after_finish(app: &mut App, player: &mut AudioPlayer) {
    match app.track_after_finish() {
        Some(track) => play(app, player, &track),
        None => {
            info!("reached end of playlist");
            player.stop();
            app.playback = PlaybackState::Stopped;
            app.set_message("End of playlist");
        }
    }
}

/// Hand `track` to the player. The empty track is ignored.
fn play(app: &mut App, player: &mut AudioPlayer, track: &Track) {
    if track.path.as_os_str().is_empty() {
        return;
    }

    match player.play(&track.path) {
        Ok(()) => {
            info!(title = %track.title, artist = %track.artist, "now playing");
            app.playback = PlaybackState::Playing;
            app.message = None;
        }
        Err(e) => {
            warn!(error = %e, "playback failed");
            player.stop();
            app.playback = PlaybackState::Stopped;
            app.set_message(format!("Cannot play {}", track.title));
        }
    }
}

/// Returns `true` when the user asked to quit.
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    player: &mut AudioPlayer,
) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,

        KeyCode::Char('n') | KeyCode::Char('l') | KeyCode::Right => {
            if app.has_tracks() {
                let track = app.next_track();
                play(app, player, &track);
            }
        }
        KeyCode::Char('p') | KeyCode::Char('h') | KeyCode::Left => {
            if app.has_tracks() {
                let track = app.prev_track();
                play(app, player, &track);
            }
        }

        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),

        KeyCode::Enter => {
            if let Some(track) = app.play_selected() {
                play(app, player, &track);
            }
        }

        KeyCode::Char(' ') => match app.playback {
            PlaybackState::Stopped => {
                let track = app.playlist.current();
                app.follow_current();
                play(app, player, &track);
            }
            PlaybackState::Playing => {
                player.toggle_pause();
                app.playback = PlaybackState::Paused;
            }
            PlaybackState::Paused => {
                player.toggle_pause();
                app.playback = PlaybackState::Playing;
            }
        },

        KeyCode::Char(',') | KeyCode::Char('.') => {
            if app.playback != PlaybackState::Stopped {
                let step = Duration::from_secs(settings.playback.scrub_seconds);
                let target =
                    app.scrub_target(player.elapsed(), step, key.code == KeyCode::Char('.'));
                if let Err(e) = player.seek(target) {
                    warn!(error = %e, "seek failed");
                    app.set_message("Cannot seek in this track");
                }
            }
        }

        KeyCode::Char('s') => {
            app.toggle_shuffle(rand::random());
            info!(shuffled = app.playlist.is_shuffled(), "shuffle toggled");
        }
        KeyCode::Char('r') => {
            app.cycle_repeat();
            info!(mode = ?app.playlist.repeat_mode(), "repeat mode changed");
        }

        KeyCode::Char('d') | KeyCode::Delete => match app.remove_selected() {
            Removal::Current(Some(track)) if app.playback != PlaybackState::Stopped => {
                play(app, player, &track);
            }
            Removal::Current(_) => {
                player.stop();
                app.playback = PlaybackState::Stopped;
            }
            Removal::Other | Removal::None => {}
        },

        _ => {}
    }

    false
}
