//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::{App, PlaybackState};
use crate::config::Settings;
use crate::playlist::{PlaybackSequence, RepeatMode, Track};

const CONTROLS: &[(&str, &str)] = &[
    ("n/p", "next/prev"),
    ("j/k", "up/down"),
    ("enter", "play selected"),
    ("space", "pause"),
    (",/.", "seek"),
    ("s", "shuffle"),
    ("r", "repeat"),
    ("d", "remove"),
    ("q", "quit"),
];

fn controls_text(scrub_seconds: u64) -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| {
            if *k == ",/." {
                format!("[{k}] {v} -/+{scrub_seconds}s")
            } else {
                format!("[{k}] {v}")
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format seconds as `M:SS`.
pub(crate) fn format_mss(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Pad or cut `s` to exactly `width` characters.
fn fit(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count <= width {
        format!("{s:<width$}")
    } else if width > 1 {
        let mut cut: String = s.chars().take(width - 1).collect();
        cut.push('…');
        cut
    } else {
        s.chars().take(width).collect()
    }
}

/// One playlist row: number, title, artist, album, length.
pub(crate) fn track_row(number: usize, track: &Track) -> String {
    format!(
        "{:>3}  {} {} {} {:>6}",
        number,
        fit(&track.title, 30),
        fit(&track.artist, 20),
        fit(&track.album, 20),
        format_mss(track.duration_secs)
    )
}

fn repeat_text(mode: RepeatMode) -> &'static str {
    match mode {
        RepeatMode::Off => "REPEAT: Off",
        RepeatMode::All => "REPEAT: All",
        RepeatMode::One => "REPEAT: One",
    }
}

fn status_text(app: &App, elapsed: Duration) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(
        match app.playback {
            PlaybackState::Stopped => " Stopped",
            PlaybackState::Playing => " Playing",
            PlaybackState::Paused => " Paused",
        }
        .to_string(),
    );

    if app.playback != PlaybackState::Stopped {
        let track = app.playlist.current();
        let time = match track.duration() {
            Some(total) => format!(
                "{} / {}",
                format_mss(elapsed.as_secs()),
                format_mss(total.as_secs())
            ),
            None => format_mss(elapsed.as_secs()),
        };
        parts.push(format!("Song: {} - {} [{}]", track.artist, track.title, time));
    }

    if let Some(pos) = app.playlist.cursor() {
        parts.push(format!("Position: {}/{}", pos + 1, app.playlist.len()));
    }

    parts.push(repeat_text(app.playlist.repeat_mode()).to_string());
    parts.push(if app.playlist.is_shuffled() {
        "Shuffle: ON".to_string()
    } else {
        "Shuffle: OFF".to_string()
    });

    if let Some(dir) = &app.current_dir {
        parts.push(format!("Dir: {}", dir));
    }
    if let Some(msg) = &app.message {
        parts.push(msg.clone());
    }

    parts.join(" • ")
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, elapsed: Duration, settings: &Settings) {
    let ui_settings = &settings.ui;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" segue ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let status = Paragraph::new(status_text(app, elapsed))
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    // Only build ListItems for the visible window, keeping the selection centered.
    let tracks = app.playlist.tracks();
    let total = tracks.len();
    let list_height = chunks[2].height.saturating_sub(3) as usize;
    let (start, end) = if total <= list_height || list_height == 0 {
        (0, total)
    } else {
        let half = list_height / 2;
        let mut start = app.selected.saturating_sub(half);
        if start + list_height > total {
            start = total - list_height;
        }
        (start, start + list_height)
    };

    let current = app.playlist.current_index();
    let items: Vec<ListItem> = tracks[start..end]
        .iter()
        .enumerate()
        .map(|(offset, track)| {
            let idx = start + offset;
            let row = track_row(idx + 1, track);
            if Some(idx) == current && app.playback != PlaybackState::Stopped {
                ListItem::new(row).style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                ListItem::new(row)
            }
        })
        .collect();

    let heading = format!(
        "  {:>3}  {} {} {} {:>6}",
        "#",
        fit("Title", 30),
        fit("Artist", 20),
        fit("Album", 20),
        "Time"
    );
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" playlist ")
                .title_bottom(Line::from(format!(" {total} tracks "))),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let list_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(chunks[2]);
    frame.render_widget(
        Paragraph::new(heading).style(Style::default().add_modifier(Modifier::DIM)),
        list_chunks[0],
    );

    let mut state = ratatui::widgets::ListState::default();
    if total > 0 {
        state.select(Some(app.selected.saturating_sub(start)));
    }
    frame.render_stateful_widget(list, list_chunks[1], &mut state);

    let footer = Paragraph::new(controls_text(settings.playback.scrub_seconds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}
