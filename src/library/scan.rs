use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::playlist::Track;
use crate::tags::{self, UNKNOWN_TITLE};

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Collect audio files under `dir`, in file-name order per directory.
fn walk_dir(dir: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .sort_by_file_name();

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && is_audio_file(p, settings))
        .collect()
}

/// Build a `Track` for one file from its tags.
pub fn load_track(path: &Path, settings: &LibrarySettings) -> Track {
    let meta = tags::decode(path);
    if meta.is_default() {
        debug!(path = %path.display(), "no usable tags");
    }
    let mut track = meta.into_track(path);

    if settings.title_from_filename && (track.title.is_empty() || track.title == UNKNOWN_TITLE) {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            track.title = stem.to_string();
        }
    }
    track
}

/// Resolve command-line `paths` into tracks.
///
/// Files are taken in the order given (regardless of extension); directories
/// are walked according to `settings`. Missing paths are skipped.
pub fn scan(paths: &[PathBuf], settings: &LibrarySettings) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();

    for path in paths {
        if path.is_dir() {
            let found = walk_dir(path, settings);
            debug!(dir = %path.display(), files = found.len(), "walked directory");
            tracks.extend(found.iter().map(|p| load_track(p, settings)));
        } else if path.is_file() {
            tracks.push(load_track(path, settings));
        } else {
            warn!(path = %path.display(), "path does not exist, skipping");
        }
    }

    info!(tracks = tracks.len(), "library scan finished");
    tracks
}
