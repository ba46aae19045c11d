use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::app::App;
use crate::config;

/// Turn command-line arguments into scan roots.
///
/// With no arguments the configured `library.default_dir` is used, then the
/// current directory.
pub fn resolve_paths<I>(args: I, library: &config::LibrarySettings) -> Vec<PathBuf>
where
    I: IntoIterator<Item = OsString>,
{
    let paths: Vec<PathBuf> = args.into_iter().map(PathBuf::from).collect();
    if !paths.is_empty() {
        return paths;
    }

    let fallback = library
        .default_dir
        .clone()
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    vec![fallback]
}

/// Short label for the status line: the single root, or a count.
pub fn paths_label(paths: &[PathBuf]) -> String {
    match paths {
        [one] => one.display().to_string(),
        many => format!("{} paths", many.len()),
    }
}

/// Apply configured repeat mode, shuffle seed and initial shuffle.
pub fn apply_playback_defaults(app: &mut App, settings: &config::Settings, random_seed: u64) {
    app.playlist
        .set_repeat_mode(settings.playback.repeat.into());
    app.shuffle_seed = settings.playback.shuffle_seed;

    if settings.playback.shuffle {
        app.toggle_shuffle(random_seed);
    }
}
