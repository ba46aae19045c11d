use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, info};

use super::error::AudioError;

pub struct AudioPlayer {
    stream: OutputStream,
    sink: Option<Sink>,
}

impl AudioPlayer {
    /// Open the default output device.
    pub fn open_default() -> Result<Self, AudioError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::Stream(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped, which would
        // scribble over the TUI.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
        })
    }

    /// Stop whatever is playing and start `path` from the beginning.
    pub fn play(&mut self, path: &Path) -> Result<(), AudioError> {
        self.stop();

        let file = File::open(path).map_err(|source| AudioError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(source);
        sink.play();

        info!(path = %path.display(), "playback started");
        self.sink = Some(sink);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
            debug!("playback stopped");
        }
    }

    pub fn toggle_pause(&mut self) {
        if let Some(sink) = &self.sink {
            if sink.is_paused() {
                sink.play();
            } else {
                sink.pause();
            }
        }
    }

    /// Jump to `position` in the loaded track. No-op when nothing is loaded.
    pub fn seek(&mut self, position: Duration) -> Result<(), AudioError> {
        if let Some(sink) = &self.sink {
            sink.try_seek(position)?;
            debug!(position_secs = position.as_secs(), "seeked");
        }
        Ok(())
    }

    /// True when a track was started and has played to the end.
    pub fn is_finished(&self) -> bool {
        self.sink.as_ref().is_some_and(|s| s.empty())
    }

    pub fn elapsed(&self) -> Duration {
        self.sink
            .as_ref()
            .map(|s| s.get_pos())
            .unwrap_or(Duration::ZERO)
    }
}
