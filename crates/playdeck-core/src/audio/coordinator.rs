//! Background-music coordination: one audio resource, keyed by screen.

use crate::api::types::ScreenId;
use crate::audio::tracks::TrackManifest;

/// Playback could not start (browser autoplay policy, decode failure).
/// Never surfaced to the user: the coordinator swallows it and the track
/// stays silently paused until the next user gesture triggers another play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackError;

/// The platform half of audio playback. The web bridge backs this with an
/// `HtmlAudioElement`; tests use an in-memory mock.
pub trait AudioSink: Sized {
    /// Create the underlying resource. `None` degrades to silence.
    fn create() -> Option<Self>;

    /// Load a new source; resets position to zero.
    fn set_source(&mut self, path: &str);

    /// Start (or resume) looping playback.
    fn play(&mut self) -> Result<(), PlaybackError>;

    fn pause(&mut self);

    /// Seek back to position zero.
    fn rewind(&mut self);

    fn set_muted(&mut self, muted: bool);
}

/// Guarantees at most one playing track at a time.
///
/// The sink is created lazily on first use and lives until the coordinator is
/// dropped (hub unmount). Mute state is tracked here so it applies to sources
/// loaded later, and survives sink-creation failure.
pub struct AudioCoordinator<S> {
    sink: Option<S>,
    tracks: TrackManifest,
    current: Option<String>,
    muted: bool,
    playing: bool,
}

impl<S: AudioSink> AudioCoordinator<S> {
    pub fn new(tracks: TrackManifest) -> Self {
        Self {
            sink: None,
            tracks,
            current: None,
            muted: false,
            playing: false,
        }
    }

    fn sink(&mut self) -> Option<&mut S> {
        if self.sink.is_none() {
            self.sink = S::create();
            if self.sink.is_none() {
                log::debug!("audio sink unavailable, staying silent");
            }
        }
        self.sink.as_mut()
    }

    /// Play the track for a screen. Re-entry with the same resolved source is
    /// a no-op so playback continues uninterrupted; a different source is
    /// loaded and restarted from zero. Start failures are swallowed.
    pub fn play(&mut self, screen: ScreenId) {
        let path = self.tracks.track(screen).to_string();
        let muted = self.muted;
        let changed = self.current.as_deref() != Some(path.as_str());
        if let Some(sink) = self.sink() {
            if changed {
                sink.set_source(&path);
            }
            sink.set_muted(muted);
            if sink.play().is_err() {
                log::debug!("playback blocked for {:?}, waiting for a gesture", screen);
            }
        }
        self.current = Some(path);
        self.playing = true;
    }

    /// Pause and rewind. Called when the hub closes entirely.
    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.pause();
            sink.rewind();
        }
        self.playing = false;
    }

    /// Flip the mute flag; applied immediately and to every later source.
    /// Returns the new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        let muted = self.muted;
        if let Some(sink) = self.sink() {
            sink.set_muted(muted);
        }
        self.muted
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// The currently loaded source path, if any track was ever requested.
    pub fn current_track(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether the coordinator's requested state is "playing".
    /// True even while autoplay keeps the sink silently paused.
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}
