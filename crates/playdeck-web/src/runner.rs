use playdeck_core::core::sequence::{Cadence, ProgressSequence};
use playdeck_core::{
    AudioSink, GameEvent, HubController, InputEvent, InputQueue, SparkleTrail, TrackManifest,
};

use glam::Vec2;

/// Seconds between loader status-line changes. The page owns the copy and
/// renders `message index % its list length`.
const MESSAGE_INTERVAL: f32 = 0.9;

/// The scripted intro loading bar plus its status-line cadence.
struct Loader {
    progress: ProgressSequence,
    messages: Cadence,
    message_idx: u32,
}

impl Loader {
    fn new() -> Self {
        Self {
            progress: ProgressSequence::loader(),
            messages: Cadence::new(MESSAGE_INTERVAL),
            message_idx: 0,
        }
    }

    fn tick(&mut self, dt: f32) {
        self.progress.tick(dt);
        self.message_idx += self.messages.tick(dt);
    }
}

/// Drives the hub from the browser event loop.
///
/// The page creates one `thread_local!` HubRunner and exports free functions
/// via `#[wasm_bindgen]`, because wasm-bindgen cannot export generic structs
/// directly. Inputs buffer between frames; each `tick()` drains them, advances
/// the mounted game and the sparkle trail, and repacks the flat buffers the
/// page reads through pointer accessors.
pub struct HubRunner<S: AudioSink> {
    hub: HubController<S>,
    input: InputQueue,
    sparkles: SparkleTrail,
    loader: Option<Loader>,
    /// Phase/score events drained from the hub each frame.
    event_buffer: Vec<GameEvent>,
    snapshot_json: String,
}

impl<S: AudioSink> HubRunner<S> {
    pub fn new(tracks: TrackManifest) -> Self {
        Self {
            hub: HubController::new(tracks),
            input: InputQueue::new(),
            sparkles: SparkleTrail::new(),
            loader: None,
            event_buffer: Vec::new(),
            snapshot_json: String::new(),
        }
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    pub fn load_tracks(&mut self, json: &str) {
        match TrackManifest::from_json(json) {
            Ok(tracks) => {
                // Rebuilds the hub, so call during page setup, before open().
                self.hub = HubController::new(tracks);
            }
            Err(err) => log::warn!("bad track manifest, keeping defaults: {}", err),
        }
    }

    /// One frame: apply inputs, advance timers, repack output buffers.
    pub fn tick(&mut self, dt: f32) {
        for event in self.input.drain() {
            self.apply(event);
        }

        self.hub.tick(dt);
        self.sparkles.tick(dt);
        if let Some(loader) = self.loader.as_mut() {
            loader.tick(dt);
        }

        self.sparkles.write_buffer();
        self.event_buffer = self.hub.drain_events();
        self.snapshot_json = self.hub.snapshot().to_json();
    }

    fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => self.sparkles.spawn(Vec2::new(x, y)),
            InputEvent::OpenHub => self.hub.open(),
            InputEvent::CloseAll => self.hub.close_all(),
            InputEvent::BackToHub => self.hub.back_to_hub(),
            InputEvent::SelectGame(id) => self.hub.select_game(id),
            InputEvent::ToggleMute => {
                self.hub.toggle_mute();
            }
            InputEvent::StartGame => self.hub.start_game(),
            InputEvent::RestartGame => self.hub.restart_game(),
            InputEvent::Action(action) => self.hub.game_action(action),
        }
    }

    // ---- Loader ----

    pub fn loader_start(&mut self) {
        self.loader = Some(Loader::new());
    }

    /// Freeze the loader (user skipped past it).
    pub fn loader_cancel(&mut self) {
        if let Some(loader) = self.loader.as_mut() {
            loader.progress.cancel();
        }
    }

    pub fn loader_progress(&self) -> f32 {
        self.loader.as_ref().map_or(0.0, |l| l.progress.value())
    }

    pub fn loader_done(&self) -> bool {
        self.loader.as_ref().is_some_and(|l| l.progress.is_done())
    }

    /// How many times the status line has cycled since the loader started.
    pub fn loader_message_index(&self) -> u32 {
        self.loader.as_ref().map_or(0, |l| l.message_idx)
    }

    // ---- Snapshot / buffer accessors ----

    pub fn snapshot_json(&self) -> &str {
        &self.snapshot_json
    }

    pub fn muted(&self) -> bool {
        self.hub.audio().muted()
    }

    pub fn sparkles_ptr(&self) -> *const f32 {
        self.sparkles.buffer_ptr()
    }

    pub fn sparkles_len(&self) -> u32 {
        self.sparkles.buffer_len() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.event_buffer.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        (self.event_buffer.len() * GameEvent::FLOATS) as u32
    }
}
