//! wasm-bindgen surface for the mini-games hub.
//!
//! One `thread_local!` runner, free-function exports. The page calls
//! `hub_init()` once, pushes inputs as DOM events arrive, calls `hub_tick(dt)`
//! from requestAnimationFrame, then reads the snapshot JSON and the sparkle /
//! event buffers.

pub mod audio_sink;
pub mod runner;

pub use audio_sink::WebAudioSink;
pub use runner::HubRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use playdeck_core::{GameAction, GameId, InputEvent, TrackManifest};

thread_local! {
    static RUNNER: RefCell<Option<HubRunner<WebAudioSink>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut HubRunner<WebAudioSink>) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Hub not initialized. Call hub_init() first.");
        f(runner)
    })
}

#[wasm_bindgen]
pub fn hub_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(HubRunner::new(TrackManifest::default()));
    });
    log::info!("mini-games hub: initialized");
}

#[wasm_bindgen]
pub fn hub_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// Replace the screen→track mapping with a JSON manifest.
/// Invalid JSON keeps the shipped defaults.
#[wasm_bindgen]
pub fn hub_load_tracks(json: &str) {
    with_runner(|r| r.load_tracks(json));
}

// ---- Input ----

#[wasm_bindgen]
pub fn hub_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn hub_open() {
    with_runner(|r| r.push_input(InputEvent::OpenHub));
}

#[wasm_bindgen]
pub fn hub_close() {
    with_runner(|r| r.push_input(InputEvent::CloseAll));
}

#[wasm_bindgen]
pub fn hub_back() {
    with_runner(|r| r.push_input(InputEvent::BackToHub));
}

/// Mount a game by its stable index (0 upgrade, 1 logo, 2 contrast,
/// 3 overdesign). Unknown indices are ignored.
#[wasm_bindgen]
pub fn hub_select_game(index: u32) {
    if let Some(id) = GameId::from_index(index) {
        with_runner(|r| r.push_input(InputEvent::SelectGame(id)));
    }
}

#[wasm_bindgen]
pub fn hub_toggle_mute() {
    with_runner(|r| r.push_input(InputEvent::ToggleMute));
}

#[wasm_bindgen]
pub fn hub_start_game() {
    with_runner(|r| r.push_input(InputEvent::StartGame));
}

#[wasm_bindgen]
pub fn hub_restart_game() {
    with_runner(|r| r.push_input(InputEvent::RestartGame));
}

#[wasm_bindgen]
pub fn hub_set_size(size: f32) {
    with_runner(|r| r.push_input(InputEvent::Action(GameAction::SetSize(size))));
}

#[wasm_bindgen]
pub fn hub_auto_fix() {
    with_runner(|r| r.push_input(InputEvent::Action(GameAction::AutoFix)));
}

/// Overdesign: apply an effect by slot (0 shadow, 1 gradient, 2 glow,
/// 3 animation, 4 border).
#[wasm_bindgen]
pub fn hub_apply_effect(slot: u32) {
    if let Some(kind) = playdeck_core::games::overdesign::EffectKind::from_index(slot) {
        with_runner(|r| r.push_input(InputEvent::Action(GameAction::ApplyEffect(kind))));
    }
}

#[wasm_bindgen]
pub fn hub_reset_design() {
    with_runner(|r| r.push_input(InputEvent::Action(GameAction::Reset)));
}

/// Contrast: verdict on the current combo. `agree` = "Looks Fine To Me".
#[wasm_bindgen]
pub fn hub_verdict(agree: bool) {
    with_runner(|r| r.push_input(InputEvent::Action(GameAction::Verdict(agree))));
}

#[wasm_bindgen]
pub fn hub_upgrade() {
    with_runner(|r| r.push_input(InputEvent::Action(GameAction::Upgrade)));
}

// ---- Loader ----

#[wasm_bindgen]
pub fn loader_start() {
    with_runner(|r| r.loader_start());
}

#[wasm_bindgen]
pub fn loader_cancel() {
    with_runner(|r| r.loader_cancel());
}

#[wasm_bindgen]
pub fn loader_progress() -> f32 {
    with_runner(|r| r.loader_progress())
}

#[wasm_bindgen]
pub fn loader_done() -> bool {
    with_runner(|r| r.loader_done())
}

/// Status-line cycle count; the page maps it onto its own copy list.
#[wasm_bindgen]
pub fn loader_message_index() -> u32 {
    with_runner(|r| r.loader_message_index())
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn hub_snapshot() -> String {
    with_runner(|r| r.snapshot_json().to_string())
}

/// Fixed display tables (effect buttons, WCAG palette, upgrade levels).
/// Fetch once at startup; never changes.
#[wasm_bindgen]
pub fn hub_static_content() -> String {
    playdeck_core::StaticContent::new().to_json()
}

#[wasm_bindgen]
pub fn hub_muted() -> bool {
    with_runner(|r| r.muted())
}

#[wasm_bindgen]
pub fn get_sparkles_ptr() -> *const f32 {
    with_runner(|r| r.sparkles_ptr())
}

#[wasm_bindgen]
pub fn get_sparkles_len() -> u32 {
    with_runner(|r| r.sparkles_len())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len())
}
