//! playdeck-core — headless logic for the portfolio mini-games hub.
//!
//! Everything here is platform-free: four phase-machine mini-games, the hub
//! controller that mounts them and drives background audio, a cursor sparkle
//! trail, and the snapshot types the rendering layer polls each frame. The
//! companion `playdeck-web` crate wires this to the browser over wasm-bindgen.

pub mod api;
pub mod audio;
pub mod core;
pub mod effects;
pub mod games;
pub mod hub;
pub mod input;
pub mod snapshot;

pub use api::game::{GameAction, MiniGame};
pub use api::types::{GameEvent, GameId, ScreenId};
pub use audio::coordinator::{AudioCoordinator, AudioSink, PlaybackError};
pub use audio::tracks::TrackManifest;
pub use effects::sparkle::SparkleTrail;
pub use hub::controller::HubController;
pub use input::queue::{InputEvent, InputQueue};
pub use snapshot::{GameSnapshot, HubSnapshot, StaticContent};
