use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// The closed set of games the hub can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    /// "Upgrade the UI" — level-by-level clicker.
    Upgrade,
    /// "Resize the Logo" — slider chaos.
    Logo,
    /// "Colour Contrast Fail" — rating quiz.
    Contrast,
    /// "Overdesign Meter" — effect stacking.
    Overdesign,
}

impl GameId {
    pub const ALL: [GameId; 4] = [
        GameId::Upgrade,
        GameId::Logo,
        GameId::Contrast,
        GameId::Overdesign,
    ];

    /// Stable numeric index, used in GameEvent payloads and across the WASM boundary.
    pub fn index(self) -> u32 {
        match self {
            GameId::Upgrade => 0,
            GameId::Logo => 1,
            GameId::Contrast => 2,
            GameId::Overdesign => 3,
        }
    }

    pub fn from_index(idx: u32) -> Option<GameId> {
        Self::ALL.get(idx as usize).copied()
    }
}

/// Logical screen identifier — keys audio-track selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenId {
    /// The game-selector grid.
    Hub,
    /// One of the four games.
    Game(GameId),
}

/// A hub event communicated to the UI layer via a flat buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;
}

/// Event kinds written into GameEvent.kind.
pub mod event_kind {
    /// A game changed phase. a = game index, b = phase index.
    pub const PHASE: f32 = 1.0;
    /// A score/level counter changed. a = game index, b = value.
    pub const SCORE: f32 = 2.0;
    /// The overdesign meter moved. a = meter value, b = 1 when saturated.
    pub const METER: f32 = 3.0;
}
