use crate::api::types::{GameEvent, GameId};
use crate::games::overdesign::EffectKind;
use crate::snapshot::GameSnapshot;

/// A user input directed at the active game.
/// Actions that don't apply to the mounted game (or its current phase)
/// are silently ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameAction {
    /// Slider game: requested logo size. Clamped, never rejected.
    SetSize(f32),
    /// Overdesign: apply one effect. Each effect applies at most once.
    ApplyEffect(EffectKind),
    /// Contrast: verdict on the current combo. `true` = "Looks Fine To Me".
    Verdict(bool),
    /// Upgrade: advance one level.
    Upgrade,
    /// Slider game: auto-fix out of chaos.
    AutoFix,
    /// Overdesign: clean up out of the exploded state.
    Reset,
}

/// The contract every mini-game fulfills.
///
/// Games are mounted by the hub controller when selected and dropped when the
/// player backs out or the hub closes; nothing survives unmount. Transition
/// notifications are pushed into the shared event buffer for the UI to drain.
pub trait MiniGame {
    fn id(&self) -> GameId;

    /// Leave the intro screen. No-op from any other phase.
    fn start(&mut self, events: &mut Vec<GameEvent>);

    /// Apply a user action. Only meaningful while playing; otherwise ignored.
    fn action(&mut self, action: GameAction, events: &mut Vec<GameEvent>);

    /// Advance game-local timers (deferred transitions, shake windows).
    fn tick(&mut self, dt: f32, events: &mut Vec<GameEvent>);

    /// Return to a fresh playable state from a terminal phase.
    fn restart(&mut self, events: &mut Vec<GameEvent>);

    /// Read-only view for the rendering layer.
    fn snapshot(&self) -> GameSnapshot;
}
