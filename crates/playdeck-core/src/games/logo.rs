//! "Resize the Logo" — slider chaos game.
//!
//! The client wants the logo bigger. The slider goes from a sensible 48px to
//! an unhinged 460px; crossing 440 collapses the layout into the chaos screen.

use crate::api::game::{GameAction, MiniGame};
use crate::api::types::{event_kind, GameEvent, GameId};
use crate::snapshot::GameSnapshot;

pub const MIN_SIZE: f32 = 48.0;
pub const MAX_SIZE: f32 = 460.0;
/// Size at which the layout gives up.
pub const CHAOS_THRESHOLD: f32 = 440.0;
/// Pixels of growth per client-quote advance.
const LINE_STEP: f32 = 52.0;

pub const CLIENT_LINES: [&str; 8] = [
    "Hmm... a little bigger?",
    "Still not seeing it. More.",
    "BIGGER.",
    "YES. BIGGER.",
    "MY EYES AREN'T GOOD. BIGGER!",
    "THE LOGO IS THE BRAND. BIGGER!!",
    "I WANT IT TOUCHING BOTH SIDES!!!",
    "P E R F E C T 🤌",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoPhase {
    Intro,
    Playing,
    Chaos,
    Fixed,
}

impl LogoPhase {
    pub fn index(self) -> u32 {
        match self {
            LogoPhase::Intro => 0,
            LogoPhase::Playing => 1,
            LogoPhase::Chaos => 2,
            LogoPhase::Fixed => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LogoPhase::Intro => "intro",
            LogoPhase::Playing => "playing",
            LogoPhase::Chaos => "chaos",
            LogoPhase::Fixed => "fixed",
        }
    }
}

pub struct LogoGame {
    phase: LogoPhase,
    size: f32,
    line_idx: usize,
}

impl LogoGame {
    pub fn new() -> Self {
        Self {
            phase: LogoPhase::Intro,
            size: MIN_SIZE,
            line_idx: 0,
        }
    }

    pub fn phase(&self) -> LogoPhase {
        self.phase
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn line_idx(&self) -> usize {
        self.line_idx
    }

    fn set_phase(&mut self, phase: LogoPhase, events: &mut Vec<GameEvent>) {
        self.phase = phase;
        events.push(GameEvent {
            kind: event_kind::PHASE,
            a: GameId::Logo.index() as f32,
            b: phase.index() as f32,
            c: 0.0,
        });
    }

    /// Move the slider. Values outside [48, 460] clamp; ≥ 440 tips into chaos.
    pub fn set_size(&mut self, requested: f32, events: &mut Vec<GameEvent>) {
        if self.phase != LogoPhase::Playing {
            return;
        }
        self.size = requested.clamp(MIN_SIZE, MAX_SIZE);

        // Advance the client quote roughly every 52px of growth.
        let step = ((self.size - MIN_SIZE) / LINE_STEP).floor() as usize;
        self.line_idx = step.min(CLIENT_LINES.len() - 1);

        if self.size >= CHAOS_THRESHOLD {
            self.set_phase(LogoPhase::Chaos, events);
        }
    }

    /// "Auto-Fix It" — snap back to a sane size.
    pub fn auto_fix(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase != LogoPhase::Chaos {
            return;
        }
        self.size = MIN_SIZE;
        self.set_phase(LogoPhase::Fixed, events);
    }
}

impl Default for LogoGame {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for LogoGame {
    fn id(&self) -> GameId {
        GameId::Logo
    }

    fn start(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase != LogoPhase::Intro {
            return;
        }
        self.size = MIN_SIZE;
        self.line_idx = 0;
        self.set_phase(LogoPhase::Playing, events);
    }

    fn action(&mut self, action: GameAction, events: &mut Vec<GameEvent>) {
        match action {
            GameAction::SetSize(v) => self.set_size(v, events),
            GameAction::AutoFix => self.auto_fix(events),
            _ => {}
        }
    }

    fn tick(&mut self, _dt: f32, _events: &mut Vec<GameEvent>) {}

    fn restart(&mut self, events: &mut Vec<GameEvent>) {
        if !matches!(self.phase, LogoPhase::Chaos | LogoPhase::Fixed) {
            return;
        }
        self.size = MIN_SIZE;
        self.line_idx = 0;
        self.set_phase(LogoPhase::Playing, events);
    }

    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::Logo {
            phase: self.phase.name(),
            size: self.size,
            client_line: CLIENT_LINES[self.line_idx],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> (LogoGame, Vec<GameEvent>) {
        let mut g = LogoGame::new();
        let mut ev = Vec::new();
        g.start(&mut ev);
        (g, ev)
    }

    #[test]
    fn actions_before_start_are_ignored() {
        let mut g = LogoGame::new();
        let mut ev = Vec::new();
        g.set_size(400.0, &mut ev);
        assert_eq!(g.phase(), LogoPhase::Intro);
        assert_eq!(g.size(), MIN_SIZE);
    }

    #[test]
    fn size_clamps_to_declared_range() {
        let (mut g, mut ev) = started();
        g.set_size(-50.0, &mut ev);
        assert_eq!(g.size(), MIN_SIZE);
        g.set_size(9000.0, &mut ev);
        assert_eq!(g.size(), MAX_SIZE);
    }

    #[test]
    fn max_size_triggers_chaos() {
        let (mut g, mut ev) = started();
        g.set_size(460.0, &mut ev);
        assert_eq!(g.phase(), LogoPhase::Chaos);
    }

    #[test]
    fn below_threshold_stays_playing() {
        let (mut g, mut ev) = started();
        g.set_size(439.0, &mut ev);
        assert_eq!(g.phase(), LogoPhase::Playing);
    }

    #[test]
    fn client_lines_advance_with_size() {
        let (mut g, mut ev) = started();
        g.set_size(48.0, &mut ev);
        assert_eq!(g.line_idx(), 0);
        g.set_size(160.0, &mut ev);
        assert_eq!(g.line_idx(), 2);
        g.set_size(439.0, &mut ev);
        assert_eq!(g.line_idx(), 7);
    }

    #[test]
    fn auto_fix_restores_balance() {
        let (mut g, mut ev) = started();
        g.set_size(460.0, &mut ev);
        g.auto_fix(&mut ev);
        assert_eq!(g.phase(), LogoPhase::Fixed);
        assert_eq!(g.size(), MIN_SIZE);
    }

    #[test]
    fn restart_returns_to_playing_with_defaults() {
        let (mut g, mut ev) = started();
        g.set_size(460.0, &mut ev);
        g.auto_fix(&mut ev);
        g.restart(&mut ev);
        assert_eq!(g.phase(), LogoPhase::Playing);
        assert_eq!(g.size(), MIN_SIZE);
        assert_eq!(g.line_idx(), 0);
    }

    #[test]
    fn slider_ignored_in_chaos() {
        let (mut g, mut ev) = started();
        g.set_size(460.0, &mut ev);
        g.set_size(100.0, &mut ev);
        assert_eq!(g.size(), MAX_SIZE);
        assert_eq!(g.phase(), LogoPhase::Chaos);
    }
}
