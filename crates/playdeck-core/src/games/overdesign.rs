//! "Overdesign Meter" — effect-stacking game.
//!
//! Five effects, each appliable once, with costs that sum to exactly 100.
//! Saturating the meter schedules the explosion a beat later so the bar is
//! seen hitting full before the screen flips.

use serde::Serialize;

use crate::api::game::{GameAction, MiniGame};
use crate::api::types::{event_kind, GameEvent, GameId};
use crate::core::scheduler::Scheduler;
use crate::snapshot::GameSnapshot;

pub const METER_MAX: u32 = 100;
/// Pause between saturating the meter and the exploded screen.
const EXPLODE_DELAY: f32 = 0.6;
/// How long the mock UI shakes after each applied effect.
const SHAKE_DURATION: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    Shadow,
    Gradient,
    Glow,
    Animation,
    Border,
}

impl EffectKind {
    pub const ALL: [EffectKind; 5] = [
        EffectKind::Shadow,
        EffectKind::Gradient,
        EffectKind::Glow,
        EffectKind::Animation,
        EffectKind::Border,
    ];

    /// Meter cost. The five costs sum to exactly 100.
    pub fn cost(self) -> u32 {
        match self {
            EffectKind::Shadow => 15,
            EffectKind::Gradient => 20,
            EffectKind::Glow => 18,
            EffectKind::Animation => 25,
            EffectKind::Border => 22,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EffectKind::Shadow => "Drop Shadow",
            EffectKind::Gradient => "Background Gradient",
            EffectKind::Glow => "Text Glow",
            EffectKind::Animation => "CSS Animation",
            EffectKind::Border => "Rainbow Border",
        }
    }

    fn slot(self) -> usize {
        match self {
            EffectKind::Shadow => 0,
            EffectKind::Gradient => 1,
            EffectKind::Glow => 2,
            EffectKind::Animation => 3,
            EffectKind::Border => 4,
        }
    }

    pub fn from_index(idx: u32) -> Option<EffectKind> {
        Self::ALL.get(idx as usize).copied()
    }
}

/// Meter bands shown next to the bar.
pub fn meter_label(meter: u32) -> &'static str {
    match meter {
        0 => "Clean Slate",
        1..=30 => "Getting Busy...",
        31..=60 => "Overwhelmed 😰",
        61..=85 => "CHAOS MODE 💀",
        _ => "EXPLODED 🤯",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverdesignPhase {
    Intro,
    Playing,
    Exploded,
    Reset,
}

impl OverdesignPhase {
    pub fn index(self) -> u32 {
        match self {
            OverdesignPhase::Intro => 0,
            OverdesignPhase::Playing => 1,
            OverdesignPhase::Exploded => 2,
            OverdesignPhase::Reset => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OverdesignPhase::Intro => "intro",
            OverdesignPhase::Playing => "playing",
            OverdesignPhase::Exploded => "exploded",
            OverdesignPhase::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverdesignTimer {
    Explode,
    EndShake,
}

pub struct OverdesignGame {
    phase: OverdesignPhase,
    meter: u32,
    applied: [bool; 5],
    shaking: bool,
    timers: Scheduler<OverdesignTimer>,
}

impl OverdesignGame {
    pub fn new() -> Self {
        Self {
            phase: OverdesignPhase::Intro,
            meter: 0,
            applied: [false; 5],
            shaking: false,
            timers: Scheduler::new(),
        }
    }

    pub fn phase(&self) -> OverdesignPhase {
        self.phase
    }

    pub fn meter(&self) -> u32 {
        self.meter
    }

    pub fn is_applied(&self, fx: EffectKind) -> bool {
        self.applied[fx.slot()]
    }

    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    fn set_phase(&mut self, phase: OverdesignPhase, events: &mut Vec<GameEvent>) {
        self.phase = phase;
        events.push(GameEvent {
            kind: event_kind::PHASE,
            a: GameId::Overdesign.index() as f32,
            b: phase.index() as f32,
            c: 0.0,
        });
    }

    fn zero_counters(&mut self) {
        self.meter = 0;
        self.applied = [false; 5];
        self.shaking = false;
        self.timers.clear();
    }

    /// Apply one effect. Already-applied effects and non-playing phases no-op.
    pub fn apply_effect(&mut self, fx: EffectKind, events: &mut Vec<GameEvent>) {
        if self.phase != OverdesignPhase::Playing || self.applied[fx.slot()] {
            return;
        }
        self.applied[fx.slot()] = true;
        self.meter = (self.meter + fx.cost()).min(METER_MAX);

        self.shaking = true;
        self.timers.schedule(SHAKE_DURATION, OverdesignTimer::EndShake);

        let saturated = self.meter >= METER_MAX;
        events.push(GameEvent {
            kind: event_kind::METER,
            a: self.meter as f32,
            b: if saturated { 1.0 } else { 0.0 },
            c: 0.0,
        });
        if saturated {
            self.timers.schedule(EXPLODE_DELAY, OverdesignTimer::Explode);
        }
    }

    /// "Reset to Clean" from the exploded screen.
    pub fn reset(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase != OverdesignPhase::Exploded {
            return;
        }
        self.zero_counters();
        self.set_phase(OverdesignPhase::Reset, events);
    }
}

impl Default for OverdesignGame {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for OverdesignGame {
    fn id(&self) -> GameId {
        GameId::Overdesign
    }

    fn start(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase != OverdesignPhase::Intro {
            return;
        }
        self.zero_counters();
        self.set_phase(OverdesignPhase::Playing, events);
    }

    fn action(&mut self, action: GameAction, events: &mut Vec<GameEvent>) {
        match action {
            GameAction::ApplyEffect(fx) => self.apply_effect(fx, events),
            GameAction::Reset => self.reset(events),
            _ => {}
        }
    }

    fn tick(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        for timer in self.timers.tick(dt) {
            match timer {
                OverdesignTimer::EndShake => self.shaking = false,
                OverdesignTimer::Explode => {
                    if self.phase == OverdesignPhase::Playing {
                        self.set_phase(OverdesignPhase::Exploded, events);
                    }
                }
            }
        }
    }

    fn restart(&mut self, events: &mut Vec<GameEvent>) {
        if !matches!(
            self.phase,
            OverdesignPhase::Exploded | OverdesignPhase::Reset
        ) {
            return;
        }
        self.zero_counters();
        self.set_phase(OverdesignPhase::Playing, events);
    }

    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::Overdesign {
            phase: self.phase.name(),
            meter: self.meter,
            meter_label: meter_label(self.meter),
            applied: EffectKind::ALL
                .iter()
                .copied()
                .filter(|fx| self.is_applied(*fx))
                .collect(),
            shaking: self.shaking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> (OverdesignGame, Vec<GameEvent>) {
        let mut g = OverdesignGame::new();
        let mut ev = Vec::new();
        g.start(&mut ev);
        (g, ev)
    }

    #[test]
    fn costs_sum_to_exactly_meter_max() {
        let total: u32 = EffectKind::ALL.iter().map(|fx| fx.cost()).sum();
        assert_eq!(total, METER_MAX);
    }

    #[test]
    fn effects_before_start_are_ignored() {
        let mut g = OverdesignGame::new();
        let mut ev = Vec::new();
        g.apply_effect(EffectKind::Shadow, &mut ev);
        assert_eq!(g.meter(), 0);
    }

    #[test]
    fn each_effect_applies_once() {
        let (mut g, mut ev) = started();
        g.apply_effect(EffectKind::Shadow, &mut ev);
        g.apply_effect(EffectKind::Shadow, &mut ev);
        assert_eq!(g.meter(), 15);
    }

    #[test]
    fn all_effects_saturate_then_explode_after_delay() {
        let (mut g, mut ev) = started();
        for fx in EffectKind::ALL {
            g.apply_effect(fx, &mut ev);
        }
        assert_eq!(g.meter(), METER_MAX);
        // Explosion is deferred, not immediate.
        assert_eq!(g.phase(), OverdesignPhase::Playing);
        g.tick(0.7, &mut ev);
        assert_eq!(g.phase(), OverdesignPhase::Exploded);
    }

    #[test]
    fn meter_never_exceeds_max() {
        let (mut g, mut ev) = started();
        for fx in EffectKind::ALL {
            g.apply_effect(fx, &mut ev);
            assert!(g.meter() <= METER_MAX);
        }
    }

    #[test]
    fn shake_window_ends() {
        let (mut g, mut ev) = started();
        g.apply_effect(EffectKind::Glow, &mut ev);
        assert!(g.is_shaking());
        g.tick(0.5, &mut ev);
        assert!(!g.is_shaking());
    }

    #[test]
    fn reset_goes_to_reset_screen_with_zeroed_counters() {
        let (mut g, mut ev) = started();
        for fx in EffectKind::ALL {
            g.apply_effect(fx, &mut ev);
        }
        g.tick(0.7, &mut ev);
        g.reset(&mut ev);
        assert_eq!(g.phase(), OverdesignPhase::Reset);
        assert_eq!(g.meter(), 0);
        assert!(!g.is_applied(EffectKind::Shadow));
    }

    #[test]
    fn restart_from_reset_returns_to_playing() {
        let (mut g, mut ev) = started();
        for fx in EffectKind::ALL {
            g.apply_effect(fx, &mut ev);
        }
        g.tick(0.7, &mut ev);
        g.reset(&mut ev);
        g.restart(&mut ev);
        assert_eq!(g.phase(), OverdesignPhase::Playing);
        assert_eq!(g.meter(), 0);
    }

    #[test]
    fn stale_explode_timer_cannot_fire_after_reset() {
        let (mut g, mut ev) = started();
        for fx in EffectKind::ALL {
            g.apply_effect(fx, &mut ev);
        }
        g.tick(0.7, &mut ev);
        g.reset(&mut ev);
        g.restart(&mut ev);
        // Well past the old explode delay; phase must not regress.
        g.tick(5.0, &mut ev);
        assert_eq!(g.phase(), OverdesignPhase::Playing);
    }

    #[test]
    fn meter_labels_track_bands() {
        assert_eq!(meter_label(0), "Clean Slate");
        assert_eq!(meter_label(15), "Getting Busy...");
        assert_eq!(meter_label(53), "Overwhelmed 😰");
        assert_eq!(meter_label(78), "CHAOS MODE 💀");
        assert_eq!(meter_label(100), "EXPLODED 🤯");
    }
}
