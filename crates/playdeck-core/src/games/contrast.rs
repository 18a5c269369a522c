//! "Colour Contrast Fail" — rating quiz.
//!
//! Six colour crimes, one verdict each. Agreeing that the crime "Looks Fine
//! To Me" is what scores a point. The score is a gag, not a rubric, and the
//! literal behavior is kept on purpose.

use serde::Serialize;

use crate::api::game::{GameAction, MiniGame};
use crate::api::types::{event_kind, GameEvent, GameId};
use crate::core::rng::Rng;
use crate::core::scheduler::Scheduler;
use crate::snapshot::GameSnapshot;

/// Seconds the scream overlay covers the combo before the round advances.
const SCREAM_DURATION: f32 = 1.4;

/// One background/foreground crime scene.
#[derive(Debug, Clone, Copy)]
pub struct ColorCombo {
    pub bg: &'static str,
    pub fg: &'static str,
    pub label: &'static str,
    pub crime: &'static str,
}

pub const BAD_COMBOS: [ColorCombo; 6] = [
    ColorCombo {
        bg: "#ffff00",
        fg: "#ffffff",
        label: "White on Yellow",
        crime: "Invisible text. Screen is basically blank.",
    },
    ColorCombo {
        bg: "#ff0000",
        fg: "#00ff00",
        label: "Green on Red",
        crime: "Christmas mode + colour-blind nightmare.",
    },
    ColorCombo {
        bg: "#0000ff",
        fg: "#800080",
        label: "Purple on Blue",
        crime: "0.87:1 contrast ratio. Legally questionable.",
    },
    ColorCombo {
        bg: "#ffaaaa",
        fg: "#ff6666",
        label: "Light Red on Pink",
        crime: "Everything is vibing in the same hue. Chaos.",
    },
    ColorCombo {
        bg: "#c0c0c0",
        fg: "#d3d3d3",
        label: "Light Gray on Gray",
        crime: "WCAG AA requires 4.5:1. This is ~1.3:1. 😱",
    },
    ColorCombo {
        bg: "#00ffff",
        fg: "#ffffff",
        label: "White on Cyan",
        crime: "The 90s called. They want their geocities back.",
    },
];

/// Accessible pairs shown on the result screen.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WcagPair {
    pub bg: &'static str,
    pub fg: &'static str,
    pub label: &'static str,
    pub ratio: &'static str,
}

pub const WCAG_PALETTE: [WcagPair; 4] = [
    WcagPair {
        bg: "#0A0A0F",
        fg: "#FFFFFF",
        label: "White on Near-Black",
        ratio: "19.7:1 ✅ AAA",
    },
    WcagPair {
        bg: "#1a1a2e",
        fg: "#FF6B6B",
        label: "Coral on Dark",
        ratio: "5.4:1 ✅ AA",
    },
    WcagPair {
        bg: "#FFFFFF",
        fg: "#222222",
        label: "Dark on White",
        ratio: "16.1:1 ✅ AAA",
    },
    WcagPair {
        bg: "#4ECDC4",
        fg: "#0A0A0F",
        label: "Dark on Teal",
        ratio: "7.2:1 ✅ AAA",
    },
];

pub const SCREAMS: [&str; 5] = [
    "MY EYES 😭",
    "WCAG IS CRYING 😭",
    "ACCESSIBILITY VIOLATION 🚨",
    "USERS WITH COLOUR BLINDNESS ARE LEAVING 😱",
    "CONTRAST RATIO: 1.1:1 💀",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastPhase {
    Intro,
    Playing,
    Result,
}

impl ContrastPhase {
    pub fn index(self) -> u32 {
        match self {
            ContrastPhase::Intro => 0,
            ContrastPhase::Playing => 1,
            ContrastPhase::Result => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ContrastPhase::Intro => "intro",
            ContrastPhase::Playing => "playing",
            ContrastPhase::Result => "result",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContrastTimer {
    EndScream,
}

pub struct ContrastGame {
    phase: ContrastPhase,
    round: usize,
    score: u32,
    /// Index into SCREAMS while the overlay is up.
    scream: Option<usize>,
    timers: Scheduler<ContrastTimer>,
    rng: Rng,
}

impl ContrastGame {
    pub fn new() -> Self {
        Self::with_seed(0x5eed)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            phase: ContrastPhase::Intro,
            round: 0,
            score: 0,
            scream: None,
            timers: Scheduler::new(),
            rng: Rng::new(seed),
        }
    }

    pub fn phase(&self) -> ContrastPhase {
        self.phase
    }

    pub fn round(&self) -> usize {
        self.round
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_screaming(&self) -> bool {
        self.scream.is_some()
    }

    pub fn current_combo(&self) -> &'static ColorCombo {
        &BAD_COMBOS[self.round % BAD_COMBOS.len()]
    }

    fn set_phase(&mut self, phase: ContrastPhase, events: &mut Vec<GameEvent>) {
        self.phase = phase;
        events.push(GameEvent {
            kind: event_kind::PHASE,
            a: GameId::Contrast.index() as f32,
            b: phase.index() as f32,
            c: 0.0,
        });
    }

    fn zero_counters(&mut self) {
        self.round = 0;
        self.score = 0;
        self.scream = None;
        self.timers.clear();
    }

    /// Record a verdict on the current combo. `agree` = "Looks Fine To Me",
    /// which is the choice that scores. Verdicts during the scream window drop.
    pub fn verdict(&mut self, agree: bool, events: &mut Vec<GameEvent>) {
        if self.phase != ContrastPhase::Playing || self.scream.is_some() {
            return;
        }
        self.scream = Some(self.rng.next_int(SCREAMS.len() as u32) as usize);
        if agree {
            self.score += 1;
            events.push(GameEvent {
                kind: event_kind::SCORE,
                a: GameId::Contrast.index() as f32,
                b: self.score as f32,
                c: 0.0,
            });
        }
        self.timers.schedule(SCREAM_DURATION, ContrastTimer::EndScream);
    }
}

impl Default for ContrastGame {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for ContrastGame {
    fn id(&self) -> GameId {
        GameId::Contrast
    }

    fn start(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase != ContrastPhase::Intro {
            return;
        }
        self.zero_counters();
        self.set_phase(ContrastPhase::Playing, events);
    }

    fn action(&mut self, action: GameAction, events: &mut Vec<GameEvent>) {
        if let GameAction::Verdict(agree) = action {
            self.verdict(agree, events);
        }
    }

    fn tick(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        for timer in self.timers.tick(dt) {
            match timer {
                ContrastTimer::EndScream => {
                    self.scream = None;
                    if self.round + 1 >= BAD_COMBOS.len() {
                        self.set_phase(ContrastPhase::Result, events);
                    } else {
                        self.round += 1;
                    }
                }
            }
        }
    }

    fn restart(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase != ContrastPhase::Result {
            return;
        }
        self.zero_counters();
        self.set_phase(ContrastPhase::Playing, events);
    }

    fn snapshot(&self) -> GameSnapshot {
        let combo = self.current_combo();
        GameSnapshot::Contrast {
            phase: self.phase.name(),
            round: self.round,
            rounds: BAD_COMBOS.len(),
            score: self.score,
            combo_label: combo.label,
            combo_bg: combo.bg,
            combo_fg: combo.fg,
            crime: combo.crime,
            scream: self.scream.map(|i| SCREAMS[i]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> (ContrastGame, Vec<GameEvent>) {
        let mut g = ContrastGame::new();
        let mut ev = Vec::new();
        g.start(&mut ev);
        (g, ev)
    }

    fn settle(g: &mut ContrastGame, ev: &mut Vec<GameEvent>) {
        g.tick(SCREAM_DURATION + 0.1, ev);
    }

    #[test]
    fn verdict_before_start_is_ignored() {
        let mut g = ContrastGame::new();
        let mut ev = Vec::new();
        g.verdict(true, &mut ev);
        assert_eq!(g.score(), 0);
        assert_eq!(g.phase(), ContrastPhase::Intro);
    }

    #[test]
    fn agreeing_with_the_crime_scores() {
        let (mut g, mut ev) = started();
        g.verdict(true, &mut ev);
        assert_eq!(g.score(), 1);
    }

    #[test]
    fn condemning_the_crime_does_not_score() {
        let (mut g, mut ev) = started();
        g.verdict(false, &mut ev);
        assert_eq!(g.score(), 0);
    }

    #[test]
    fn verdicts_during_scream_are_dropped() {
        let (mut g, mut ev) = started();
        g.verdict(true, &mut ev);
        g.verdict(true, &mut ev);
        g.verdict(true, &mut ev);
        assert_eq!(g.score(), 1);
        assert_eq!(g.round(), 0);
    }

    #[test]
    fn round_advances_after_scream_window() {
        let (mut g, mut ev) = started();
        g.verdict(false, &mut ev);
        assert!(g.is_screaming());
        settle(&mut g, &mut ev);
        assert!(!g.is_screaming());
        assert_eq!(g.round(), 1);
    }

    #[test]
    fn six_brave_verdicts_reach_result_with_full_score() {
        let (mut g, mut ev) = started();
        for _ in 0..BAD_COMBOS.len() {
            g.verdict(true, &mut ev);
            settle(&mut g, &mut ev);
        }
        assert_eq!(g.phase(), ContrastPhase::Result);
        assert_eq!(g.score(), 6);
    }

    #[test]
    fn restart_from_result_zeroes_everything() {
        let (mut g, mut ev) = started();
        for _ in 0..BAD_COMBOS.len() {
            g.verdict(true, &mut ev);
            settle(&mut g, &mut ev);
        }
        g.restart(&mut ev);
        assert_eq!(g.phase(), ContrastPhase::Playing);
        assert_eq!(g.round(), 0);
        assert_eq!(g.score(), 0);
    }

    #[test]
    fn combos_cycle_by_round() {
        let (mut g, mut ev) = started();
        assert_eq!(g.current_combo().label, "White on Yellow");
        g.verdict(false, &mut ev);
        settle(&mut g, &mut ev);
        assert_eq!(g.current_combo().label, "Green on Red");
    }
}
