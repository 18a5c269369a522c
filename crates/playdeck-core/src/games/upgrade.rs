//! "Upgrade the UI" — level-by-level clicker.
//!
//! Six snapshots of the same mock site, from 2003 table-layout horror to
//! premium glassmorphism. Each click runs a short apply window before the
//! level flips; landing on the final level schedules the victory screen.

use serde::Serialize;

use crate::api::game::{GameAction, MiniGame};
use crate::api::types::{event_kind, GameEvent, GameId};
use crate::core::scheduler::Scheduler;
use crate::snapshot::GameSnapshot;

/// Seconds the "Applying..." state runs before the level advances.
const APPLY_DURATION: f32 = 0.4;
/// Pause on the final level before the victory screen.
const OVER_DELAY: f32 = 1.2;

/// Display data for one design era.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Level {
    pub name: &'static str,
    pub tagline: &'static str,
    pub emoji: &'static str,
    /// What the next upgrade will do (meaningless on the final level).
    pub description: &'static str,
}

pub const LEVELS: [Level; 6] = [
    Level {
        name: "Level 0",
        tagline: "2003 Era 💀",
        emoji: "🤢",
        description: "Add whitespace",
    },
    Level {
        name: "Level 1",
        tagline: "Added Whitespace ✅",
        emoji: "😮‍💨",
        description: "Improve typography",
    },
    Level {
        name: "Level 2",
        tagline: "Better Typography ✅",
        emoji: "🎯",
        description: "Apply a grid",
    },
    Level {
        name: "Level 3",
        tagline: "Grid Applied ✅",
        emoji: "😎",
        description: "Add modern UI",
    },
    Level {
        name: "Level 4",
        tagline: "Modern UI ✅",
        emoji: "🔥",
        description: "Premium design",
    },
    Level {
        name: "Level 5 — FINAL",
        tagline: "Premium Design ✨",
        emoji: "💎",
        description: "Perfection achieved",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradePhase {
    Intro,
    Playing,
    Over,
}

impl UpgradePhase {
    pub fn index(self) -> u32 {
        match self {
            UpgradePhase::Intro => 0,
            UpgradePhase::Playing => 1,
            UpgradePhase::Over => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UpgradePhase::Intro => "intro",
            UpgradePhase::Playing => "playing",
            UpgradePhase::Over => "over",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpgradeTimer {
    FinishApply,
    GameOver,
}

pub struct UpgradeGame {
    phase: UpgradePhase,
    level: usize,
    applying: bool,
    timers: Scheduler<UpgradeTimer>,
}

impl UpgradeGame {
    pub fn new() -> Self {
        Self {
            phase: UpgradePhase::Intro,
            level: 0,
            applying: false,
            timers: Scheduler::new(),
        }
    }

    pub fn phase(&self) -> UpgradePhase {
        self.phase
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn is_applying(&self) -> bool {
        self.applying
    }

    pub fn is_final_level(&self) -> bool {
        self.level == LEVELS.len() - 1
    }

    fn set_phase(&mut self, phase: UpgradePhase, events: &mut Vec<GameEvent>) {
        self.phase = phase;
        events.push(GameEvent {
            kind: event_kind::PHASE,
            a: GameId::Upgrade.index() as f32,
            b: phase.index() as f32,
            c: 0.0,
        });
    }

    /// Click the upgrade button. Ignored at the final level and while a
    /// previous upgrade is still applying.
    pub fn upgrade(&mut self) {
        if self.phase != UpgradePhase::Playing || self.is_final_level() || self.applying {
            return;
        }
        self.applying = true;
        self.timers.schedule(APPLY_DURATION, UpgradeTimer::FinishApply);
    }
}

impl Default for UpgradeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for UpgradeGame {
    fn id(&self) -> GameId {
        GameId::Upgrade
    }

    fn start(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase != UpgradePhase::Intro {
            return;
        }
        self.level = 0;
        self.applying = false;
        self.timers.clear();
        self.set_phase(UpgradePhase::Playing, events);
    }

    fn action(&mut self, action: GameAction, _events: &mut Vec<GameEvent>) {
        if action == GameAction::Upgrade {
            self.upgrade();
        }
    }

    fn tick(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        for timer in self.timers.tick(dt) {
            match timer {
                UpgradeTimer::FinishApply => {
                    self.applying = false;
                    self.level = (self.level + 1).min(LEVELS.len() - 1);
                    events.push(GameEvent {
                        kind: event_kind::SCORE,
                        a: GameId::Upgrade.index() as f32,
                        b: self.level as f32,
                        c: 0.0,
                    });
                    if self.is_final_level() {
                        self.timers.schedule(OVER_DELAY, UpgradeTimer::GameOver);
                    }
                }
                UpgradeTimer::GameOver => {
                    if self.phase == UpgradePhase::Playing {
                        self.set_phase(UpgradePhase::Over, events);
                    }
                }
            }
        }
    }

    fn restart(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase != UpgradePhase::Over {
            return;
        }
        self.level = 0;
        self.applying = false;
        self.timers.clear();
        self.set_phase(UpgradePhase::Playing, events);
    }

    fn snapshot(&self) -> GameSnapshot {
        let lvl = &LEVELS[self.level];
        GameSnapshot::Upgrade {
            phase: self.phase.name(),
            level: self.level,
            levels: LEVELS.len(),
            tagline: lvl.tagline,
            emoji: lvl.emoji,
            next_upgrade: lvl.description,
            applying: self.applying,
        }
    }
}
