//! UI-facing state views.
//!
//! The rendering layer never reaches into game internals; it polls a snapshot
//! each frame and renders from that alone. Snapshots serialize to JSON for the
//! WASM boundary.

use serde::Serialize;

use crate::api::types::GameId;
use crate::games::contrast::{WcagPair, WCAG_PALETTE};
use crate::games::overdesign::EffectKind;
use crate::games::upgrade::{Level, LEVELS};

/// Read-only view of one game's screen state.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "game", rename_all = "lowercase")]
pub enum GameSnapshot {
    Upgrade {
        phase: &'static str,
        level: usize,
        levels: usize,
        tagline: &'static str,
        emoji: &'static str,
        next_upgrade: &'static str,
        applying: bool,
    },
    Logo {
        phase: &'static str,
        size: f32,
        client_line: &'static str,
    },
    Contrast {
        phase: &'static str,
        round: usize,
        rounds: usize,
        score: u32,
        combo_label: &'static str,
        combo_bg: &'static str,
        combo_fg: &'static str,
        crime: &'static str,
        scream: Option<&'static str>,
    },
    Overdesign {
        phase: &'static str,
        meter: u32,
        meter_label: &'static str,
        applied: Vec<EffectKind>,
        shaking: bool,
    },
}

/// Read-only view of the whole hub.
#[derive(Debug, Clone, Serialize)]
pub struct HubSnapshot {
    pub hub_open: bool,
    pub muted: bool,
    pub active_game: Option<GameId>,
    pub game: Option<GameSnapshot>,
}

impl HubSnapshot {
    pub fn to_json(&self) -> String {
        // Snapshot types contain nothing unserializable.
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Debug, Clone, Serialize)]
struct EffectEntry {
    kind: EffectKind,
    label: &'static str,
    cost: u32,
}

/// Fixed display data the page fetches once at startup, as opposed to the
/// per-frame snapshot: effect buttons, the accessible-palette showcase, and
/// the upgrade level ladder.
#[derive(Debug, Clone, Serialize)]
pub struct StaticContent {
    effects: Vec<EffectEntry>,
    wcag_palette: &'static [WcagPair],
    levels: &'static [Level],
}

impl StaticContent {
    pub fn new() -> Self {
        Self {
            effects: EffectKind::ALL
                .iter()
                .map(|&kind| EffectEntry {
                    kind,
                    label: kind.label(),
                    cost: kind.cost(),
                })
                .collect(),
            wcag_palette: &WCAG_PALETTE,
            levels: &LEVELS,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for StaticContent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_json_tags_the_game() {
        let snap = HubSnapshot {
            hub_open: true,
            muted: false,
            active_game: Some(GameId::Logo),
            game: Some(GameSnapshot::Logo {
                phase: "playing",
                size: 48.0,
                client_line: "Hmm... a little bigger?",
            }),
        };
        let json = snap.to_json();
        assert!(json.contains("\"game\":\"logo\""), "got {}", json);
        assert!(json.contains("\"hub_open\":true"));
    }

    #[test]
    fn static_content_carries_all_display_tables() {
        let json = StaticContent::new().to_json();
        assert!(json.contains("\"kind\":\"shadow\""), "got {}", json);
        assert!(json.contains("Rainbow Border"));
        assert!(json.contains("19.7:1"));
        assert!(json.contains("Level 5"));
    }
}
