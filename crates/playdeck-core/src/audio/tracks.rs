use serde::{Deserialize, Serialize};

use crate::api::types::{GameId, ScreenId};

// Default track paths, relative to the site's public root.
const DEFAULT_HUB: &str = "/Monkeys Spinning Monkeys.mp3";
const DEFAULT_UPGRADE: &str = "/Kevin-MacLeod-Investigations(chosic.com).mp3";
const DEFAULT_LOGO: &str = "/Sneaky-Snitch(chosic.com).mp3";
const DEFAULT_CONTRAST: &str = "/alexander-nakarada-silly-intro(chosic.com).mp3";
const DEFAULT_OVERDESIGN: &str = "/Monkeys Spinning Monkeys.mp3";

/// Screen → background-track mapping.
/// Loadable from JSON so the site can swap music without rebuilding the WASM;
/// every field falls back to the shipped default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackManifest {
    #[serde(default = "default_hub")]
    pub hub: String,
    #[serde(default = "default_upgrade")]
    pub upgrade: String,
    #[serde(default = "default_logo")]
    pub logo: String,
    #[serde(default = "default_contrast")]
    pub contrast: String,
    #[serde(default = "default_overdesign")]
    pub overdesign: String,
}

fn default_hub() -> String {
    DEFAULT_HUB.to_string()
}
fn default_upgrade() -> String {
    DEFAULT_UPGRADE.to_string()
}
fn default_logo() -> String {
    DEFAULT_LOGO.to_string()
}
fn default_contrast() -> String {
    DEFAULT_CONTRAST.to_string()
}
fn default_overdesign() -> String {
    DEFAULT_OVERDESIGN.to_string()
}

impl Default for TrackManifest {
    fn default() -> Self {
        Self {
            hub: default_hub(),
            upgrade: default_upgrade(),
            logo: default_logo(),
            contrast: default_contrast(),
            overdesign: default_overdesign(),
        }
    }
}

impl TrackManifest {
    /// Parse a manifest from a JSON string. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve a screen to its track path.
    pub fn track(&self, screen: ScreenId) -> &str {
        match screen {
            ScreenId::Hub => &self.hub,
            ScreenId::Game(GameId::Upgrade) => &self.upgrade,
            ScreenId::Game(GameId::Logo) => &self.logo,
            ScreenId::Game(GameId::Contrast) => &self.contrast,
            ScreenId::Game(GameId::Overdesign) => &self.overdesign,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_screen() {
        let m = TrackManifest::default();
        assert_eq!(m.track(ScreenId::Hub), DEFAULT_HUB);
        for id in GameId::ALL {
            assert!(!m.track(ScreenId::Game(id)).is_empty());
        }
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let m = TrackManifest::from_json(r#"{ "logo": "/custom.mp3" }"#).unwrap();
        assert_eq!(m.track(ScreenId::Game(GameId::Logo)), "/custom.mp3");
        assert_eq!(m.track(ScreenId::Hub), DEFAULT_HUB);
    }

    #[test]
    fn hub_and_overdesign_share_a_track() {
        // Same file on purpose; switching between them must not restart it.
        let m = TrackManifest::default();
        assert_eq!(
            m.track(ScreenId::Hub),
            m.track(ScreenId::Game(GameId::Overdesign))
        );
    }
}
