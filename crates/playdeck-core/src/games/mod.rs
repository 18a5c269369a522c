//! The four mini-games. Each is a self-contained phase machine with its own
//! counters and timers; instances never reference each other.

pub mod contrast;
pub mod logo;
pub mod overdesign;
pub mod upgrade;

use crate::api::game::MiniGame;
use crate::api::types::GameId;

/// Build a fresh instance of the requested game.
pub fn create(id: GameId) -> Box<dyn MiniGame> {
    match id {
        GameId::Upgrade => Box::new(upgrade::UpgradeGame::new()),
        GameId::Logo => Box::new(logo::LogoGame::new()),
        GameId::Contrast => Box::new(contrast::ContrastGame::new()),
        GameId::Overdesign => Box::new(overdesign::OverdesignGame::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_builds_matching_ids() {
        for id in GameId::ALL {
            assert_eq!(create(id).id(), id);
        }
    }
}
