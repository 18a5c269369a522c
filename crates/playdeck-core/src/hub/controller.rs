//! Top-level hub state: visibility, active-game selection, audio driving.
//!
//! The controller is the only caller of the audio coordinator, so the track
//! always follows the visible screen: the hub track on the selector grid,
//! the game's track while one is mounted, silence when the hub is closed.

use crate::api::game::{GameAction, MiniGame};
use crate::api::types::{GameEvent, GameId, ScreenId};
use crate::audio::coordinator::{AudioCoordinator, AudioSink};
use crate::audio::tracks::TrackManifest;
use crate::games;
use crate::snapshot::HubSnapshot;

pub struct HubController<S> {
    hub_open: bool,
    active: Option<(GameId, Box<dyn MiniGame>)>,
    audio: AudioCoordinator<S>,
    events: Vec<GameEvent>,
}

impl<S: AudioSink> HubController<S> {
    pub fn new(tracks: TrackManifest) -> Self {
        Self {
            hub_open: false,
            active: None,
            audio: AudioCoordinator::new(tracks),
            events: Vec::new(),
        }
    }

    pub fn hub_open(&self) -> bool {
        self.hub_open
    }

    pub fn active_game(&self) -> Option<GameId> {
        self.active.as_ref().map(|(id, _)| *id)
    }

    /// The screen whose track should be playing, or None when closed.
    pub fn current_screen(&self) -> Option<ScreenId> {
        if !self.hub_open {
            return None;
        }
        Some(match self.active_game() {
            Some(id) => ScreenId::Game(id),
            None => ScreenId::Hub,
        })
    }

    pub fn audio(&self) -> &AudioCoordinator<S> {
        &self.audio
    }

    /// Open the selector grid. Starts the hub track.
    pub fn open(&mut self) {
        if self.hub_open {
            return;
        }
        self.hub_open = true;
        log::info!("games hub opened");
        self.audio.play(ScreenId::Hub);
    }

    /// Mount a game. Replaces any previously mounted one (its state and
    /// pending timers die with it) and switches to the game's track.
    pub fn select_game(&mut self, id: GameId) {
        if !self.hub_open {
            return;
        }
        log::info!("mounting game {:?}", id);
        self.active = Some((id, games::create(id)));
        self.audio.play(ScreenId::Game(id));
    }

    /// Drop the active game and return to the selector grid.
    pub fn back_to_hub(&mut self) {
        if !self.hub_open {
            return;
        }
        self.active = None;
        self.audio.play(ScreenId::Hub);
    }

    /// Close everything. Stops audio; the dropped game takes its timers along.
    pub fn close_all(&mut self) {
        self.active = None;
        self.hub_open = false;
        self.audio.stop();
        log::info!("games hub closed");
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.audio.toggle_mute()
    }

    // -- Active-game passthrough --

    pub fn start_game(&mut self) {
        if let Some((_, game)) = self.active.as_mut() {
            game.start(&mut self.events);
        }
    }

    pub fn game_action(&mut self, action: GameAction) {
        if let Some((_, game)) = self.active.as_mut() {
            game.action(action, &mut self.events);
        }
    }

    pub fn restart_game(&mut self) {
        if let Some((_, game)) = self.active.as_mut() {
            game.restart(&mut self.events);
        }
    }

    /// Advance the mounted game's timers. Does nothing while closed or on
    /// the selector grid.
    pub fn tick(&mut self, dt: f32) {
        if let Some((_, game)) = self.active.as_mut() {
            game.tick(dt, &mut self.events);
        }
    }

    /// Drain transition events accumulated since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> HubSnapshot {
        HubSnapshot {
            hub_open: self.hub_open,
            muted: self.audio.muted(),
            active_game: self.active_game(),
            game: self.active.as_ref().map(|(_, g)| g.snapshot()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::coordinator::mock::{reset, MockSink};
    use crate::core::rng::Rng;
    use crate::games::logo::LogoPhase;

    fn hub() -> HubController<MockSink> {
        reset();
        HubController::new(TrackManifest::default())
    }

    /// The audio invariant from the hub's contract: while open, the loaded
    /// track matches `active_game ?? hub`; while closed, audio is stopped.
    fn assert_audio_invariant(hub: &HubController<MockSink>) {
        match hub.current_screen() {
            Some(screen) => {
                let expected = TrackManifest::default().track(screen).to_string();
                assert_eq!(hub.audio().current_track(), Some(expected.as_str()));
                assert!(hub.audio().is_playing());
            }
            None => assert!(!hub.audio().is_playing()),
        }
    }

    #[test]
    fn open_plays_hub_track() {
        let mut h = hub();
        h.open();
        assert!(h.hub_open());
        assert_audio_invariant(&h);
    }

    #[test]
    fn select_game_switches_track() {
        let mut h = hub();
        h.open();
        h.select_game(GameId::Contrast);
        assert_eq!(h.active_game(), Some(GameId::Contrast));
        assert_audio_invariant(&h);
    }

    #[test]
    fn select_game_while_closed_is_ignored() {
        let mut h = hub();
        h.select_game(GameId::Logo);
        assert_eq!(h.active_game(), None);
        assert_audio_invariant(&h);
    }

    #[test]
    fn back_to_hub_returns_to_hub_track() {
        let mut h = hub();
        h.open();
        h.select_game(GameId::Logo);
        h.back_to_hub();
        assert_eq!(h.active_game(), None);
        assert_audio_invariant(&h);
    }

    #[test]
    fn close_all_stops_audio() {
        let mut h = hub();
        h.open();
        h.select_game(GameId::Upgrade);
        h.close_all();
        assert!(!h.hub_open());
        assert_eq!(h.active_game(), None);
        assert_audio_invariant(&h);
    }

    #[test]
    fn audio_invariant_holds_over_arbitrary_sequences() {
        // Property-style: a seeded walk over every hub operation, checking
        // the invariant after each step.
        let mut rng = Rng::new(20260827);
        let mut h = hub();
        for _ in 0..500 {
            match rng.next_int(6) {
                0 => h.open(),
                1 => {
                    let id = GameId::from_index(rng.next_int(4)).unwrap();
                    h.select_game(id);
                }
                2 => h.back_to_hub(),
                3 => h.close_all(),
                4 => {
                    h.toggle_mute();
                }
                _ => h.tick(0.1),
            }
            assert_audio_invariant(&h);
        }
    }

    #[test]
    fn switching_games_discards_old_state() {
        let mut h = hub();
        let chaos = |h: &mut HubController<MockSink>| {
            h.start_game();
            h.game_action(GameAction::SetSize(460.0));
        };
        h.open();
        h.select_game(GameId::Logo);
        chaos(&mut h);
        h.select_game(GameId::Overdesign);
        h.select_game(GameId::Logo);
        // Fresh mount is back at the intro screen.
        match h.snapshot().game {
            Some(crate::snapshot::GameSnapshot::Logo { phase, .. }) => {
                assert_eq!(phase, LogoPhase::Intro.name());
            }
            other => panic!("unexpected snapshot: {:?}", other),
        }
    }

    #[test]
    fn close_mid_game_leaves_no_timer_to_resurrect_audio() {
        let mut h = hub();
        h.open();
        h.select_game(GameId::Contrast);
        h.start_game();
        h.game_action(GameAction::Verdict(true));
        h.close_all();
        // The scream timer died with the game; nothing can restart playback.
        h.tick(10.0);
        assert!(!h.audio().is_playing());
        assert_audio_invariant(&h);
    }

    #[test]
    fn game_actions_are_ignored_on_selector_grid() {
        let mut h = hub();
        h.open();
        h.start_game();
        h.game_action(GameAction::Upgrade);
        assert!(h.snapshot().game.is_none());
    }

    #[test]
    fn events_accumulate_and_drain() {
        let mut h = hub();
        h.open();
        h.select_game(GameId::Logo);
        h.start_game();
        h.game_action(GameAction::SetSize(460.0));
        let events = h.drain_events();
        assert!(!events.is_empty());
        assert!(h.drain_events().is_empty());
    }
}
