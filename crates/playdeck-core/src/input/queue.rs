//! Buffered semantic input.
//!
//! The host pushes events as they arrive (possibly several per frame) and the
//! runner drains them at the top of each tick, so hub state only ever changes
//! at frame boundaries.

use crate::api::game::GameAction;
use crate::api::types::GameId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f32, y: f32 },
    OpenHub,
    CloseAll,
    BackToHub,
    SelectGame(GameId),
    ToggleMute,
    StartGame,
    RestartGame,
    Action(GameAction),
}

#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Remove and return all buffered events, in arrival order.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_order_and_empties() {
        let mut q = InputQueue::new();
        q.push(InputEvent::OpenHub);
        q.push(InputEvent::SelectGame(GameId::Logo));
        q.push(InputEvent::StartGame);
        let drained = q.drain();
        assert_eq!(
            drained,
            vec![
                InputEvent::OpenHub,
                InputEvent::SelectGame(GameId::Logo),
                InputEvent::StartGame,
            ]
        );
        assert!(q.is_empty());
    }

    #[test]
    fn drain_on_empty_queue_yields_nothing() {
        let mut q = InputQueue::new();
        assert!(q.drain().is_empty());
    }
}
