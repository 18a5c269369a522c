//! Cancellable one-shot timers.
//!
//! Each game instance owns its own `Scheduler`, so unmounting a game drops
//! every pending timer with it. Phase changes call `clear()` so a timer armed
//! for an old phase can never fire into a new one.

/// Handle to a scheduled timer for later cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u32);

#[derive(Debug, Clone)]
struct TimerEntry<T> {
    id: TimerId,
    remaining: f32,
    payload: T,
}

/// One-shot timer queue driven by `tick(dt)`.
#[derive(Debug, Default)]
pub struct Scheduler<T> {
    timers: Vec<TimerEntry<T>>,
    next_id: u32,
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            next_id: 0,
        }
    }

    /// Arm a timer that fires `delay` seconds from now.
    pub fn schedule(&mut self, delay: f32, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(TimerEntry {
            id,
            remaining: delay.max(0.0),
            payload,
        });
        id
    }

    /// Disarm a single timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Disarm everything.
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Advance all timers. Returns the payloads that fired this tick,
    /// in the order they were scheduled.
    pub fn tick(&mut self, dt: f32) -> Vec<T> {
        let mut fired = Vec::new();
        for t in &mut self.timers {
            t.remaining -= dt;
        }
        self.timers.retain(|t| {
            if t.remaining <= 0.0 {
                fired.push(t.payload.clone());
                false
            } else {
                true
            }
        });
        fired
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
