//! Cursor sparkle trail — a small bounded particle queue.
//!
//! Spawns are throttled, the pool is capped with oldest-first eviction, and
//! live particles are flattened into an f32 buffer the host reads directly.

use glam::Vec2;

use crate::core::rng::Rng;

pub const SPARKLE_COLORS: [&str; 4] = ["#FF6B6B", "#4ECDC4", "#FFE66D", "#ffffff"];

/// Live particles at any moment.
pub const MAX_SPARKLES: usize = 7;
/// Minimum seconds between accepted spawns.
const SPAWN_THROTTLE: f32 = 0.12;
/// Seconds a sparkle lives before expiring.
const LIFETIME: f32 = 0.6;
/// Spawn position jitter around the pointer, in px.
const JITTER: f32 = 12.0;
const MIN_SIZE: f32 = 4.0;
const MAX_SIZE: f32 = 10.0;

/// Floats per particle in the flat buffer: x, y, size, color index, age 0..1.
pub const SPARKLE_FLOATS: usize = 5;

#[derive(Debug, Clone, Copy)]
struct Sparkle {
    pos: Vec2,
    size: f32,
    color: usize,
    /// Absolute clock time at spawn.
    born: f32,
}

pub struct SparkleTrail {
    sparkles: Vec<Sparkle>,
    /// Monotonic clock advanced by tick().
    clock: f32,
    last_spawn: f32,
    rng: Rng,
    buffer: Vec<f32>,
}

impl SparkleTrail {
    pub fn new() -> Self {
        Self::with_seed(0x51ab)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            sparkles: Vec::with_capacity(MAX_SPARKLES),
            clock: 0.0,
            // Allow an immediate first spawn.
            last_spawn: -SPAWN_THROTTLE,
            rng: Rng::new(seed),
            buffer: Vec::with_capacity(MAX_SPARKLES * SPARKLE_FLOATS),
        }
    }

    pub fn len(&self) -> usize {
        self.sparkles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparkles.is_empty()
    }

    /// Try to spawn a sparkle near `pos`. Silently dropped while throttled;
    /// evicts the oldest particle when the pool is full.
    pub fn spawn(&mut self, pos: Vec2) {
        if self.clock - self.last_spawn < SPAWN_THROTTLE {
            return;
        }
        self.last_spawn = self.clock;
        if self.sparkles.len() >= MAX_SPARKLES {
            self.sparkles.remove(0);
        }
        let jitter = Vec2::new(
            self.rng.next_range(-JITTER, JITTER),
            self.rng.next_range(-JITTER, JITTER),
        );
        self.sparkles.push(Sparkle {
            pos: pos + jitter,
            size: self.rng.next_range(MIN_SIZE, MAX_SIZE),
            color: self.rng.next_int(SPARKLE_COLORS.len() as u32) as usize,
            born: self.clock,
        });
    }

    /// Advance the clock and drop expired particles.
    pub fn tick(&mut self, dt: f32) {
        self.clock += dt;
        let clock = self.clock;
        self.sparkles.retain(|s| clock - s.born < LIFETIME);
    }

    /// Rebuild and expose the flat particle buffer.
    /// Layout per particle: x, y, size, color index, age fraction 0..1.
    pub fn write_buffer(&mut self) -> &[f32] {
        self.buffer.clear();
        for s in &self.sparkles {
            let age = ((self.clock - s.born) / LIFETIME).clamp(0.0, 1.0);
            self.buffer.push(s.pos.x);
            self.buffer.push(s.pos.y);
            self.buffer.push(s.size);
            self.buffer.push(s.color as f32);
            self.buffer.push(age);
        }
        &self.buffer
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }
}

impl Default for SparkleTrail {
    fn default() -> Self {
        Self::new()
    }
}
