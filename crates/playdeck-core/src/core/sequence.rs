//! Deterministic timed sequences for the loading screen.
//!
//! The loading progress bar is a scripted list of (target, duration) steps:
//! fast, then a fake stall, then a sudden jump to 100. One cancellable
//! sequence replaces the nested-timer approach: value advances linearly
//! inside each step, steps run back to back.

/// One leg of a progress sequence.
#[derive(Debug, Clone, Copy)]
pub struct SequenceStep {
    /// Value to reach by the end of this step.
    pub target: f32,
    /// Seconds spent getting there.
    pub duration: f32,
}

impl SequenceStep {
    pub const fn new(target: f32, duration: f32) -> Self {
        Self { target, duration }
    }
}

/// The loading bar script: fast start, two fake stalls, sudden jump to 100.
pub const LOADER_STEPS: [SequenceStep; 6] = [
    SequenceStep::new(30.0, 0.2),
    SequenceStep::new(55.0, 0.3),
    SequenceStep::new(57.0, 0.4),
    SequenceStep::new(80.0, 0.25),
    SequenceStep::new(81.0, 0.45),
    SequenceStep::new(100.0, 0.15),
];

/// Scripted value-over-time driver.
#[derive(Debug, Clone)]
pub struct ProgressSequence {
    steps: Vec<SequenceStep>,
    step_idx: usize,
    /// Value at the start of the current step.
    step_from: f32,
    /// Time elapsed inside the current step.
    step_elapsed: f32,
    value: f32,
    cancelled: bool,
}

impl ProgressSequence {
    pub fn new(steps: &[SequenceStep]) -> Self {
        Self {
            steps: steps.to_vec(),
            step_idx: 0,
            step_from: 0.0,
            step_elapsed: 0.0,
            value: 0.0,
            cancelled: false,
        }
    }

    pub fn loader() -> Self {
        Self::new(&LOADER_STEPS)
    }

    /// Advance the sequence. Carries leftover time across step boundaries.
    pub fn tick(&mut self, dt: f32) {
        if self.cancelled {
            return;
        }
        let mut remaining = dt;
        while remaining > 0.0 && self.step_idx < self.steps.len() {
            let step = self.steps[self.step_idx];
            let left = step.duration - self.step_elapsed;
            if remaining >= left {
                remaining -= left;
                self.value = step.target;
                self.step_from = step.target;
                self.step_elapsed = 0.0;
                self.step_idx += 1;
            } else {
                self.step_elapsed += remaining;
                let t = if step.duration > 0.0 {
                    self.step_elapsed / step.duration
                } else {
                    1.0
                };
                self.value = self.step_from + (step.target - self.step_from) * t;
                remaining = 0.0;
            }
        }
    }

    /// Stop advancing; value freezes where it is.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_done(&self) -> bool {
        !self.cancelled && self.step_idx >= self.steps.len()
    }
}

/// Repeating fixed-interval trigger (message cycling, mascot blink).
#[derive(Debug, Clone)]
pub struct Cadence {
    interval: f32,
    elapsed: f32,
}

impl Cadence {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
        }
    }

    /// Advance; returns how many times the interval elapsed this tick.
    pub fn tick(&mut self, dt: f32) -> u32 {
        self.elapsed += dt;
        let mut count = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            count += 1;
        }
        count
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_each_target_in_order() {
        let mut seq = ProgressSequence::loader();
        seq.tick(0.2);
        assert!((seq.value() - 30.0).abs() < 0.01);
        seq.tick(0.3);
        assert!((seq.value() - 55.0).abs() < 0.01);
        assert!(!seq.is_done());
    }

    #[test]
    fn interpolates_within_a_step() {
        let mut seq = ProgressSequence::new(&[SequenceStep::new(100.0, 1.0)]);
        seq.tick(0.5);
        assert!((seq.value() - 50.0).abs() < 0.01);
    }

    #[test]
    fn carries_time_across_step_boundaries() {
        let mut seq = ProgressSequence::new(&[
            SequenceStep::new(10.0, 0.1),
            SequenceStep::new(20.0, 0.1),
        ]);
        // 0.15s: finishes step one, half of step two
        seq.tick(0.15);
        assert!((seq.value() - 15.0).abs() < 0.01);
    }

    #[test]
    fn completes_after_total_duration() {
        let mut seq = ProgressSequence::loader();
        let total: f32 = LOADER_STEPS.iter().map(|s| s.duration).sum();
        seq.tick(total + 0.01);
        assert!(seq.is_done());
        assert!((seq.value() - 100.0).abs() < 0.01);
    }

    #[test]
    fn cancel_freezes_value() {
        let mut seq = ProgressSequence::loader();
        seq.tick(0.2);
        let v = seq.value();
        seq.cancel();
        seq.tick(10.0);
        assert_eq!(seq.value(), v);
        assert!(!seq.is_done());
    }

    #[test]
    fn cadence_counts_elapsed_intervals() {
        let mut c = Cadence::new(0.9);
        assert_eq!(c.tick(0.5), 0);
        assert_eq!(c.tick(0.5), 1);
        assert_eq!(c.tick(1.8), 2);
    }
}
