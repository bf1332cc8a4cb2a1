//! Adaptive bounce-depth control.

use std::time::Duration;

/// Multiplicative feedback loop holding frame time near a budget.
///
/// Tracks a bounce depth across frames. After each frame, feed the
/// measured render time to [`observe`](Self::observe): a frame faster
/// than the budget doubles the depth (capped), a slower one halves it
/// (floored). A single threshold compare, no smoothing.
#[derive(Debug, Clone)]
pub struct AdaptiveQuality {
    depth: u32,
    min_depth: u32,
    max_depth: u32,
    frame_budget: Duration,
}

impl AdaptiveQuality {
    /// Create a controller.
    ///
    /// `initial` is clamped into `[min_depth, max_depth]`. Panics if
    /// `min_depth` is zero (a depth of zero could never double back
    /// up) or exceeds `max_depth`.
    pub fn new(initial: u32, min_depth: u32, max_depth: u32, frame_budget: Duration) -> Self {
        assert!(min_depth >= 1, "minimum bounce depth must be at least 1");
        assert!(
            min_depth <= max_depth,
            "minimum bounce depth must not exceed maximum"
        );
        Self {
            depth: initial.clamp(min_depth, max_depth),
            min_depth,
            max_depth,
            frame_budget,
        }
    }

    /// The bounce depth to render the next frame with.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Feed back one frame's wall-clock render time.
    ///
    /// Returns the bounce depth for the next frame.
    pub fn observe(&mut self, frame_time: Duration) -> u32 {
        if frame_time < self.frame_budget && self.depth < self.max_depth {
            self.depth = (self.depth * 2).min(self.max_depth);
            log::debug!(
                "frame took {:?} (budget {:?}), raising bounce depth to {}",
                frame_time,
                self.frame_budget,
                self.depth
            );
        } else if frame_time > self.frame_budget && self.depth > self.min_depth {
            self.depth = (self.depth / 2).max(self.min_depth);
            log::debug!(
                "frame took {:?} (budget {:?}), lowering bounce depth to {}",
                frame_time,
                self.frame_budget,
                self.depth
            );
        }
        self.depth
    }
}
