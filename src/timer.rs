/// Fixed rate timer used to cap the frame loop
#[derive(Debug, Clone, Copy)]
pub struct FixedHz {
    interval: f32,
    accumulator: f32,
}

impl FixedHz {
    /// Create timer that fires at given frequency
    pub fn new(hz: f32) -> Self {
        Self {
            interval: 1.0 / hz.max(f32::EPSILON),
            accumulator: 0.0,
        }
    }

    /// Update with delta, returns true if should fire
    pub fn tick(&mut self, delta: f32) -> bool {
        self.accumulator += delta;

        if self.accumulator >= self.interval {
            // Drop the surplus instead of carrying it, so a long stall
            // doesn't burst several frames afterwards
            self.accumulator = 0.0;
            true
        } else {
            false
        }
    }
}
