use crate::scene::{COLLAPSED_RADIUS, EXPANDED_RADIUS};

/// How long one radius toggle takes, in seconds
pub const TOGGLE_DURATION: f32 = 1.2;

/// Restartable interpolation driving the sphere radius between its
/// collapsed and expanded values
///
/// The driver holds at most one tween; starting a new one while a previous
/// toggle is still in flight replaces it, so two tweens never write the
/// radius in the same frame. The final sample is exactly the target value.
#[derive(Debug, Clone, Copy)]
pub struct RadiusTween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
}

impl RadiusTween {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    /// Toggle from the current radius: collapse when fully expanded,
    /// expand otherwise
    pub fn toggle(current: f32) -> Self {
        let target = if current == EXPANDED_RADIUS {
            COLLAPSED_RADIUS
        } else {
            EXPANDED_RADIUS
        };
        Self::new(current, target, TOGGLE_DURATION)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `delta` seconds and return the current radius
    pub fn advance(&mut self, delta: f32) -> f32 {
        self.elapsed += delta;
        if self.finished() {
            return self.to;
        }

        let t = self.elapsed / self.duration;
        self.from + (self.to - self.from) * smoothstep(t)
    }
}

fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_picks_opposite_endpoint() {
        assert_eq!(RadiusTween::toggle(COLLAPSED_RADIUS).target(), EXPANDED_RADIUS);
        assert_eq!(RadiusTween::toggle(EXPANDED_RADIUS).target(), COLLAPSED_RADIUS);
        // Mid-flight values head for the expanded radius, like the original
        assert_eq!(RadiusTween::toggle(5.0).target(), EXPANDED_RADIUS);
    }

    #[test]
    fn lands_exactly_on_target() {
        let mut tween = RadiusTween::toggle(COLLAPSED_RADIUS);

        let mut value = tween.advance(TOGGLE_DURATION * 0.5);
        assert!(value > COLLAPSED_RADIUS && value < EXPANDED_RADIUS);

        value = tween.advance(TOGGLE_DURATION);
        assert_eq!(value, EXPANDED_RADIUS);
        assert!(tween.finished());

        // Round trip back, still exact
        let mut back = RadiusTween::toggle(value);
        assert_eq!(back.advance(TOGGLE_DURATION * 2.0), COLLAPSED_RADIUS);
    }

    #[test]
    fn progress_is_monotonic() {
        let mut tween = RadiusTween::new(1.5, 10.0, 1.0);
        let mut last = 1.5;
        for _ in 0..20 {
            let value = tween.advance(0.05);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn replacement_supersedes_in_flight_tween() {
        let mut first = RadiusTween::toggle(COLLAPSED_RADIUS);
        let midway = first.advance(TOGGLE_DURATION * 0.4);

        // A second toggle starts from wherever the radius currently is
        let mut second = RadiusTween::toggle(midway);
        assert_eq!(second.target(), EXPANDED_RADIUS);
        let resumed = second.advance(0.0);
        assert!((resumed - midway).abs() < 1e-6);
    }

    #[test]
    fn zero_duration_does_not_divide_by_zero() {
        let mut tween = RadiusTween::new(1.5, 10.0, 0.0);
        assert_eq!(tween.advance(0.001), 10.0);
    }
}
