use std::time::Instant;

/// Frame metadata: frame number plus elapsed and delta time in seconds
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

/// Wall clock for the frame loop
///
/// Each call to `tick` yields the next `FrameInfo`; `time` is measured from
/// clock creation and drives the whole-scene rotation.
#[derive(Debug)]
pub struct FrameClock {
    frame_number: u64,
    start: Instant,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start: now,
            last_tick: now,
        }
    }

    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let info = FrameInfo {
            number: self.frame_number,
            time: now.duration_since(self.start).as_secs_f32(),
            delta: now.duration_since(self.last_tick).as_secs_f32(),
        };

        self.frame_number += 1;
        self.last_tick = now;
        info
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn frame_numbers_increase() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().number, 0);
        assert_eq!(clock.tick().number, 1);
        assert_eq!(clock.tick().number, 2);
    }

    #[test]
    fn clock_measures_delta_and_elapsed() {
        let mut clock = FrameClock::new();

        thread::sleep(Duration::from_millis(10));
        let frame = clock.tick();

        assert!(frame.delta >= 0.009);
        assert!(frame.time >= frame.delta - 0.001);

        thread::sleep(Duration::from_millis(10));
        let next = clock.tick();
        assert!(next.time > frame.time);
    }
}
