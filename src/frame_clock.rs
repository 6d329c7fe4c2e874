use std::time::{Duration, Instant};

/// Target frame rate of the main loop
pub const FPS: u32 = 60;

/// Keeps the loop at a fixed cadence by sleeping out the rest of each frame.
/// A frame that overruns is not made up for.
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        FrameClock {
            frame: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time left in the current frame
    pub fn remaining(&self) -> Duration {
        self.frame.saturating_sub(self.last.elapsed())
    }

    /// Sleep until the frame is over and start the next one
    pub fn tick(&mut self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.last = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        let clock = FrameClock::new(FPS);
        assert_eq!(clock.frame_duration(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_tick_waits_out_the_frame() {
        let mut clock = FrameClock::new(100);
        let start = Instant::now();
        clock.tick();
        assert!(start.elapsed() >= Duration::from_millis(9));
        assert!(clock.remaining() <= clock.frame_duration());
    }

    #[test]
    fn test_overrun_frame_does_not_sleep() {
        let mut clock = FrameClock::new(1000);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(clock.remaining(), Duration::ZERO);
        let start = Instant::now();
        clock.tick();
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
