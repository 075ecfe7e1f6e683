use objview_common::MotionMode;

/// Upper bound on ticks produced by a single long frame.
pub const MAX_TICKS_PER_FRAME: u32 = 8;

/// Converts frame durations into operation ticks.
///
/// In [`MotionMode::PerFrame`] every frame is one tick. In
/// [`MotionMode::FixedRate`] frame time is accumulated and drained in fixed
/// steps, so held keys move the scene at the same speed at any frame rate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    mode: MotionMode,
    accumulator: f64,
}

impl FrameClock {
    pub fn new(mode: MotionMode) -> Self {
        Self {
            mode,
            accumulator: 0.0,
        }
    }

    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    /// Advance by `dt` seconds and return how many ticks to run this frame.
    pub fn advance(&mut self, dt: f64) -> u32 {
        match self.mode {
            MotionMode::PerFrame => 1,
            MotionMode::FixedRate { hz } => {
                if hz <= 0.0 {
                    return 0;
                }
                let step = 1.0 / hz;
                self.accumulator += dt.max(0.0);

                let mut ticks = 0;
                while self.accumulator >= step && ticks < MAX_TICKS_PER_FRAME {
                    self.accumulator -= step;
                    ticks += 1;
                }
                if ticks == MAX_TICKS_PER_FRAME {
                    // Drop the backlog instead of catching up over later frames.
                    tracing::debug!("frame of {dt:.3}s capped at {MAX_TICKS_PER_FRAME} ticks");
                    self.accumulator = self.accumulator.min(step);
                }
                ticks
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_frame_always_one_tick() {
        let mut clock = FrameClock::new(MotionMode::PerFrame);
        assert_eq!(clock.advance(0.0), 1);
        assert_eq!(clock.advance(1.0), 1);
    }

    #[test]
    fn fixed_rate_accumulates_partial_frames() {
        let mut clock = FrameClock::new(MotionMode::FixedRate { hz: 10.0 });
        assert_eq!(clock.advance(0.05), 0);
        assert_eq!(clock.advance(0.06), 1);
        assert_eq!(clock.advance(0.2), 2);
    }

    #[test]
    fn fixed_rate_is_frame_rate_independent() {
        let mut fast = FrameClock::new(MotionMode::FixedRate { hz: 60.0 });
        let mut slow = FrameClock::new(MotionMode::FixedRate { hz: 60.0 });

        let fast_ticks: u32 = (0..240).map(|_| fast.advance(1.0 / 240.0)).sum();
        let slow_ticks: u32 = (0..30).map(|_| slow.advance(1.0 / 30.0)).sum();

        assert!((fast_ticks as i64 - 60).abs() <= 1, "fast={fast_ticks}");
        assert!((slow_ticks as i64 - 60).abs() <= 1, "slow={slow_ticks}");
    }

    #[test]
    fn long_frame_is_capped() {
        let mut clock = FrameClock::new(MotionMode::FixedRate { hz: 60.0 });
        assert_eq!(clock.advance(5.0), MAX_TICKS_PER_FRAME);
        assert!(clock.advance(0.0) <= 1);
    }

    #[test]
    fn non_positive_rate_never_ticks() {
        let mut clock = FrameClock::new(MotionMode::FixedRate { hz: 0.0 });
        assert_eq!(clock.advance(1.0), 0);
    }
}
