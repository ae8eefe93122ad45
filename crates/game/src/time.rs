use std::time::{Duration, Instant};

/// Per-frame delta source for the render loop. The first tick and any stall
/// longer than `max_dt` are clamped.
pub struct FrameClock {
    last_frame: Option<Instant>,
    max_dt: Duration,
    elapsed: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DT)
    }
}

impl FrameClock {
    pub const DEFAULT_MAX_DT: Duration = Duration::from_millis(100);

    pub fn new(max_dt: Duration) -> Self {
        Self {
            last_frame: None,
            max_dt,
            elapsed: Duration::ZERO,
        }
    }

    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = self
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO)
            .min(self.max_dt);
        self.last_frame = Some(now);
        self.elapsed += dt;
        dt.as_secs_f32()
    }

    /// Sum of every delta handed out so far.
    pub fn elapsed(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}
