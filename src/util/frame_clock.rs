use web_time::{Duration, Instant};

/// Longest frame delta handed to the animation step. Tab switches and
/// debugger pauses otherwise show up as one giant jump.
const DEFAULT_MAX_DT: Duration = Duration::from_millis(100);

/// Wall-clock `dt` source with smoothed FPS, for render bindings that
/// don't already get a frame delta from their host loop.
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Upper bound on a single reported delta
    max_dt: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Start a clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            max_dt: DEFAULT_MAX_DT,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Override the per-frame delta cap.
    #[must_use]
    pub fn with_max_dt(mut self, max_dt: Duration) -> Self {
        self.max_dt = max_dt;
        self
    }

    /// Seconds since the previous call (or construction), capped.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed)
    }

    fn record(&mut self, elapsed: Duration) -> f32 {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed.min(self.max_dt).as_secs_f32()
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
