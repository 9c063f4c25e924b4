// Frame rate sampled over fixed windows so the readout does not jitter.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    pub frame_count: u32,
    pub window_start_ms: f64,
    pub window_ms: f64,
    pub fps: f64,
}

impl FpsCounter {
    pub fn new(now_ms: f64, window_ms: f64) -> Self {
        Self {
            frame_count: 0,
            window_start_ms: now_ms,
            window_ms,
            fps: 0.0,
        }
    }

    /// Count one frame. Returns the new rate when a sampling window closes.
    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = now_ms - self.window_start_ms;
        if elapsed < self.window_ms || elapsed <= 0.0 {
            return None;
        }
        self.fps = f64::from(self.frame_count) * 1000.0 / elapsed;
        self.frame_count = 0;
        self.window_start_ms = now_ms;
        Some(self.fps)
    }

    pub fn reset(&mut self, now_ms: f64) {
        self.frame_count = 0;
        self.window_start_ms = now_ms;
    }
}
