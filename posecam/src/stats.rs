use web_time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frames: u64,
    pub persons: u64,
}

impl FrameStats {
    pub fn record(&mut self, persons: usize) {
        self.frames += 1;
        self.persons += persons as u64;
    }
}

/// Reports the frame rate once per elapsed window.
#[derive(Debug, Clone)]
pub struct FpsMeter {
    window: Duration,
    started: Option<Instant>,
    frames: u32,
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl FpsMeter {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            started: None,
            frames: 0,
        }
    }

    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let Some(started) = self.started else {
            self.started = Some(now);
            return None;
        };
        self.frames += 1;
        let elapsed = now.duration_since(started);
        if elapsed < self.window {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.started = Some(now);
        self.frames = 0;
        Some(fps)
    }
}
