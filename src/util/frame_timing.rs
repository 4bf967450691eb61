//! Smoothed draw-time and frame-rate tracking for the on-screen overlay.

use std::fmt;

use web_time::{Duration, Instant};

/// Weight of the newest sample in the exponential moving averages.
const SMOOTHING: f64 = 0.7;

/// Longest inter-frame gap counted, so idle periods do not drag the
/// average down for long.
const MAX_FRAME_GAP: Duration = Duration::from_secs(5);

/// Smoothed render statistics for the on-screen overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameRate {
    /// Smoothed time spent rendering a frame, in milliseconds.
    pub draw_ms: f32,
    /// Frames per second derived from the smoothed inter-frame time.
    pub fps: f32,
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} ms / {:.1} fps", self.draw_ms, self.fps)
    }
}

/// Frame timing with exponentially smoothed draw and frame times.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    /// Frames recorded since the last reset.
    frame_count: u64,
    /// Smoothed draw time in seconds.
    draw_time: f64,
    /// Smoothed frame time in seconds.
    frame_time: f64,
    /// End of the previous frame.
    last_frame: Instant,
    /// Most recent result.
    rate: FrameRate,
}

impl FrameTimer {
    /// Create a frame timer whose first interval starts at `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            frame_count: 0,
            draw_time: 0.0,
            frame_time: 0.0,
            last_frame: now,
            rate: FrameRate::default(),
        }
    }

    /// Zero all statistics and restart the interval at `now`.
    pub fn reset(&mut self, now: Instant) {
        *self = Self::new(now);
    }

    /// Record a frame whose rendering started at `frame_start` and finished
    /// at `now`.
    pub fn end_frame(&mut self, frame_start: Instant, now: Instant) -> FrameRate {
        self.frame_count += 1;

        // Draw time is the time actually spent rendering.
        let draw = now.saturating_duration_since(frame_start);
        self.draw_time = draw.as_secs_f64() * SMOOTHING
            + self.draw_time * (1.0 - SMOOTHING);

        // Frame time is the time since the previous frame, which includes
        // any idle pause while nothing changed. Clamp that pause unless the
        // draw itself took longer.
        let gap = now
            .saturating_duration_since(self.last_frame)
            .min(draw.max(MAX_FRAME_GAP));
        self.frame_time = gap.as_secs_f64() * SMOOTHING
            + self.frame_time * (1.0 - SMOOTHING);
        self.last_frame = now;

        self.rate = FrameRate {
            draw_ms: (self.draw_time * 1000.0) as f32,
            fps: if self.frame_time > 0.0 {
                (1.0 / self.frame_time) as f32
            } else {
                0.0
            },
        };
        self.rate
    }

    /// Frames recorded since the last reset.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Smoothed frame time in seconds.
    #[must_use]
    pub fn frame_time(&self) -> f64 {
        self.frame_time
    }

    /// The latest smoothed statistics.
    #[must_use]
    pub fn rate(&self) -> FrameRate {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_frames_converge() {
        let t0 = Instant::now();
        let mut timer = FrameTimer::new(t0);
        let frame = Duration::from_millis(16);
        let mut now = t0;
        let mut errors = Vec::new();
        for _ in 0..8 {
            let start = now;
            now += frame;
            let _ = timer.end_frame(start, now);
            errors.push((timer.frame_time() - 0.016).abs());
        }
        // Error shrinks geometrically by 0.3 per frame.
        for pair in errors.windows(2) {
            assert!(pair[1] <= pair[0] * 0.31 + 1e-12);
        }
        assert!(errors[4] < 0.016 * 0.01);
        assert!((timer.rate().fps - 62.5).abs() < 0.1);
        assert!((timer.rate().draw_ms - 16.0).abs() < 0.1);
        assert_eq!(timer.frame_count(), 8);
    }

    #[test]
    fn idle_gap_is_clamped() {
        let t0 = Instant::now();
        let mut timer = FrameTimer::new(t0);
        let end = t0 + Duration::from_secs(60);
        let _ = timer.end_frame(end - Duration::from_millis(10), end);
        // 0.7 * 5 s, not 0.7 * 60 s.
        assert!((timer.frame_time() - 3.5).abs() < 1e-9);
    }

    #[test]
    fn reset_clears_statistics() {
        let t0 = Instant::now();
        let mut timer = FrameTimer::new(t0);
        let _ = timer.end_frame(t0, t0 + Duration::from_millis(20));
        timer.reset(t0 + Duration::from_secs(1));
        assert_eq!(timer.frame_count(), 0);
        assert_eq!(timer.rate(), FrameRate::default());
    }

    #[test]
    fn overlay_text() {
        let rate = FrameRate {
            draw_ms: 4.26,
            fps: 59.94,
        };
        assert_eq!(rate.to_string(), "4.3 ms / 59.9 fps");
    }
}
