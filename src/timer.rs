//! Scheduled periodic task polled by the host's event or render loop.
//!
//! The task does not own a thread or a platform timer: the host calls
//! [`TimerTask::poll`] whenever it gets control, and the task reports
//! whether an interval boundary has passed since the last trigger.

use web_time::{Duration, Instant};

/// Interval of the scene-graph library's default timer sensor (30 Hz).
pub const DEFAULT_INTERVAL: Duration = Duration::from_micros(33_333);

/// A periodic task with schedule/unschedule semantics.
#[derive(Debug, Clone)]
pub struct TimerTask {
    interval: Duration,
    base_time: Option<Instant>,
    next_due: Option<Instant>,
}

impl Default for TimerTask {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl TimerTask {
    /// Create an unscheduled task firing every `interval`.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            base_time: None,
            next_due: None,
        }
    }

    /// Time between triggers.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the trigger interval. Takes effect after the next trigger.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Start (or restart) the task with `now` as base time. The first
    /// trigger is due one interval later.
    pub fn schedule(&mut self, now: Instant) {
        self.base_time = Some(now);
        self.next_due = Some(now + self.interval);
    }

    /// Stop the task. No-op if it is not scheduled.
    pub fn unschedule(&mut self) {
        self.base_time = None;
        self.next_due = None;
    }

    /// `true` between [`TimerTask::schedule`] and
    /// [`TimerTask::unschedule`].
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.base_time.is_some()
    }

    /// Time the task was last scheduled.
    #[must_use]
    pub fn base_time(&self) -> Option<Instant> {
        self.base_time
    }

    /// Time since the task was scheduled, or `None` if it is not.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.base_time.map(|base| now.saturating_duration_since(base))
    }

    /// Returns `true` if a trigger is due at `now`, and moves the next due
    /// time past `now`. Missed intervals collapse into a single trigger.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        let next = if self.interval.is_zero() {
            now
        } else {
            // First interval boundary strictly after `now`.
            let phase = (now - due).as_nanos() % self.interval.as_nanos();
            now + (self.interval - Duration::from_nanos(phase as u64))
        };
        self.next_due = Some(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscheduled_task_never_fires() {
        let mut task = TimerTask::default();
        let now = Instant::now();
        assert!(!task.is_scheduled());
        assert!(!task.poll(now + Duration::from_secs(5)));
        assert!(task.elapsed(now).is_none());
    }

    #[test]
    fn fires_once_per_interval() {
        let mut task = TimerTask::new(Duration::from_millis(10));
        let t0 = Instant::now();
        task.schedule(t0);
        assert!(!task.poll(t0 + Duration::from_millis(5)));
        assert!(task.poll(t0 + Duration::from_millis(10)));
        assert!(!task.poll(t0 + Duration::from_millis(15)));
        // Several missed intervals collapse into one trigger.
        assert!(task.poll(t0 + Duration::from_millis(55)));
        assert!(!task.poll(t0 + Duration::from_millis(59)));
        assert!(task.poll(t0 + Duration::from_millis(60)));
        assert_eq!(
            task.elapsed(t0 + Duration::from_millis(60)),
            Some(Duration::from_millis(60))
        );
    }

    #[test]
    fn long_stall_skips_to_next_boundary() {
        let mut task = TimerTask::new(Duration::from_millis(1));
        let t0 = Instant::now();
        task.schedule(t0);
        let stall = t0 + Duration::from_secs(3600);
        assert!(task.poll(stall + Duration::from_micros(500)));
        assert!(!task.poll(stall + Duration::from_micros(900)));
        assert!(task.poll(stall + Duration::from_millis(1)));
        assert!(!task.poll(stall + Duration::from_micros(1500)));
    }

    #[test]
    fn unschedule_is_idempotent() {
        let mut task = TimerTask::default();
        task.schedule(Instant::now());
        task.unschedule();
        task.unschedule();
        assert!(!task.is_scheduled());
        assert!(task.base_time().is_none());
    }
}
