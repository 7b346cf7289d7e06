//! # Autosave
//!
//! Debounced persistence under the single-threaded, event-driven model: each
//! change cancels the pending flush and arms a new one. There is no timer
//! thread; the scheduler holds a deadline and the host's event loop drives it
//! by polling with the current instant, which keeps the debounce fully
//! deterministic in tests.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct PendingFlush {
    text: String,
    due: Instant,
}

/// An owned, cancellable scheduled flush. At most one is armed at a time.
#[derive(Debug)]
pub struct AutosaveScheduler {
    delay: Duration,
    pending: Option<PendingFlush>,
}

impl AutosaveScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a change: cancel any pending flush and arm a new one holding
    /// this text, due after the debounce delay.
    pub fn on_change(&mut self, text: &str, now: Instant) {
        self.pending = Some(PendingFlush {
            text: text.to_string(),
            due: now + self.delay,
        });
    }

    /// Yield the text to flush if the armed deadline has passed. Fires at
    /// most once per armed flush.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| p.due <= now) {
            self.pending.take().map(|p| p.text)
        } else {
            None
        }
    }

    /// Take the pending text immediately, bypassing the timer. Used on
    /// exit-edit transitions where the flush must not wait.
    pub fn take_now(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.text)
    }

    /// Drop the pending flush without flushing. Used when a direct save has
    /// already persisted newer content.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn test_nothing_pending_initially() {
        let mut sched = AutosaveScheduler::new(DELAY);
        assert!(!sched.is_armed());
        assert_eq!(sched.poll(Instant::now()), None);
    }

    #[test]
    fn test_flush_waits_for_the_window() {
        let mut sched = AutosaveScheduler::new(DELAY);
        let t0 = Instant::now();

        sched.on_change("a", t0);
        assert_eq!(sched.poll(t0 + Duration::from_millis(499)), None);
        assert_eq!(sched.poll(t0 + DELAY), Some("a".to_string()));
    }

    #[test]
    fn test_rapid_changes_collapse_to_last_value() {
        let mut sched = AutosaveScheduler::new(DELAY);
        let t0 = Instant::now();

        for (i, text) in ["a", "ab", "abc"].iter().enumerate() {
            sched.on_change(text, t0 + Duration::from_millis(i as u64 * 100));
        }

        // Nothing fires inside the window of the last change.
        let last_change = t0 + Duration::from_millis(200);
        assert_eq!(sched.poll(last_change + Duration::from_millis(499)), None);

        // Exactly one flush, with the last value.
        assert_eq!(
            sched.poll(last_change + DELAY),
            Some("abc".to_string())
        );
        assert_eq!(sched.poll(last_change + DELAY * 2), None);
    }

    #[test]
    fn test_take_now_bypasses_timer() {
        let mut sched = AutosaveScheduler::new(DELAY);
        let t0 = Instant::now();

        sched.on_change("draft", t0);
        assert_eq!(sched.take_now(), Some("draft".to_string()));
        assert!(!sched.is_armed());
        assert_eq!(sched.poll(t0 + DELAY), None);
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut sched = AutosaveScheduler::new(DELAY);
        let t0 = Instant::now();

        sched.on_change("stale", t0);
        sched.cancel();
        assert_eq!(sched.poll(t0 + DELAY), None);
    }
}
