// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ResumeDrop contributors

//! Deadline-based debouncer polled from the frame loop.

use std::time::{Duration, Instant};

/// Defers delivery of a value until `wait` elapses with no further calls.
///
/// Each `schedule` replaces the pending value and re-arms the deadline, so a
/// burst of calls delivers only the last value once the burst goes quiet.
/// There is no timer thread: the owner polls from its tick/frame loop.
#[derive(Debug)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Store `value` for delivery once the wait elapses, replacing any
    /// pending value and restarting the wait.
    pub fn schedule(&mut self, value: T) {
        self.pending = Some((value, Instant::now() + self.wait));
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if Instant::now() >= *deadline => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Debouncer;

    #[test]
    fn burst_delivers_only_last_value() {
        let mut debounce = Debouncer::new(Duration::from_millis(20));
        debounce.schedule("a");
        debounce.schedule("ab");
        debounce.schedule("abc");

        assert_eq!(debounce.poll(), None, "deadline not reached yet");

        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(debounce.poll(), Some("abc"));
        assert_eq!(debounce.poll(), None, "value is delivered once");
    }

    #[test]
    fn each_call_restarts_the_wait() {
        let mut debounce = Debouncer::new(Duration::from_millis(40));
        debounce.schedule(1);
        std::thread::sleep(Duration::from_millis(25));
        debounce.schedule(2);
        // The first deadline would have passed by now; the re-arm must not.
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(debounce.poll(), None);

        std::thread::sleep(Duration::from_millis(25));
        assert_eq!(debounce.poll(), Some(2));
    }

    #[test]
    fn is_pending_tracks_the_scheduled_value() {
        let mut debounce = Debouncer::new(Duration::ZERO);
        assert!(!debounce.is_pending());

        debounce.schedule("x");
        assert!(debounce.is_pending());

        debounce.poll();
        assert!(!debounce.is_pending());
    }

    #[test]
    fn zero_wait_fires_on_next_poll() {
        let mut debounce = Debouncer::new(Duration::ZERO);
        debounce.schedule(7);
        assert_eq!(debounce.poll(), Some(7));
    }
}
