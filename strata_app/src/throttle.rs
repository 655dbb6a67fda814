// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trailing-edge throttle scheduler.
//!
//! Rate limiting for bursty update streams (slider drags): the first value
//! fires immediately; later values within the window land in a pending slot
//! where each newer value supersedes the previous one. The host polls with
//! its event loop clock, and the pending value fires once the window has
//! elapsed, so the newest value is always eventually applied even when
//! intermediate ones are dropped.
//!
//! Time is an explicit millisecond timestamp on every call. There are no
//! timers or threads here; tests drive this with a fake clock.

/// A trailing-edge throttle over values of type `T`.
#[derive(Clone, Debug)]
pub struct Throttle<T> {
    window_ms: u64,
    last_run: Option<u64>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    /// Creates a throttle with the given window.
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_run: None,
            pending: None,
        }
    }

    /// Offers a value at time `now_ms`.
    ///
    /// Returns `Some(value)` when the value should be applied right away
    /// (the leading call). Otherwise the value is stored as pending,
    /// superseding any previous pending value, and `None` is returned.
    pub fn submit(&mut self, value: T, now_ms: u64) -> Option<T> {
        match self.last_run {
            None => {
                self.last_run = Some(now_ms);
                Some(value)
            }
            Some(_) => {
                self.pending = Some(value);
                None
            }
        }
    }

    /// Fires the pending value if the window has elapsed.
    ///
    /// Hosts call this from their event loop; a pending value left over
    /// from an old burst fires on the first poll past the window.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let due = self.last_run.map_or(0, |t| t.saturating_add(self.window_ms));
        if self.pending.is_some() && now_ms >= due {
            self.last_run = Some(now_ms);
            self.pending.take()
        } else {
            None
        }
    }

    /// Drops the pending value, if any, and returns it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Returns `true` if a value is waiting to fire.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the timestamp at which a pending value becomes due.
    pub fn next_due(&self) -> Option<u64> {
        self.pending.as_ref()?;
        Some(self.last_run.map_or(0, |t| t.saturating_add(self.window_ms)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_submit_fires_immediately() {
        let mut t = Throttle::new(100);
        assert_eq!(t.submit(1, 0), Some(1));
        assert!(!t.has_pending());
    }

    #[test]
    fn burst_values_supersede_each_other() {
        let mut t = Throttle::new(100);
        assert_eq!(t.submit(1, 0), Some(1));
        assert_eq!(t.submit(2, 10), None);
        assert_eq!(t.submit(3, 20), None);
        assert_eq!(t.next_due(), Some(100));

        // Not due yet.
        assert_eq!(t.poll(99), None);
        // The newest value fires, not the intermediate one.
        assert_eq!(t.poll(100), Some(3));
        assert!(!t.has_pending());
        assert_eq!(t.poll(500), None);
    }

    #[test]
    fn stale_pending_fires_on_first_poll_after_the_window() {
        let mut t = Throttle::new(100);
        assert_eq!(t.submit(1, 0), Some(1));
        // A submit long after the window still lands in the pending slot
        // and fires on the next poll.
        assert_eq!(t.submit(2, 5000), None);
        assert_eq!(t.poll(5001), Some(2));
    }

    #[test]
    fn cancel_discards_the_pending_value() {
        let mut t = Throttle::new(100);
        t.submit(1, 0);
        t.submit(2, 10);
        assert_eq!(t.cancel(), Some(2));
        assert_eq!(t.poll(1000), None);
    }

    #[test]
    fn window_restarts_after_a_trailing_fire() {
        let mut t = Throttle::new(100);
        t.submit(1, 0);
        t.submit(2, 50);
        assert_eq!(t.poll(100), Some(2));
        t.submit(3, 110);
        assert_eq!(t.poll(150), None);
        assert_eq!(t.poll(200), Some(3));
    }
}
