//! Trailing-edge debouncing.
//!
//! Latest-wins: every [`Debouncer::schedule`] supersedes the pending value and
//! hands out a fresh [`Ticket`]. When the host's timer for a ticket fires,
//! [`Debouncer::take`] yields the value only if no newer schedule happened in
//! the meantime, so a burst of events is processed once, with its last value.

use std::time::Duration;

/// Handle for one scheduled value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    next: u64,
    pending: Option<(Ticket, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            next: 0,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Replace the pending value; the host should fire the ticket after [`window`](Self::window).
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.next += 1;
        let ticket = Ticket(self.next);
        self.pending = Some((ticket, value));
        ticket
    }

    /// Pending value for `ticket`, or `None` if it was superseded or already taken.
    pub fn take(&mut self, ticket: Ticket) -> Option<T> {
        match self.pending.take() {
            Some((pending, value)) if pending == ticket => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_delivers() {
        let mut debouncer = Debouncer::new(Duration::from_millis(16));
        let first = debouncer.schedule(1);
        let second = debouncer.schedule(2);
        let third = debouncer.schedule(3);

        assert_eq!(debouncer.take(first), None);
        assert_eq!(debouncer.take(second), None);
        assert_eq!(debouncer.take(third), Some(3));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_stale_ticket_keeps_pending_value() {
        let mut debouncer = Debouncer::new(Duration::from_millis(16));
        let stale = debouncer.schedule("a");
        let fresh = debouncer.schedule("b");

        assert_eq!(debouncer.take(stale), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.take(fresh), Some("b"));
    }

    #[test]
    fn test_ticket_delivers_once() {
        let mut debouncer = Debouncer::new(Duration::from_millis(16));
        let ticket = debouncer.schedule(7);
        assert_eq!(debouncer.take(ticket), Some(7));
        assert_eq!(debouncer.take(ticket), None);
    }
}
