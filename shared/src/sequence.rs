//! Ordering guard for overlapping session fetches.
//!
//! Every fetch takes a ticket before it starts. When the response lands it
//! is applied only if no newer ticket has been applied already, so a slow
//! response can never roll the session back to an older status.

use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct Sequencer {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        Ticket(next)
    }

    /// Returns true if the ticket is the newest seen so far, marking it applied.
    pub fn accept(&self, ticket: Ticket) -> bool {
        if ticket.0 > self.applied.get() {
            self.applied.set(ticket.0);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_order_responses_all_apply() {
        let seq = Sequencer::new();
        let a = seq.issue();
        assert!(seq.accept(a));
        let b = seq.issue();
        assert!(seq.accept(b));
    }

    #[test]
    fn older_response_rejected_after_newer() {
        let seq = Sequencer::new();
        let first = seq.issue();
        let second = seq.issue();

        assert!(seq.accept(second));
        assert!(!seq.accept(first));
    }

    #[test]
    fn ticket_applies_once() {
        let seq = Sequencer::new();
        let t = seq.issue();
        assert!(seq.accept(t));
        assert!(!seq.accept(t));
    }
}
