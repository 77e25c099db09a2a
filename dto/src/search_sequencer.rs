/// Identifies one dispatched search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn sequence_number(&self) -> u64 {
        self.0
    }
}

/// Orders overlapping search requests.
///
/// Responses may come back in any order. A response is applied only if its request
/// was issued after the request of the last applied response, so the grid always ends
/// up showing the most recently issued search that completed.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    last_issued: u64,
    last_applied: u64,
}

impl SearchSequencer {
    pub fn issue(&mut self) -> SearchTicket {
        self.last_issued += 1;
        SearchTicket(self.last_issued)
    }

    /// Returns `true` if the response for `ticket` should be applied,
    /// and records it as the last applied one.
    pub fn try_apply(&mut self, ticket: SearchTicket) -> bool {
        if ticket.0 > self.last_applied {
            self.last_applied = ticket.0;
            true
        } else {
            false
        }
    }

    /// Discard the responses of every request issued so far.
    pub fn supersede_all(&mut self) {
        self.last_applied = self.last_issued;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_apply_responses_arriving_in_order() {
        let mut sequencer = SearchSequencer::default();
        let first = sequencer.issue();
        let second = sequencer.issue();
        assert!(sequencer.try_apply(first));
        assert!(sequencer.try_apply(second));
    }

    #[test]
    fn should_discard_older_response_arriving_last() {
        let mut sequencer = SearchSequencer::default();
        let first = sequencer.issue();
        let second = sequencer.issue();
        assert!(sequencer.try_apply(second));
        assert!(!sequencer.try_apply(first));
    }

    #[test]
    fn should_not_apply_same_response_twice() {
        let mut sequencer = SearchSequencer::default();
        let ticket = sequencer.issue();
        assert!(sequencer.try_apply(ticket));
        assert!(!sequencer.try_apply(ticket));
    }

    #[test]
    fn should_discard_everything_issued_before_supersede() {
        let mut sequencer = SearchSequencer::default();
        let first = sequencer.issue();
        let second = sequencer.issue();
        sequencer.supersede_all();
        assert!(!sequencer.try_apply(second));
        assert!(!sequencer.try_apply(first));

        let third = sequencer.issue();
        assert!(sequencer.try_apply(third));
    }

    #[test]
    fn should_number_tickets_increasingly() {
        let mut sequencer = SearchSequencer::default();
        let first = sequencer.issue();
        let second = sequencer.issue();
        assert!(first < second);
        assert_eq!(1, first.sequence_number());
    }
}
