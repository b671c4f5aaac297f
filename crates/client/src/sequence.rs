use std::sync::atomic::{AtomicU64, Ordering};

/// Guard against out-of-order fetch responses.
///
/// Screens issue overlapping requests for the same resource with no
/// cancellation, so a slow response can resolve after a newer one and
/// clobber fresher data. Tag each request with a ticket from `begin` and
/// gate the state commit on `try_commit`: only the newest outstanding
/// request may land.
#[derive(Debug, Default)]
pub struct FetchSequencer {
    issued: AtomicU64,
    committed: AtomicU64,
}

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; the returned ticket identifies it.
    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Try to commit the response for `ticket`. Succeeds only when no newer
    /// fetch has begun and nothing newer has already committed.
    pub fn try_commit(&self, ticket: u64) -> bool {
        if ticket != self.issued.load(Ordering::SeqCst) {
            return false;
        }

        let mut committed = self.committed.load(Ordering::SeqCst);
        loop {
            if ticket <= committed {
                return false;
            }
            match self.committed.compare_exchange(
                committed,
                ticket,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return true,
                Err(current) => committed = current,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_commits() {
        let seq = FetchSequencer::new();
        let ticket = seq.begin();
        assert!(seq.try_commit(ticket));
    }

    #[test]
    fn stale_response_is_rejected_when_a_newer_fetch_began() {
        let seq = FetchSequencer::new();
        let old = seq.begin();
        let new = seq.begin();

        // The older request resolves late; it must not land.
        assert!(!seq.try_commit(old));
        assert!(seq.try_commit(new));
    }

    #[test]
    fn double_commit_of_the_same_ticket_is_rejected() {
        let seq = FetchSequencer::new();
        let ticket = seq.begin();
        assert!(seq.try_commit(ticket));
        assert!(!seq.try_commit(ticket));
    }

    #[test]
    fn rapid_topic_switches_keep_only_the_last() {
        let seq = FetchSequencer::new();
        let tickets: Vec<u64> = (0..5).map(|_| seq.begin()).collect();

        // Responses resolve in reverse order; only the newest wins.
        let mut committed = 0;
        for &t in tickets.iter().rev() {
            if seq.try_commit(t) {
                committed += 1;
            }
        }
        assert_eq!(committed, 1);
    }
}
