//! Generation sessions: the proposal rows the UI renders, keyed by pivot
//! node, with a ticket per generation so stale in-flight runs can never
//! overwrite a newer request's results.

use dashmap::DashMap;

use causelab_core::models::Proposal;

/// The rendered state for one pivot node.
#[derive(Debug, Clone, Default)]
pub struct GenerationSession {
    /// Ticket of the generation currently allowed to publish.
    pub generation: u64,
    /// Rows in all lifecycle states; cycles complete out of order, so
    /// `Pending`, `Assessing`, and `Complete` rows coexist.
    pub proposals: Vec<Proposal>,
}

/// Concurrent session table. Writes are gated on the generation ticket:
/// opening a new generation supersedes the previous one, and a superseded
/// run's publishes are refused (last-write-wins for a single-user tool).
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, GenerationSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new generation for `pivot`, clearing its rows and superseding
    /// any in-flight run. Returns the new ticket.
    pub fn open(&self, pivot: &str) -> u64 {
        let mut entry = self.sessions.entry(pivot.to_string()).or_default();
        entry.generation += 1;
        entry.proposals.clear();
        entry.generation
    }

    /// Whether `generation` is still the latest ticket for `pivot`.
    pub fn is_current(&self, pivot: &str, generation: u64) -> bool {
        self.sessions
            .get(pivot)
            .map(|s| s.generation == generation)
            .unwrap_or(false)
    }

    /// Replace the rendered rows, but only while `generation` holds the
    /// ticket. Returns false (dropping the rows) for a superseded run.
    pub fn publish(&self, pivot: &str, generation: u64, proposals: Vec<Proposal>) -> bool {
        match self.sessions.get_mut(pivot) {
            Some(mut session) if session.generation == generation => {
                session.proposals = proposals;
                true
            }
            _ => false,
        }
    }

    /// Current rows for rendering. Empty when no generation has run.
    pub fn snapshot(&self, pivot: &str) -> Vec<Proposal> {
        self.sessions
            .get(pivot)
            .map(|s| s.proposals.clone())
            .unwrap_or_default()
    }

    /// Drop one row; a proposal leaves the session when it is accepted
    /// into the graph or dismissed.
    pub fn remove(&self, pivot: &str, proposal_id: &str) {
        if let Some(mut session) = self.sessions.get_mut(pivot) {
            session.proposals.retain(|p| p.id != proposal_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use causelab_core::models::Direction;

    #[test]
    fn superseded_generation_cannot_publish() {
        let store = SessionStore::new();
        let first = store.open("pivot");
        let second = store.open("pivot");
        assert!(!store.publish("pivot", first, vec![Proposal::pending(Direction::Upstream)]));
        assert!(store.publish("pivot", second, vec![Proposal::pending(Direction::Upstream)]));
        assert_eq!(store.snapshot("pivot").len(), 1);
    }

    #[test]
    fn opening_a_generation_clears_previous_rows() {
        let store = SessionStore::new();
        let ticket = store.open("pivot");
        store.publish("pivot", ticket, vec![Proposal::pending(Direction::Upstream)]);
        store.open("pivot");
        assert!(store.snapshot("pivot").is_empty());
    }

    #[test]
    fn remove_drops_a_single_row() {
        let store = SessionStore::new();
        let ticket = store.open("pivot");
        let keep = Proposal::pending(Direction::Upstream);
        let drop = Proposal::pending(Direction::Upstream);
        let drop_id = drop.id.clone();
        store.publish("pivot", ticket, vec![keep.clone(), drop]);
        store.remove("pivot", &drop_id);
        let rows = store.snapshot("pivot");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, keep.id);
    }

    #[test]
    fn pivots_are_independent() {
        let store = SessionStore::new();
        let a = store.open("a");
        store.open("b");
        assert!(store.is_current("a", a));
    }
}
