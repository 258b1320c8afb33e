//! In-memory append-only journal.

use uuid::Uuid;

use crate::envelope::EventEnvelope;
use crate::event::Event;

/// Append-only, in-process event journal.
///
/// Sequence numbers start at 1 and increase by one per appended event; entries
/// are never rewritten or removed. Nothing is persisted.
#[derive(Debug, Clone)]
pub struct Journal<E> {
    aggregate_type: String,
    entries: Vec<EventEnvelope<E>>,
}

impl<E: Event> Journal<E> {
    pub fn new(aggregate_type: impl Into<String>) -> Self {
        Self {
            aggregate_type: aggregate_type.into(),
            entries: Vec::new(),
        }
    }

    /// Wrap `event` in an envelope and append it. Returns the committed envelope.
    pub fn append(&mut self, aggregate_id: impl Into<String>, event: E) -> &EventEnvelope<E> {
        let next = self.last_sequence() + 1;
        let envelope = EventEnvelope::new(
            Uuid::now_v7(),
            aggregate_id,
            self.aggregate_type.clone(),
            event.event_type(),
            event.version(),
            next,
            event,
        );
        self.entries.push(envelope);
        &self.entries[self.entries.len() - 1]
    }

    /// Sequence number of the most recent entry, `0` when empty.
    pub fn last_sequence(&self) -> u64 {
        self.entries.last().map(|e| e.sequence_number()).unwrap_or(0)
    }

    pub fn entries(&self) -> &[EventEnvelope<E>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Ping(u32);

    impl Event for Ping {
        fn event_type(&self) -> &'static str {
            "test.ping"
        }

        fn version(&self) -> u32 {
            1
        }
    }

    #[test]
    fn append_assigns_monotonic_sequence_numbers() {
        let mut journal = Journal::new("test");
        assert!(journal.is_empty());
        assert_eq!(journal.last_sequence(), 0);

        let first = journal.append("a", Ping(1)).sequence_number();
        let second = journal.append("b", Ping(2)).sequence_number();
        let third = journal.append("a", Ping(3)).sequence_number();

        assert_eq!((first, second, third), (1, 2, 3));
        assert_eq!(journal.len(), 3);
        assert_eq!(journal.last_sequence(), 3);
    }

    #[test]
    fn envelope_carries_event_metadata() {
        let mut journal = Journal::new("test");
        let env = journal.append("a", Ping(7)).clone();

        assert_eq!(env.aggregate_id(), "a");
        assert_eq!(env.aggregate_type(), "test");
        assert_eq!(env.event_type(), "test.ping");
        assert_eq!(env.event_version(), 1);
        assert_eq!(env.payload(), &Ping(7));
    }
}
