//! Working Memory - a bounded log of recent exchanges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Unique identifier for exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExchangeId(pub Uuid);

impl ExchangeId {
    /// Create a new random exchange ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ExchangeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user message and the brain's reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub id: ExchangeId,
    pub user_text: String,
    pub agent_response: String,
    pub timestamp: DateTime<Utc>,
}

impl Exchange {
    /// Create an exchange stamped with the current time.
    pub fn new(user_text: impl Into<String>, agent_response: impl Into<String>) -> Self {
        Self {
            id: ExchangeId::new(),
            user_text: user_text.into(),
            agent_response: agent_response.into(),
            timestamp: Utc::now(),
        }
    }
}

/// FIFO log of exchanges that never holds more than `capacity` entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingMemory {
    exchanges: VecDeque<Exchange>,
    capacity: usize,
}

impl WorkingMemory {
    /// Create an empty memory. A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            exchanges: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append an exchange, evicting the oldest ones past capacity.
    pub fn record(&mut self, exchange: Exchange) {
        self.exchanges.push_back(exchange);
        while self.exchanges.len() > self.capacity {
            self.exchanges.pop_front();
        }
    }

    /// The last `n` exchanges, oldest first.
    pub fn recent(&self, n: usize) -> Vec<Exchange> {
        let skip = self.exchanges.len().saturating_sub(n);
        self.exchanges.iter().skip(skip).cloned().collect()
    }

    /// Iterate over all held exchanges, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Exchange> {
        self.exchanges.iter()
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for WorkingMemory {
    fn default() -> Self {
        Self::new(dialogue_rules::DEFAULT_MEMORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(i: usize) -> Exchange {
        Exchange::new(format!("xabar {}", i), format!("javob {}", i))
    }

    #[test]
    fn test_record_and_recent() {
        let mut memory = WorkingMemory::default();
        for i in 1..=4 {
            memory.record(numbered(i));
        }

        let recent = memory.recent(3);
        let texts: Vec<_> = recent.iter().map(|e| e.user_text.as_str()).collect();
        assert_eq!(texts, vec!["xabar 2", "xabar 3", "xabar 4"]);
    }

    #[test]
    fn test_recent_more_than_held() {
        let mut memory = WorkingMemory::default();
        memory.record(numbered(1));

        assert_eq!(memory.recent(3).len(), 1);
        assert!(memory.recent(0).is_empty());
    }

    #[test]
    fn test_eviction_after_eleven_records() {
        let mut memory = WorkingMemory::default();
        let first = numbered(1);
        let first_id = first.id;
        memory.record(first);

        for i in 2..=11 {
            memory.record(numbered(i));
            assert!(memory.len() <= memory.capacity());
        }

        assert_eq!(memory.len(), 10);
        assert!(memory.iter().all(|e| e.id != first_id));
        assert_eq!(memory.iter().last().unwrap().user_text, "xabar 11");
        assert_eq!(memory.iter().next().unwrap().user_text, "xabar 2");
    }

    #[test]
    fn test_zero_capacity_raised() {
        let mut memory = WorkingMemory::new(0);
        memory.record(numbered(1));
        memory.record(numbered(2));

        assert_eq!(memory.capacity(), 1);
        assert_eq!(memory.len(), 1);
        assert_eq!(memory.recent(1)[0].user_text, "xabar 2");
    }
}
