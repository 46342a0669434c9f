//! Pipeline events for outside observers.
//!
//! The brain never prints or logs directly; it reports each pipeline stage as a
//! [`BrainEvent`] to an [`EventSink`]. The default sink forwards to `tracing`.

use dialogue_rules::{EmotionKind, IntentKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Observable events emitted by the brain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BrainEvent {
    Started {
        name: String,
        version: String,
    },
    MessageReceived {
        text: String,
    },
    Understood {
        intent: IntentKind,
        emotion: EmotionKind,
        keywords: Vec<String>,
    },
    ResponseGenerated {
        intent: IntentKind,
    },
    /// A statement turn wrote a fact.
    KnowledgeStored {
        key: String,
    },
    MemoryRecorded {
        size: usize,
        capacity: usize,
    },
    LearningStarted,
    LearningFinished {
        learned: usize,
        total_knowledge: usize,
    },
}

impl BrainEvent {
    /// Short event name.
    pub fn name(&self) -> &'static str {
        match self {
            BrainEvent::Started { .. } => "started",
            BrainEvent::MessageReceived { .. } => "message_received",
            BrainEvent::Understood { .. } => "understood",
            BrainEvent::ResponseGenerated { .. } => "response_generated",
            BrainEvent::KnowledgeStored { .. } => "knowledge_stored",
            BrainEvent::MemoryRecorded { .. } => "memory_recorded",
            BrainEvent::LearningStarted => "learning_started",
            BrainEvent::LearningFinished { .. } => "learning_finished",
        }
    }
}

/// Receiver of brain events.
pub trait EventSink {
    fn emit(&mut self, event: &BrainEvent);
}

/// Forwards events to the `tracing` subscriber installed by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: &BrainEvent) {
        match event {
            BrainEvent::Started { name, version } => {
                info!(%name, %version, "brain started");
            }
            BrainEvent::MessageReceived { text } => {
                debug!(%text, "message received");
            }
            BrainEvent::Understood {
                intent,
                emotion,
                keywords,
            } => {
                debug!(%intent, %emotion, ?keywords, "message understood");
            }
            BrainEvent::ResponseGenerated { intent } => {
                debug!(%intent, "response generated");
            }
            BrainEvent::KnowledgeStored { key } => {
                info!(%key, "fact stored from statement");
            }
            BrainEvent::MemoryRecorded { size, capacity } => {
                debug!(size, capacity, "exchange recorded");
            }
            BrainEvent::LearningStarted => {
                info!("learning from text");
            }
            BrainEvent::LearningFinished {
                learned,
                total_knowledge,
            } => {
                info!(learned, total_knowledge, "learning finished");
            }
        }
    }
}

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &BrainEvent) {}
}

/// Collects events in memory, in emission order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<BrainEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[BrainEvent] {
        &self.events
    }

    /// Event names in emission order.
    pub fn names(&self) -> Vec<&'static str> {
        self.events.iter().map(BrainEvent::name).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &BrainEvent) {
        self.events.push(event.clone());
    }
}

/// Shared handle so a caller can keep reading an [`EventLog`] owned by a brain.
impl EventSink for std::rc::Rc<std::cell::RefCell<EventLog>> {
    fn emit(&mut self, event: &BrainEvent) {
        self.borrow_mut().emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_order() {
        let mut log = EventLog::new();
        log.emit(&BrainEvent::LearningStarted);
        log.emit(&BrainEvent::LearningFinished {
            learned: 2,
            total_knowledge: 5,
        });

        assert_eq!(log.names(), vec!["learning_started", "learning_finished"]);
        assert_eq!(log.events().len(), 2);

        log.clear();
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_shared_log() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let shared = Rc::new(RefCell::new(EventLog::new()));
        let mut sink = Rc::clone(&shared);
        sink.emit(&BrainEvent::MessageReceived {
            text: "salom".to_string(),
        });

        assert_eq!(shared.borrow().names(), vec!["message_received"]);
    }

    #[test]
    fn test_tracing_sink_accepts_all_events() {
        let mut sink = TracingSink;
        sink.emit(&BrainEvent::Started {
            name: "Tinimsiz AGI".to_string(),
            version: "1.1".to_string(),
        });
        sink.emit(&BrainEvent::Understood {
            intent: IntentKind::Question,
            emotion: EmotionKind::Neutral,
            keywords: vec!["osmon".to_string()],
        });
        sink.emit(&BrainEvent::MemoryRecorded {
            size: 1,
            capacity: 10,
        });
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let json = serde_json::to_value(BrainEvent::ResponseGenerated {
            intent: IntentKind::Greeting,
        })
        .unwrap();
        assert_eq!(json["event"], "response_generated");
        assert_eq!(json["intent"], "greeting");
    }
}
