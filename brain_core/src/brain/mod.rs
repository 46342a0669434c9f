//! The Brain - owns every component and runs the conversational pipeline.
//!
//! One call to [`Brain::process_message`] runs, to completion:
//! 1. **Understand**: classify intent, extract keywords, detect emotion
//! 2. **Context**: collect recent exchanges and counters
//! 3. **Respond**: build the reply, possibly storing a fact
//! 4. **Remember**: record the exchange in working memory
//!
//! All methods that change state take `&mut self`, so two pipeline runs can
//! never interleave on the same brain.

use dialogue_rules::BrainConfig;
use serde::{Deserialize, Serialize};

use crate::events::{BrainEvent, EventSink, TracingSink};
use crate::knowledge_base::{learn_into, KnowledgeStore, LearnReport};
use crate::response_generator::{
    ConversationContext, RandomSource, ResponseGenerator, ThreadRandom,
};
use crate::understanding::{Understanding, UnderstandingEngine};
use crate::working_memory::{Exchange, WorkingMemory};

/// Process-lifetime counters and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentState {
    pub active: bool,
    /// True only while a text ingestion is running.
    pub learning: bool,
    /// True only while a message is being processed.
    pub thinking: bool,
    /// Number of messages processed so far.
    pub conversation_count: u64,
}

impl Default for AgentState {
    fn default() -> Self {
        Self {
            active: true,
            learning: false,
            thinking: false,
            conversation_count: 0,
        }
    }
}

/// Read-only status report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub version: String,
    pub active: bool,
    pub conversation_count: u64,
    pub knowledge_size: usize,
    pub memory_size: usize,
}

/// Full debug dump of a brain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrainSnapshot {
    pub name: String,
    pub version: String,
    pub state: AgentState,
    /// `(key, fact)` pairs sorted by key.
    pub knowledge: Vec<(String, String)>,
    /// Held exchanges, oldest first.
    pub working_memory: Vec<Exchange>,
}

impl BrainSnapshot {
    /// Render the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A single rule-based conversational agent.
pub struct Brain {
    name: String,
    version: String,
    context_window: usize,
    state: AgentState,
    understanding: UnderstandingEngine,
    responder: ResponseGenerator,
    knowledge: KnowledgeStore,
    memory: WorkingMemory,
    rng: Box<dyn RandomSource>,
    events: Box<dyn EventSink>,
}

impl Brain {
    /// Create a brain with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BrainConfig::default())
    }

    /// Create a brain that picks templates at random and logs via `tracing`.
    pub fn with_config(config: BrainConfig) -> Self {
        Self::from_parts(config, Box::new(ThreadRandom), Box::new(TracingSink))
    }

    /// Create a brain with an explicit random source and event sink.
    pub fn from_parts(
        config: BrainConfig,
        rng: Box<dyn RandomSource>,
        events: Box<dyn EventSink>,
    ) -> Self {
        let mut brain = Self {
            name: config.name,
            version: config.version,
            context_window: config.context_window,
            state: AgentState::default(),
            understanding: UnderstandingEngine::new(config.vocabulary),
            responder: ResponseGenerator::new(config.templates),
            knowledge: KnowledgeStore::new(),
            memory: WorkingMemory::new(config.memory_capacity),
            rng,
            events,
        };

        brain.emit(BrainEvent::Started {
            name: brain.name.clone(),
            version: brain.version.clone(),
        });
        brain
    }

    /// Run the full pipeline for one message and return the reply.
    pub fn process_message(&mut self, message: &str) -> String {
        self.emit(BrainEvent::MessageReceived {
            text: message.to_string(),
        });

        self.state.thinking = true;
        self.state.conversation_count += 1;

        let understanding = self.understanding.understand(message);
        self.emit(BrainEvent::Understood {
            intent: understanding.intent,
            emotion: understanding.emotion,
            keywords: understanding.keywords.clone(),
        });

        let context = self.context();
        let response = self.responder.generate_response(
            &understanding,
            &context,
            &mut self.knowledge,
            self.rng.as_mut(),
        );
        if let Some(key) = &response.stored_key {
            self.emit(BrainEvent::KnowledgeStored { key: key.clone() });
        }
        self.emit(BrainEvent::ResponseGenerated {
            intent: understanding.intent,
        });

        self.memory.record(Exchange::new(message, response.text.clone()));
        self.emit(BrainEvent::MemoryRecorded {
            size: self.memory.len(),
            capacity: self.memory.capacity(),
        });

        self.state.thinking = false;
        response.text
    }

    /// Mine facts from free text straight into the knowledge store.
    pub fn learn_from_text(&mut self, text: &str) -> LearnReport {
        self.state.learning = true;
        self.emit(BrainEvent::LearningStarted);

        let report = learn_into(&mut self.knowledge, text);

        self.state.learning = false;
        self.emit(BrainEvent::LearningFinished {
            learned: report.learned,
            total_knowledge: report.total_knowledge,
        });
        report
    }

    /// Classify a message without responding or recording anything.
    pub fn understand(&self, message: &str) -> Understanding {
        self.understanding.understand(message)
    }

    /// The context the next reply would be generated with.
    pub fn context(&self) -> ConversationContext {
        ConversationContext {
            recent_exchanges: self.memory.recent(self.context_window),
            conversation_count: self.state.conversation_count,
            knowledge_size: self.knowledge.len(),
        }
    }

    pub fn status(&self) -> Status {
        Status {
            version: self.version.clone(),
            active: self.state.active,
            conversation_count: self.state.conversation_count,
            knowledge_size: self.knowledge.len(),
            memory_size: self.memory.len(),
        }
    }

    pub fn snapshot(&self) -> BrainSnapshot {
        BrainSnapshot {
            name: self.name.clone(),
            version: self.version.clone(),
            state: self.state,
            knowledge: self.knowledge.sorted_entries(),
            working_memory: self.memory.iter().cloned().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    pub fn knowledge(&self) -> &KnowledgeStore {
        &self.knowledge
    }

    pub fn working_memory(&self) -> &WorkingMemory {
        &self.memory
    }

    fn emit(&mut self, event: BrainEvent) {
        self.events.emit(&event);
    }
}

impl Default for Brain {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Brain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Brain")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("state", &self.state)
            .field("knowledge_size", &self.knowledge.len())
            .field("memory_size", &self.memory.len())
            .finish()
    }
}
