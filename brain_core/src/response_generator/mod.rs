//! Response Generator - turns an [`Understanding`] into reply text.
//!
//! Dispatch is by intent:
//! 1. **Greeting**: random greeting
//! 2. **Question**: recall the first keyword found in the store, else a
//!    random "don't know yet" reply
//! 3. **Command**: random "not yet capable" reply
//! 4. **Statement**: store `keywords[0] → keywords[1..]` when there are at
//!    least two keywords, else a random acknowledgement
//! 5. **Unknown**: random clarification request
//!
//! Replies that mention a keyword fall back to keyword-free templates when the
//! message produced no keywords.

mod random;

pub use random::*;

use dialogue_rules::{keyword_free, render, IntentKind, ResponseTemplates};
use serde::{Deserialize, Serialize};

use crate::knowledge_base::KnowledgeStore;
use crate::understanding::Understanding;
use crate::working_memory::Exchange;

/// Used only if a template set was left empty.
const EMPTY_SET_REPLY: &str = "🤔";

/// Read-only conversational context handed to the generator.
///
/// No reply currently depends on it; it is carried so richer strategies can
/// use it without changing the call shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Most recent exchanges, oldest first.
    pub recent_exchanges: Vec<Exchange>,
    pub conversation_count: u64,
    pub knowledge_size: usize,
}

/// A generated reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub text: String,
    /// Key written by a statement turn, if any.
    pub stored_key: Option<String>,
}

impl Response {
    fn text(text: String) -> Self {
        Self {
            text,
            stored_key: None,
        }
    }
}

/// Template-driven reply builder.
#[derive(Debug, Clone, Default)]
pub struct ResponseGenerator {
    templates: ResponseTemplates,
}

impl ResponseGenerator {
    pub fn new(templates: ResponseTemplates) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &ResponseTemplates {
        &self.templates
    }

    /// Build the reply for one understood message.
    ///
    /// Statements with two or more keywords write into `store`.
    pub fn generate_response(
        &self,
        understanding: &Understanding,
        _context: &ConversationContext,
        store: &mut KnowledgeStore,
        rng: &mut dyn RandomSource,
    ) -> Response {
        let keywords = &understanding.keywords;

        match understanding.intent {
            IntentKind::Greeting => Response::text(self.respond_to_greeting(rng)),
            IntentKind::Question => {
                Response::text(self.respond_to_question(keywords, store, rng))
            }
            IntentKind::Command => Response::text(self.respond_to_command(keywords, rng)),
            IntentKind::Statement => self.respond_to_statement(keywords, store, rng),
            IntentKind::Unknown => Response::text(self.respond_default(rng)),
        }
    }

    pub fn respond_to_greeting(&self, rng: &mut dyn RandomSource) -> String {
        pick_from(&self.templates.greeting, rng).to_string()
    }

    /// Recall the first keyword that has a stored fact.
    pub fn respond_to_question(
        &self,
        keywords: &[String],
        store: &KnowledgeStore,
        rng: &mut dyn RandomSource,
    ) -> String {
        for keyword in keywords {
            if let Some(fact) = store.get(keyword) {
                return render(
                    &self.templates.recall,
                    &[("key", keyword.as_str()), ("fact", fact)],
                );
            }
        }

        self.render_with_keywords(&self.templates.question_miss, keywords, rng)
    }

    pub fn respond_to_command(&self, keywords: &[String], rng: &mut dyn RandomSource) -> String {
        self.render_with_keywords(&self.templates.command, keywords, rng)
    }

    /// Store a fact from a statement, or acknowledge it.
    pub fn respond_to_statement(
        &self,
        keywords: &[String],
        store: &mut KnowledgeStore,
        rng: &mut dyn RandomSource,
    ) -> Response {
        if let [key, rest @ ..] = keywords {
            if !rest.is_empty() {
                store.set(key, rest.join(" "));
                return Response {
                    text: render(&self.templates.stored, &[("key", key.as_str())]),
                    stored_key: Some(KnowledgeStore::normalize_key(key)),
                };
            }
        }

        Response::text(pick_from(&self.templates.acknowledgement, rng).to_string())
    }

    pub fn respond_default(&self, rng: &mut dyn RandomSource) -> String {
        pick_from(&self.templates.clarification, rng).to_string()
    }

    fn render_with_keywords(
        &self,
        set: &[String],
        keywords: &[String],
        rng: &mut dyn RandomSource,
    ) -> String {
        let candidates: Vec<&str> = if keywords.is_empty() {
            keyword_free(set)
        } else {
            set.iter().map(String::as_str).collect()
        };
        let template = pick_template(&candidates, rng).unwrap_or(EMPTY_SET_REPLY);

        let first = keywords.first().map(String::as_str).unwrap_or_default();
        let list = keywords.join(", ");
        let phrase = keywords.join(" ");
        render(
            template,
            &[
                ("keyword", first),
                ("keyword_list", list.as_str()),
                ("keyword_phrase", phrase.as_str()),
            ],
        )
    }
}

fn pick_from<'a>(set: &'a [String], rng: &mut dyn RandomSource) -> &'a str {
    let candidates: Vec<&str> = set.iter().map(String::as_str).collect();
    pick_template(&candidates, rng).unwrap_or(EMPTY_SET_REPLY)
}
