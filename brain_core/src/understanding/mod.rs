//! Understanding Engine - turns a raw message into an [`Understanding`].
//!
//! Classification is a deterministic, first-match-wins walk over fixed word
//! lists:
//! 1. **Intent**: greeting → question → command → statement
//! 2. **Keywords**: punctuation stripped, short tokens and stop words dropped
//! 3. **Emotion**: positive → confused → excited (`!`) → neutral
//!
//! The engine is total: every input, including the empty string, produces a
//! result.

use chrono::{DateTime, Utc};
use dialogue_rules::{
    EmotionKind, IntentKind, Vocabulary, KEYWORD_PUNCTUATION, MIN_KEYWORD_CHARS,
};
use serde::{Deserialize, Serialize};

/// The result of understanding one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Understanding {
    /// The message exactly as received.
    pub original: String,
    pub intent: IntentKind,
    /// Normalized keywords in message order, duplicates kept.
    pub keywords: Vec<String>,
    pub emotion: EmotionKind,
    pub timestamp: DateTime<Utc>,
}

impl Understanding {
    /// The first keyword, if any.
    pub fn first_keyword(&self) -> Option<&str> {
        self.keywords.first().map(String::as_str)
    }

    pub fn has_keywords(&self) -> bool {
        !self.keywords.is_empty()
    }
}

/// Rule-based classifier over a [`Vocabulary`].
#[derive(Debug, Clone, Default)]
pub struct UnderstandingEngine {
    vocabulary: Vocabulary,
}

impl UnderstandingEngine {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Understand a message.
    pub fn understand(&self, message: &str) -> Understanding {
        let lower = message.to_lowercase();

        Understanding {
            original: message.to_string(),
            intent: self.classify_intent(&lower),
            keywords: self.extract_keywords(message),
            emotion: self.detect_emotion(&lower),
            timestamp: Utc::now(),
        }
    }

    /// Classify the intent of an already lower-cased message.
    pub fn classify_intent(&self, lower: &str) -> IntentKind {
        if self.vocabulary.is_greeting(lower) {
            IntentKind::Greeting
        } else if self.vocabulary.is_question(lower) {
            IntentKind::Question
        } else if self.vocabulary.is_command(lower) {
            IntentKind::Command
        } else {
            IntentKind::Statement
        }
    }

    /// Extract normalized keywords from a message.
    pub fn extract_keywords(&self, message: &str) -> Vec<String> {
        let cleaned: String = message
            .to_lowercase()
            .chars()
            .filter(|c| !KEYWORD_PUNCTUATION.contains(c))
            .collect();

        cleaned
            .split_whitespace()
            .filter(|word| word.chars().count() > MIN_KEYWORD_CHARS)
            .filter(|word| !self.vocabulary.is_stop_word(word))
            .map(str::to_string)
            .collect()
    }

    /// Detect the emotion of an already lower-cased message.
    pub fn detect_emotion(&self, lower: &str) -> EmotionKind {
        if self.vocabulary.is_positive(lower) {
            EmotionKind::Happy
        } else if self.vocabulary.is_confused(lower) {
            EmotionKind::Confused
        } else if lower.contains('!') {
            EmotionKind::Excited
        } else {
            EmotionKind::Neutral
        }
    }
}
