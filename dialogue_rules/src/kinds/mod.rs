//! Intent and emotion kinds attached to every understood message.

use serde::{Deserialize, Serialize};

/// Coarse communicative category of a message.
///
/// Variants are listed in classification order: the classifier tries
/// greeting, then question, then command, and falls back to statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Greeting,
    Question,
    Command,
    /// Catch-all for any non-blank message.
    Statement,
    /// Blank input; nothing to classify.
    Unknown,
}

impl IntentKind {
    /// All intents in classification order.
    pub fn all() -> [Self; 5] {
        [
            Self::Greeting,
            Self::Question,
            Self::Command,
            Self::Statement,
            Self::Unknown,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentKind::Greeting => "greeting",
            IntentKind::Question => "question",
            IntentKind::Command => "command",
            IntentKind::Statement => "statement",
            IntentKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse affect label, determined independently of intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmotionKind {
    Happy,
    Confused,
    Excited,
    #[default]
    Neutral,
}

impl EmotionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionKind::Happy => "happy",
            EmotionKind::Confused => "confused",
            EmotionKind::Excited => "excited",
            EmotionKind::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for EmotionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
