//! Fixed word lists the classifier matches against.
//!
//! Matching is plain substring containment on the lower-cased message, not
//! tokenized matching, so `"hi"` matches inside `"this"` and `"qil"` matches
//! inside `"qiling"`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GREETINGS: &[&str] = &["salom", "assalomu", "hello", "hi", "hey"];

pub const DEFAULT_QUESTION_WORDS: &[&str] =
    &["nima", "qanday", "qachon", "qayer", "kim", "nega", "?"];

pub const DEFAULT_COMMAND_VERBS: &[&str] = &["yarat", "qil", "ber", "ko'rsat", "top", "izla"];

pub const DEFAULT_STOP_WORDS: &[&str] = &["va", "yoki", "bu", "u", "men", "sen", "biz"];

pub const DEFAULT_POSITIVE_WORDS: &[&str] = &["rahmat", "ajoyib", "zo'r"];

pub const DEFAULT_CONFUSION_WORDS: &[&str] = &["qiyin", "tushunmadim"];

/// Characters removed before keyword splitting.
pub const KEYWORD_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';'];

/// Tokens of this many characters or fewer are never keywords.
///
/// Length is counted in Unicode scalar values, so an emoji counts once.
pub const MIN_KEYWORD_CHARS: usize = 2;

/// The complete set of word lists used for understanding a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub greetings: Vec<String>,
    pub question_words: Vec<String>,
    pub command_verbs: Vec<String>,
    pub stop_words: Vec<String>,
    pub positive_words: Vec<String>,
    pub confusion_words: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            greetings: owned(DEFAULT_GREETINGS),
            question_words: owned(DEFAULT_QUESTION_WORDS),
            command_verbs: owned(DEFAULT_COMMAND_VERBS),
            stop_words: owned(DEFAULT_STOP_WORDS),
            positive_words: owned(DEFAULT_POSITIVE_WORDS),
            confusion_words: owned(DEFAULT_CONFUSION_WORDS),
        }
    }
}

impl Vocabulary {
    /// Check if the lower-cased message contains any greeting phrase.
    pub fn is_greeting(&self, lower: &str) -> bool {
        contains_any(lower, &self.greetings)
    }

    /// Check if the lower-cased message contains a question word or `?`.
    pub fn is_question(&self, lower: &str) -> bool {
        contains_any(lower, &self.question_words)
    }

    /// Check if the lower-cased message contains a command verb.
    pub fn is_command(&self, lower: &str) -> bool {
        contains_any(lower, &self.command_verbs)
    }

    pub fn is_positive(&self, lower: &str) -> bool {
        contains_any(lower, &self.positive_words)
    }

    pub fn is_confused(&self, lower: &str) -> bool {
        contains_any(lower, &self.confusion_words)
    }

    /// Check if a single normalized token is a stop word (exact match).
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.iter().any(|w| w == token)
    }

    /// Names of the lists that must not be empty for classification to work.
    pub fn empty_required_lists(&self) -> Vec<&'static str> {
        let mut empty = Vec::new();
        if self.greetings.is_empty() {
            empty.push("greetings");
        }
        if self.question_words.is_empty() {
            empty.push("question_words");
        }
        if self.command_verbs.is_empty() {
            empty.push("command_verbs");
        }
        empty
    }
}

/// Substring containment against any word in the list.
pub fn contains_any(haystack: &str, words: &[String]) -> bool {
    words
        .iter()
        .any(|w| !w.is_empty() && haystack.contains(w.as_str()))
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
