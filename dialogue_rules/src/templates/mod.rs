//! Response template sets.
//!
//! Templates are plain strings with `{name}` placeholders. The keyword
//! placeholders are:
//! - `{keyword}`: the first keyword
//! - `{keyword_list}`: all keywords joined by `", "`
//! - `{keyword_phrase}`: all keywords joined by `" "`
//!
//! Recall and confirmation templates use `{key}` and `{fact}`.

use serde::{Deserialize, Serialize};

pub const KEYWORD_PLACEHOLDERS: &[&str] = &["{keyword}", "{keyword_list}", "{keyword_phrase}"];

const GREETING: &[&str] = &[
    "Salom! Men Tinimsiz AGI man. Sizga qanday yordam bera olaman? 😊",
    "Assalomu alaykum! Nima haqida gaplashmoqchisiz?",
    "Salom! Bugun nimani o'rganamiz? 🚀",
];

const QUESTION_MISS: &[&str] = &[
    "{keyword_list} haqida menda hozircha ma'lumot yo'q. Lekin agar o'rgatsangiz, eslab qolaman! 📚",
    "Qiziq savol! {keyword} haqida ko'proq ma'lumot berishingiz mumkinmi?",
    "Bu haqda o'rganishni xohlayman. Menga aytib bering! 🤔",
];

const COMMAND: &[&str] = &[
    "{keyword} qilishga harakat qilaman. Bu funksiya keyingi versiyalarda qo'shiladi! 🚀",
    "Tushunarli! {keyword_phrase} uchun ishlayapman...",
    "Bu vazifa qiziqarli! Hozircha bu qobiliyat yo'q, lekin o'rganaman! 💡",
];

const ACKNOWLEDGEMENT: &[&str] = &[
    "Qiziqarli! Davom eting... 🤔",
    "Tushunarli. Yana nima demoqchisiz?",
    "Men tinglayapman! 👂",
];

const CLARIFICATION: &[&str] = &[
    "Tushunmadim, boshqacha tushuntirib bera olasizmi? 🤔",
    "Qiziq... bu haqda ko'proq aytib bering!",
    "Meni bu haqda o'rgating! Men o'rganishni yaxshi ko'raman! 📚",
];

const RECALL: &str = "{key} haqida bilganim: {fact}";

const STORED: &str = "✅ Tushundim va eslab qoldim: \"{key}\" haqida. Rahmat! 📝";

/// All template sets used by the response generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTemplates {
    pub greeting: Vec<String>,
    /// Question with no stored fact for any keyword.
    pub question_miss: Vec<String>,
    pub command: Vec<String>,
    /// Statement too short to be stored as a fact.
    pub acknowledgement: Vec<String>,
    /// Unknown intent.
    pub clarification: Vec<String>,
    pub recall: String,
    pub stored: String,
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        Self {
            greeting: owned(GREETING),
            question_miss: owned(QUESTION_MISS),
            command: owned(COMMAND),
            acknowledgement: owned(ACKNOWLEDGEMENT),
            clarification: owned(CLARIFICATION),
            recall: RECALL.to_string(),
            stored: STORED.to_string(),
        }
    }
}

impl ResponseTemplates {
    /// Iterate over the named random-choice sets.
    pub fn sets(&self) -> [(&'static str, &[String]); 5] {
        [
            ("greeting", self.greeting.as_slice()),
            ("question_miss", self.question_miss.as_slice()),
            ("command", self.command.as_slice()),
            ("acknowledgement", self.acknowledgement.as_slice()),
            ("clarification", self.clarification.as_slice()),
        ]
    }
}

/// Check if a template references any keyword placeholder.
pub fn uses_keywords(template: &str) -> bool {
    KEYWORD_PLACEHOLDERS.iter().any(|p| template.contains(p))
}

/// Templates from the set that can be rendered without keywords.
pub fn keyword_free(set: &[String]) -> Vec<&str> {
    set.iter()
        .map(String::as_str)
        .filter(|t| !uses_keywords(t))
        .collect()
}

/// Substitute `{name}` placeholders in one pass over the template.
///
/// Unknown placeholders are left as-is. Substituted values are never scanned
/// again, so braces in user text come through literally.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        let value = tail.find('}').and_then(|close| {
            let name = &tail[1..close];
            vars.iter()
                .find(|(var, _)| *var == name)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn owned(templates: &[&str]) -> Vec<String> {
    templates.iter().map(|t| t.to_string()).collect()
}
