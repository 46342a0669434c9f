//! Fact Extractor - mines key/definition pairs from free text.
//!
//! Text is split into segments on `.` and newlines. Each segment is tried
//! against both patterns, in order:
//! 1. **Dash definition**: `<subject> - <definition>` (also `–` and `—`)
//! 2. **Linking word**: `<subject> degan <definition>` (also `degani`)
//!
//! Both patterns may match the same segment, and every match counts as one
//! learned fact even when the second match overwrites the first key.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::KnowledgeStore;

static DASH_DEFINITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.+?)\s*[-–—]\s*(.+)").unwrap());

static LINKING_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.+?)\s+degani?\s+(.+)").unwrap());

/// Which pattern produced a fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionPattern {
    DashDefinition,
    LinkingWord,
}

/// A fact found in text, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFact {
    /// Lower-cased, trimmed subject.
    pub key: String,
    /// Trimmed definition.
    pub definition: String,
    pub pattern: ExtractionPattern,
}

/// Outcome of a bulk ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnReport {
    /// Number of successful pattern matches written to the store.
    pub learned: usize,
    /// Store size after ingestion.
    pub total_knowledge: usize,
}

/// Extract all facts from a text, in segment order.
pub fn extract_facts(text: &str) -> Vec<ExtractedFact> {
    text.split(['.', '\n'])
        .flat_map(extract_from_segment)
        .collect()
}

/// Try both patterns on one segment. Returns zero, one or two facts.
pub fn extract_from_segment(segment: &str) -> Vec<ExtractedFact> {
    [
        (&*DASH_DEFINITION, ExtractionPattern::DashDefinition),
        (&*LINKING_WORD, ExtractionPattern::LinkingWord),
    ]
    .into_iter()
    .filter_map(|(pattern, kind)| match_pattern(pattern, kind, segment))
    .collect()
}

/// Extract facts from text and write each one into the store.
pub fn learn_into(store: &mut KnowledgeStore, text: &str) -> LearnReport {
    let facts = extract_facts(text);
    for fact in &facts {
        store.set(&fact.key, fact.definition.clone());
    }

    LearnReport {
        learned: facts.len(),
        total_knowledge: store.len(),
    }
}

fn match_pattern(
    pattern: &Regex,
    kind: ExtractionPattern,
    segment: &str,
) -> Option<ExtractedFact> {
    let caps = pattern.captures(segment)?;
    let key = caps.get(1)?.as_str().trim().to_lowercase();
    let definition = caps.get(2)?.as_str().trim();

    Some(ExtractedFact {
        key,
        definition: definition.to_string(),
        pattern: kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_definition() {
        let facts = extract_facts("Osmon - bu moviy");
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].key, "osmon");
        assert_eq!(facts[0].definition, "bu moviy");
        assert_eq!(facts[0].pattern, ExtractionPattern::DashDefinition);
    }

    #[test]
    fn test_dash_variants() {
        for text in ["suv – hayot manbai", "suv — hayot manbai", "suv-hayot manbai"] {
            let facts = extract_facts(text);
            assert_eq!(facts.len(), 1, "text: {}", text);
            assert_eq!(facts[0].key, "suv");
            assert_eq!(facts[0].definition, "hayot manbai");
        }
    }

    #[test]
    fn test_first_dash_splits() {
        let facts = extract_facts("Farg'ona - vodiy - shahar");
        assert_eq!(facts[0].key, "farg'ona");
        assert_eq!(facts[0].definition, "vodiy - shahar");
    }

    #[test]
    fn test_linking_word() {
        let facts = extract_facts("Kompyuter degani hisoblash mashinasi");
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].key, "kompyuter");
        assert_eq!(facts[0].definition, "hisoblash mashinasi");
        assert_eq!(facts[0].pattern, ExtractionPattern::LinkingWord);

        let facts = extract_facts("Algoritm degan qadamlar ketma-ketligi");
        assert_eq!(facts.iter().filter(|f| f.pattern == ExtractionPattern::LinkingWord).count(), 1);
    }

    #[test]
    fn test_both_patterns_fire_on_one_segment() {
        let facts = extract_from_segment("Robot degani aqlli - mashina");
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0].pattern, ExtractionPattern::DashDefinition);
        assert_eq!(facts[0].key, "robot degani aqlli");
        assert_eq!(facts[1].pattern, ExtractionPattern::LinkingWord);
        assert_eq!(facts[1].key, "robot");
    }

    #[test]
    fn test_segments_split_on_period_and_newline() {
        let text = "Oy - yo'ldosh. Quyosh - yulduz\nYer - sayyora";
        let keys: Vec<_> = extract_facts(text).into_iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["oy", "quyosh", "yer"]);
    }

    #[test]
    fn test_non_matching_text() {
        assert!(extract_facts("Bugun havo yaxshi. Ertaga ham").is_empty());
        assert!(extract_facts("").is_empty());
    }

    #[test]
    fn test_blank_subject_or_definition_still_counts() {
        let facts = extract_from_segment("  - faqat tavsif");
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].key, "");
        assert_eq!(facts[0].definition, "faqat tavsif");

        let mut store = KnowledgeStore::new();
        let report = learn_into(&mut store, "mavzu - ");
        assert_eq!(report.learned, 1);
        assert_eq!(report.total_knowledge, 1);
        assert_eq!(store.get("mavzu"), Some(""));
    }

    #[test]
    fn test_learn_into_counts_every_match() {
        let mut store = KnowledgeStore::new();
        store.set("mavjud", "oldindan");

        let report = learn_into(&mut store, "Robot degani aqlli - mashina. Oy - yo'ldosh");

        assert_eq!(report.learned, 3);
        assert_eq!(report.total_knowledge, 4);
        assert_eq!(store.get("robot"), Some("aqlli - mashina"));
        assert_eq!(store.get("oy"), Some("yo'ldosh"));
    }

    #[test]
    fn test_count_includes_overwrites() {
        let mut store = KnowledgeStore::new();

        let report = learn_into(&mut store, "Olma - meva\nolma degani qizil meva");

        assert_eq!(report.learned, 2);
        assert_eq!(report.total_knowledge, 1);
        assert_eq!(store.get("olma"), Some("qizil meva"));
    }
}
