//! Word-count gate in front of the summarization backend.

use serde::{Deserialize, Serialize};

use crate::normalize::word_count;

/// Routing decision for a cleaned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Too few words for summarization to help; return the text as-is.
    Short,
    /// Exceeds the character cap; reject without calling the backend.
    TooLong,
    /// Forward to the backend.
    NeedsSummary,
}

/// Verdict plus the measurements it was based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateDecision {
    pub verdict: Verdict,
    pub word_count: usize,
    pub char_count: usize,
}

/// Thresholds for the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatePolicy {
    /// Inputs with fewer words than this are returned unsummarized.
    pub min_words: usize,

    /// Inputs with more characters than this are rejected.
    pub max_input_chars: Option<usize>,
}

impl GatePolicy {
    /// Thresholds for the extractive (LSA) backend.
    pub const EXTRACTIVE: GatePolicy = GatePolicy {
        min_words: 50,
        max_input_chars: None,
    };

    /// Thresholds for the generative backend, capped to bound inference cost.
    pub const GENERATIVE: GatePolicy = GatePolicy {
        min_words: 100,
        max_input_chars: Some(2048),
    };

    pub fn new(min_words: usize, max_input_chars: Option<usize>) -> Self {
        Self {
            min_words,
            max_input_chars,
        }
    }

    /// Classify cleaned text. The character cap is checked before the word floor.
    pub fn classify(&self, cleaned: &str) -> GateDecision {
        let word_count = word_count(cleaned);
        let char_count = cleaned.chars().count();

        let verdict = match self.max_input_chars {
            Some(limit) if char_count > limit => Verdict::TooLong,
            _ if word_count < self.min_words => Verdict::Short,
            _ => Verdict::NeedsSummary,
        };

        GateDecision {
            verdict,
            word_count,
            char_count,
        }
    }
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self::EXTRACTIVE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn below_floor_is_short() {
        let decision = GatePolicy::EXTRACTIVE.classify(&words(49));
        assert_eq!(decision.verdict, Verdict::Short);
        assert_eq!(decision.word_count, 49);
    }

    #[test]
    fn at_floor_needs_summary() {
        let decision = GatePolicy::EXTRACTIVE.classify(&words(50));
        assert_eq!(decision.verdict, Verdict::NeedsSummary);
    }

    #[test]
    fn empty_text_is_short() {
        assert_eq!(GatePolicy::EXTRACTIVE.classify("").verdict, Verdict::Short);
    }

    #[test]
    fn char_cap_rejects() {
        let text = "a".repeat(2049);
        let decision = GatePolicy::GENERATIVE.classify(&text);
        assert_eq!(decision.verdict, Verdict::TooLong);
        assert_eq!(decision.char_count, 2049);
    }

    #[test]
    fn char_cap_is_inclusive() {
        let text = "a".repeat(2048);
        assert_eq!(GatePolicy::GENERATIVE.classify(&text).verdict, Verdict::Short);
    }

    #[test]
    fn cap_wins_over_short() {
        // One giant token is both below the word floor and above the cap.
        let policy = GatePolicy::new(10, Some(5));
        assert_eq!(policy.classify("abcdefgh").verdict, Verdict::TooLong);
    }

    #[test]
    fn no_cap_never_rejects() {
        let text = words(5000);
        assert_eq!(
            GatePolicy::EXTRACTIVE.classify(&text).verdict,
            Verdict::NeedsSummary
        );
    }

    #[test]
    fn counts_chars_not_bytes() {
        let policy = GatePolicy::new(0, Some(3));
        assert_eq!(policy.classify("ééé").verdict, Verdict::NeedsSummary);
    }
}
