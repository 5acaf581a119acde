//! Title de-duplication and word capping for the final summary.

/// Returned instead of a summary that merely repeats the title.
pub const SIMILAR_TO_TITLE_SENTINEL: &str = "Summary too similar to title. Skipped.";

/// Default cap on summary length, in whitespace tokens.
pub const DEFAULT_MAX_WORDS: usize = 120;

/// Appended to the last kept token when a summary is truncated.
pub const ELLIPSIS: &str = "...";

/// Final-stage shaping of backend output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostProcessor {
    max_words: usize,
    similarity_threshold: f64,
}

impl Default for PostProcessor {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            similarity_threshold: 0.9,
        }
    }
}

impl PostProcessor {
    pub fn new(max_words: usize) -> Self {
        Self {
            max_words,
            ..Default::default()
        }
    }

    /// Carried for API compatibility. Title matching is substring
    /// containment and does not consult this value.
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn similarity_threshold(&self) -> f64 {
        self.similarity_threshold
    }

    /// Title check followed by the word cap. For backend output.
    pub fn finalize(&self, candidate: &str, title: &str) -> String {
        finalize(candidate, title, self.max_words)
    }

    /// Word cap only. For the short-circuit path.
    pub fn cap(&self, text: &str) -> String {
        cap_words(text, self.max_words)
    }
}

/// Replace `candidate` with the sentinel if it contains `title`, then cap it.
pub fn finalize(candidate: &str, title: &str, max_words: usize) -> String {
    if is_similar_to_title(candidate, title) {
        return SIMILAR_TO_TITLE_SENTINEL.to_string();
    }
    cap_words(candidate, max_words)
}

/// Case-insensitive containment of the trimmed title in the trimmed candidate.
///
/// A blank title never matches.
pub fn is_similar_to_title(candidate: &str, title: &str) -> bool {
    let title = title.trim().to_lowercase();
    if title.is_empty() {
        return false;
    }
    candidate.trim().to_lowercase().contains(&title)
}

/// Keep the first `max_words` tokens and mark the cut with an ellipsis.
/// Text at or under the cap is returned as given.
pub fn cap_words(text: &str, max_words: usize) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() <= max_words {
        return text.to_string();
    }
    format!("{}{}", tokens[..max_words].join(" "), ELLIPSIS)
}
