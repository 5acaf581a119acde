//! Request type shared by the pipeline and the HTTP layer.

use serde::Deserialize;

fn default_sentences() -> usize {
    5
}

fn default_lang() -> String {
    "en".to_string()
}

/// One summarization request. Created per call, discarded after the response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummaryRequest {
    /// Raw input, may contain markup
    pub text: String,

    /// Sentences to extract (extractive backend only)
    #[serde(default = "default_sentences")]
    pub sentences: usize,

    /// Language tag, passed through to the backend
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Document title used to reject summaries that only repeat it
    #[serde(default)]
    pub title: String,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sentences: default_sentences(),
            lang: default_lang(),
            title: String::new(),
        }
    }

    pub fn with_sentences(mut self, sentences: usize) -> Self {
        self.sentences = sentences;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let request: SummaryRequest = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert_eq!(request, SummaryRequest::new("hi"));
        assert_eq!(request.sentences, 5);
        assert_eq!(request.lang, "en");
        assert_eq!(request.title, "");
    }

    #[test]
    fn text_is_required() {
        assert!(serde_json::from_str::<SummaryRequest>(r#"{"sentences": 3}"#).is_err());
    }

    #[test]
    fn negative_sentences_rejected() {
        assert!(serde_json::from_str::<SummaryRequest>(r#"{"text": "x", "sentences": -1}"#).is_err());
    }
}
