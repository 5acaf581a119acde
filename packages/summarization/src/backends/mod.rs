//! Summarization backends.

pub mod generative;
pub mod lsa;
pub mod serialized;

use std::fmt;
use std::str::FromStr;

use crate::gate::GatePolicy;

pub use generative::{GenerativeConfig, GenerativeSummarizer};
pub use lsa::LsaSummarizer;
pub use serialized::SerializedSummarizer;

/// Which backend the service runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Latent semantic analysis sentence extraction
    Lsa,
    /// Hosted sequence-to-sequence / chat model
    Generative,
}

impl BackendKind {
    /// Default gate thresholds for this backend.
    pub fn gate_policy(self) -> GatePolicy {
        match self {
            BackendKind::Lsa => GatePolicy::EXTRACTIVE,
            BackendKind::Generative => GatePolicy::GENERATIVE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Lsa => "lsa",
            BackendKind::Generative => "generative",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lsa" | "extractive" | "sumy" => Ok(BackendKind::Lsa),
            "generative" | "bart" | "t5" | "pegasus" | "openai" => Ok(BackendKind::Generative),
            other => Err(format!("unknown summarization backend: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("LSA".parse::<BackendKind>().unwrap(), BackendKind::Lsa);
        assert_eq!(" bart ".parse::<BackendKind>().unwrap(), BackendKind::Generative);
        assert!("word2vec".parse::<BackendKind>().is_err());
    }

    #[test]
    fn presets_differ_per_backend() {
        assert_eq!(BackendKind::Lsa.gate_policy().min_words, 50);
        assert_eq!(BackendKind::Lsa.gate_policy().max_input_chars, None);
        assert_eq!(BackendKind::Generative.gate_policy().max_input_chars, Some(2048));
    }
}
