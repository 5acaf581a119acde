use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use summarization::{BackendKind, GatePolicy, DEFAULT_MAX_WORDS};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub backend: BackendKind,
    pub gate: GatePolicy,
    pub max_output_words: usize,
    pub serialize_backend: bool,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,
    pub max_input_tokens: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend: BackendKind = lookup("SUMMARIZER_BACKEND")
            .unwrap_or_else(|| "lsa".to_string())
            .parse()
            .map_err(anyhow::Error::msg)
            .context("SUMMARIZER_BACKEND must be one of: lsa, generative")?;

        let preset = backend.gate_policy();
        let min_words = match lookup("SUMMARIZER_MIN_WORDS") {
            Some(v) => v.parse().context("SUMMARIZER_MIN_WORDS must be a valid number")?,
            None => preset.min_words,
        };
        let max_input_chars = match lookup("SUMMARIZER_MAX_INPUT_CHARS") {
            Some(v) => parse_optional_limit(&v)
                .context("SUMMARIZER_MAX_INPUT_CHARS must be a number or 'none'")?,
            None => preset.max_input_chars,
        };

        let openai_api_key = lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty());
        if backend == BackendKind::Generative && openai_api_key.is_none() {
            bail!("OPENAI_API_KEY must be set for the generative backend");
        }

        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "10002".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            backend,
            gate: GatePolicy::new(min_words, max_input_chars),
            max_output_words: match lookup("SUMMARIZER_MAX_OUTPUT_WORDS") {
                Some(v) => v
                    .parse()
                    .context("SUMMARIZER_MAX_OUTPUT_WORDS must be a valid number")?,
                None => DEFAULT_MAX_WORDS,
            },
            serialize_backend: match lookup("SUMMARIZER_SERIALIZE_BACKEND") {
                Some(v) => parse_bool(&v)
                    .context("SUMMARIZER_SERIALIZE_BACKEND must be true or false")?,
                None => false,
            },
            openai_api_key,
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: lookup("SUMMARIZER_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
            max_input_tokens: match lookup("SUMMARIZER_MAX_INPUT_TOKENS") {
                Some(v) => v
                    .parse()
                    .context("SUMMARIZER_MAX_INPUT_TOKENS must be a valid number")?,
                None => 512,
            },
        })
    }
}

/// `0`, `none` and the empty string disable the limit.
fn parse_optional_limit(value: &str) -> Result<Option<usize>> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "none" => Ok(None),
        other => Ok(Some(other.parse()?)),
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("not a boolean: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.port, 10002);
        assert_eq!(config.backend, BackendKind::Lsa);
        assert_eq!(config.gate, GatePolicy::EXTRACTIVE);
        assert_eq!(config.max_output_words, 120);
        assert!(!config.serialize_backend);
        assert_eq!(config.max_input_tokens, 512);
    }

    #[test]
    fn generative_preset_applies() {
        let config = config(&[
            ("SUMMARIZER_BACKEND", "generative"),
            ("OPENAI_API_KEY", "sk-test"),
        ])
        .unwrap();
        assert_eq!(config.gate, GatePolicy::GENERATIVE);
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn generative_requires_key() {
        assert!(config(&[("SUMMARIZER_BACKEND", "generative")]).is_err());
    }

    #[test]
    fn overrides_win_over_preset() {
        let config = config(&[
            ("SUMMARIZER_BACKEND", "generative"),
            ("OPENAI_API_KEY", "sk-test"),
            ("SUMMARIZER_MIN_WORDS", "150"),
            ("SUMMARIZER_MAX_INPUT_CHARS", "none"),
            ("SUMMARIZER_SERIALIZE_BACKEND", "true"),
            ("PORT", "8080"),
        ])
        .unwrap();
        assert_eq!(config.gate, GatePolicy::new(150, None));
        assert!(config.serialize_backend);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config(&[("PORT", "eighty")]).is_err());
        assert!(config(&[("SUMMARIZER_BACKEND", "markov")]).is_err());
        assert!(config(&[("SUMMARIZER_SERIALIZE_BACKEND", "maybe")]).is_err());
    }
}
