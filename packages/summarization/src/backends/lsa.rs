//! Extractive summarization by latent semantic analysis.
//!
//! Sentences become columns of a term-frequency matrix, the matrix is
//! decomposed with a thin SVD, and each sentence is ranked by the length of
//! its projection onto the singular vectors weighted by the squared singular
//! values. The top-ranked sentences are returned in document order.

use std::collections::HashMap;

use async_trait::async_trait;
use lazy_static::lazy_static;
use nalgebra::DMatrix;
use regex::Regex;
use tracing::debug;

use crate::error::{BackendError, BackendResult};
use crate::traits::{SummaryConstraints, Summarizer};

/// Floor on the number of singular values used for ranking.
const MIN_DIMENSIONS: usize = 3;

/// Share of singular values kept (1.0 keeps all of them).
const REDUCTION_RATIO: f64 = 1.0;

/// Weight given to every cell before term frequency is added.
const TF_SMOOTHING: f64 = 0.4;

/// Tokens ending in a period that do not close a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e", "inc",
    "ltd", "co", "corp", "no", "fig", "approx", "dept", "est", "u.s", "u.k", "jan", "feb", "mar",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

lazy_static! {
    static ref SENTENCE_END: Regex = Regex::new(r#"[.!?]+["')\]]*\s+"#).unwrap();
    static ref WORD: Regex = Regex::new(r"\p{L}[\p{L}'\-]*").unwrap();
}

/// LSA sentence extractor. Stateless; construction is free.
#[derive(Debug, Clone)]
pub struct LsaSummarizer {
    min_dimensions: usize,
    reduction_ratio: f64,
}

impl Default for LsaSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LsaSummarizer {
    pub fn new() -> Self {
        Self {
            min_dimensions: MIN_DIMENSIONS,
            reduction_ratio: REDUCTION_RATIO,
        }
    }

    /// Keep only this share of the singular values (clamped to `0.0..=1.0`).
    pub fn with_reduction_ratio(mut self, ratio: f64) -> Self {
        self.reduction_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Select the `sentence_count` best sentences of `text`.
    pub fn extract(&self, text: &str, sentence_count: usize) -> BackendResult<String> {
        let sentences = split_sentences(text);
        if sentences.is_empty() || sentence_count == 0 {
            return Ok(String::new());
        }

        let tokenized: Vec<Vec<String>> = sentences.iter().map(|s| words(s)).collect();

        let mut dictionary: HashMap<&str, usize> = HashMap::new();
        for word in tokenized.iter().flatten() {
            let next = dictionary.len();
            dictionary.entry(word.as_str()).or_insert(next);
        }
        if dictionary.is_empty() {
            return Ok(String::new());
        }

        let matrix = term_frequency_matrix(&dictionary, &tokenized);
        let ranks = self.rank_sentences(matrix)?;

        let mut order: Vec<usize> = (0..sentences.len()).collect();
        order.sort_by(|&a, &b| {
            ranks[b]
                .partial_cmp(&ranks[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        order.truncate(sentence_count);
        order.sort_unstable();

        debug!(
            sentences = sentences.len(),
            terms = dictionary.len(),
            selected = order.len(),
            "LSA selection complete"
        );

        Ok(order
            .into_iter()
            .map(|i| sentences[i])
            .collect::<Vec<_>>()
            .join(" "))
    }

    fn rank_sentences(&self, matrix: DMatrix<f64>) -> BackendResult<Vec<f64>> {
        let sentence_count = matrix.ncols();
        let svd = matrix
            .try_svd(false, true, f64::EPSILON, 0)
            .ok_or_else(|| BackendError::Compute("SVD did not converge".into()))?;
        let v_t = svd
            .v_t
            .ok_or_else(|| BackendError::Compute("SVD returned no right singular vectors".into()))?;
        let sigma = svd.singular_values;

        let dimensions = self
            .min_dimensions
            .max((sigma.len() as f64 * self.reduction_ratio) as usize);
        let powered: Vec<f64> = sigma
            .iter()
            .enumerate()
            .map(|(i, s)| if i < dimensions { s * s } else { 0.0 })
            .collect();

        Ok((0..sentence_count)
            .map(|j| {
                powered
                    .iter()
                    .enumerate()
                    .map(|(i, s)| s * v_t[(i, j)].powi(2))
                    .sum::<f64>()
                    .sqrt()
            })
            .collect())
    }
}

#[async_trait]
impl Summarizer for LsaSummarizer {
    fn name(&self) -> &'static str {
        "lsa"
    }

    async fn summarize(
        &self,
        cleaned: &str,
        constraints: &SummaryConstraints,
    ) -> BackendResult<String> {
        let this = self.clone();
        let text = cleaned.to_string();
        let count = constraints.sentence_count;

        tokio::task::spawn_blocking(move || this.extract(&text, count))
            .await
            .map_err(|e| BackendError::Compute(format!("LSA worker failed: {}", e)))?
    }
}

/// Terms x sentences, each cell `TF_SMOOTHING + (1 - TF_SMOOTHING) * tf`
/// where `tf` is the count normalized by the sentence's most frequent term.
fn term_frequency_matrix(dictionary: &HashMap<&str, usize>, sentences: &[Vec<String>]) -> DMatrix<f64> {
    let mut matrix = DMatrix::<f64>::zeros(dictionary.len(), sentences.len());

    for (col, words) in sentences.iter().enumerate() {
        for word in words {
            if let Some(&row) = dictionary.get(word.as_str()) {
                matrix[(row, col)] += 1.0;
            }
        }
    }

    for mut column in matrix.column_iter_mut() {
        let max = column.max();
        for cell in column.iter_mut() {
            let tf = if max > 0.0 { *cell / max } else { 0.0 };
            *cell = TF_SMOOTHING + (1.0 - TF_SMOOTHING) * tf;
        }
    }

    matrix
}

/// Lower-cased word tokens. Tokens start with a letter and may carry
/// apostrophes or hyphens.
pub fn words(sentence: &str) -> Vec<String> {
    WORD.find_iter(sentence)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Split text into sentences on terminal punctuation followed by whitespace.
///
/// A period after a known abbreviation or a single-letter initial does not
/// end a sentence, and neither does punctuation followed by a lower-case word.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END.find_iter(text) {
        let next = text[m.end()..].chars().next();
        if !opens_sentence(next) {
            continue;
        }
        if text[m.start()..].starts_with('.') && ends_with_abbreviation(&text[start..m.start()]) {
            continue;
        }

        let sentence = text[start..m.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = m.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

fn opens_sentence(next: Option<char>) -> bool {
    match next {
        None => true,
        Some(c) => c.is_uppercase() || c.is_numeric() || matches!(c, '"' | '\'' | '(' | '[' | '“' | '‘'),
    }
}

fn ends_with_abbreviation(before: &str) -> bool {
    let Some(last) = before.split_whitespace().last() else {
        return false;
    };
    let token = last
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();

    let is_initial = token.chars().count() == 1 && token.chars().all(char::is_alphabetic);
    is_initial || ABBREVIATIONS.contains(&token.as_str())
}
