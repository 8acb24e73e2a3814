//! Candidate term extraction.
//!
//! Enumerates 1..=N token windows over a tokenized document. A window is a
//! candidate term when:
//! - it does not cross a sentence boundary
//! - its first and last tokens are *content* tokens (not a stop word, long
//!   enough, containing a letter or digit)
//!
//! Interior tokens are unrestricted, so `"ruby on rails"` is a term while
//! `"for python"` is not. Every emitted term is a contiguous slice of the
//! normalized document.

use keyterm_types::{DEFAULT_MIN_TOKEN_LEN, MAX_NGRAM};

use crate::analyzer::stopwords::is_stop_word;
use crate::analyzer::tokenizer::Token;

/// Sliding-window term extractor.
#[derive(Debug, Clone, Copy)]
pub struct NgramExtractor {
    max_ngram: usize,
    min_token_len: usize,
}

impl Default for NgramExtractor {
    fn default() -> Self {
        Self::new(MAX_NGRAM, DEFAULT_MIN_TOKEN_LEN)
    }
}

impl NgramExtractor {
    /// Creates an extractor. `max_ngram` is clamped to `1..=MAX_NGRAM`.
    pub fn new(max_ngram: usize, min_token_len: usize) -> Self {
        Self {
            max_ngram: max_ngram.clamp(1, MAX_NGRAM),
            min_token_len,
        }
    }

    /// Returns `true` if `token` may start or end a term.
    #[inline]
    pub fn is_content(&self, token: &str) -> bool {
        token.len() >= self.min_token_len
            && token.bytes().any(|b| b.is_ascii_alphanumeric())
            && !is_stop_word(token)
    }

    /// Emits every candidate term of `tokens`, which must come from
    /// tokenizing `normalized`.
    ///
    /// Order is by start position, then by window length.
    pub fn extract<'n, F>(&self, normalized: &'n str, tokens: &[Token<'n>], mut emit: F)
    where
        F: FnMut(&'n str),
    {
        for (i, first) in tokens.iter().enumerate() {
            if !self.is_content(first.text) {
                continue;
            }

            let start = first.start;
            for (j, last) in tokens.iter().enumerate().skip(i).take(self.max_ngram) {
                if j > i && tokens[j - 1].clause_end {
                    break;
                }
                if self.is_content(last.text) {
                    emit(&normalized[start..last.end()]);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::normalizer::normalize;
    use crate::analyzer::tokenizer::Tokenizer;

    fn terms(input: &str, extractor: NgramExtractor) -> Vec<String> {
        let normalized = normalize(input);
        let mut tokens = Vec::new();
        Tokenizer.tokenize(&normalized, |t| tokens.push(t));

        let mut out = Vec::new();
        extractor.extract(&normalized, &tokens, |t| out.push(t.to_string()));
        out
    }

    #[test]
    fn unigrams_to_trigrams_in_order() {
        let out = terms("rust docker kafka", NgramExtractor::default());
        assert_eq!(
            out,
            vec![
                "rust",
                "rust docker",
                "rust docker kafka",
                "docker",
                "docker kafka",
                "kafka",
            ]
        );
    }

    #[test]
    fn stop_words_never_bound_a_term() {
        let out = terms("looking for python and docker", NgramExtractor::default());
        assert!(out.contains(&"python".to_string()));
        assert!(out.contains(&"python and docker".to_string()));
        assert!(!out.iter().any(|t| t.starts_with("for ") || t.ends_with(" and")));
        assert!(!out.contains(&"for".to_string()));
    }

    #[test]
    fn interior_stop_word_allowed() {
        let out = terms("Ruby on Rails", NgramExtractor::default());
        assert!(out.contains(&"ruby on rails".to_string()));
        assert!(!out.contains(&"on".to_string()));
    }

    #[test]
    fn sentence_boundary_splits_phrases() {
        let out = terms("Docker. Python", NgramExtractor::default());
        assert_eq!(out, vec!["docker", "python"]);
    }

    #[test]
    fn short_tokens_skipped() {
        let out = terms("5 years", NgramExtractor::default());
        assert_eq!(out, vec!["years"]);
    }

    #[test]
    fn symbol_only_token_is_not_content() {
        let out = terms("++ rust", NgramExtractor::default());
        assert_eq!(out, vec!["rust"]);
    }

    #[test]
    fn language_tokens_survive() {
        let out = terms("C++ and C# with .NET", NgramExtractor::new(1, 2));
        assert_eq!(out, vec!["c++", "c#", ".net"]);
    }

    #[test]
    fn max_ngram_limits_window() {
        let out = terms("rust docker kafka", NgramExtractor::new(1, 2));
        assert_eq!(out, vec!["rust", "docker", "kafka"]);
    }

    #[test]
    fn terms_are_substrings_of_normalized_text() {
        let input = "Senior engineer: Python, Go. Kubernetes on AWS; CI/CD pipelines.";
        let normalized = normalize(input);
        for t in terms(input, NgramExtractor::default()) {
            assert!(normalized.contains(&t), "{t:?} not in {normalized:?}");
        }
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(terms("", NgramExtractor::default()).is_empty());
        assert!(terms("the and of", NgramExtractor::default()).is_empty());
    }
}
