//! Streaming Tokenizer Module
//!
//! Splits normalized text into tokens for term enumeration. It's the second
//! stage of the analysis pipeline, taking text that already passed through
//! [`TextNormalizer`](super::TextNormalizer) and breaking it into words.
//!
//! ## What It Does
//!
//! Given normalized input like `"we use rust. docker too"`, it emits:
//!
//! ```ignore
//! Token { text: "we",     position: 0, clause_end: false }
//! Token { text: "use",    position: 1, clause_end: false }
//! Token { text: "rust",   position: 2, clause_end: true  }
//! Token { text: "docker", position: 3, clause_end: false }
//! Token { text: "too",    position: 4, clause_end: false }
//! ```
//!
//! ## Sentence Dots
//!
//! The normalizer keeps `.` so that `3.5` and `node.js` survive. A trailing
//! dot run is sentence punctuation instead: it is cut from the token and the
//! token is flagged `clause_end`, so phrases never span two sentences. A token
//! made only of dots is dropped and flags the token before it.
//!
//! Tokens are slices of the input, never copies.
//!
//! ## The Input Contract
//!
//! The tokenizer expects **normalized** input:
//! - No leading or trailing whitespace
//! - No consecutive spaces between words
//!
//! Violating this panics in debug builds.

use core::str;
use memchr::memchr_iter;

/// A single token of normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'n> {
    /// Token text with sentence dots removed.
    pub text: &'n str,
    /// Byte offset of `text` in the normalized input.
    pub start: usize,
    /// Zero-based token index.
    pub position: u32,
    /// True when a sentence boundary follows this token.
    pub clause_end: bool,
}

impl Token<'_> {
    /// Byte offset one past the end of `text`.
    #[inline(always)]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Streaming tokenizer over normalized text.
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenizes normalized input and emits each [`Token`] left to right.
    ///
    /// After emitting a token at position `u32::MAX`, further emissions stop.
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(Token<'n>),
    {
        let bytes = normalized.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading whitespace: normalizer contract violated"
        );

        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing whitespace: normalizer contract violated"
        );

        debug_assert!(
            !normalized.contains("  "),
            "tokenizer: consecutive spaces: normalizer contract violated"
        );

        if bytes.is_empty() {
            return;
        }

        let mut pending: Option<Token<'n>> = None;
        let mut pos = 0u32;
        let mut start = 0usize;

        let ends = memchr_iter(b' ', bytes).chain(core::iter::once(bytes.len()));
        for end in ends {
            if start >= end {
                start = end + 1;
                continue;
            }

            // SAFETY: `normalized` is valid UTF-8 and we split only on ASCII
            // space, which is never a continuation byte.
            let raw = unsafe { str::from_utf8_unchecked(&bytes[start..end]) };
            let text = raw.trim_end_matches('.');

            if text.is_empty() {
                if let Some(prev) = pending.as_mut() {
                    prev.clause_end = true;
                }
            } else {
                if let Some(prev) = pending.take() {
                    emit(prev);
                    if pos == u32::MAX {
                        return;
                    }
                    pos += 1;
                }
                pending = Some(Token {
                    text,
                    start,
                    position: pos,
                    clause_end: text.len() != raw.len(),
                });
            }

            start = end + 1;
        }

        if let Some(last) = pending {
            emit(last);
        }
    }
}
