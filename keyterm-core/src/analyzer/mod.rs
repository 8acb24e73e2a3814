//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Canonicalizes raw text to `[a-z0-9+#.]` and single spaces
//! - **Tokenizer**: Splits normalized text into tokens and sentence boundaries
//! - **Stopwords**: The English stop-word set
//! - **Ngram**: Enumerates candidate 1..=3 token terms

pub mod ngram;
pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;

pub use ngram::NgramExtractor;
pub use normalizer::{normalize, TextNormalizer};
pub use stopwords::is_stop_word;
pub use tokenizer::{Token, Tokenizer};
