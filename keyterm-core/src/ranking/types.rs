//! Ranking types and constants.

use rustc_hash::FxHashMap;

use keyterm_types::RankConfig;

use crate::analyzer::ngram::NgramExtractor;
use crate::analyzer::normalizer::TextNormalizer;

/// Number of documents in the corpus: the job description and the resume.
pub const NUM_DOCUMENTS: usize = 2;

/// Inline token capacity before a document's token buffer spills to the heap.
pub const INLINE_TOKENS: usize = 128;

/// Which side of the corpus a document is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DocKind {
    /// The job description being mined for terms.
    Job = 0,
    /// The resume the terms are compared against.
    Resume = 1,
}

impl DocKind {
    #[inline(always)]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// A vocabulary term with its raw frequency in each document.
#[derive(Debug, Clone)]
pub(crate) struct TermEntry {
    pub text: String,
    pub counts: [u32; NUM_DOCUMENTS],
}

impl TermEntry {
    #[inline]
    pub fn in_document(&self, kind: DocKind) -> bool {
        self.counts[kind.index()] > 0
    }
}

/// Term vocabulary of the two-document corpus, in first-occurrence order.
#[derive(Debug, Default)]
pub(crate) struct Vocabulary {
    pub terms: Vec<TermEntry>,
    pub index: FxHashMap<String, u32>,
    pub token_counts: [usize; NUM_DOCUMENTS],
}

/// Ranks job description terms against a resume.
///
/// Holds no per-call state, so one ranker can serve any number of calls.
#[derive(Debug, Clone)]
pub struct TermRanker {
    pub(crate) config: RankConfig,
    pub(crate) normalizer: TextNormalizer,
    pub(crate) extractor: NgramExtractor,
}

impl Default for TermRanker {
    fn default() -> Self {
        Self::new()
    }
}
