//! Corpus statistics.

use crate::ranking::types::{DocKind, Vocabulary};

/// A snapshot of one ranking pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    /// Tokens in the normalized job description.
    pub job_tokens: usize,
    /// Tokens in the normalized resume.
    pub resume_tokens: usize,
    /// Candidate terms across both documents.
    pub vocabulary_size: usize,
    /// Candidate terms occurring in the job description.
    pub job_terms: usize,
    /// Job terms that never occur in the resume.
    pub job_only_terms: usize,
}

impl CorpusStats {
    pub(crate) fn from_vocabulary(vocab: &Vocabulary) -> Self {
        let mut job_terms = 0;
        let mut job_only_terms = 0;

        for term in &vocab.terms {
            if term.in_document(DocKind::Job) {
                job_terms += 1;
                if !term.in_document(DocKind::Resume) {
                    job_only_terms += 1;
                }
            }
        }

        Self {
            job_tokens: vocab.token_counts[DocKind::Job.index()],
            resume_tokens: vocab.token_counts[DocKind::Resume.index()],
            vocabulary_size: vocab.len(),
            job_terms,
            job_only_terms,
        }
    }

    /// Job terms that also occur in the resume.
    pub fn shared_terms(&self) -> usize {
        self.job_terms - self.job_only_terms
    }
}

impl core::fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} job tokens, {} resume tokens, {} terms ({} in job, {} job only)",
            self.job_tokens,
            self.resume_tokens,
            self.vocabulary_size,
            self.job_terms,
            self.job_only_terms
        )
    }
}
