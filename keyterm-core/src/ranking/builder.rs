//! Vocabulary building.

use smallvec::SmallVec;

use crate::analyzer::ngram::NgramExtractor;
use crate::analyzer::tokenizer::{Token, Tokenizer};
use crate::ranking::types::{DocKind, TermEntry, Vocabulary, INLINE_TOKENS, NUM_DOCUMENTS};

impl Vocabulary {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Counts every candidate term of an already normalized document.
    ///
    /// New terms are appended, so enumeration order is the order in which
    /// documents were added, then first occurrence within each.
    pub(crate) fn add_document(
        &mut self,
        kind: DocKind,
        normalized: &str,
        extractor: &NgramExtractor,
    ) {
        let mut tokens: SmallVec<[Token<'_>; INLINE_TOKENS]> = SmallVec::new();
        Tokenizer.tokenize(normalized, |t| tokens.push(t));
        self.token_counts[kind.index()] += tokens.len();

        let doc = kind.index();
        extractor.extract(normalized, &tokens, |term| {
            if let Some(&id) = self.index.get(term) {
                let count = &mut self.terms[id as usize].counts[doc];
                *count = count.saturating_add(1);
                return;
            }

            let id = self.terms.len() as u32;
            let mut counts = [0u32; NUM_DOCUMENTS];
            counts[doc] = 1;
            self.terms.push(TermEntry {
                text: term.to_owned(),
                counts,
            });
            self.index.insert(term.to_owned(), id);
        });
    }

    /// Number of documents that contain the term at `id`.
    #[inline]
    pub(crate) fn document_frequency(&self, id: usize) -> usize {
        self.terms[id].counts.iter().filter(|&&c| c > 0).count()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.terms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::normalizer::normalize;

    fn build(job: &str, resume: &str) -> Vocabulary {
        let extractor = NgramExtractor::default();
        let mut vocab = Vocabulary::new();
        vocab.add_document(DocKind::Job, &normalize(job), &extractor);
        vocab.add_document(DocKind::Resume, &normalize(resume), &extractor);
        vocab
    }

    fn counts(vocab: &Vocabulary, term: &str) -> [u32; NUM_DOCUMENTS] {
        let id = vocab.index[term] as usize;
        vocab.terms[id].counts
    }

    #[test]
    fn counts_per_document() {
        let vocab = build("rust rust docker", "rust");
        assert_eq!(counts(&vocab, "rust"), [2, 1]);
        assert_eq!(counts(&vocab, "docker"), [1, 0]);
        assert_eq!(counts(&vocab, "rust rust"), [1, 0]);
    }

    #[test]
    fn resume_only_terms_are_tracked() {
        let vocab = build("rust", "golang");
        assert_eq!(counts(&vocab, "golang"), [0, 1]);
        assert_eq!(vocab.document_frequency(vocab.index["golang"] as usize), 1);
        assert_eq!(vocab.document_frequency(vocab.index["rust"] as usize), 1);
    }

    #[test]
    fn first_occurrence_order() {
        let vocab = build("kafka rust", "python kafka");
        let order: Vec<&str> = vocab.terms.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(order, vec!["kafka", "kafka rust", "rust", "python", "python kafka"]);
    }

    #[test]
    fn token_counts_recorded() {
        let vocab = build("looking for python", "i have 5 years");
        assert_eq!(vocab.token_counts, [3, 4]);
    }

    #[test]
    fn index_matches_terms() {
        let vocab = build("one more great rust service", "rust service owner");
        assert_eq!(vocab.index.len(), vocab.len());
        for (i, term) in vocab.terms.iter().enumerate() {
            assert_eq!(vocab.index[&term.text] as usize, i);
        }
    }

    #[test]
    fn counts_saturate() {
        let extractor = NgramExtractor::default();
        let mut vocab = build("rust", "");
        let id = vocab.index["rust"] as usize;
        vocab.terms[id].counts[DocKind::Job.index()] = u32::MAX;

        vocab.add_document(DocKind::Job, "rust", &extractor);
        assert_eq!(counts(&vocab, "rust"), [u32::MAX, 0]);
    }

    #[test]
    fn empty_documents() {
        let vocab = build("", "");
        assert_eq!(vocab.len(), 0);
    }
}
