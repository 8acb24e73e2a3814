//! TF-IDF scoring over the two-document corpus.

use crate::ranking::types::{DocKind, Vocabulary, NUM_DOCUMENTS};

/// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`.
///
/// Always at least 1, so a term present in every document keeps weight.
#[inline(always)]
pub(crate) fn smooth_idf(num_documents: usize, doc_freq: usize) -> f32 {
    ((1 + num_documents) as f32 / (1 + doc_freq) as f32).ln() + 1.0
}

impl Vocabulary {
    /// L2-normalized `tf * idf` weights of every term in one document,
    /// indexed like `self.terms`. Terms absent from the document weigh 0.
    pub(crate) fn document_weights(&self, kind: DocKind) -> Vec<f32> {
        let doc = kind.index();

        let mut weights: Vec<f32> = (0..self.len())
            .map(|id| {
                let tf = self.terms[id].counts[doc];
                if tf == 0 {
                    0.0
                } else {
                    tf as f32 * smooth_idf(NUM_DOCUMENTS, self.document_frequency(id))
                }
            })
            .collect();

        let norm = weights.iter().map(|w| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for w in &mut weights {
                *w /= norm;
            }
        }

        weights
    }
}
