//! Public API for ranking job description terms.

use keyterm_types::{ConfigError, RankConfig, ScoredTerm};

use crate::analyzer::ngram::NgramExtractor;
use crate::analyzer::normalizer::TextNormalizer;
use crate::ranking::stats::CorpusStats;
use crate::ranking::types::{DocKind, TermRanker, Vocabulary};

impl TermRanker {
    /// Creates a ranker with the default configuration.
    pub fn new() -> Self {
        Self::from_config(RankConfig::default())
    }

    /// Creates a ranker after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`RankConfig::validate`].
    pub fn with_config(config: RankConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Builds a ranker without validation. Out-of-range values still rank
    /// deterministically: `max_ngram` is clamped and scores sort totally.
    pub(crate) fn from_config(config: RankConfig) -> Self {
        Self {
            extractor: NgramExtractor::new(config.max_ngram, config.min_token_len.max(1)),
            normalizer: TextNormalizer,
            config,
        }
    }

    /// Returns the active configuration.
    #[inline]
    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Ranks job terms by boosted TF-IDF score, best first.
    ///
    /// Only terms occurring in the job description are returned, at most
    /// `top_k` of them. Equal scores keep first-occurrence order.
    pub fn rank_scored(&self, job_description: &str, resume_text: &str) -> Vec<ScoredTerm> {
        self.rank_with_stats(job_description, resume_text).0
    }

    /// Ranks and reports corpus statistics from a single vocabulary pass.
    pub fn rank_with_stats(
        &self,
        job_description: &str,
        resume_text: &str,
    ) -> (Vec<ScoredTerm>, CorpusStats) {
        let vocab = self.build_vocabulary(job_description, resume_text);
        let stats = CorpusStats::from_vocabulary(&vocab);

        let ranked = if self.config.top_k == 0 {
            Vec::new()
        } else {
            self.score(&vocab)
        };

        tracing::debug!(%stats, returned = ranked.len(), "ranked job terms");

        (ranked, stats)
    }

    /// Same as [`rank_scored`](Self::rank_scored), returning only the terms.
    pub fn rank(&self, job_description: &str, resume_text: &str) -> Vec<String> {
        self.rank_scored(job_description, resume_text)
            .into_iter()
            .map(|t| t.term)
            .collect()
    }

    /// Vocabulary statistics for a job/resume pair.
    pub fn stats(&self, job_description: &str, resume_text: &str) -> CorpusStats {
        CorpusStats::from_vocabulary(&self.build_vocabulary(job_description, resume_text))
    }

    fn build_vocabulary(&self, job_description: &str, resume_text: &str) -> Vocabulary {
        let mut buf = String::new();
        let mut vocab = Vocabulary::new();

        self.normalizer.normalize_into(job_description, &mut buf);
        vocab.add_document(DocKind::Job, &buf, &self.extractor);

        self.normalizer.normalize_into(resume_text, &mut buf);
        vocab.add_document(DocKind::Resume, &buf, &self.extractor);

        vocab
    }

    fn score(&self, vocab: &Vocabulary) -> Vec<ScoredTerm> {
        let job_weights = vocab.document_weights(DocKind::Job);

        let mut ranked: Vec<ScoredTerm> = vocab
            .terms
            .iter()
            .zip(job_weights)
            .filter(|(_, weight)| *weight > 0.0)
            .map(|(entry, weight)| {
                let job_only = !entry.in_document(DocKind::Resume);
                ScoredTerm::new(entry.text.clone(), weight, job_only, self.config.bonus_job_only)
            })
            .collect();

        // Stable: ties keep enumeration order.
        ranked.sort_by(ScoredTerm::cmp_score_desc);
        ranked.truncate(self.config.top_k);
        ranked
    }
}

/// Ranks job description terms with the default n-gram settings.
///
/// Never fails: an empty job description or `top_k == 0` yields an empty list.
pub fn rank_terms(
    job_description: &str,
    resume_text: &str,
    top_k: usize,
    bonus_job_only: f32,
) -> Vec<String> {
    TermRanker::from_config(RankConfig {
        top_k,
        bonus_job_only,
        ..RankConfig::default()
    })
    .rank(job_description, resume_text)
}
