//! One-call composition of ranking, matching and rendering.

use keyterm_types::{ConfigError, KeywordConfig, MatchResult, ScoredTerm};

use crate::context::render_match;
use crate::matcher::match_terms;
use crate::ranking::{CorpusStats, TermRanker};

/// Everything produced for one job/resume pair.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordReport {
    /// Ranked job terms with scores, best first.
    pub ranked: Vec<ScoredTerm>,
    /// Ranked terms split into present and missing.
    pub matches: MatchResult,
    /// Rendered context text.
    pub context: String,
    /// Vocabulary statistics of the pair.
    pub stats: CorpusStats,
}

/// Ranks, matches and renders with one configuration.
#[derive(Debug, Clone, Default)]
pub struct KeywordPipeline {
    ranker: TermRanker,
    config: KeywordConfig,
}

impl KeywordPipeline {
    /// Creates a pipeline with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pipeline after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`KeywordConfig::validate`].
    pub fn with_config(config: KeywordConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            ranker: TermRanker::with_config(config.rank)?,
            config,
        })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &KeywordConfig {
        &self.config
    }

    /// Runs every stage on a job description and a resume.
    pub fn run(&self, job_description: &str, resume_text: &str) -> KeywordReport {
        let (ranked, stats) = self.ranker.rank_with_stats(job_description, resume_text);
        let terms: Vec<&str> = ranked.iter().map(|t| t.term.as_str()).collect();
        let matches = match_terms(resume_text, &terms);
        let context = render_match(&matches, &self.config.context);

        tracing::debug!(
            ranked = ranked.len(),
            present = matches.present.len(),
            missing = matches.missing.len(),
            "built keyword context"
        );

        KeywordReport {
            ranked,
            matches,
            context,
            stats,
        }
    }
}
