//! Core types and configuration for the keyterm keyword engine.
//!
//! This crate holds the values that cross the boundary between the
//! ranking core and its callers:
//!
//! - **ScoredTerm**: a ranked job term with its boosted score
//! - **MatchResult**: the present/missing partition of ranked terms
//! - **Config**: ranking and context rendering knobs, with validation

#![warn(missing_docs)]

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of ranked terms returned.
pub const DEFAULT_TOP_K: usize = 40;

/// Default bonus added to terms that only appear in the job description.
pub const DEFAULT_BONUS_JOB_ONLY: f32 = 0.25;

/// Longest term, in tokens, that is ever enumerated.
pub const MAX_NGRAM: usize = 3;

/// Default minimum byte length of a token that may bound a term.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;

/// Default cap on present terms rendered into a context.
pub const DEFAULT_MAX_PRESENT: usize = 15;

/// Default cap on missing terms rendered into a context.
pub const DEFAULT_MAX_MISSING: usize = 20;

/// A job description term with its ranking score.
///
/// `score` is the value terms are sorted by: the job-document TF-IDF
/// `weight`, plus the job-only bonus when `job_only` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTerm {
    /// Normalized term text (one to three tokens).
    pub term: String,
    /// Boosted score used for ranking.
    pub score: f32,
    /// Raw L2-normalized TF-IDF weight in the job description.
    pub weight: f32,
    /// True when the term never occurs in the resume.
    pub job_only: bool,
}

impl ScoredTerm {
    /// Creates a scored term, deriving `score` from `weight` and the bonus.
    pub fn new(term: impl Into<String>, weight: f32, job_only: bool, bonus_job_only: f32) -> Self {
        let score = if job_only {
            weight + bonus_job_only
        } else {
            weight
        };

        Self {
            term: term.into(),
            score,
            weight,
            job_only,
        }
    }

    /// Orders by descending score. Equal scores compare equal, so a stable
    /// sort keeps enumeration order among ties.
    #[inline]
    pub fn cmp_score_desc(&self, other: &Self) -> core::cmp::Ordering {
        other.score.total_cmp(&self.score)
    }
}

impl fmt::Display for ScoredTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} score={:.3}", self.term, self.score)?;
        if self.job_only {
            f.write_str(" (job only)")?;
        }
        Ok(())
    }
}

/// Ranked terms split by whether they occur in the resume.
///
/// Both lists keep the order of the ranked input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Terms found in the normalized resume.
    pub present: Vec<String>,
    /// Terms not found in the normalized resume.
    pub missing: Vec<String>,
}

impl MatchResult {
    /// Total number of classified terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.present.len() + self.missing.len()
    }

    /// Returns `true` if no term was classified.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.present.is_empty() && self.missing.is_empty()
    }

    /// Splits into `(present, missing)`.
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.present, self.missing)
    }
}

/// Errors raised when validating configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The job-only bonus is negative, NaN or infinite.
    #[error("job-only bonus must be finite and non-negative, got {value}")]
    InvalidBonus {
        /// The rejected bonus.
        value: f32,
    },
    /// `max_ngram` is outside `1..=MAX_NGRAM`.
    #[error("max n-gram length must be between 1 and {max}, got {value}")]
    InvalidNgramRange {
        /// The rejected length.
        value: usize,
        /// The largest supported length.
        max: usize,
    },
    /// `min_token_len` is zero.
    #[error("minimum token length must be at least 1")]
    InvalidTokenLength,
}

/// Term ranking options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Maximum number of ranked terms. Zero yields an empty ranking.
    pub top_k: usize,
    /// Added to the score of terms absent from the resume.
    pub bonus_job_only: f32,
    /// Longest term length in tokens (1..=3).
    pub max_ngram: usize,
    /// Minimum byte length of a token that may start or end a term.
    pub min_token_len: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            bonus_job_only: DEFAULT_BONUS_JOB_ONLY,
            max_ngram: MAX_NGRAM,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
        }
    }
}

impl RankConfig {
    /// Default ranking with a different result cap.
    pub fn with_top_k(top_k: usize) -> Self {
        Self {
            top_k,
            ..Self::default()
        }
    }

    /// Unigrams only, for callers that want single keywords.
    pub fn unigrams() -> Self {
        Self {
            max_ngram: 1,
            ..Self::default()
        }
    }

    /// Checks that every field is in range.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bonus_job_only.is_finite() || self.bonus_job_only < 0.0 {
            return Err(ConfigError::InvalidBonus {
                value: self.bonus_job_only,
            });
        }
        if !(1..=MAX_NGRAM).contains(&self.max_ngram) {
            return Err(ConfigError::InvalidNgramRange {
                value: self.max_ngram,
                max: MAX_NGRAM,
            });
        }
        if self.min_token_len == 0 {
            return Err(ConfigError::InvalidTokenLength);
        }
        Ok(())
    }
}

/// Context rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Maximum present terms listed.
    pub max_present: usize,
    /// Maximum missing terms listed.
    pub max_missing: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_present: DEFAULT_MAX_PRESENT,
            max_missing: DEFAULT_MAX_MISSING,
        }
    }
}

/// Full pipeline configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Ranking stage options.
    pub rank: RankConfig,
    /// Rendering stage options.
    pub context: ContextConfig,
}

impl KeywordConfig {
    /// Validates every stage.
    ///
    /// # Errors
    ///
    /// Propagates [`RankConfig::validate`] failures.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rank.validate()
    }
}
