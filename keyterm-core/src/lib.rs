//! Job description keyword extraction and resume matching.
//!
//! Ranks the salient terms of a job description against a resume, splits
//! them into terms the resume already has and terms it lacks, and renders a
//! short summary for use as context in a rewriting prompt.
//!
//! ```
//! use keyterm_core::{build_context, extract_job_terms_tfidf, match_terms};
//!
//! let job = "Looking for Python and Docker experience";
//! let resume = "I have 5 years of Python experience";
//!
//! let terms = extract_job_terms_tfidf(job, resume, 40, 0.25);
//! let (present, missing) = match_terms(resume, &terms).into_parts();
//! let context = build_context(&present, &missing, 15, 20);
//!
//! assert!(present.contains(&"python".to_string()));
//! assert!(missing.contains(&"docker".to_string()));
//! assert_eq!(context.lines().count(), 2);
//! ```
//!
//! Every function here is pure and never fails on any string input.

pub mod analyzer;
pub mod context;
pub mod matcher;
pub mod pipeline;
pub mod ranking;

pub use context::{build_context, render_match};
pub use keyterm_types::{
    ConfigError, ContextConfig, KeywordConfig, MatchResult, RankConfig, ScoredTerm,
};
pub use matcher::match_terms;
pub use pipeline::{KeywordPipeline, KeywordReport};
pub use ranking::{rank_terms, CorpusStats, TermRanker};

/// Top `top_k` job description terms by boosted TF-IDF score.
///
/// Terms absent from the resume gain `bonus_job_only`. Returns an empty list
/// when the job description has no content or `top_k` is zero.
pub fn extract_job_terms_tfidf(
    job_description: &str,
    resume_text: &str,
    top_k: usize,
    bonus_job_only: f32,
) -> Vec<String> {
    rank_terms(job_description, resume_text, top_k, bonus_job_only)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyterm_types::{
        DEFAULT_BONUS_JOB_ONLY, DEFAULT_MAX_MISSING, DEFAULT_MAX_PRESENT, DEFAULT_TOP_K,
    };

    fn defaults_context(present: &[String], missing: &[String]) -> String {
        build_context(present, missing, DEFAULT_MAX_PRESENT, DEFAULT_MAX_MISSING)
    }

    #[test]
    fn empty_job_description() {
        let terms = extract_job_terms_tfidf("", "anything", DEFAULT_TOP_K, DEFAULT_BONUS_JOB_ONLY);
        assert!(terms.is_empty());
    }

    #[test]
    fn end_to_end() {
        let job = "Looking for Python and Docker experience";
        let resume = "I have 5 years of Python experience";

        let terms = extract_job_terms_tfidf(job, resume, DEFAULT_TOP_K, DEFAULT_BONUS_JOB_ONLY);
        assert!(terms.contains(&"docker".to_string()));
        assert!(terms.contains(&"python".to_string()));

        let (present, missing) = match_terms(resume, &terms).into_parts();
        assert!(present.contains(&"python".to_string()));
        assert!(missing.contains(&"docker".to_string()));

        let context = defaults_context(&present, &missing);
        let (first, second) = context.split_once('\n').expect("two sentences");
        assert!(first.contains("python"));
        assert!(!first.contains("docker"));
        assert!(second.contains("docker"));
    }

    #[test]
    fn classified_count_matches_ranked_count() {
        let job = "Senior Rust engineer: Tokio, gRPC, Kubernetes and PostgreSQL.";
        let resume = "Rust and Kubernetes at scale, some Go";
        let terms = extract_job_terms_tfidf(job, resume, 10, 0.25);
        assert!(terms.len() <= 10);
        assert_eq!(match_terms(resume, &terms).len(), terms.len());
    }

    #[test]
    fn deterministic() {
        let job = "Data engineer with Spark, Airflow, SQL; SQL again and Python 3.11";
        let resume = "python sql";
        let a = extract_job_terms_tfidf(job, resume, 40, 0.25);
        let b = extract_job_terms_tfidf(job, resume, 40, 0.25);
        assert_eq!(a, b);
    }
}
