//! Job description term ranking.
//!
//! Scores every candidate term of the job description with TF-IDF over the
//! two-document corpus {job, resume}, boosts terms the resume lacks, and
//! returns the best `top_k`.
//!
//! Pipeline:
//! - both texts are normalized and tokenized independently
//! - 1..=3 token windows are counted into a shared vocabulary
//! - job weights are `tf * idf`, L2-normalized
//! - job-only terms gain `bonus_job_only`, then a stable descending sort
//!
//! Threading:
//! - [`TermRanker`] is immutable after construction; every call allocates
//!   its own vocabulary, so a shared ranker needs no coordination.

mod api;
mod builder;
mod scoring;
mod stats;
mod types;

pub use api::rank_terms;
pub use stats::CorpusStats;
pub use types::TermRanker;
