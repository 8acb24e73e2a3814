//! Presence matching of ranked terms against a resume.
//!
//! A term is *present* when its normalized form occurs as a contiguous
//! substring of the normalized resume, padded with one space on each side.
//! This is substring matching, not token matching: `"java"` still matches
//! inside `"javascript"`. The padding only guarantees that terms touching the
//! start or end of the resume are found like any other.

use keyterm_types::MatchResult;
use memchr::memmem;

use crate::analyzer::normalizer::TextNormalizer;

/// Classifies job terms as present in or missing from a resume.
///
/// Terms that normalize to nothing are skipped. Both output lists keep the
/// input order and hold the terms as given, not their normalized form.
pub fn match_terms<S: AsRef<str>>(resume_text: &str, job_terms: &[S]) -> MatchResult {
    let normalizer = TextNormalizer;

    let mut haystack = String::with_capacity(resume_text.len() + 2);
    haystack.push(' ');
    haystack.push_str(&normalizer.normalize(resume_text));
    haystack.push(' ');

    let mut result = MatchResult::default();
    let mut needle = String::new();

    for term in job_terms {
        let term = term.as_ref();
        normalizer.normalize_into(term, &mut needle);
        if needle.is_empty() {
            continue;
        }

        let found = memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some();
        tracing::trace!(term, found, "classified term");

        if found {
            result.present.push(term.to_owned());
        } else {
            result.missing.push(term.to_owned());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_present_term() {
        let m = match_terms("Python developer", &["python"]);
        assert_eq!(m.present, vec!["python"]);
        assert!(m.missing.is_empty());
    }

    #[test]
    fn partition_preserves_order() {
        let m = match_terms("Java developer", &["python", "java"]);
        assert_eq!(m.present, vec!["java"]);
        assert_eq!(m.missing, vec!["python"]);
    }

    #[test]
    fn original_term_text_is_kept() {
        let m = match_terms("Skilled in c++ and SQL", &["C++", "  SQL!", "Rust"]);
        assert_eq!(m.present, vec!["C++", "  SQL!"]);
        assert_eq!(m.missing, vec!["Rust"]);
    }

    #[test]
    fn empty_normalized_terms_skipped() {
        let m = match_terms("python", &["", "!!!", "python", "   "]);
        assert_eq!(m.len(), 1);
        assert_eq!(m.present, vec!["python"]);
    }

    #[test]
    fn counts_add_up() {
        let terms = ["rust", "go", "", "kafka", "***", "docker"];
        let m = match_terms("Rust and Docker", &terms);
        assert_eq!(m.len(), terms.len() - 2);
    }

    #[test]
    fn multi_word_terms() {
        let m = match_terms(
            "Built CI/CD pipelines on AWS",
            &["ci cd pipelines", "pipelines on aws", "aws lambda"],
        );
        assert_eq!(m.present, vec!["ci cd pipelines", "pipelines on aws"]);
        assert_eq!(m.missing, vec!["aws lambda"]);
    }

    #[test]
    fn substring_match_is_approximate() {
        // Known approximation: no token boundaries are enforced.
        let m = match_terms("JavaScript engineer", &["java"]);
        assert_eq!(m.present, vec!["java"]);
    }

    #[test]
    fn terms_at_resume_edges() {
        let m = match_terms("docker", &["docker"]);
        assert_eq!(m.present, vec!["docker"]);
    }

    #[test]
    fn empty_inputs() {
        let none: [&str; 0] = [];
        assert!(match_terms("python", &none).is_empty());

        let m = match_terms("", &["python"]);
        assert_eq!(m.missing, vec!["python"]);
    }

    #[test]
    fn accepts_owned_strings() {
        let terms = vec![String::from("rust"), String::from("go")];
        let m = match_terms("rust", &terms);
        assert_eq!(m.present, vec!["rust"]);
        assert_eq!(m.missing, vec!["go"]);
    }
}
