//! Rendering of matched terms into prompt context.

use keyterm_types::{ContextConfig, MatchResult};

/// Lead-in of the sentence listing terms found in both documents.
pub const PRESENT_PREFIX: &str = "Keywords in both job and resume. You can use them freely: ";

/// Lead-in of the sentence listing terms only found in the job description.
pub const MISSING_PREFIX: &str =
    "Keywords in job but not found in resume, add only if applicable: ";

/// Renders up to two sentences describing present and missing terms.
///
/// Each list is cut to its cap first. An empty list emits no sentence; the
/// sentences are joined by a newline, and two empty lists render `""`.
pub fn build_context<P, M>(
    present: &[P],
    missing: &[M],
    max_present: usize,
    max_missing: usize,
) -> String
where
    P: AsRef<str>,
    M: AsRef<str>,
{
    let present = &present[..present.len().min(max_present)];
    let missing = &missing[..missing.len().min(max_missing)];

    let mut out = String::new();
    push_sentence(&mut out, PRESENT_PREFIX, present);
    push_sentence(&mut out, MISSING_PREFIX, missing);
    out
}

fn push_sentence<S: AsRef<str>>(out: &mut String, prefix: &str, terms: &[S]) {
    if terms.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push('\n');
    }

    out.push_str(prefix);
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(term.as_ref());
    }
    out.push('.');
}

/// Renders a [`MatchResult`] with the caps in `config`.
pub fn render_match(matches: &MatchResult, config: &ContextConfig) -> String {
    build_context(
        &matches.present,
        &matches.missing,
        config.max_present,
        config.max_missing,
    )
}
