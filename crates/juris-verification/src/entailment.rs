//! Lexical entailment scoring.
//!
//! Support = fraction of the claim's content tokens present in the cited
//! chunk's text. Coverage rather than Jaccard, so a long chunk is not
//! penalized for containing more than the claim. Deliberately model-free:
//! the verification stage must not depend on the same unreliable completion
//! service it is checking.

use std::collections::HashSet;

/// Words carrying no evidential weight, skipped during scoring.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "have", "in", "is",
    "it", "its", "may", "must", "not", "of", "on", "or", "shall", "that", "the", "this", "to",
    "was", "were", "which", "will", "with",
];

fn content_tokens(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() > 1 && !STOPWORDS.contains(t))
        .map(String::from)
        .collect()
}

/// Score how well `chunk_text` supports `claim_text`, in [0, 1].
///
/// A claim with no content tokens scores 0; there is nothing to verify.
pub fn support_score(claim_text: &str, chunk_text: &str) -> f64 {
    let claim_tokens = content_tokens(claim_text);
    if claim_tokens.is_empty() {
        return 0.0;
    }
    let chunk_tokens = content_tokens(chunk_text);
    let overlap = claim_tokens.intersection(&chunk_tokens).count();
    overlap as f64 / claim_tokens.len() as f64
}

/// Number of content tokens in a claim; used as its confidence weight.
pub fn claim_weight(claim_text: &str) -> f64 {
    content_tokens(claim_text).len().max(1) as f64
}
