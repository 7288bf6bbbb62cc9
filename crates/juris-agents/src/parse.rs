//! Completion-output parsing.
//!
//! Models wrap JSON in markdown fences more often than not; extraction
//! handles fenced and bare payloads. Claim decoding is tolerant: a missing
//! or unknown source tag produces an untagged claim (verification treats it
//! as unsupported), never a parse error.

use serde::Deserialize;

use juris_core::errors::AgentError;
use juris_core::models::{AgentKind, Chunk, ChunkId, Claim, ClaimSupport, RetrievalResult};

/// Marker a specialist uses for claims with no document backing.
pub const GENERAL_KNOWLEDGE: &str = "general-knowledge";

/// Strip a markdown code fence if present, returning the inner payload.
pub fn extract_json(content: &str) -> &str {
    let trimmed = content.trim();
    for fence in ["```json", "```"] {
        if let Some(start) = trimmed.find(fence) {
            let rest = &trimmed[start + fence.len()..];
            if let Some(end) = rest.find("```") {
                return rest[..end].trim();
            }
        }
    }
    trimmed
}

#[derive(Deserialize)]
struct RawClaim {
    text: String,
    #[serde(default)]
    source: Option<String>,
}

/// Decode a specialist's claims array.
///
/// Cited chunk ids are validated against the supplied evidence; a cite of
/// anything else is downgraded to an untagged claim rather than rejected.
pub fn parse_claims(
    content: &str,
    specialist: AgentKind,
    evidence: &RetrievalResult,
) -> Result<Vec<Claim>, AgentError> {
    let payload = extract_json(content);
    let raw: Vec<RawClaim> =
        serde_json::from_str(payload).map_err(|e| AgentError::MalformedOutput {
            reason: format!("claims array did not parse: {e}"),
        })?;

    let claims = raw
        .into_iter()
        .filter(|r| !r.text.trim().is_empty())
        .map(|r| {
            let support = match r.source.as_deref().map(str::trim) {
                Some(GENERAL_KNOWLEDGE) | Some("general_knowledge") => {
                    Some(ClaimSupport::GeneralKnowledge)
                }
                Some(id) if !id.is_empty() => {
                    let chunk_id = ChunkId::new(id);
                    evidence
                        .get(&chunk_id)
                        .map(|c: &Chunk| ClaimSupport::Evidence(c.id.clone()))
                }
                _ => None,
            };
            Claim {
                text: r.text.trim().to_string(),
                support,
                specialist,
            }
        })
        .collect();

    Ok(claims)
}
