//! Citation construction and ordering.

use std::collections::HashSet;

use juris_core::models::{Chunk, ChunkId, Citation, VerifiedClaim};

/// Build the citation record for an evidence chunk.
pub fn citation_for(chunk: &Chunk) -> Citation {
    Citation {
        chunk_id: chunk.id.clone(),
        label: chunk.source_label(),
        source_document_id: chunk.metadata.source_document_id.clone(),
        jurisdiction: chunk.metadata.jurisdiction.clone(),
    }
}

/// Collect the citations of retained claims, in the order the claims appear
/// in the answer, with each chunk cited at most once (first appearance wins).
pub fn ordered_citations(claims_in_answer_order: &[VerifiedClaim]) -> Vec<Citation> {
    let mut seen: HashSet<ChunkId> = HashSet::new();
    let mut out = Vec::new();
    for verified in claims_in_answer_order {
        if !verified.retained {
            continue;
        }
        if let Some(citation) = &verified.citation {
            if seen.insert(citation.chunk_id.clone()) {
                out.push(citation.clone());
            }
        }
    }
    out
}
