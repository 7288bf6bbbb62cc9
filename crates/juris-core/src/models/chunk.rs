//! Evidence chunks, the atomic unit of retrieval and citation.
//!
//! Chunks are owned by the ingestion subsystem; this core only reads them.

use serde::{Deserialize, Serialize};

/// Identifier of an isolated tenant organization.
///
/// Every chunk carries exactly one tenant id, never empty. Documents and
/// queries of one tenant must never be visible to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(pub String);

impl TenantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an evidence chunk, unique within a tenant's store.
///
/// `Ord` is lexicographic; the retriever uses it as the deterministic
/// tie-break (lower id wins).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChunkId(pub String);

impl ChunkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChunkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Document metadata attached to a chunk at ingestion time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkMetadata {
    pub jurisdiction: Option<String>,
    pub document_type: Option<String>,
    pub source_document_id: String,
    pub title: Option<String>,
    pub page: Option<u32>,
    pub section: Option<String>,
}

/// A unit of ingested document text with its embedding and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: ChunkId,
    pub tenant_id: TenantId,
    pub embedding: Vec<f32>,
    pub text: String,
    pub metadata: ChunkMetadata,
}

impl Chunk {
    /// Short human-readable source label for citations:
    /// title, falling back to the source document id, plus section/page.
    pub fn source_label(&self) -> String {
        let base = self
            .metadata
            .title
            .clone()
            .unwrap_or_else(|| self.metadata.source_document_id.clone());
        match (&self.metadata.section, self.metadata.page) {
            (Some(section), _) => format!("{base}, {section}"),
            (None, Some(page)) => format!("{base}, p. {page}"),
            (None, None) => base,
        }
    }
}
