//! Property tests for the verification stage.

use proptest::prelude::*;

use juris_core::config::VerificationConfig;
use juris_core::models::{
    AgentKind, Chunk, ChunkId, ChunkMetadata, Claim, RetrievalResult, ScoredChunk, TenantId,
};
use juris_verification::entailment::support_score;
use juris_verification::VerificationEngine;

fn word() -> impl Strategy<Value = String> {
    "[a-z]{2,10}"
}

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..12).prop_map(|ws| ws.join(" "))
}

fn evidence_set(texts: Vec<String>) -> RetrievalResult {
    let tenant = TenantId::new("t1");
    let scored = texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| ScoredChunk {
            chunk: Chunk {
                id: ChunkId::new(format!("c-{i:03}")),
                tenant_id: tenant.clone(),
                embedding: vec![],
                text,
                metadata: ChunkMetadata::default(),
            },
            relevance: 1.0,
        })
        .collect();
    RetrievalResult::new(&tenant, scored).unwrap()
}

fn claims_over(chunk_count: usize) -> impl Strategy<Value = Vec<Claim>> {
    prop::collection::vec(
        (sentence(), 0..=chunk_count, prop::bool::ANY),
        0..8,
    )
    .prop_map(move |specs| {
        specs
            .into_iter()
            .map(|(text, idx, general)| {
                if general {
                    Claim::general_knowledge(text, AgentKind::GeneralCounsel)
                } else if idx < chunk_count {
                    Claim::evidence(text, ChunkId::new(format!("c-{idx:03}")), AgentKind::Statutory)
                } else {
                    Claim::untagged(text, AgentKind::Statutory)
                }
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn support_score_is_bounded(claim in sentence(), chunk in sentence()) {
        let score = support_score(&claim, &chunk);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn confidence_is_bounded_and_zero_without_retained_claims(
        texts in prop::collection::vec(sentence(), 1..4),
        claims in claims_over(3),
    ) {
        let evidence = evidence_set(texts);
        let engine = VerificationEngine::new(VerificationConfig::default());
        let (verified, confidence) = engine.verify(&claims, &evidence);

        prop_assert!((0.0..=1.0).contains(&confidence));
        prop_assert_eq!(verified.len(), claims.len());
        if verified.iter().all(|v| !v.retained) {
            prop_assert_eq!(confidence, 0.0);
        }
    }

    #[test]
    fn retention_agrees_with_the_configured_threshold(
        texts in prop::collection::vec(sentence(), 1..4),
        claims in claims_over(3),
    ) {
        let config = VerificationConfig::default();
        let evidence = evidence_set(texts);
        let engine = VerificationEngine::new(config.clone());
        let (verified, _) = engine.verify(&claims, &evidence);

        for v in &verified {
            // General-knowledge claims are always retained; everything else
            // follows the threshold.
            if v.claim.support == Some(juris_core::models::ClaimSupport::GeneralKnowledge) {
                prop_assert!(v.retained);
                prop_assert!(v.citation.is_none());
            } else {
                prop_assert_eq!(v.retained, v.support_score >= config.support_threshold);
                prop_assert_eq!(v.citation.is_some(), v.retained && v.claim.cited_chunk().is_some());
            }
        }
    }
}
