use proptest::prelude::*;
use std::sync::Arc;

use juris_core::config::RetrievalConfig;
use juris_core::models::{
    Chunk, ChunkId, ChunkMetadata, Query, QueryOptions, ScoredChunk, TenantId,
};
use juris_providers::mocks::TokenHashEmbedding;
use juris_retrieval::{mmr, InMemoryEvidenceStore, RetrievalEngine};

fn chunk(id: u32, tenant: &str, embedding: Vec<f32>) -> Chunk {
    Chunk {
        id: ChunkId::new(format!("chunk-{id:04}")),
        tenant_id: TenantId::new(tenant),
        embedding,
        text: format!("clause text {id}"),
        metadata: ChunkMetadata::default(),
    }
}

fn scored(id: u32, embedding: Vec<f32>, relevance: f64) -> ScoredChunk {
    ScoredChunk {
        chunk: chunk(id, "t1", embedding),
        relevance,
    }
}

// ── MMR invariants ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn mmr_output_is_bounded_and_duplicate_free(
        pool in prop::collection::vec(
            (0u32..200, prop::collection::vec(-1.0f32..1.0, 4), 0.0f64..1.0),
            0..25,
        ),
        lambda in 0.05f64..1.0,
        k in 0usize..10,
    ) {
        // Dedup generated ids so the input respects the candidate contract.
        let mut seen = std::collections::HashSet::new();
        let candidates: Vec<ScoredChunk> = pool
            .into_iter()
            .filter(|(id, _, _)| seen.insert(*id))
            .map(|(id, emb, rel)| scored(id, emb, rel))
            .collect();
        let input_len = candidates.len();

        let picked = mmr::rerank(candidates, lambda, k);

        prop_assert!(picked.len() <= k);
        prop_assert!(picked.len() <= input_len);
        if input_len >= k {
            prop_assert_eq!(picked.len(), k);
        }
        let mut ids = std::collections::HashSet::new();
        for s in &picked {
            prop_assert!(ids.insert(s.chunk.id.clone()), "duplicate id {}", s.chunk.id);
        }
    }

    #[test]
    fn mmr_is_deterministic(
        pool in prop::collection::vec(
            (0u32..50, prop::collection::vec(-1.0f32..1.0, 3), 0.0f64..1.0),
            1..15,
        ),
        k in 1usize..6,
    ) {
        let mut seen = std::collections::HashSet::new();
        let candidates: Vec<ScoredChunk> = pool
            .into_iter()
            .filter(|(id, _, _)| seen.insert(*id))
            .map(|(id, emb, rel)| scored(id, emb, rel))
            .collect();

        let a = mmr::rerank(candidates.clone(), 0.6, k);
        let b = mmr::rerank(candidates, 0.6, k);
        let ids_a: Vec<_> = a.iter().map(|s| s.chunk.id.clone()).collect();
        let ids_b: Vec<_> = b.iter().map(|s| s.chunk.id.clone()).collect();
        prop_assert_eq!(ids_a, ids_b);
    }
}

// ── End-to-end retrieval invariants ───────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn retrieval_never_crosses_tenants_and_never_duplicates(
        own_count in 1usize..12,
        other_count in 0usize..12,
        k in 1usize..6,
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        rt.block_on(async {
            // Stored embeddings share the query embedder's dimension.
            let embed = |seed: f32| {
                let mut v = vec![0.0f32; 16];
                v[0] = 1.0;
                v[1] = seed;
                v
            };
            let store = InMemoryEvidenceStore::new();
            let mut chunks = Vec::new();
            for i in 0..own_count {
                chunks.push(chunk(i as u32, "tenant-a", embed(i as f32 * 0.1)));
            }
            for i in 0..other_count {
                chunks.push(chunk(1000 + i as u32, "tenant-b", embed(0.0)));
            }
            store.add_chunks(chunks);

            let engine = RetrievalEngine::new(
                Arc::new(store),
                Arc::new(TokenHashEmbedding::new(16)),
                RetrievalConfig::default(),
            );

            let query = Query::new(
                "termination clause",
                TenantId::new("tenant-a"),
                None,
                QueryOptions {
                    top_k: Some(k),
                    ..Default::default()
                },
            )
            .unwrap();

            let result = engine.retrieve(&query).await.unwrap();
            assert!(result.len() <= k);

            let mut ids = std::collections::HashSet::new();
            for s in result.chunks() {
                assert_eq!(s.chunk.tenant_id, TenantId::new("tenant-a"));
                assert!(ids.insert(s.chunk.id.clone()));
            }
        });
    }
}
