use crate::embeddings::EmbeddingClient;
use crate::models::Chunk;
use anyhow::Result;

/// Candidate count for similarity search when the caller does not override it.
pub const DEFAULT_TOP_K: usize = 4;

struct StoredChunk {
    chunk: Chunk,
    embedding: Vec<f32>,
}

/// Request-scoped similarity index. Built fresh for every request, filled
/// once, searched once, then dropped; nothing survives the request.
pub struct InMemoryVectorStore {
    embeddings: EmbeddingClient,
    entries: Vec<StoredChunk>,
}

impl InMemoryVectorStore {
    pub fn new(embeddings: EmbeddingClient) -> Self {
        Self {
            embeddings,
            entries: Vec::new(),
        }
    }

    /// Embeds the chunks in one batch and inserts them. Returns the stored
    /// chunk ids. No deduplication; inserting nothing is a no-op.
    pub async fn add_documents(&mut self, chunks: Vec<Chunk>) -> Result<Vec<String>> {
        let texts: Vec<String> = chunks.iter().map(|c| c.content.clone()).collect();
        let vectors = self.embeddings.embed_documents(&texts).await?;

        let mut ids = Vec::with_capacity(chunks.len());
        for (chunk, embedding) in chunks.into_iter().zip(vectors) {
            ids.push(chunk.id.clone());
            self.entries.push(StoredChunk { chunk, embedding });
        }

        log::info!("Indexed {} chunks", ids.len());
        Ok(ids)
    }

    /// Embeds the query and returns the `k` most similar chunks, best first.
    /// An empty store returns an empty result.
    pub async fn similarity_search(&self, query: &str, k: usize) -> Result<Vec<Chunk>> {
        if self.entries.is_empty() {
            return Ok(Vec::new());
        }

        let query_embedding = self.embeddings.embed_query(query).await?;
        let results = top_k(&self.entries, &query_embedding, k);
        log::info!("Retrieved {} chunks for query", results.len());
        Ok(results)
    }
}

fn top_k(entries: &[StoredChunk], query_embedding: &[f32], k: usize) -> Vec<Chunk> {
    let mut scored: Vec<(&StoredChunk, f32)> = entries
        .iter()
        .map(|entry| (entry, cosine_similarity(query_embedding, &entry.embedding)))
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .take(k)
        .map(|(entry, _)| entry.chunk.clone())
        .collect()
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let min_len = a.len().min(b.len());

    let dot_product: f32 = a[..min_len]
        .iter()
        .zip(b[..min_len].iter())
        .map(|(x, y)| x * y)
        .sum();

    let norm_a: f32 = a[..min_len].iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b[..min_len].iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentMetadata;

    fn entry(id: &str, embedding: Vec<f32>) -> StoredChunk {
        StoredChunk {
            chunk: Chunk {
                id: id.to_string(),
                content: id.to_string(),
                metadata: DocumentMetadata {
                    source: "article_0".to_string(),
                },
            },
            embedding,
        }
    }

    #[test]
    fn identical_vectors_score_one() {
        let score = cosine_similarity(&[0.6, 0.8], &[0.6, 0.8]);
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        let score = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]);
        assert!(score.abs() < 1e-6);
    }

    #[test]
    fn zero_vector_scores_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn ranking_orders_by_similarity() {
        let entries = vec![
            entry("far", vec![0.0, 1.0]),
            entry("near", vec![1.0, 0.1]),
            entry("exact", vec![1.0, 0.0]),
        ];
        let results = top_k(&entries, &[1.0, 0.0], 3);
        let ids: Vec<&str> = results.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["exact", "near", "far"]);
    }

    #[test]
    fn ranking_truncates_at_k() {
        let entries = vec![
            entry("a", vec![1.0, 0.0]),
            entry("b", vec![0.9, 0.1]),
            entry("c", vec![0.0, 1.0]),
        ];
        let results = top_k(&entries, &[1.0, 0.0], 2);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn no_entries_means_no_results() {
        let results = top_k(&[], &[1.0, 0.0], DEFAULT_TOP_K);
        assert!(results.is_empty());
    }
}
