use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;

const EMBEDDINGS_URL: &str = "https://api.openai.com/v1/embeddings";

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    index: usize,
    embedding: Vec<f32>,
}

/// Client for the OpenAI embeddings endpoint. Embeds chunk batches at index
/// time and single questions at query time.
pub struct EmbeddingClient {
    client: Client,
    api_key: String,
    model: String,
}

impl EmbeddingClient {
    pub fn new(model: &str) -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY environment variable not set"))?;

        Ok(Self {
            client: Client::new(),
            api_key,
            model: model.to_string(),
        })
    }

    /// Embeds a batch of texts in one API call, preserving input order.
    pub async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .client
            .post(EMBEDDINGS_URL)
            .bearer_auth(&self.api_key)
            .json(&EmbeddingRequest {
                model: &self.model,
                input: texts,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(anyhow::anyhow!("Embeddings API error: {}", error_text));
        }

        let mut body: EmbeddingResponse = response.json().await?;
        // The API tags each vector with its input index; order by it rather
        // than trusting response order.
        body.data.sort_by_key(|d| d.index);

        if body.data.len() != texts.len() {
            return Err(anyhow::anyhow!(
                "Embeddings API returned {} vectors for {} inputs",
                body.data.len(),
                texts.len()
            ));
        }

        Ok(body.data.into_iter().map(|d| d.embedding).collect())
    }

    pub async fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
        let mut embeddings = self.embed_documents(&[text.to_string()]).await?;
        embeddings
            .pop()
            .ok_or_else(|| anyhow::anyhow!("Embeddings API returned no vector for query"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_vectors_sort_by_input_index() {
        let json = r#"{
            "data": [
                {"index": 1, "embedding": [0.0, 1.0]},
                {"index": 0, "embedding": [1.0, 0.0]}
            ]
        }"#;
        let mut body: EmbeddingResponse = serde_json::from_str(json).unwrap();
        body.data.sort_by_key(|d| d.index);
        assert_eq!(body.data[0].embedding, vec![1.0, 0.0]);
        assert_eq!(body.data[1].embedding, vec![0.0, 1.0]);
    }

    #[test]
    fn missing_api_key_is_an_error() {
        env::remove_var("OPENAI_API_KEY");
        assert!(EmbeddingClient::new("text-embedding-3-small").is_err());
    }
}
