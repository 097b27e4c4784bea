use anyhow::Result;
use serde_json::Value;

/// Registry identifier of the prompt this service formats its questions with.
pub const RAG_PROMPT_REF: &str = "rlm/rag-prompt";

const HUB_URL: &str = "https://api.hub.langchain.com/commits";

/// A prompt with `{question}` and `{context}` placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn format(&self, question: &str, context: &str) -> String {
        self.template
            .replace("{question}", question)
            .replace("{context}", context)
    }
}

/// Fetches the latest commit of a prompt from the registry and extracts its
/// template text. Fetched per request; any failure propagates to the caller.
pub async fn pull(prompt_ref: &str) -> Result<PromptTemplate> {
    let url = format!("{}/{}/latest", HUB_URL, prompt_ref);
    let response = reqwest::get(&url).await?;

    if !response.status().is_success() {
        let error_text = response.text().await?;
        return Err(anyhow::anyhow!("Prompt hub error: {}", error_text));
    }

    let manifest: Value = response.json().await?;
    let template = template_from_manifest(&manifest)?;
    Ok(PromptTemplate::new(template))
}

/// The commit manifest nests the template under the first message's prompt.
fn template_from_manifest(manifest: &Value) -> Result<String> {
    manifest
        .pointer("/manifest/kwargs/messages/0/kwargs/prompt/kwargs/template")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("Prompt hub manifest has no template"))
}
