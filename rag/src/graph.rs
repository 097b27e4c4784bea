use crate::chat::ChatModel;
use crate::config::ModelConfig;
use crate::embeddings::EmbeddingClient;
use crate::hub::{self, PromptTemplate, RAG_PROMPT_REF};
use crate::models::{Chunk, Document, PipelineState};
use crate::splitter::TextSplitter;
use crate::vector_store::{InMemoryVectorStore, DEFAULT_TOP_K};
use anyhow::Result;

/// The pipeline is a linear two-state machine: retrieve, then generate, then
/// done. Transitions are unconditional.
enum Step {
    Retrieve,
    Generate,
}

/// Two-node retrieve/generate pipeline over a request-scoped store.
pub struct RagGraph {
    store: InMemoryVectorStore,
    prompt: PromptTemplate,
    chat_model: ChatModel,
}

impl RagGraph {
    pub fn new(store: InMemoryVectorStore, prompt: PromptTemplate, chat_model: ChatModel) -> Self {
        Self {
            store,
            prompt,
            chat_model,
        }
    }

    /// Runs the steps to completion and returns the final state.
    pub async fn invoke(&self, question: &str) -> Result<PipelineState> {
        let mut state = PipelineState::new(question);
        let mut step = Some(Step::Retrieve);

        while let Some(current) = step {
            step = match current {
                Step::Retrieve => {
                    self.retrieve(&mut state).await?;
                    Some(Step::Generate)
                }
                Step::Generate => {
                    self.generate(&mut state).await?;
                    None
                }
            };
        }

        Ok(state)
    }

    async fn retrieve(&self, state: &mut PipelineState) -> Result<()> {
        state.context = self
            .store
            .similarity_search(&state.question, DEFAULT_TOP_K)
            .await?;
        Ok(())
    }

    async fn generate(&self, state: &mut PipelineState) -> Result<()> {
        let docs_content = join_context(&state.context);
        let message = self.prompt.format(&state.question, &docs_content);
        state.answer = self.chat_model.invoke(&message).await?;
        Ok(())
    }
}

fn join_context(chunks: &[Chunk]) -> String {
    chunks
        .iter()
        .map(|chunk| chunk.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Builds and runs the whole pipeline for one request: wrap texts as
/// documents, split, embed and index, pull the prompt, then retrieve and
/// generate. Everything built here dies with the request.
pub async fn generate_answer(texts: &[String], question: &str) -> Result<String> {
    let config = ModelConfig::from_env()?;

    let documents: Vec<Document> = texts
        .iter()
        .enumerate()
        .map(|(idx, text)| Document::from_text(text, idx))
        .collect();

    let splitter = TextSplitter::default();
    let chunks = splitter.split_documents(&documents);

    let embeddings = EmbeddingClient::new(&config.embedding_model_name)?;
    let mut store = InMemoryVectorStore::new(embeddings);
    store.add_documents(chunks).await?;

    let prompt = hub::pull(RAG_PROMPT_REF).await?;
    let chat_model = ChatModel::new(&config.model_name, &config.model_provider)?;

    let graph = RagGraph::new(store, prompt, chat_model);
    let state = graph.invoke(question).await?;
    Ok(state.answer)
}
