pub mod chat;
pub mod config;
pub mod embeddings;
pub mod graph;
pub mod hub;
pub mod models;
pub mod splitter;
pub mod vector_store;

pub use chat::ChatModel;
pub use config::ModelConfig;
pub use embeddings::EmbeddingClient;
pub use graph::{generate_answer, RagGraph};
pub use hub::{PromptTemplate, RAG_PROMPT_REF};
pub use models::*;
pub use splitter::TextSplitter;
pub use vector_store::InMemoryVectorStore;
