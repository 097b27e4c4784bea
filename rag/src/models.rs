use serde::{Deserialize, Serialize};

/// A unit of caller-supplied text, tagged with where it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub source: String,
}

impl Document {
    /// Wraps one raw input text as a document, tagged by its position in the
    /// request. The source tag is what retrieval results report back.
    pub fn from_text(text: &str, idx: usize) -> Self {
        Self {
            content: text.to_string(),
            metadata: DocumentMetadata {
                source: format!("article_{}", idx),
            },
        }
    }
}

/// A sub-span of a document produced by the splitter. Chunks are what get
/// embedded, stored, and retrieved; each keeps its parent's metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    pub content: String,
    pub metadata: DocumentMetadata,
}

/// Transient state threaded through the retrieve/generate steps. Built for a
/// single request and dropped once the answer is extracted.
#[derive(Debug, Clone)]
pub struct PipelineState {
    pub question: String,
    pub context: Vec<Chunk>,
    pub answer: String,
}

impl PipelineState {
    pub fn new(question: &str) -> Self {
        Self {
            question: question.to_string(),
            context: Vec::new(),
            answer: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_keeps_input_text() {
        let doc = Document::from_text("The sky is blue.", 0);
        assert_eq!(doc.content, "The sky is blue.");
        assert_eq!(doc.metadata.source, "article_0");
    }

    #[test]
    fn documents_are_tagged_by_position() {
        let docs: Vec<Document> = ["a", "b", "c"]
            .iter()
            .enumerate()
            .map(|(idx, text)| Document::from_text(text, idx))
            .collect();
        assert_eq!(docs[2].metadata.source, "article_2");
    }
}
