use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Summary of a source article, with a 0..=1 score for how well it would
/// carry as a blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub summary: String,
    pub suitability_score: f32,
}

/// A generated blog draft, ready for the editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDraft {
    pub title: String,
    pub content: String,
}

/// Text-generation port - the external drafting service, consumed as an
/// opaque text-in/text-out collaborator. Never called from inside
/// repository operations.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Summarize a news article and score its suitability.
    async fn summarize_article(&self, article: &str) -> Result<ArticleSummary, TextGenError>;

    /// Generate a blog draft from a free-form prompt.
    async fn generate_draft(&self, prompt: &str) -> Result<GeneratedDraft, TextGenError>;
}

/// Text-generation errors.
#[derive(Debug, thiserror::Error)]
pub enum TextGenError {
    #[error("Generation service unavailable: {0}")]
    Unavailable(String),

    #[error("Generation service returned an invalid response: {0}")]
    InvalidResponse(String),
}
