//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a post. Derived fields (slug, date, excerpt when
/// omitted) are computed server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub author: String,
    pub author_id: Uuid,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_hint: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

/// Partial update for a post; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_hint: Option<String>,
    #[serde(default)]
    pub is_featured: Option<bool>,
}

/// A post as served to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub author_id: Uuid,
    pub tags: Vec<String>,
    pub image_url: String,
    pub image_hint: String,
    pub date: DateTime<Utc>,
    pub is_featured: bool,
    pub featured_at: Option<DateTime<Utc>>,
}

/// Request to summarize a news article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeArticleRequest {
    pub article_content: String,
}

/// Article summary with a 0..=1 blog-suitability score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeArticleResponse {
    pub summary: String,
    pub suitability_score: f32,
}

/// Request to generate a blog draft from a prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateDraftRequest {
    pub prompt: String,
}

/// A generated draft, ready for the editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateDraftResponse {
    pub title: String,
    pub content: String,
}

/// A post rendered as a video script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptResponse {
    pub post_id: Uuid,
    pub title: String,
    pub script: String,
}
