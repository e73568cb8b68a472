use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Image fields default to a neutral placeholder when the author supplies none.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400.png";
pub const PLACEHOLDER_IMAGE_HINT: &str = "placeholder image";

/// Post entity - a published blog post.
///
/// `slug` is unique across all posts and only reassigned when the title
/// changes. At most one post has `is_featured = true` at any instant;
/// `featured_at` records the moment the flag was last switched on and is
/// never refreshed while the flag stays on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
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

/// Author-supplied fields for creating a post.
///
/// `id`, `slug`, `date`, and `featured_at` are always computed by the
/// service, never accepted from the caller.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub author: String,
    pub author_id: Uuid,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub image_hint: Option<String>,
    pub is_featured: bool,
}

/// Partial update for a post - one `Option` per settable field.
///
/// Derived fields (slug, excerpt, featured_at) are decided by the service
/// from these inputs; `id`, `author_id`, and `date` are immutable.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub image_hint: Option<String>,
    pub is_featured: Option<bool>,
}

impl PostUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.excerpt.is_none()
            && self.tags.is_none()
            && self.image_url.is_none()
            && self.image_hint.is_none()
            && self.is_featured.is_none()
    }
}
