use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Post storage port.
///
/// Write operations own the single-featured invariant: when the written row
/// has `is_featured = true`, the implementation must clear the flag (and
/// `featured_at`) on every other row atomically with the write - one
/// transaction on a database backend, one write-lock section in memory.
/// Implementations map uniqueness violations (slug, id) to
/// [`RepoError::Constraint`] so callers can retry slug assignment.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Replace an existing post; [`RepoError::NotFound`] if the id is unknown.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Hard-delete by id; returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, RepoError>;

    /// Point lookup by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Point lookup by slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// All posts, or one author's posts, newest first.
    async fn list(&self, author_id: Option<Uuid>) -> Result<Vec<Post>, RepoError>;

    /// The featured post whose `featured_at` is after `cutoff`, if any.
    /// Picks the latest `featured_at` should the invariant ever be violated.
    async fn find_featured_since(&self, cutoff: DateTime<Utc>)
        -> Result<Option<Post>, RepoError>;

    /// Clear `is_featured`/`featured_at` on posts featured at or before
    /// `cutoff`. Returns the number of rows touched.
    async fn unfeature_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, RepoError>;
}
