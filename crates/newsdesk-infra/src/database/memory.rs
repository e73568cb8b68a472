//! In-memory post repository - used as fallback when Postgres is not
//! configured, and by the service-level tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use newsdesk_core::domain::Post;
use newsdesk_core::error::RepoError;
use newsdesk_core::ports::PostRepository;

/// Insertion-ordered table behind one RwLock.
///
/// The single write guard makes "clear sibling featured flags + write row"
/// atomic, and the id/slug uniqueness checks give this adapter the same
/// `Constraint` error surface as the database backstop. Data is lost on
/// process restart.
pub struct InMemoryPostRepository {
    rows: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    fn unfeature_siblings(rows: &mut [Post], keep: Uuid) {
        for row in rows.iter_mut() {
            if row.id != keep && row.is_featured {
                row.is_featured = false;
                row.featured_at = None;
            }
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut rows = self.rows.write().await;

        if rows.iter().any(|row| row.id == post.id) {
            return Err(RepoError::Constraint(format!(
                "duplicate post id {}",
                post.id
            )));
        }
        if rows.iter().any(|row| row.slug == post.slug) {
            return Err(RepoError::Constraint(format!(
                "duplicate slug {:?}",
                post.slug
            )));
        }

        if post.is_featured {
            Self::unfeature_siblings(&mut rows, post.id);
        }
        rows.push(post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut rows = self.rows.write().await;

        let index = rows
            .iter()
            .position(|row| row.id == post.id)
            .ok_or(RepoError::NotFound)?;
        if rows
            .iter()
            .any(|row| row.id != post.id && row.slug == post.slug)
        {
            return Err(RepoError::Constraint(format!(
                "duplicate slug {:?}",
                post.slug
            )));
        }

        if post.is_featured {
            Self::unfeature_siblings(&mut rows, post.id);
        }
        rows[index] = post.clone();
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id != id);
        Ok(rows.len() < before)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.slug == slug).cloned())
    }

    async fn list(&self, author_id: Option<Uuid>) -> Result<Vec<Post>, RepoError> {
        let rows = self.rows.read().await;
        let mut posts: Vec<Post> = rows
            .iter()
            .filter(|row| author_id.is_none_or(|author| row.author_id == author))
            .cloned()
            .collect();
        // Stable sort: equal dates keep insertion order.
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    async fn find_featured_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Option<Post>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| row.is_featured && row.featured_at.is_some_and(|at| at > cutoff))
            .max_by_key(|row| row.featured_at)
            .cloned())
    }

    async fn unfeature_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, RepoError> {
        let mut rows = self.rows.write().await;
        let mut cleared = 0;
        for row in rows.iter_mut() {
            if row.is_featured && row.featured_at.is_some_and(|at| at <= cutoff) {
                row.is_featured = false;
                row.featured_at = None;
                cleared += 1;
            }
        }
        Ok(cleared)
    }
}
