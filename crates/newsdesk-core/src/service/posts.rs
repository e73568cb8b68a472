use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    assign_slug, derive_excerpt, NewPost, Post, PostUpdate, PLACEHOLDER_IMAGE_HINT,
    PLACEHOLDER_IMAGE_URL,
};
use crate::error::{DomainError, RepoError};
use crate::ports::{Clock, PostRepository};

/// Post service - owns create/update/delete and enforces every derived-field
/// rule: slug assignment, excerpt derivation, and the featured-flag
/// transitions. The storage adapter guarantees the single-featured invariant
/// atomically; this service decides *what* to write.
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    clock: Arc<dyn Clock>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Create a post from author-supplied fields.
    ///
    /// Computes id, slug, excerpt (when absent), image defaults, and the
    /// creation timestamp. A featured creation stamps `featured_at` and
    /// unfeatures every other post in the same storage transaction.
    pub async fn create(&self, data: NewPost) -> Result<Post, DomainError> {
        if data.title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".into()));
        }
        if data.content.trim().is_empty() {
            return Err(DomainError::Validation("content must not be empty".into()));
        }
        if data.author.trim().is_empty() {
            return Err(DomainError::Validation("author must not be empty".into()));
        }
        if data.author_id.is_nil() {
            return Err(DomainError::Validation("author id is required".into()));
        }

        let now = self.clock.now();
        let post = Post {
            id: Uuid::new_v4(),
            slug: assign_slug(self.repo.as_ref(), &data.title, None).await?,
            excerpt: data
                .excerpt
                .clone()
                .unwrap_or_else(|| derive_excerpt(&data.content)),
            title: data.title.clone(),
            content: data.content,
            author: data.author,
            author_id: data.author_id,
            tags: data.tags,
            image_url: data
                .image_url
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            image_hint: data
                .image_hint
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_HINT.to_string()),
            date: now,
            is_featured: data.is_featured,
            featured_at: data.is_featured.then_some(now),
        };

        match self.repo.insert(post.clone()).await {
            Ok(saved) => Ok(saved),
            // Slug probing and the write are not atomic; a concurrent
            // creation can win the slug. Re-derive once against the fresh
            // store state, then give up.
            Err(RepoError::Constraint(_)) => {
                let mut retry = post;
                retry.slug = assign_slug(self.repo.as_ref(), &data.title, None).await?;
                self.repo.insert(retry).await.map_err(|err| match err {
                    RepoError::Constraint(_) => DomainError::SlugExhausted { title: data.title },
                    other => other.into(),
                })
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Apply a partial update.
    ///
    /// The slug is recomputed only when the title actually changes, the
    /// excerpt only when content changes without an explicit excerpt, and the
    /// featured transitions compare the stored flag against the requested
    /// one - re-saving an already-featured post must not refresh its timer.
    pub async fn update(&self, id: Uuid, update: PostUpdate) -> Result<Post, DomainError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "post",
                id,
            })?;

        if let Some(title) = &update.title {
            if title.trim().is_empty() {
                return Err(DomainError::Validation("title must not be empty".into()));
            }
        }
        if let Some(content) = &update.content {
            if content.trim().is_empty() {
                return Err(DomainError::Validation("content must not be empty".into()));
            }
        }

        let title_changed = update
            .title
            .as_ref()
            .is_some_and(|title| *title != existing.title);

        let slug = if title_changed {
            let title = update.title.as_deref().unwrap_or(&existing.title);
            assign_slug(self.repo.as_ref(), title, Some(id)).await?
        } else {
            existing.slug.clone()
        };

        let excerpt = match (&update.excerpt, &update.content) {
            (Some(explicit), _) => explicit.clone(),
            (None, Some(content)) => derive_excerpt(content),
            (None, None) => existing.excerpt.clone(),
        };

        let was_featured = existing.is_featured;
        let want_featured = update.is_featured.unwrap_or(was_featured);
        let featured_at = match (was_featured, want_featured) {
            (false, true) => Some(self.clock.now()),
            (true, true) => existing.featured_at,
            (_, false) => None,
        };

        let post = Post {
            id,
            slug,
            title: update.title.clone().unwrap_or(existing.title),
            content: update.content.clone().unwrap_or(existing.content),
            excerpt,
            author: existing.author,
            author_id: existing.author_id,
            tags: update.tags.unwrap_or(existing.tags),
            image_url: update.image_url.unwrap_or(existing.image_url),
            image_hint: update.image_hint.unwrap_or(existing.image_hint),
            date: existing.date,
            is_featured: want_featured,
            featured_at,
        };

        match self.repo.update(post.clone()).await {
            Ok(saved) => Ok(saved),
            Err(RepoError::NotFound) => Err(DomainError::NotFound {
                entity_type: "post",
                id,
            }),
            Err(RepoError::Constraint(_)) if title_changed => {
                let title = post.title.clone();
                let mut retry = post;
                retry.slug = assign_slug(self.repo.as_ref(), &title, Some(id)).await?;
                self.repo.update(retry).await.map_err(|err| match err {
                    RepoError::Constraint(_) => DomainError::SlugExhausted { title },
                    RepoError::NotFound => DomainError::NotFound {
                        entity_type: "post",
                        id,
                    },
                    other => other.into(),
                })
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Hard-delete; returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.repo.delete(id).await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Post>, DomainError> {
        Ok(self.repo.find_by_slug(slug).await?)
    }

    /// All posts, or one author's, newest first.
    pub async fn list(&self, author_id: Option<Uuid>) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.list(author_id).await?)
    }
}
