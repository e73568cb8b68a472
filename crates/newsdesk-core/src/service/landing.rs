use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::domain::Post;
use crate::error::DomainError;
use crate::ports::PostRepository;

/// How long a featured post stays on the landing page, in hours.
pub const FEATURED_WINDOW_HOURS: i64 = 24;

/// The display window as a duration.
pub fn featured_window() -> Duration {
    Duration::hours(FEATURED_WINDOW_HOURS)
}

/// Featured-window selector.
///
/// `is_featured = true` and "currently shown as featured" are different
/// predicates: the flag persists indefinitely, but the post silently drops
/// off the landing page once the window elapses. Nothing here mutates
/// storage; clearing stale flags is a separate, optional sweep.
pub struct FeaturedWindow {
    repo: Arc<dyn PostRepository>,
}

impl FeaturedWindow {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// The post currently eligible for landing-page display, if any.
    ///
    /// Eligible means `is_featured = true` with `featured_at` inside the
    /// window ending at `now`; among multiple matches (defensive - the write
    /// path keeps it to one) the latest `featured_at` wins.
    pub async fn current(&self, now: DateTime<Utc>) -> Result<Option<Post>, DomainError> {
        let cutoff = now - featured_window();
        Ok(self.repo.find_featured_since(cutoff).await?)
    }
}
