//! Slug normalization and collision-free assignment.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::DomainError;
use crate::ports::PostRepository;
use uuid::Uuid;

/// Base used when a title normalizes to nothing (all punctuation, etc.).
pub const FALLBACK_SLUG: &str = "post";

/// Upper bound on collision probes before giving up on a title.
pub const MAX_SLUG_PROBES: u32 = 1000;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("ws pattern"));
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]+").expect("charset pattern"));
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").expect("run pattern"));

/// Normalize a title into a URL-safe base slug.
///
/// Lowercase, whitespace runs become single hyphens, everything outside
/// `[a-z0-9-]` is stripped, hyphen runs collapse, and leading/trailing
/// hyphens are trimmed. A title that normalizes to nothing falls back to
/// [`FALLBACK_SLUG`] so the result is never empty.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lowered, "-");
    let cleaned = DISALLOWED.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN.replace_all(&cleaned, "-");
    let trimmed = collapsed.trim_matches('-');

    if trimmed.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Assign a unique slug for `title`, probing the store for collisions.
///
/// `exclude_id` lets an update re-derive its own unchanged slug without
/// colliding with itself. On collision the base gets `-1`, `-2`, ... appended
/// until a free candidate is found; the probe loop is bounded by
/// [`MAX_SLUG_PROBES`]. The probe and the caller's write are not atomic - the
/// store's unique index on `slug` is the backstop, and callers retry
/// assignment when a write reports a uniqueness violation.
pub async fn assign_slug(
    repo: &dyn PostRepository,
    title: &str,
    exclude_id: Option<Uuid>,
) -> Result<String, DomainError> {
    let base = slugify(title);
    let mut candidate = base.clone();

    for counter in 1..=MAX_SLUG_PROBES {
        let collision = match repo.find_by_slug(&candidate).await? {
            Some(existing) => Some(existing.id) != exclude_id,
            None => false,
        };
        if !collision {
            return Ok(candidate);
        }
        candidate = format!("{base}-{counter}");
    }

    Err(DomainError::SlugExhausted {
        title: title.to_string(),
    })
}
