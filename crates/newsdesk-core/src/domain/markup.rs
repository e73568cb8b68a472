//! Markup stripping and excerpt derivation.

use std::sync::LazyLock;

use regex::Regex;

/// Excerpts keep the first 150 characters of the stripped content.
pub const EXCERPT_CHARS: usize = 150;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

/// Remove markup tags from `content`.
///
/// Any `<...>` run up to the next `>` is deleted, whatever it contains.
/// An unterminated `<` has no closing `>` to pair with and is left in place.
pub fn strip_tags(content: &str) -> String {
    TAG.replace_all(content, "").into_owned()
}

/// Derive a short preview from post content: the first [`EXCERPT_CHARS`]
/// characters of the markup-stripped text, with a `...` suffix.
pub fn derive_excerpt(content: &str) -> String {
    let stripped = strip_tags(content);
    let cut: String = stripped.chars().take(EXCERPT_CHARS).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_simple_tags() {
        assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn unterminated_tag_is_kept() {
        assert_eq!(strip_tags("a <b"), "a <b");
    }

    #[test]
    fn tag_may_span_inner_angle_bracket() {
        // "[^>]*" swallows a second "<" before the first ">" closes the run
        assert_eq!(strip_tags("x<a<b>y"), "xy");
    }

    #[test]
    fn excerpt_strips_then_truncates() {
        let content = format!("<p>{}</p>", "a".repeat(200));
        let excerpt = derive_excerpt(&content);
        assert_eq!(excerpt.chars().count(), EXCERPT_CHARS + 3);
        assert!(excerpt.ends_with("..."));
        assert!(!excerpt.contains('<'));
    }

    #[test]
    fn short_content_still_gets_suffix() {
        assert_eq!(derive_excerpt("<p>Hello</p>"), "Hello...");
    }
}
