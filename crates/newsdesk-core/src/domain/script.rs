//! Blog-to-video script transformation.

use std::sync::LazyLock;

use regex::Regex;

use super::markup::strip_tags;

/// Paragraphs shorter than this count as transition/heading beats when they
/// sit strictly between other paragraphs.
const HEADING_MAX_CHARS: usize = 30;

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("break pattern"));

/// Turn a post's title and content into a scripted narration layout.
///
/// Pure and deterministic: markup is stripped, the text is split into
/// paragraphs on blank-line boundaries, and each paragraph becomes either a
/// transition beat (short, interior) or a detail beat with a stage
/// direction. Beat numbers follow the paragraph's 1-based position in the
/// split, not a per-category counter.
pub fn generate_script(title: &str, content: &str) -> String {
    let mut script = format!("Title: {title}\n\n");
    script.push_str("--- SCRIPT --- \n\n");
    script.push_str("[SCENE START]\n\n");
    script.push_str(&format!(
        "**Intro Hook:** (Grab attention related to \"{title}\")\n\n"
    ));
    script.push_str(&format!(
        "Hey everyone, and welcome back! Today, we're diving deep into \"{title}\".\n\n"
    ));

    let cleaned = strip_tags(content);
    let paragraphs: Vec<&str> = PARAGRAPH_BREAK
        .split(&cleaned)
        .filter(|p| !p.trim().is_empty())
        .collect();
    let total = paragraphs.len();

    for (index, paragraph) in paragraphs.iter().enumerate() {
        let n = index + 1;
        let interior = index > 0 && index < total - 1;
        if paragraph.chars().count() < HEADING_MAX_CHARS && total > 1 && interior {
            script.push_str(&format!(
                "**Key Point {n} (Transition/Heading):** {paragraph}\n\n"
            ));
        } else {
            script.push_str(&format!(
                "**Detail/Explanation {n}:**\n{paragraph}\n\n\
                 (Visual: Show relevant B-roll or on-screen text related to this point)\n\n"
            ));
        }
    }

    script.push_str(
        "**Summary/Call to Action:**\nSo, to wrap it up, we've covered [mention key points]. \
         What are your thoughts? Let me know in the comments below!\n\n",
    );
    script.push_str(
        "Don't forget to like this video, subscribe for more content, and hit that \
         notification bell so you don't miss out.\n\n",
    );
    script.push_str("**Outro:**\nThanks for watching, and I'll see you in the next video!\n\n");
    script.push_str("[SCENE END]\n");

    script
}
