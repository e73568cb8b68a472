//! Canned text generator - deterministic stand-in used when no generation
//! service is configured, so the drafting flow keeps working in development.

use async_trait::async_trait;

use newsdesk_core::ports::{ArticleSummary, GeneratedDraft, TextGenError, TextGenerator};

const SUMMARY_CHARS: usize = 200;
const TITLE_WORDS: usize = 8;

pub struct CannedTextGenerator;

impl CannedTextGenerator {
    pub fn new() -> Self {
        tracing::warn!("TEXTGEN_URL not set - serving canned drafts");
        Self
    }
}

impl Default for CannedTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[async_trait]
impl TextGenerator for CannedTextGenerator {
    async fn summarize_article(&self, article: &str) -> Result<ArticleSummary, TextGenError> {
        let condensed: String = article.split_whitespace().collect::<Vec<_>>().join(" ");
        let summary: String = condensed.chars().take(SUMMARY_CHARS).collect();

        // Longer articles give the editor more to work with.
        let suitability_score = (condensed.chars().count() as f32 / 2000.0).clamp(0.1, 0.9);

        Ok(ArticleSummary {
            summary,
            suitability_score,
        })
    }

    async fn generate_draft(&self, prompt: &str) -> Result<GeneratedDraft, TextGenError> {
        let title: String = prompt
            .split_whitespace()
            .take(TITLE_WORDS)
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ");
        let title = if title.is_empty() {
            "Untitled Draft".to_string()
        } else {
            title
        };

        let content = format!(
            "<p>This is a draft article about: {prompt}</p>\n\n\
             <p>Replace this placeholder with generated copy once a text-generation \
             service is configured. The draft keeps the editing flow usable without \
             one.</p>",
        );

        Ok(GeneratedDraft { title, content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn draft_title_comes_from_prompt() {
        let generator = CannedTextGenerator;
        let draft = generator
            .generate_draft("the future of ai in tech")
            .await
            .unwrap();
        assert_eq!(draft.title, "The Future Of Ai In Tech");
        assert!(draft.content.contains("the future of ai in tech"));
    }

    #[tokio::test]
    async fn empty_prompt_gets_fallback_title() {
        let generator = CannedTextGenerator;
        let draft = generator.generate_draft("").await.unwrap();
        assert_eq!(draft.title, "Untitled Draft");
    }

    #[tokio::test]
    async fn summary_is_deterministic_and_bounded() {
        let generator = CannedTextGenerator;
        let article = "word ".repeat(1000);
        let a = generator.summarize_article(&article).await.unwrap();
        let b = generator.summarize_article(&article).await.unwrap();
        assert_eq!(a.summary, b.summary);
        assert!(a.summary.chars().count() <= SUMMARY_CHARS);
        assert!((0.0..=1.0).contains(&a.suitability_score));
    }
}
