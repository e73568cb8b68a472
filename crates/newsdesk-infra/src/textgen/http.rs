//! HTTP client for the text-generation service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use newsdesk_core::ports::{ArticleSummary, GeneratedDraft, TextGenError, TextGenerator};

/// Text-generation service configuration.
#[derive(Debug, Clone)]
pub struct TextGenConfig {
    /// Base URL of the generation service, e.g. `http://textgen:9000`.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl TextGenConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }
}

#[derive(Serialize)]
struct SummarizeRequest<'a> {
    article_content: &'a str,
}

#[derive(Deserialize)]
struct SummarizeReply {
    summary: String,
    suitability_score: f32,
}

#[derive(Serialize)]
struct DraftRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct DraftReply {
    title: String,
    content: String,
}

/// JSON client against a configured generation endpoint.
pub struct HttpTextGenerator {
    client: reqwest::Client,
    config: TextGenConfig,
}

impl HttpTextGenerator {
    pub fn new(config: TextGenConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    async fn post_json<Req: Serialize, Reply: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &Req,
    ) -> Result<Reply, TextGenError> {
        let url = format!("{}{path}", self.config.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| TextGenError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TextGenError::Unavailable(format!(
                "{url} returned {}",
                response.status()
            )));
        }

        response
            .json::<Reply>()
            .await
            .map_err(|e| TextGenError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    async fn summarize_article(&self, article: &str) -> Result<ArticleSummary, TextGenError> {
        tracing::debug!(chars = article.len(), "Summarizing article");
        let reply: SummarizeReply = self
            .post_json(
                "/summarize",
                &SummarizeRequest {
                    article_content: article,
                },
            )
            .await?;
        Ok(ArticleSummary {
            summary: reply.summary,
            suitability_score: reply.suitability_score.clamp(0.0, 1.0),
        })
    }

    async fn generate_draft(&self, prompt: &str) -> Result<GeneratedDraft, TextGenError> {
        tracing::debug!(chars = prompt.len(), "Generating draft");
        let reply: DraftReply = self
            .post_json("/generate", &DraftRequest { prompt })
            .await?;
        Ok(GeneratedDraft {
            title: reply.title,
            content: reply.content,
        })
    }
}
