//! Drafting handlers - the text-generation collaborator surface.

use actix_web::{HttpResponse, web};

use newsdesk_shared::ApiResponse;
use newsdesk_shared::dto::{
    GenerateDraftRequest, GenerateDraftResponse, SummarizeArticleRequest,
    SummarizeArticleResponse,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/generate/summary
pub async fn summarize(
    state: web::Data<AppState>,
    body: web::Json<SummarizeArticleRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.article_content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "article content must not be empty".to_string(),
        ));
    }

    let summary = state.textgen.summarize_article(&req.article_content).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(SummarizeArticleResponse {
        summary: summary.summary,
        suitability_score: summary.suitability_score,
    })))
}

/// POST /api/generate/draft
pub async fn draft(
    state: web::Data<AppState>,
    body: web::Json<GenerateDraftRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.prompt.trim().is_empty() {
        return Err(AppError::BadRequest("prompt must not be empty".to_string()));
    }

    let draft = state.textgen.generate_draft(&req.prompt).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(GenerateDraftResponse {
        title: draft.title,
        content: draft.content,
    })))
}
