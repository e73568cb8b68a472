//! Landing page handlers.

use actix_web::{HttpResponse, web};

use newsdesk_shared::ApiResponse;
use newsdesk_shared::dto::PostResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

const LANDING_CACHE_KEY: &str = "landing:featured";

/// GET /api/landing/featured
///
/// The single post currently inside its featured window, if any. The
/// response (including the "nothing featured" case) is cached briefly;
/// every post write invalidates the cache.
pub async fn landing_featured(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    if let Some(cached) = state.cache.get(LANDING_CACHE_KEY).await {
        if let Ok(post) = serde_json::from_str::<Option<PostResponse>>(&cached) {
            return Ok(HttpResponse::Ok().json(ApiResponse::ok(post)));
        }
        // Unreadable cache entries are treated as misses.
    }

    let now = state.clock.now();
    let post = state
        .landing
        .current(now)
        .await?
        .map(crate::handlers::post_response);

    match serde_json::to_string(&post) {
        Ok(body) => {
            if let Err(e) = state
                .cache
                .put(LANDING_CACHE_KEY, &body, state.landing_cache_ttl)
                .await
            {
                tracing::warn!("Failed to cache landing featured post: {}", e);
            }
        }
        Err(e) => tracing::warn!("Failed to serialize landing featured post: {}", e),
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// Drop the cached landing response after any post write.
pub async fn invalidate_landing_cache(state: &AppState) {
    if let Err(e) = state.cache.invalidate(LANDING_CACHE_KEY).await {
        tracing::warn!("Failed to invalidate landing cache: {}", e);
    }
}
