//! Post CRUD and script handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use newsdesk_core::domain::{NewPost, PostUpdate, generate_script};
use newsdesk_shared::ApiResponse;
use newsdesk_shared::dto::{CreatePostRequest, PostResponse, ScriptResponse, UpdatePostRequest};

use crate::handlers::landing::invalidate_landing_cache;
use crate::handlers::post_response;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .create(NewPost {
            title: req.title,
            content: req.content,
            excerpt: req.excerpt,
            author: req.author,
            author_id: req.author_id,
            tags: req.tags,
            image_url: req.image_url,
            image_hint: req.image_hint,
            is_featured: req.is_featured,
        })
        .await?;

    invalidate_landing_cache(&state).await;

    Ok(HttpResponse::Created().json(ApiResponse::ok(post_response(post))))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub author_id: Option<Uuid>,
}

/// GET /api/posts?author_id=...
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.list(query.author_id).await?;
    let responses: Vec<PostResponse> = posts.into_iter().map(post_response).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(responses)))
}

/// GET /api/posts/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post with id {} not found", id)))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(post))))
}

/// GET /api/posts/slug/{slug}
pub async fn get_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let post = state
        .posts
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post with slug {:?} not found", slug)))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(post))))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .update(
            path.into_inner(),
            PostUpdate {
                title: req.title,
                content: req.content,
                excerpt: req.excerpt,
                tags: req.tags,
                image_url: req.image_url,
                image_hint: req.image_hint,
                is_featured: req.is_featured,
            },
        )
        .await?;

    invalidate_landing_cache(&state).await;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(post))))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let removed = state.posts.delete(id).await?;
    if !removed {
        return Err(AppError::NotFound(format!("post with id {} not found", id)));
    }

    invalidate_landing_cache(&state).await;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/posts/{id}/script
///
/// Renders the stored post as a video script.
pub async fn script(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post with id {} not found", id)))?;

    let script = generate_script(&post.title, &post.content);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(ScriptResponse {
        post_id: post.id,
        title: post.title,
        script,
    })))
}
