//! HTTP handlers and route configuration.

mod generate;
mod health;
mod landing;
mod posts;

use actix_web::web;
use newsdesk_core::domain::Post;
use newsdesk_shared::dto::PostResponse;

/// Map a domain post onto its wire shape.
pub(crate) fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        slug: post.slug,
        title: post.title,
        content: post.content,
        excerpt: post.excerpt,
        author: post.author,
        author_id: post.author_id,
        tags: post.tags,
        image_url: post.image_url,
        image_hint: post.image_hint,
        date: post.date,
        is_featured: post.is_featured,
        featured_at: post.featured_at,
    }
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route(
                "/landing/featured",
                web::get().to(landing::landing_featured),
            )
            // Drafting routes
            .service(
                web::scope("/generate")
                    .route("/summary", web::post().to(generate::summarize))
                    .route("/draft", web::post().to(generate::draft)),
            )
            // Post routes
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create))
                    .route("", web::get().to(posts::list))
                    .route("/slug/{slug}", web::get().to(posts::get_by_slug))
                    .route("/{id}", web::get().to(posts::get_by_id))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete))
                    .route("/{id}/script", web::get().to(posts::script)),
            ),
    );
}
