//! Service-level tests: PostService + FeaturedWindow over the in-memory
//! repository, with a manual clock driving the featured window.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

use newsdesk_core::domain::{NewPost, PostUpdate};
use newsdesk_core::error::DomainError;
use newsdesk_core::ports::{Clock, ManualClock, PostRepository};
use newsdesk_core::service::{FeaturedWindow, PostService};
use newsdesk_infra::InMemoryPostRepository;

fn new_post(title: &str) -> NewPost {
    NewPost {
        title: title.to_string(),
        content: "<p>Some content long enough to be a real post body.</p>".to_string(),
        excerpt: None,
        author: "tech_writer".to_string(),
        author_id: Uuid::new_v4(),
        tags: vec!["tech".to_string()],
        image_url: None,
        image_hint: None,
        is_featured: false,
    }
}

fn featured_post(title: &str) -> NewPost {
    NewPost {
        is_featured: true,
        ..new_post(title)
    }
}

struct Harness {
    repo: Arc<InMemoryPostRepository>,
    clock: Arc<ManualClock>,
    service: PostService,
    landing: FeaturedWindow,
}

fn harness() -> Harness {
    let repo = Arc::new(InMemoryPostRepository::new());
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    ));
    let service = PostService::new(repo.clone(), clock.clone());
    let landing = FeaturedWindow::new(repo.clone());
    Harness {
        repo,
        clock,
        service,
        landing,
    }
}

#[tokio::test]
async fn create_fills_derived_fields() {
    let h = harness();
    let post = h.service.create(new_post("Hello World")).await.unwrap();

    assert_eq!(post.slug, "hello-world");
    assert_eq!(
        post.excerpt,
        "Some content long enough to be a real post body...."
    );
    assert_eq!(post.image_url, "https://placehold.co/600x400.png");
    assert_eq!(post.image_hint, "placeholder image");
    assert_eq!(post.date, h.clock.now());
    assert!(!post.is_featured);
    assert!(post.featured_at.is_none());
}

#[tokio::test]
async fn create_rejects_empty_fields() {
    let h = harness();

    let missing_title = new_post("   ");
    assert!(matches!(
        h.service.create(missing_title).await,
        Err(DomainError::Validation(_))
    ));

    let mut missing_content = new_post("Valid");
    missing_content.content = String::new();
    assert!(matches!(
        h.service.create(missing_content).await,
        Err(DomainError::Validation(_))
    ));

    let mut missing_author = new_post("Valid");
    missing_author.author_id = Uuid::nil();
    assert!(matches!(
        h.service.create(missing_author).await,
        Err(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn same_base_slug_gets_numbered_suffixes() {
    let h = harness();
    let first = h.service.create(new_post("Hello World")).await.unwrap();
    let second = h.service.create(new_post("Hello, World!!")).await.unwrap();
    let third = h.service.create(new_post("HELLO world")).await.unwrap();

    assert_eq!(first.slug, "hello-world");
    assert_eq!(second.slug, "hello-world-1");
    assert_eq!(third.slug, "hello-world-2");
}

#[tokio::test]
async fn punctuation_only_title_uses_fallback_slug() {
    let h = harness();
    let first = h.service.create(new_post("!!!")).await.unwrap();
    let second = h.service.create(new_post("???")).await.unwrap();

    assert_eq!(first.slug, "post");
    assert_eq!(second.slug, "post-1");
}

#[tokio::test]
async fn rename_keeps_own_slug_without_collision() {
    let h = harness();
    let post = h.service.create(new_post("Hello World")).await.unwrap();

    // Re-saving the same title must not collide with itself.
    let updated = h
        .service
        .update(
            post.id,
            PostUpdate {
                title: Some("Hello World".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.slug, "hello-world");

    // A real rename re-derives the slug.
    let renamed = h
        .service
        .update(
            post.id,
            PostUpdate {
                title: Some("Fresh Title".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.slug, "fresh-title");
}

#[tokio::test]
async fn at_most_one_featured_after_any_sequence() {
    let h = harness();
    let a = h.service.create(featured_post("Post A")).await.unwrap();
    let b = h.service.create(featured_post("Post B")).await.unwrap();
    let c = h.service.create(new_post("Post C")).await.unwrap();

    h.service
        .update(
            c.id,
            PostUpdate {
                is_featured: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    h.service
        .update(
            a.id,
            PostUpdate {
                is_featured: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let all = h.service.list(None).await.unwrap();
    let featured: Vec<_> = all.iter().filter(|p| p.is_featured).collect();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].id, a.id);
    assert!(all.iter().any(|p| p.id == b.id && !p.is_featured));
}

#[tokio::test]
async fn featuring_b_clears_a_completely() {
    let h = harness();
    let a = h.service.create(featured_post("Post A")).await.unwrap();
    h.clock.advance(Duration::hours(1));
    let feature_time = h.clock.now();
    let b = h.service.create(featured_post("Post B")).await.unwrap();

    let a = h.service.get_by_id(a.id).await.unwrap().unwrap();
    let b = h.service.get_by_id(b.id).await.unwrap().unwrap();

    assert!(!a.is_featured);
    assert!(a.featured_at.is_none());
    assert!(b.is_featured);
    assert_eq!(b.featured_at, Some(feature_time));
}

#[tokio::test]
async fn refeaturing_preserves_the_timer() {
    let h = harness();
    let post = h.service.create(featured_post("Post A")).await.unwrap();
    let stamped = post.featured_at;

    h.clock.advance(Duration::hours(3));

    // Re-save with the flag still on and nothing else touched.
    let resaved = h
        .service
        .update(
            post.id,
            PostUpdate {
                is_featured: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(resaved.featured_at, stamped);

    // Editing an unrelated field must not touch the timer either.
    let retagged = h
        .service
        .update(
            post.id,
            PostUpdate {
                tags: Some(vec!["update".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(retagged.featured_at, stamped);
    assert!(retagged.is_featured);
}

#[tokio::test]
async fn unfeaturing_clears_the_timer() {
    let h = harness();
    let post = h.service.create(featured_post("Post A")).await.unwrap();

    let cleared = h
        .service
        .update(
            post.id,
            PostUpdate {
                is_featured: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!cleared.is_featured);
    assert!(cleared.featured_at.is_none());

    // Featuring again stamps a fresh timer.
    h.clock.advance(Duration::hours(2));
    let refeatured = h
        .service
        .update(
            post.id,
            PostUpdate {
                is_featured: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(refeatured.featured_at, Some(h.clock.now()));
}

#[tokio::test]
async fn landing_window_hides_but_does_not_clear() {
    let h = harness();
    let post = h.service.create(featured_post("Post A")).await.unwrap();

    // Just inside the window.
    let inside = h.clock.now() + Duration::hours(23);
    let shown = h.landing.current(inside).await.unwrap();
    assert_eq!(shown.map(|p| p.id), Some(post.id));

    // Exactly at the boundary: featured_at == now - 24h is no longer shown.
    let boundary = h.clock.now() + Duration::hours(24);
    assert!(h.landing.current(boundary).await.unwrap().is_none());

    // Past the window the flag is still set in storage.
    let after = h.clock.now() + Duration::hours(25);
    assert!(h.landing.current(after).await.unwrap().is_none());
    let stored = h.service.get_by_id(post.id).await.unwrap().unwrap();
    assert!(stored.is_featured);
    assert!(stored.featured_at.is_some());
}

#[tokio::test]
async fn landing_returns_none_without_featured_posts() {
    let h = harness();
    h.service.create(new_post("Plain")).await.unwrap();
    assert!(h.landing.current(h.clock.now()).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_then_get_returns_none() {
    let h = harness();
    let post = h.service.create(new_post("Doomed")).await.unwrap();

    assert!(h.service.delete(post.id).await.unwrap());
    assert!(h.service.get_by_id(post.id).await.unwrap().is_none());

    // Deleting again reports nothing removed.
    assert!(!h.service.delete(post.id).await.unwrap());
}

#[tokio::test]
async fn update_unknown_id_is_not_found_and_changes_nothing() {
    let h = harness();
    let post = h.service.create(new_post("Survivor")).await.unwrap();

    let result = h
        .service
        .update(
            Uuid::new_v4(),
            PostUpdate {
                title: Some("New".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));

    let all = h.service.list(None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, post.title);
    assert_eq!(all[0].slug, post.slug);
}

#[tokio::test]
async fn excerpt_recomputes_only_without_explicit_value() {
    let h = harness();
    let post = h.service.create(new_post("Post")).await.unwrap();

    let rewritten = h
        .service
        .update(
            post.id,
            PostUpdate {
                content: Some("<p>Fresh body text for the post.</p>".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(rewritten.excerpt, "Fresh body text for the post....");

    let custom = h
        .service
        .update(
            post.id,
            PostUpdate {
                content: Some("<p>Another body.</p>".to_string()),
                excerpt: Some("Hand-written teaser".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(custom.excerpt, "Hand-written teaser");
}

#[tokio::test]
async fn list_filters_by_author_and_sorts_newest_first() {
    let h = harness();
    let author = Uuid::new_v4();

    let mut first = new_post("First");
    first.author_id = author;
    let first = h.service.create(first).await.unwrap();

    h.clock.advance(Duration::hours(1));
    let other = h.service.create(new_post("Other Author")).await.unwrap();

    h.clock.advance(Duration::hours(1));
    let mut second = new_post("Second");
    second.author_id = author;
    let second = h.service.create(second).await.unwrap();

    let all = h.service.list(None).await.unwrap();
    assert_eq!(
        all.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![second.id, other.id, first.id]
    );

    let mine = h.service.list(Some(author)).await.unwrap();
    assert_eq!(
        mine.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );
}

#[tokio::test]
async fn equal_dates_keep_insertion_order() {
    let h = harness();
    let a = h.service.create(new_post("Tie A")).await.unwrap();
    let b = h.service.create(new_post("Tie B")).await.unwrap();
    let c = h.service.create(new_post("Tie C")).await.unwrap();

    let all = h.service.list(None).await.unwrap();
    assert_eq!(
        all.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![a.id, b.id, c.id]
    );
}

#[tokio::test]
async fn sweep_clears_only_stale_flags() {
    let h = harness();
    let stale = h.service.create(featured_post("Stale")).await.unwrap();

    h.clock.advance(Duration::hours(25));
    let cutoff = h.clock.now() - Duration::hours(24);
    let cleared = h.repo.unfeature_older_than(cutoff).await.unwrap();
    assert_eq!(cleared, 1);

    let stored = h.service.get_by_id(stale.id).await.unwrap().unwrap();
    assert!(!stored.is_featured);
    assert!(stored.featured_at.is_none());

    // A freshly featured post survives the same sweep.
    let fresh = h.service.create(featured_post("Fresh")).await.unwrap();
    let cleared = h.repo.unfeature_older_than(cutoff).await.unwrap();
    assert_eq!(cleared, 0);
    let stored = h.service.get_by_id(fresh.id).await.unwrap().unwrap();
    assert!(stored.is_featured);
}
