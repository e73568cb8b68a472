#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;
    use newsdesk_core::domain::Post;
    use newsdesk_core::ports::PostRepository;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn sample_model(id: uuid::Uuid) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id,
            slug: "test-post".to_owned(),
            title: "Test Post".to_owned(),
            content: "<p>Content</p>".to_owned(),
            excerpt: "Content...".to_owned(),
            author: "tech_writer".to_owned(),
            author_id: uuid::Uuid::new_v4(),
            tags: r#"["tech","ai"]"#.to_owned(),
            image_url: "https://placehold.co/600x400.png".to_owned(),
            image_hint: "placeholder image".to_owned(),
            date: now.into(),
            is_featured: false,
            featured_at: None,
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(post_id)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.id, post_id);
        assert_eq!(found.title, "Test Post");
        assert_eq!(found.tags, vec!["tech".to_string(), "ai".to_string()]);
    }

    #[tokio::test]
    async fn test_find_post_by_slug() {
        let post_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(post_id)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.find_by_slug("test-post").await.unwrap();
        assert!(result.is_some());
        assert_eq!(result.unwrap().slug, "test-post");
    }

    #[tokio::test]
    async fn test_find_by_id_miss() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.find_by_id(uuid::Uuid::new_v4()).await.unwrap();
        assert!(result.is_none());
    }
}
