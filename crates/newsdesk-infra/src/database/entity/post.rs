//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text")]
    pub excerpt: String,
    pub author: String,
    pub author_id: Uuid,
    /// Serialized JSON array; the list shape is an adapter detail.
    #[sea_orm(column_type = "Text")]
    pub tags: String,
    pub image_url: String,
    pub image_hint: String,
    pub date: DateTimeWithTimeZone,
    pub is_featured: bool,
    pub featured_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for newsdesk_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            slug: model.slug,
            title: model.title,
            content: model.content,
            excerpt: model.excerpt,
            author: model.author,
            author_id: model.author_id,
            tags: serde_json::from_str(&model.tags).unwrap_or_default(),
            image_url: model.image_url,
            image_hint: model.image_hint,
            date: model.date.into(),
            is_featured: model.is_featured,
            featured_at: model.featured_at.map(Into::into),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<newsdesk_core::domain::Post> for ActiveModel {
    fn from(post: newsdesk_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            slug: Set(post.slug),
            title: Set(post.title),
            content: Set(post.content),
            excerpt: Set(post.excerpt),
            author: Set(post.author),
            author_id: Set(post.author_id),
            tags: Set(serde_json::to_string(&post.tags).unwrap_or_else(|_| "[]".to_string())),
            image_url: Set(post.image_url),
            image_hint: Set(post.image_hint),
            date: Set(post.date.into()),
            is_featured: Set(post.is_featured),
            featured_at: Set(post.featured_at.map(Into::into)),
        }
    }
}
