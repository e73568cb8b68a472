//! PostgreSQL post repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbConn, DbErr, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use newsdesk_core::domain::Post;
use newsdesk_core::error::RepoError;
use newsdesk_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// SeaORM-backed post repository.
///
/// Featured writes run inside one transaction: clear sibling flags, then
/// write the row. The unique index on `slug` is the backstop for the
/// slug-probing race; violations surface as [`RepoError::Constraint`].
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    async fn unfeature_siblings<C: ConnectionTrait>(
        conn: &C,
        keep: Uuid,
    ) -> Result<(), RepoError> {
        PostEntity::update_many()
            .col_expr(post::Column::IsFeatured, Expr::value(false))
            .col_expr(
                post::Column::FeaturedAt,
                Expr::value(Option::<chrono::DateTime<chrono::FixedOffset>>::None),
            )
            .filter(post::Column::Id.ne(keep))
            .filter(post::Column::IsFeatured.eq(true))
            .exec(conn)
            .await
            .map_err(query_err)?;
        Ok(())
    }
}

fn query_err(err: DbErr) -> RepoError {
    RepoError::Query(err.to_string())
}

fn write_err(err: DbErr) -> RepoError {
    let text = err.to_string();
    if text.contains("duplicate") || text.contains("unique") {
        RepoError::Constraint(text)
    } else {
        RepoError::Query(text)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        if post.is_featured {
            Self::unfeature_siblings(&txn, post.id).await?;
        }

        let model = post::ActiveModel::from(post)
            .insert(&txn)
            .await
            .map_err(write_err)?;

        txn.commit().await.map_err(query_err)?;
        Ok(model.into())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        if post.is_featured {
            Self::unfeature_siblings(&txn, post.id).await?;
        }

        let model = post::ActiveModel::from(post)
            .update(&txn)
            .await
            .map_err(|err| match err {
                DbErr::RecordNotUpdated => RepoError::NotFound,
                other => write_err(other),
            })?;

        txn.commit().await.map_err(query_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.map(Into::into))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.map(Into::into))
    }

    async fn list(&self, author_id: Option<Uuid>) -> Result<Vec<Post>, RepoError> {
        let mut query = PostEntity::find();
        if let Some(author) = author_id {
            query = query.filter(post::Column::AuthorId.eq(author));
        }
        let result = query
            .order_by_desc(post::Column::Date)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_featured_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::IsFeatured.eq(true))
            .filter(post::Column::FeaturedAt.gt(cutoff))
            .order_by_desc(post::Column::FeaturedAt)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.map(Into::into))
    }

    async fn unfeature_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, RepoError> {
        let result = PostEntity::update_many()
            .col_expr(post::Column::IsFeatured, Expr::value(false))
            .col_expr(
                post::Column::FeaturedAt,
                Expr::value(Option::<chrono::DateTime<chrono::FixedOffset>>::None),
            )
            .filter(post::Column::IsFeatured.eq(true))
            .filter(post::Column::FeaturedAt.lte(cutoff))
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected > 0 {
            tracing::info!(cleared = result.rows_affected, "Unfeatured stale posts");
        }
        Ok(result.rows_affected)
    }
}
