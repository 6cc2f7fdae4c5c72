//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, SqlErr, TransactionTrait,
};

use scribe_core::AuthorId;
use scribe_core::domain::{Post, PostFilter, PostPatch};
use scribe_core::error::RepoError;
use scribe_core::ports::{AuthorDirectory, PostRepository};

use super::condition::condition;
use super::entity::author::Entity as AuthorEntity;
use super::entity::post::{self, Entity as PostEntity};

fn repo_error(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg))
        | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => return RepoError::Constraint(msg),
        _ => {}
    }
    match &err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => RepoError::Connection(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Single `UPDATE ... WHERE` for patches that do not depend on row state.
    /// Rows already soft-deleted are left untouched.
    async fn update_in_place(&self, filter: &PostFilter, patch: &PostPatch) -> Result<u64, RepoError> {
        let mut cond = condition(filter);
        let mut update = PostEntity::update_many();

        if let Some(title) = &patch.title {
            update = update.col_expr(post::Column::Title, Expr::value(title.clone()));
        }
        if let Some(body) = &patch.body {
            update = update.col_expr(post::Column::Body, Expr::value(body.clone()));
        }
        if let Some(category) = &patch.category {
            update = update.col_expr(post::Column::Category, Expr::value(category.clone()));
        }
        if patch.soft_delete {
            cond = cond.add(post::Column::IsDeleted.eq(false));
            update = update
                .col_expr(post::Column::IsDeleted, Expr::value(true))
                .col_expr(
                    post::Column::DeletedAt,
                    Expr::value(DateTimeWithTimeZone::from(patch.at)),
                );
        }

        let result = update
            .col_expr(
                post::Column::UpdatedAt,
                Expr::value(DateTimeWithTimeZone::from(patch.at)),
            )
            .filter(cond)
            .exec(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.rows_affected)
    }

    /// Lock every matching row, apply the patch in process, write each back.
    async fn update_locked(&self, filter: &PostFilter, patch: &PostPatch) -> Result<u64, RepoError> {
        let txn = self.db.begin().await.map_err(repo_error)?;

        let rows = PostEntity::find()
            .filter(condition(filter))
            .lock_exclusive()
            .all(&txn)
            .await
            .map_err(repo_error)?;

        let mut count = 0;
        for row in rows {
            let mut post = Post::from(row);
            patch.apply(&mut post);
            post::ActiveModel::from(post)
                .update(&txn)
                .await
                .map_err(repo_error)?;
            count += 1;
        }

        txn.commit().await.map_err(repo_error)?;
        Ok(count)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        tracing::debug!(post_id = %post.id, author_id = %post.author_id, "Inserting post");

        let model = post::ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(model.into())
    }

    async fn find(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .filter(condition(filter))
            .order_by_asc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(count = rows.len(), "Found posts");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_one(&self, filter: &PostFilter) -> Result<Option<Post>, RepoError> {
        let row = PostEntity::find()
            .filter(condition(filter))
            .order_by_asc(post::Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_one_and_update(
        &self,
        filter: &PostFilter,
        patch: &PostPatch,
    ) -> Result<Option<Post>, RepoError> {
        let txn = self.db.begin().await.map_err(repo_error)?;

        let Some(row) = PostEntity::find()
            .filter(condition(filter))
            .order_by_asc(post::Column::CreatedAt)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(repo_error)?
        else {
            return Ok(None);
        };

        let mut post = Post::from(row);
        patch.apply(&mut post);
        tracing::debug!(post_id = %post.id, "Updating post");

        let updated = post::ActiveModel::from(post)
            .update(&txn)
            .await
            .map_err(repo_error)?;
        txn.commit().await.map_err(repo_error)?;

        Ok(Some(updated.into()))
    }

    async fn update_many(&self, filter: &PostFilter, patch: &PostPatch) -> Result<u64, RepoError> {
        let count = if patch.is_row_independent() {
            self.update_in_place(filter, patch).await?
        } else {
            self.update_locked(filter, patch).await?
        };

        tracing::debug!(count, soft_delete = patch.soft_delete, "Updated posts");
        Ok(count)
    }
}

/// PostgreSQL author directory.
pub struct PostgresAuthorDirectory {
    db: DbConn,
}

impl PostgresAuthorDirectory {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorDirectory for PostgresAuthorDirectory {
    async fn exists(&self, author_id: &AuthorId) -> Result<bool, RepoError> {
        tracing::debug!(author_id = %author_id, "Looking up author");

        let author = AuthorEntity::find_by_id(author_id.as_uuid())
            .one(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(author.is_some())
    }
}
