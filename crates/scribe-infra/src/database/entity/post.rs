//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use scribe_core::domain::{Post, TagSet};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub category: String,
    pub tags: Vec<String>,
    pub subcategory: Vec<String>,
    pub is_published: bool,
    pub published_at: Option<DateTimeWithTimeZone>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Author,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id.into(),
            author_id: model.author_id.into(),
            title: model.title,
            body: model.body,
            category: model.category,
            tags: TagSet::from_tokens(model.tags),
            subcategory: TagSet::from_tokens(model.subcategory),
            is_published: model.is_published,
            published_at: model.published_at.map(Into::into),
            is_deleted: model.is_deleted,
            deleted_at: model.deleted_at.map(Into::into),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: Set(post.id.as_uuid()),
            author_id: Set(post.author_id.as_uuid()),
            title: Set(post.title),
            body: Set(post.body),
            category: Set(post.category),
            tags: Set(post.tags.into_vec()),
            subcategory: Set(post.subcategory.into_vec()),
            is_published: Set(post.is_published),
            published_at: Set(post.published_at.map(Into::into)),
            is_deleted: Set(post.is_deleted),
            deleted_at: Set(post.deleted_at.map(Into::into)),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
