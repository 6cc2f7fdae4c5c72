use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_authors::Authors;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Label sets are `text[]`, empty by default.
fn label_set(column: Posts) -> ColumnDef {
    ColumnDef::new(column)
        .array(ColumnType::Text)
        .not_null()
        .default(Expr::cust("'{}'"))
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Posts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Posts::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(Posts::Title).string().not_null())
                    .col(ColumnDef::new(Posts::Body).text().not_null())
                    .col(ColumnDef::new(Posts::Category).string().not_null())
                    .col(label_set(Posts::Tags))
                    .col(label_set(Posts::Subcategory))
                    .col(
                        ColumnDef::new(Posts::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Posts::PublishedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Posts::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Posts::DeletedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Posts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Posts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_author_id")
                            .from(Posts::Table, Posts::AuthorId)
                            .to(Authors::Table, Authors::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_posts_author_id_is_deleted")
                    .table(Posts::Table)
                    .col(Posts::AuthorId)
                    .col(Posts::IsDeleted)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum Posts {
    Table,
    Id,
    AuthorId,
    Title,
    Body,
    Category,
    Tags,
    Subcategory,
    IsPublished,
    PublishedAt,
    IsDeleted,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}
