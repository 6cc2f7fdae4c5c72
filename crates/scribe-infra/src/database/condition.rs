//! Translation of store-neutral post filters into SQL conditions.

use sea_orm::sea_query::extension::postgres::PgBinOper;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{ColumnTrait, Condition};

use scribe_core::domain::{Criterion, PostFilter, TagSet};

use super::entity::post::Column;

/// `column @> ARRAY[...]`: the stored array holds every listed value.
fn contains_all(column: Column, values: &TagSet) -> SimpleExpr {
    Expr::col(column).binary(PgBinOper::Contains, Expr::val(values.as_slice().to_vec()))
}

fn criterion(criterion: &Criterion) -> SimpleExpr {
    match criterion {
        Criterion::Category(category) => Column::Category.eq(category.as_str()),
        Criterion::Tags(tags) => contains_all(Column::Tags, tags),
        Criterion::Subcategory(subcategory) => contains_all(Column::Subcategory, subcategory),
        Criterion::Published(published) => Column::IsPublished.eq(*published),
    }
}

pub(crate) fn condition(filter: &PostFilter) -> Condition {
    let mut cond = Condition::all();

    if let Some(id) = filter.id {
        cond = cond.add(Column::Id.eq(id.as_uuid()));
    }
    if let Some(author_id) = filter.author_id {
        cond = cond.add(Column::AuthorId.eq(author_id.as_uuid()));
    }
    if let Some(category) = &filter.category {
        cond = cond.add(Column::Category.eq(category.as_str()));
    }
    if let Some(published) = filter.is_published {
        cond = cond.add(Column::IsPublished.eq(published));
    }
    if let Some(deleted) = filter.is_deleted {
        cond = cond.add(Column::IsDeleted.eq(deleted));
    }
    if !filter.tags.is_empty() {
        cond = cond.add(contains_all(Column::Tags, &filter.tags));
    }
    if !filter.subcategory.is_empty() {
        cond = cond.add(contains_all(Column::Subcategory, &filter.subcategory));
    }
    if !filter.any_of.is_empty() {
        let any = filter
            .any_of
            .iter()
            .fold(Condition::any(), |any, c| any.add(criterion(c)));
        cond = cond.add(any);
    }

    cond
}
