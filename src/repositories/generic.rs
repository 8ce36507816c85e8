use std::marker::PhantomData;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    Iterable, PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter, QueryOrder, Select,
    sea_query::{Expr, Func, LikeExpr},
};

use crate::{
    error::{AppError, AppResult},
    pagination::{Page, PageWindow, Paginate, PaginationQuery},
};

/// What the generic repository needs to know about an entity beyond SeaORM's own traits.
pub trait RepositoryEntity: EntityTrait {
    /// Singular, human-readable name used in error messages.
    const LABEL: &'static str;

    /// Text columns matched by the `filter` query parameter.
    fn search_columns() -> Vec<Self::Column>;

    /// Primary listing order; the primary key breaks ties.
    fn order_column() -> Self::Column;

    /// Column matched against `PaginationQuery::id`, if listings can be scoped to a parent.
    fn parent_column() -> Option<Self::Column> {
        None
    }
}

/// Case-insensitive `LIKE %term%` over every search column of `E`.
/// `None` when the entity has no searchable text.
pub fn search_condition<E: RepositoryEntity>(term: &str) -> Option<Condition> {
    let columns = E::search_columns();
    if columns.is_empty() {
        return None;
    }

    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
    Some(columns.into_iter().fold(Condition::any(), |condition, column| {
        condition.add(
            Expr::expr(Func::lower(Expr::col((E::default(), column))))
                .like(LikeExpr::new(pattern.clone()).escape('\\')),
        )
    }))
}

/// `%` and `_` in user input match literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// CRUD over one entity type with integer keys.
pub struct GenericRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E> Clone for GenericRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> GenericRepository<E>
where
    E: RepositoryEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn add(&self, active: E::ActiveModel) -> AppResult<E::Model> {
        active
            .insert(&self.db)
            .await
            .map_err(|err| AppError::from_write(err, E::LABEL))
    }

    pub async fn get(&self, id: i32) -> AppResult<E::Model> {
        E::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found(E::LABEL))
    }

    pub async fn get_all(&self) -> AppResult<Vec<E::Model>> {
        Ok(Self::ordered(E::find()).all(&self.db).await?)
    }

    pub async fn get_paginated(&self, query: &PaginationQuery) -> AppResult<Page<E::Model>> {
        self.paginate(self.filtered(query), query.window()).await
    }

    pub async fn count(&self, query: &PaginationQuery) -> AppResult<u64> {
        Ok(self.filtered(query).count(&self.db).await?)
    }

    pub async fn update(&self, active: E::ActiveModel) -> AppResult<E::Model> {
        active
            .update(&self.db)
            .await
            .map_err(|err| AppError::from_write(err, E::LABEL))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|err| AppError::from_delete(err, E::LABEL))?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(E::LABEL));
        }
        Ok(())
    }

    /// Unpaginated list for selection dropdowns.
    pub async fn combo(&self, condition: Condition) -> AppResult<Vec<E::Model>> {
        Ok(Self::ordered(E::find().filter(condition))
            .all(&self.db)
            .await?)
    }

    /// Parent scope and text filter from `query`, in listing order.
    pub fn filtered(&self, query: &PaginationQuery) -> Select<E> {
        let mut condition = Condition::all();
        if let (Some(parent), Some(id)) = (E::parent_column(), query.id) {
            condition = condition.add(parent.eq(id));
        }
        if let Some(search) = query.search_term().and_then(search_condition::<E>) {
            condition = condition.add(search);
        }
        Self::ordered(E::find().filter(condition))
    }

    pub async fn paginate(&self, select: Select<E>, window: PageWindow) -> AppResult<Page<E::Model>> {
        let total = select.clone().count(&self.db).await?;
        let items = select.page_window(window).all(&self.db).await?;
        Ok(Page {
            items,
            window,
            total,
        })
    }

    fn ordered(select: Select<E>) -> Select<E> {
        let mut select = select.order_by_asc(E::order_column());
        for key in E::PrimaryKey::iter() {
            select = select.order_by_asc(key.into_column());
        }
        select
    }
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
        assert_eq!(escape_like("plain"), "plain");
    }
}
