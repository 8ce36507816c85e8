use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use super::generic::{GenericRepository, RepositoryEntity};
use crate::{
    entity::{favorites, product_likes, products, reels, stores},
    error::{AppError, AppResult},
    pagination::{Page, PaginationQuery},
};

impl RepositoryEntity for products::Entity {
    const LABEL: &'static str = "Product";

    fn search_columns() -> Vec<products::Column> {
        vec![products::Column::Name, products::Column::Description]
    }

    fn order_column() -> products::Column {
        products::Column::Name
    }

    fn parent_column() -> Option<products::Column> {
        Some(products::Column::StoreId)
    }
}

/// Optional catalog scopes applied on top of the usual pagination filter.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductScope {
    pub category_id: Option<i32>,
    pub marketplace_id: Option<i32>,
    pub status_id: Option<i32>,
}

impl ProductScope {
    fn condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(category_id) = self.category_id {
            condition = condition.add(products::Column::CategoryId.eq(category_id));
        }
        if let Some(marketplace_id) = self.marketplace_id {
            condition = condition.add(products::Column::MarketplaceId.eq(marketplace_id));
        }
        if let Some(status_id) = self.status_id {
            condition = condition.add(products::Column::StatusId.eq(status_id));
        }
        condition
    }
}

pub struct ProductsRepository {
    products: GenericRepository<products::Entity>,
}

impl ProductsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            products: GenericRepository::new(db),
        }
    }

    pub async fn detail(&self, id: i32) -> AppResult<(products::Model, Vec<reels::Model>)> {
        let found = products::Entity::find_by_id(id)
            .find_with_related(reels::Entity)
            .all(self.products.db())
            .await?;

        let (product, mut reels) = found
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found(products::Entity::LABEL))?;
        reels.sort_by_key(|reel| reel.id);
        Ok((product, reels))
    }

    pub async fn search(
        &self,
        scope: ProductScope,
        query: &PaginationQuery,
    ) -> AppResult<Page<products::Model>> {
        let select = self.products.filtered(query).filter(scope.condition());
        self.products.paginate(select, query.window()).await
    }

    pub async fn count_matching(&self, scope: ProductScope, query: &PaginationQuery) -> AppResult<u64> {
        Ok(self
            .products
            .filtered(query)
            .filter(scope.condition())
            .count(self.products.db())
            .await?)
    }

    pub async fn liked_by(
        &self,
        user_id: Uuid,
        query: &PaginationQuery,
    ) -> AppResult<Page<products::Model>> {
        let select = self
            .products
            .filtered(query)
            .inner_join(product_likes::Entity)
            .filter(product_likes::Column::UserId.eq(user_id));
        self.products.paginate(select, query.window()).await
    }

    pub async fn favorited_by(
        &self,
        user_id: Uuid,
        query: &PaginationQuery,
    ) -> AppResult<Page<products::Model>> {
        let select = self
            .products
            .filtered(query)
            .inner_join(favorites::Entity)
            .filter(favorites::Column::UserId.eq(user_id));
        self.products.paginate(select, query.window()).await
    }

    pub async fn owner_of(&self, product_id: i32) -> AppResult<Uuid> {
        let (_, store) = products::Entity::find_by_id(product_id)
            .find_also_related(stores::Entity)
            .one(self.products.db())
            .await?
            .ok_or_else(|| AppError::not_found(products::Entity::LABEL))?;

        store
            .map(|store| store.user_id)
            .ok_or_else(|| AppError::not_found(stores::Entity::LABEL))
    }
}

impl From<DatabaseConnection> for ProductsRepository {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db)
    }
}
