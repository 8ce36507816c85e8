use uuid::Uuid;

use crate::{
    entity::{favorites, products},
    error::AppResult,
    pagination::{Page, PaginationQuery},
    repositories::favorites::FavoritesRepository,
};

use super::UnitOfWork;

pub type FavoritesUnitOfWork = UnitOfWork<favorites::Entity, FavoritesRepository>;

impl FavoritesUnitOfWork {
    pub async fn add_for(&self, user_id: Uuid, product_id: i32) -> AppResult<favorites::Model> {
        self.specific.add(user_id, product_id).await
    }

    pub async fn remove_for(&self, user_id: Uuid, product_id: i32) -> AppResult<()> {
        self.specific.remove(user_id, product_id).await
    }

    pub async fn products_of(
        &self,
        user_id: Uuid,
        query: &PaginationQuery,
    ) -> AppResult<Page<products::Model>> {
        self.specific.products_of(user_id, query).await
    }
}
