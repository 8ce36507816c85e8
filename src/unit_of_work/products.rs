use uuid::Uuid;

use crate::{
    entity::{products, reels},
    error::AppResult,
    pagination::{Page, PaginationQuery},
    repositories::products::{ProductScope, ProductsRepository},
};

use super::UnitOfWork;

pub type ProductsUnitOfWork = UnitOfWork<products::Entity, ProductsRepository>;

impl ProductsUnitOfWork {
    pub async fn detail(&self, id: i32) -> AppResult<(products::Model, Vec<reels::Model>)> {
        self.specific.detail(id).await
    }

    pub async fn search(
        &self,
        scope: ProductScope,
        query: &PaginationQuery,
    ) -> AppResult<Page<products::Model>> {
        self.specific.search(scope, query).await
    }

    pub async fn count_matching(&self, scope: ProductScope, query: &PaginationQuery) -> AppResult<u64> {
        self.specific.count_matching(scope, query).await
    }

    pub async fn liked_by(
        &self,
        user_id: Uuid,
        query: &PaginationQuery,
    ) -> AppResult<Page<products::Model>> {
        self.specific.liked_by(user_id, query).await
    }

    pub async fn owner_of(&self, product_id: i32) -> AppResult<Uuid> {
        self.specific.owner_of(product_id).await
    }
}
