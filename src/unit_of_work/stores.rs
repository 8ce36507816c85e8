use uuid::Uuid;

use crate::{
    entity::stores,
    error::AppResult,
    pagination::{Page, PaginationQuery},
    repositories::stores::StoresRepository,
};

use super::UnitOfWork;

pub type StoresUnitOfWork = UnitOfWork<stores::Entity, StoresRepository>;

impl StoresUnitOfWork {
    pub async fn by_owner(
        &self,
        user_id: Uuid,
        query: &PaginationQuery,
    ) -> AppResult<Page<stores::Model>> {
        self.specific.by_owner(user_id, query).await
    }

    pub async fn combo(&self, user_id: Uuid) -> AppResult<Vec<stores::Model>> {
        self.specific.combo(user_id).await
    }

    pub async fn owner_of(&self, store_id: i32) -> AppResult<Uuid> {
        self.specific.owner_of(store_id).await
    }
}
