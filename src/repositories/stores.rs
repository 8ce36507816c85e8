use sea_orm::{ColumnTrait, Condition, DatabaseConnection, QueryFilter};
use uuid::Uuid;

use super::generic::{GenericRepository, RepositoryEntity};
use crate::{
    entity::stores,
    error::AppResult,
    pagination::{Page, PaginationQuery},
};

impl RepositoryEntity for stores::Entity {
    const LABEL: &'static str = "Store";

    fn search_columns() -> Vec<stores::Column> {
        vec![stores::Column::Name]
    }

    fn order_column() -> stores::Column {
        stores::Column::Name
    }

    fn parent_column() -> Option<stores::Column> {
        Some(stores::Column::CityId)
    }
}

pub struct StoresRepository {
    stores: GenericRepository<stores::Entity>,
}

impl StoresRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            stores: GenericRepository::new(db),
        }
    }

    pub async fn by_owner(
        &self,
        user_id: Uuid,
        query: &PaginationQuery,
    ) -> AppResult<Page<stores::Model>> {
        let select = self
            .stores
            .filtered(query)
            .filter(stores::Column::UserId.eq(user_id));
        self.stores.paginate(select, query.window()).await
    }

    pub async fn combo(&self, user_id: Uuid) -> AppResult<Vec<stores::Model>> {
        self.stores
            .combo(Condition::all().add(stores::Column::UserId.eq(user_id)))
            .await
    }

    pub async fn owner_of(&self, store_id: i32) -> AppResult<Uuid> {
        Ok(self.stores.get(store_id).await?.user_id)
    }
}

impl From<DatabaseConnection> for StoresRepository {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db)
    }
}
