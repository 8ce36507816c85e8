use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait};
use uuid::Uuid;

use super::generic::{GenericRepository, RepositoryEntity};
use super::products::ProductsRepository;
use crate::{
    entity::{products, reels},
    error::{AppError, AppResult},
};

impl RepositoryEntity for reels::Entity {
    const LABEL: &'static str = "Reel";

    fn search_columns() -> Vec<reels::Column> {
        vec![reels::Column::Name]
    }

    fn order_column() -> reels::Column {
        reels::Column::Name
    }

    fn parent_column() -> Option<reels::Column> {
        Some(reels::Column::ProductId)
    }
}

pub struct ReelsRepository {
    reels: GenericRepository<reels::Entity>,
    products: ProductsRepository,
}

impl ReelsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            products: ProductsRepository::new(db.clone()),
            reels: GenericRepository::new(db),
        }
    }

    pub async fn by_product(&self, product_id: i32) -> AppResult<Vec<reels::Model>> {
        products::Entity::find_by_id(product_id)
            .one(self.reels.db())
            .await?
            .ok_or_else(|| AppError::not_found(products::Entity::LABEL))?;

        self.reels
            .combo(Condition::all().add(reels::Column::ProductId.eq(product_id)))
            .await
    }

    /// Owner of the store selling the reel's product.
    pub async fn owner_of(&self, reel_id: i32) -> AppResult<Uuid> {
        let reel = self.reels.get(reel_id).await?;
        self.products.owner_of(reel.product_id).await
    }
}

impl From<DatabaseConnection> for ReelsRepository {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db)
    }
}
