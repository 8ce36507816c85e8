use chrono::Utc;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use super::generic::{GenericRepository, RepositoryEntity};
use super::products::ProductsRepository;
use crate::{
    entity::{favorites, products},
    error::{AppError, AppResult},
    pagination::{Page, PaginationQuery},
};

impl RepositoryEntity for favorites::Entity {
    const LABEL: &'static str = "Favorite";

    fn search_columns() -> Vec<favorites::Column> {
        Vec::new()
    }

    fn order_column() -> favorites::Column {
        favorites::Column::CreatedAt
    }

    fn parent_column() -> Option<favorites::Column> {
        Some(favorites::Column::ProductId)
    }
}

pub struct FavoritesRepository {
    favorites: GenericRepository<favorites::Entity>,
    products: ProductsRepository,
}

impl FavoritesRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            products: ProductsRepository::new(db.clone()),
            favorites: GenericRepository::new(db),
        }
    }

    /// One favorite per (user, product); a second attempt is rejected by the unique index.
    pub async fn add(&self, user_id: Uuid, product_id: i32) -> AppResult<favorites::Model> {
        products::Entity::find_by_id(product_id)
            .one(self.favorites.db())
            .await?
            .ok_or_else(|| AppError::not_found(products::Entity::LABEL))?;

        self.favorites
            .add(favorites::ActiveModel {
                id: NotSet,
                user_id: Set(user_id),
                product_id: Set(product_id),
                created_at: Set(Utc::now()),
            })
            .await
    }

    pub async fn remove(&self, user_id: Uuid, product_id: i32) -> AppResult<()> {
        let result = favorites::Entity::delete_many()
            .filter(favorites::Column::UserId.eq(user_id))
            .filter(favorites::Column::ProductId.eq(product_id))
            .exec(self.favorites.db())
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(favorites::Entity::LABEL));
        }
        Ok(())
    }

    pub async fn products_of(
        &self,
        user_id: Uuid,
        query: &PaginationQuery,
    ) -> AppResult<Page<products::Model>> {
        self.products.favorited_by(user_id, query).await
    }
}

impl From<DatabaseConnection> for FavoritesRepository {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db)
    }
}
