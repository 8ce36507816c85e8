use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use super::generic::RepositoryEntity;
use super::products::ProductsRepository;
use crate::{
    entity::{product_likes, products},
    error::{AppError, AppResult},
    pagination::{Page, PaginationQuery},
};

const LIKE_LABEL: &str = "Like";

/// Likes live in `product_likes`; `products.like_count` is kept in step inside the same
/// transaction.
pub struct LikesRepository {
    db: DatabaseConnection,
    products: ProductsRepository,
}

impl LikesRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            products: ProductsRepository::new(db.clone()),
            db,
        }
    }

    pub async fn like(&self, user_id: Uuid, product_id: i32) -> AppResult<products::Model> {
        let txn = self.db.begin().await?;
        ensure_product(&txn, product_id).await?;

        product_likes::Entity::insert(product_likes::ActiveModel {
            user_id: Set(user_id),
            product_id: Set(product_id),
            created_at: Set(Utc::now()),
        })
        .exec_without_returning(&txn)
        .await
        .map_err(|err| AppError::from_write(err, LIKE_LABEL))?;

        products::Entity::update_many()
            .col_expr(
                products::Column::LikeCount,
                Expr::col(products::Column::LikeCount).add(1),
            )
            .filter(products::Column::Id.eq(product_id))
            .exec(&txn)
            .await?;

        let product = ensure_product(&txn, product_id).await?;
        txn.commit().await?;
        Ok(product)
    }

    pub async fn unlike(&self, user_id: Uuid, product_id: i32) -> AppResult<products::Model> {
        let txn = self.db.begin().await?;
        ensure_product(&txn, product_id).await?;

        let removed = product_likes::Entity::delete_many()
            .filter(product_likes::Column::UserId.eq(user_id))
            .filter(product_likes::Column::ProductId.eq(product_id))
            .exec(&txn)
            .await?;
        if removed.rows_affected == 0 {
            return Err(AppError::not_found(LIKE_LABEL));
        }

        products::Entity::update_many()
            .col_expr(
                products::Column::LikeCount,
                Expr::col(products::Column::LikeCount).sub(1),
            )
            .filter(products::Column::Id.eq(product_id))
            .filter(products::Column::LikeCount.gt(0))
            .exec(&txn)
            .await?;

        let product = ensure_product(&txn, product_id).await?;
        txn.commit().await?;
        Ok(product)
    }

    pub async fn liked_products(
        &self,
        user_id: Uuid,
        query: &PaginationQuery,
    ) -> AppResult<Page<products::Model>> {
        self.products.liked_by(user_id, query).await
    }

    /// Whether `user_id` likes the product, with the product's current like count.
    pub async fn status(&self, user_id: Uuid, product_id: i32) -> AppResult<(bool, i32)> {
        let product = ensure_product(&self.db, product_id).await?;
        let liked = product_likes::Entity::find_by_id((user_id, product_id))
            .one(&self.db)
            .await?
            .is_some();
        Ok((liked, product.like_count))
    }
}

async fn ensure_product<C: ConnectionTrait>(conn: &C, product_id: i32) -> AppResult<products::Model> {
    products::Entity::find_by_id(product_id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::not_found(products::Entity::LABEL))
}

impl From<DatabaseConnection> for LikesRepository {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db)
    }
}
