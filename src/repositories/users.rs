use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::{
    entity::users,
    error::{AppError, AppResult},
};

const USER_LABEL: &str = "User";

/// Accounts are keyed by UUID, so they sit outside the integer-keyed generic repository.
pub struct UsersRepository {
    db: DatabaseConnection,
}

impl UsersRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: Uuid) -> AppResult<users::Model> {
        users::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found(USER_LABEL))
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<users::Model>> {
        Ok(users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    pub async fn add(&self, active: users::ActiveModel) -> AppResult<users::Model> {
        active
            .insert(&self.db)
            .await
            .map_err(|err| AppError::from_write(err, USER_LABEL))
    }

    pub async fn update(&self, active: users::ActiveModel) -> AppResult<users::Model> {
        active
            .update(&self.db)
            .await
            .map_err(|err| AppError::from_write(err, USER_LABEL))
    }
}
