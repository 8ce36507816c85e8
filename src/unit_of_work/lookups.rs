use crate::{error::AppResult, models::LookupItem, repositories::lookups::LookupRepository};

use super::UnitOfWork;

pub type LookupUnitOfWork<E> = UnitOfWork<E, LookupRepository<E>>;

impl<E> LookupUnitOfWork<E>
where
    E: crate::repositories::LookupEntity,
    E::Model: sea_orm::IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as sea_orm::PrimaryKeyTrait>::ValueType>,
{
    pub async fn combo(&self) -> AppResult<Vec<LookupItem>> {
        self.specific.combo().await
    }
}
