use sea_orm::{
    ActiveValue::{NotSet, Set},
    Condition, DatabaseConnection, IntoActiveModel, PrimaryKeyTrait,
};

use super::generic::{GenericRepository, RepositoryEntity};
use crate::{
    entity::{categories, countries, marketplaces, profiles, reputations, statuses},
    error::AppResult,
    models::LookupItem,
};

/// Name-only lookup tables: `{ id, name }` with a unique name.
pub trait LookupEntity: RepositoryEntity {
    /// Path segment under `/api`, also used as the OpenAPI tag.
    const RESOURCE: &'static str;

    fn item(model: Self::Model) -> LookupItem;

    fn new_active(name: String) -> Self::ActiveModel;

    fn renamed(model: Self::Model, name: String) -> Self::ActiveModel;
}

macro_rules! lookup_entity {
    ($module:ident, $label:literal, $resource:literal) => {
        impl RepositoryEntity for $module::Entity {
            const LABEL: &'static str = $label;

            fn search_columns() -> Vec<$module::Column> {
                vec![$module::Column::Name]
            }

            fn order_column() -> $module::Column {
                $module::Column::Name
            }
        }

        impl LookupEntity for $module::Entity {
            const RESOURCE: &'static str = $resource;

            fn item(model: $module::Model) -> LookupItem {
                LookupItem {
                    id: model.id,
                    name: model.name,
                }
            }

            fn new_active(name: String) -> $module::ActiveModel {
                $module::ActiveModel {
                    id: NotSet,
                    name: Set(name),
                }
            }

            fn renamed(model: $module::Model, name: String) -> $module::ActiveModel {
                let mut active: $module::ActiveModel = model.into();
                active.name = Set(name);
                active
            }
        }
    };
}

lookup_entity!(countries, "Country", "countries");
lookup_entity!(categories, "Category", "categories");
lookup_entity!(marketplaces, "Marketplace", "marketplaces");
lookup_entity!(statuses, "Status", "statuses");
lookup_entity!(reputations, "Reputation", "reputations");
lookup_entity!(profiles, "Profile", "profiles");

pub struct LookupRepository<E> {
    lookups: GenericRepository<E>,
}

impl<E> LookupRepository<E>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            lookups: GenericRepository::new(db),
        }
    }

    pub async fn combo(&self) -> AppResult<Vec<LookupItem>> {
        Ok(self
            .lookups
            .combo(Condition::all())
            .await?
            .into_iter()
            .map(E::item)
            .collect())
    }
}

impl<E> From<DatabaseConnection> for LookupRepository<E>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db)
    }
}
