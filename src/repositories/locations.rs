use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter};

use super::generic::{GenericRepository, RepositoryEntity};
use crate::{
    entity::{cities, countries, departments},
    error::{AppError, AppResult},
};

impl RepositoryEntity for departments::Entity {
    const LABEL: &'static str = "Department";

    fn search_columns() -> Vec<departments::Column> {
        vec![departments::Column::Name]
    }

    fn order_column() -> departments::Column {
        departments::Column::Name
    }

    fn parent_column() -> Option<departments::Column> {
        Some(departments::Column::CountryId)
    }
}

impl RepositoryEntity for cities::Entity {
    const LABEL: &'static str = "City";

    fn search_columns() -> Vec<cities::Column> {
        vec![cities::Column::Name]
    }

    fn order_column() -> cities::Column {
        cities::Column::Name
    }

    fn parent_column() -> Option<cities::Column> {
        Some(cities::Column::DepartmentId)
    }
}

pub struct DepartmentsRepository {
    departments: GenericRepository<departments::Entity>,
}

impl DepartmentsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            departments: GenericRepository::new(db),
        }
    }

    /// Departments of one country, for dropdowns. Unknown countries are a 404, not an empty list.
    pub async fn combo(&self, country_id: i32) -> AppResult<Vec<departments::Model>> {
        countries::Entity::find_by_id(country_id)
            .one(self.departments.db())
            .await?
            .ok_or_else(|| AppError::not_found("Country"))?;

        self.departments
            .combo(Condition::all().add(departments::Column::CountryId.eq(country_id)))
            .await
    }

    pub async fn with_cities(
        &self,
        id: i32,
    ) -> AppResult<(departments::Model, Vec<cities::Model>)> {
        let department = self.departments.get(id).await?;
        let cities = cities::Entity::find()
            .filter(cities::Column::DepartmentId.eq(id))
            .all(self.departments.db())
            .await?;
        Ok((department, cities))
    }
}

pub struct CitiesRepository {
    cities: GenericRepository<cities::Entity>,
}

impl CitiesRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            cities: GenericRepository::new(db),
        }
    }

    pub async fn combo(&self, department_id: i32) -> AppResult<Vec<cities::Model>> {
        departments::Entity::find_by_id(department_id)
            .one(self.cities.db())
            .await?
            .ok_or_else(|| AppError::not_found("Department"))?;

        self.cities
            .combo(Condition::all().add(cities::Column::DepartmentId.eq(department_id)))
            .await
    }
}

impl From<DatabaseConnection> for DepartmentsRepository {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db)
    }
}

impl From<DatabaseConnection> for CitiesRepository {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db)
    }
}
