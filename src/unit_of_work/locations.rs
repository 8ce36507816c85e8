use crate::{
    entity::{cities, departments},
    error::AppResult,
    repositories::locations::{CitiesRepository, DepartmentsRepository},
};

use super::UnitOfWork;

pub type DepartmentsUnitOfWork = UnitOfWork<departments::Entity, DepartmentsRepository>;
pub type CitiesUnitOfWork = UnitOfWork<cities::Entity, CitiesRepository>;

impl DepartmentsUnitOfWork {
    pub async fn combo(&self, country_id: i32) -> AppResult<Vec<departments::Model>> {
        self.specific.combo(country_id).await
    }

    pub async fn with_cities(
        &self,
        id: i32,
    ) -> AppResult<(departments::Model, Vec<cities::Model>)> {
        self.specific.with_cities(id).await
    }
}

impl CitiesUnitOfWork {
    pub async fn combo(&self, department_id: i32) -> AppResult<Vec<cities::Model>> {
        self.specific.combo(department_id).await
    }
}
