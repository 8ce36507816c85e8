use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{City, Department};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub country_id: i32,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateDepartmentRequest {
    pub name: Option<String>,
    pub country_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DepartmentList {
    pub items: Vec<Department>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DepartmentDetail {
    pub department: Department,
    pub cities: Vec<City>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateCityRequest {
    pub name: String,
    pub department_id: i32,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateCityRequest {
    pub name: Option<String>,
    pub department_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CityList {
    pub items: Vec<City>,
}
