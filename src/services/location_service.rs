use sea_orm::ActiveValue::{NotSet, Set};

use crate::{
    audit::record,
    dto::locations::{
        CityList, CreateCityRequest, CreateDepartmentRequest, DepartmentDetail, DepartmentList,
        UpdateCityRequest, UpdateDepartmentRequest,
    },
    entity::{cities, departments},
    error::AppResult,
    middleware::auth::{AuthUser, ensure_admin},
    models::{City, Department},
    pagination::PaginationQuery,
    response::{ApiResponse, Meta, RecordCount, Removed},
    services::required,
    state::AppState,
    unit_of_work::{CitiesUnitOfWork, DepartmentsUnitOfWork},
};

pub async fn list_departments(state: &AppState) -> AppResult<ApiResponse<DepartmentList>> {
    let items = DepartmentsUnitOfWork::new(&state.orm)
        .get_all()
        .await?
        .into_iter()
        .map(Department::from)
        .collect();
    Ok(ApiResponse::success("Departments", DepartmentList { items }, Some(Meta::empty())))
}

pub async fn departments_of_country(
    state: &AppState,
    country_id: i32,
) -> AppResult<ApiResponse<DepartmentList>> {
    let items = DepartmentsUnitOfWork::new(&state.orm)
        .combo(country_id)
        .await?
        .into_iter()
        .map(Department::from)
        .collect();
    Ok(ApiResponse::success("Departments", DepartmentList { items }, Some(Meta::empty())))
}

pub async fn paginate_departments(
    state: &AppState,
    query: PaginationQuery,
) -> AppResult<ApiResponse<DepartmentList>> {
    let page = DepartmentsUnitOfWork::new(&state.orm)
        .get_paginated(&query)
        .await?
        .map(Department::from);
    let meta = page.meta();
    Ok(ApiResponse::success(
        "Departments",
        DepartmentList { items: page.items },
        Some(meta),
    ))
}

pub async fn count_departments(
    state: &AppState,
    query: PaginationQuery,
) -> AppResult<ApiResponse<RecordCount>> {
    let total = DepartmentsUnitOfWork::new(&state.orm).count(&query).await?;
    Ok(ApiResponse::success("Total records", RecordCount { total }, None))
}

pub async fn get_department(state: &AppState, id: i32) -> AppResult<ApiResponse<DepartmentDetail>> {
    let (department, cities) = DepartmentsUnitOfWork::new(&state.orm).with_cities(id).await?;
    let data = DepartmentDetail {
        department: department.into(),
        cities: cities.into_iter().map(City::from).collect(),
    };
    Ok(ApiResponse::success("Department", data, None))
}

pub async fn create_department(
    state: &AppState,
    user: &AuthUser,
    payload: CreateDepartmentRequest,
) -> AppResult<ApiResponse<Department>> {
    ensure_admin(user)?;
    let department = DepartmentsUnitOfWork::new(&state.orm)
        .add(departments::ActiveModel {
            id: NotSet,
            name: Set(required(payload.name, "Name")?),
            country_id: Set(payload.country_id),
        })
        .await?;

    record(
        &state.orm,
        user.user_id,
        "department_create",
        "departments",
        serde_json::json!({ "id": department.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Department created",
        department.into(),
        Some(Meta::empty()),
    ))
}

pub async fn update_department(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateDepartmentRequest,
) -> AppResult<ApiResponse<Department>> {
    ensure_admin(user)?;
    let uow = DepartmentsUnitOfWork::new(&state.orm);
    let mut active: departments::ActiveModel = uow.get(id).await?.into();
    if let Some(name) = payload.name {
        active.name = Set(required(name, "Name")?);
    }
    if let Some(country_id) = payload.country_id {
        active.country_id = Set(country_id);
    }
    let department = uow.update(active).await?;

    record(
        &state.orm,
        user.user_id,
        "department_update",
        "departments",
        serde_json::json!({ "id": id }),
    )
    .await;

    Ok(ApiResponse::success("Updated", department.into(), Some(Meta::empty())))
}

pub async fn delete_department(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<Removed>> {
    ensure_admin(user)?;
    DepartmentsUnitOfWork::new(&state.orm).delete(id).await?;

    record(
        &state.orm,
        user.user_id,
        "department_delete",
        "departments",
        serde_json::json!({ "id": id }),
    )
    .await;

    Ok(ApiResponse::success("Deleted", Removed { id }, Some(Meta::empty())))
}

pub async fn list_cities(state: &AppState) -> AppResult<ApiResponse<CityList>> {
    let items = CitiesUnitOfWork::new(&state.orm)
        .get_all()
        .await?
        .into_iter()
        .map(City::from)
        .collect();
    Ok(ApiResponse::success("Cities", CityList { items }, Some(Meta::empty())))
}

pub async fn cities_of_department(
    state: &AppState,
    department_id: i32,
) -> AppResult<ApiResponse<CityList>> {
    let items = CitiesUnitOfWork::new(&state.orm)
        .combo(department_id)
        .await?
        .into_iter()
        .map(City::from)
        .collect();
    Ok(ApiResponse::success("Cities", CityList { items }, Some(Meta::empty())))
}

pub async fn paginate_cities(
    state: &AppState,
    query: PaginationQuery,
) -> AppResult<ApiResponse<CityList>> {
    let page = CitiesUnitOfWork::new(&state.orm)
        .get_paginated(&query)
        .await?
        .map(City::from);
    let meta = page.meta();
    Ok(ApiResponse::success("Cities", CityList { items: page.items }, Some(meta)))
}

pub async fn count_cities(
    state: &AppState,
    query: PaginationQuery,
) -> AppResult<ApiResponse<RecordCount>> {
    let total = CitiesUnitOfWork::new(&state.orm).count(&query).await?;
    Ok(ApiResponse::success("Total records", RecordCount { total }, None))
}

pub async fn get_city(state: &AppState, id: i32) -> AppResult<ApiResponse<City>> {
    let city = CitiesUnitOfWork::new(&state.orm).get(id).await?;
    Ok(ApiResponse::success("City", city.into(), None))
}

pub async fn create_city(
    state: &AppState,
    user: &AuthUser,
    payload: CreateCityRequest,
) -> AppResult<ApiResponse<City>> {
    ensure_admin(user)?;
    let city = CitiesUnitOfWork::new(&state.orm)
        .add(cities::ActiveModel {
            id: NotSet,
            name: Set(required(payload.name, "Name")?),
            department_id: Set(payload.department_id),
        })
        .await?;

    record(
        &state.orm,
        user.user_id,
        "city_create",
        "cities",
        serde_json::json!({ "id": city.id }),
    )
    .await;

    Ok(ApiResponse::success("City created", city.into(), Some(Meta::empty())))
}

pub async fn update_city(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateCityRequest,
) -> AppResult<ApiResponse<City>> {
    ensure_admin(user)?;
    let uow = CitiesUnitOfWork::new(&state.orm);
    let mut active: cities::ActiveModel = uow.get(id).await?.into();
    if let Some(name) = payload.name {
        active.name = Set(required(name, "Name")?);
    }
    if let Some(department_id) = payload.department_id {
        active.department_id = Set(department_id);
    }
    let city = uow.update(active).await?;

    record(
        &state.orm,
        user.user_id,
        "city_update",
        "cities",
        serde_json::json!({ "id": id }),
    )
    .await;

    Ok(ApiResponse::success("Updated", city.into(), Some(Meta::empty())))
}

pub async fn delete_city(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<Removed>> {
    ensure_admin(user)?;
    CitiesUnitOfWork::new(&state.orm).delete(id).await?;

    record(
        &state.orm,
        user.user_id,
        "city_delete",
        "cities",
        serde_json::json!({ "id": id }),
    )
    .await;

    Ok(ApiResponse::success("Deleted", Removed { id }, Some(Meta::empty())))
}
