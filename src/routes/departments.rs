use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::locations::{
        CreateDepartmentRequest, DepartmentDetail, DepartmentList, UpdateDepartmentRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::Department,
    pagination::PaginationQuery,
    response::{ApiResponse, RecordCount, Removed},
    services::location_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_departments).post(create_department))
        .route("/combo", get(combo_departments))
        .route("/combo/{country_id}", get(departments_of_country))
        .route("/paginated", get(paginate_departments))
        .route("/totalRecordsPaginated", get(count_departments))
        .route(
            "/{id}",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
}

#[utoipa::path(
    get,
    path = "/api/departments",
    responses(
        (status = 200, description = "All departments", body = ApiResponse<DepartmentList>)
    ),
    tag = "Departments"
)]
pub async fn list_departments(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DepartmentList>>> {
    Ok(Json(location_service::list_departments(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/departments/combo",
    responses(
        (status = 200, description = "Departments for dropdowns", body = ApiResponse<DepartmentList>)
    ),
    tag = "Departments"
)]
pub async fn combo_departments(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DepartmentList>>> {
    Ok(Json(location_service::list_departments(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/departments/combo/{country_id}",
    params(
        ("country_id" = i32, Path, description = "Country ID")
    ),
    responses(
        (status = 200, description = "Departments of a country", body = ApiResponse<DepartmentList>),
        (status = 404, description = "Country not found")
    ),
    tag = "Departments"
)]
pub async fn departments_of_country(
    State(state): State<AppState>,
    Path(country_id): Path<i32>,
) -> AppResult<Json<ApiResponse<DepartmentList>>> {
    Ok(Json(
        location_service::departments_of_country(&state, country_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/departments/paginated",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of departments", body = ApiResponse<DepartmentList>)
    ),
    tag = "Departments"
)]
pub async fn paginate_departments(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<ApiResponse<DepartmentList>>> {
    Ok(Json(location_service::paginate_departments(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/departments/totalRecordsPaginated",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Matching department count", body = ApiResponse<RecordCount>)
    ),
    tag = "Departments"
)]
pub async fn count_departments(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<ApiResponse<RecordCount>>> {
    Ok(Json(location_service::count_departments(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department with its cities", body = ApiResponse<DepartmentDetail>),
        (status = 404, description = "Department not found")
    ),
    tag = "Departments"
)]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<DepartmentDetail>>> {
    Ok(Json(location_service::get_department(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/departments",
    request_body = CreateDepartmentRequest,
    responses(
        (status = 200, description = "Create department", body = ApiResponse<Department>),
        (status = 400, description = "Duplicate name or unknown country"),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Departments"
)]
pub async fn create_department(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateDepartmentRequest>,
) -> AppResult<Json<ApiResponse<Department>>> {
    Ok(Json(
        location_service::create_department(&state, &user, payload).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    request_body = UpdateDepartmentRequest,
    responses(
        (status = 200, description = "Updated department", body = ApiResponse<Department>)
    ),
    security(("bearer_auth" = [])),
    tag = "Departments"
)]
pub async fn update_department(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDepartmentRequest>,
) -> AppResult<Json<ApiResponse<Department>>> {
    Ok(Json(
        location_service::update_department(&state, &user, id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Deleted department", body = ApiResponse<Removed>),
        (status = 400, description = "Department still has cities")
    ),
    security(("bearer_auth" = [])),
    tag = "Departments"
)]
pub async fn delete_department(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Removed>>> {
    Ok(Json(location_service::delete_department(&state, &user, id).await?))
}
