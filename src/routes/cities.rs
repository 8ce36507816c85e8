use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::locations::{CityList, CreateCityRequest, UpdateCityRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::City,
    pagination::PaginationQuery,
    response::{ApiResponse, RecordCount, Removed},
    services::location_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cities).post(create_city))
        .route("/combo", get(combo_cities))
        .route("/combo/{department_id}", get(cities_of_department))
        .route("/paginated", get(paginate_cities))
        .route("/totalRecordsPaginated", get(count_cities))
        .route("/{id}", get(get_city).put(update_city).delete(delete_city))
}

#[utoipa::path(
    get,
    path = "/api/cities",
    responses(
        (status = 200, description = "All cities", body = ApiResponse<CityList>)
    ),
    tag = "Cities"
)]
pub async fn list_cities(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CityList>>> {
    Ok(Json(location_service::list_cities(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/cities/combo",
    responses(
        (status = 200, description = "Cities for dropdowns", body = ApiResponse<CityList>)
    ),
    tag = "Cities"
)]
pub async fn combo_cities(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CityList>>> {
    Ok(Json(location_service::list_cities(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/cities/combo/{department_id}",
    params(
        ("department_id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Cities of a department", body = ApiResponse<CityList>),
        (status = 404, description = "Department not found")
    ),
    tag = "Cities"
)]
pub async fn cities_of_department(
    State(state): State<AppState>,
    Path(department_id): Path<i32>,
) -> AppResult<Json<ApiResponse<CityList>>> {
    Ok(Json(
        location_service::cities_of_department(&state, department_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/cities/paginated",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of cities", body = ApiResponse<CityList>)
    ),
    tag = "Cities"
)]
pub async fn paginate_cities(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<ApiResponse<CityList>>> {
    Ok(Json(location_service::paginate_cities(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/cities/totalRecordsPaginated",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Matching city count", body = ApiResponse<RecordCount>)
    ),
    tag = "Cities"
)]
pub async fn count_cities(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<ApiResponse<RecordCount>>> {
    Ok(Json(location_service::count_cities(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/cities/{id}",
    params(
        ("id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "City", body = ApiResponse<City>),
        (status = 404, description = "City not found")
    ),
    tag = "Cities"
)]
pub async fn get_city(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<City>>> {
    Ok(Json(location_service::get_city(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/cities",
    request_body = CreateCityRequest,
    responses(
        (status = 200, description = "Create city", body = ApiResponse<City>),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Cities"
)]
pub async fn create_city(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateCityRequest>,
) -> AppResult<Json<ApiResponse<City>>> {
    Ok(Json(location_service::create_city(&state, &user, payload).await?))
}

#[utoipa::path(
    put,
    path = "/api/cities/{id}",
    params(
        ("id" = i32, Path, description = "City ID")
    ),
    request_body = UpdateCityRequest,
    responses(
        (status = 200, description = "Updated city", body = ApiResponse<City>)
    ),
    security(("bearer_auth" = [])),
    tag = "Cities"
)]
pub async fn update_city(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCityRequest>,
) -> AppResult<Json<ApiResponse<City>>> {
    Ok(Json(
        location_service::update_city(&state, &user, id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/cities/{id}",
    params(
        ("id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "Deleted city", body = ApiResponse<Removed>)
    ),
    security(("bearer_auth" = [])),
    tag = "Cities"
)]
pub async fn delete_city(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Removed>>> {
    Ok(Json(location_service::delete_city(&state, &user, id).await?))
}
