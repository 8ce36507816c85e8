use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::stores::{CreateStoreRequest, StoreList, UpdateStoreRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Store,
    pagination::PaginationQuery,
    response::{ApiResponse, RecordCount, Removed},
    services::store_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stores).post(create_store))
        .route("/combo", get(combo_stores))
        .route("/mine", get(my_stores))
        .route("/paginated", get(paginate_stores))
        .route("/totalRecordsPaginated", get(count_stores))
        .route("/{id}", get(get_store).put(update_store).delete(delete_store))
}

#[utoipa::path(
    get,
    path = "/api/stores",
    responses(
        (status = 200, description = "All stores", body = ApiResponse<StoreList>)
    ),
    tag = "Stores"
)]
pub async fn list_stores(State(state): State<AppState>) -> AppResult<Json<ApiResponse<StoreList>>> {
    Ok(Json(store_service::list_stores(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/stores/combo",
    responses(
        (status = 200, description = "Caller's stores for dropdowns", body = ApiResponse<StoreList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Stores"
)]
pub async fn combo_stores(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<StoreList>>> {
    Ok(Json(store_service::combo_stores(&state, &user).await?))
}

#[utoipa::path(
    get,
    path = "/api/stores/mine",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of the caller's stores", body = ApiResponse<StoreList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Stores"
)]
pub async fn my_stores(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<ApiResponse<StoreList>>> {
    Ok(Json(store_service::my_stores(&state, &user, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/stores/paginated",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of stores, `id` scopes to a city", body = ApiResponse<StoreList>)
    ),
    tag = "Stores"
)]
pub async fn paginate_stores(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<ApiResponse<StoreList>>> {
    Ok(Json(store_service::paginate_stores(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/stores/totalRecordsPaginated",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Matching store count", body = ApiResponse<RecordCount>)
    ),
    tag = "Stores"
)]
pub async fn count_stores(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<ApiResponse<RecordCount>>> {
    Ok(Json(store_service::count_stores(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/stores/{id}",
    params(
        ("id" = i32, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Store", body = ApiResponse<Store>),
        (status = 404, description = "Store not found")
    ),
    tag = "Stores"
)]
pub async fn get_store(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Store>>> {
    Ok(Json(store_service::get_store(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/stores",
    request_body = CreateStoreRequest,
    responses(
        (status = 200, description = "Create store owned by the caller", body = ApiResponse<Store>),
        (status = 400, description = "Caller already has a store with that name")
    ),
    security(("bearer_auth" = [])),
    tag = "Stores"
)]
pub async fn create_store(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateStoreRequest>,
) -> AppResult<Json<ApiResponse<Store>>> {
    Ok(Json(store_service::create_store(&state, &user, payload).await?))
}

#[utoipa::path(
    put,
    path = "/api/stores/{id}",
    params(
        ("id" = i32, Path, description = "Store ID")
    ),
    request_body = UpdateStoreRequest,
    responses(
        (status = 200, description = "Updated store", body = ApiResponse<Store>),
        (status = 403, description = "Not the store owner")
    ),
    security(("bearer_auth" = [])),
    tag = "Stores"
)]
pub async fn update_store(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStoreRequest>,
) -> AppResult<Json<ApiResponse<Store>>> {
    Ok(Json(store_service::update_store(&state, &user, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/stores/{id}",
    params(
        ("id" = i32, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Deleted store", body = ApiResponse<Removed>),
        (status = 400, description = "Store still lists products")
    ),
    security(("bearer_auth" = [])),
    tag = "Stores"
)]
pub async fn delete_store(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Removed>>> {
    Ok(Json(store_service::delete_store(&state, &user, id).await?))
}
