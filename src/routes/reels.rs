use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::reels::{CreateReelRequest, ReelList, UpdateReelRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Reel,
    pagination::PaginationQuery,
    response::{ApiResponse, RecordCount, Removed},
    services::reel_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reels).post(create_reel))
        .route("/by-product/{product_id}", get(reels_of_product))
        .route("/paginated", get(paginate_reels))
        .route("/totalRecordsPaginated", get(count_reels))
        .route("/{id}", get(get_reel).put(update_reel).delete(delete_reel))
}

#[utoipa::path(
    get,
    path = "/api/reels",
    responses(
        (status = 200, description = "All reels", body = ApiResponse<ReelList>)
    ),
    tag = "Reels"
)]
pub async fn list_reels(State(state): State<AppState>) -> AppResult<Json<ApiResponse<ReelList>>> {
    Ok(Json(reel_service::list_reels(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/reels/by-product/{product_id}",
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Reels of a product", body = ApiResponse<ReelList>),
        (status = 404, description = "Product not found")
    ),
    tag = "Reels"
)]
pub async fn reels_of_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> AppResult<Json<ApiResponse<ReelList>>> {
    Ok(Json(reel_service::reels_of_product(&state, product_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/reels/paginated",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of reels, `id` scopes to a product", body = ApiResponse<ReelList>)
    ),
    tag = "Reels"
)]
pub async fn paginate_reels(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<ApiResponse<ReelList>>> {
    Ok(Json(reel_service::paginate_reels(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/reels/totalRecordsPaginated",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Matching reel count", body = ApiResponse<RecordCount>)
    ),
    tag = "Reels"
)]
pub async fn count_reels(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<ApiResponse<RecordCount>>> {
    Ok(Json(reel_service::count_reels(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/reels/{id}",
    params(
        ("id" = i32, Path, description = "Reel ID")
    ),
    responses(
        (status = 200, description = "Reel", body = ApiResponse<Reel>),
        (status = 404, description = "Reel not found")
    ),
    tag = "Reels"
)]
pub async fn get_reel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Reel>>> {
    Ok(Json(reel_service::get_reel(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/reels",
    request_body = CreateReelRequest,
    responses(
        (status = 200, description = "Create reel", body = ApiResponse<Reel>),
        (status = 403, description = "Not the product's store owner")
    ),
    security(("bearer_auth" = [])),
    tag = "Reels"
)]
pub async fn create_reel(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateReelRequest>,
) -> AppResult<Json<ApiResponse<Reel>>> {
    Ok(Json(reel_service::create_reel(&state, &user, payload).await?))
}

#[utoipa::path(
    put,
    path = "/api/reels/{id}",
    params(
        ("id" = i32, Path, description = "Reel ID")
    ),
    request_body = UpdateReelRequest,
    responses(
        (status = 200, description = "Updated reel", body = ApiResponse<Reel>)
    ),
    security(("bearer_auth" = [])),
    tag = "Reels"
)]
pub async fn update_reel(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReelRequest>,
) -> AppResult<Json<ApiResponse<Reel>>> {
    Ok(Json(reel_service::update_reel(&state, &user, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/reels/{id}",
    params(
        ("id" = i32, Path, description = "Reel ID")
    ),
    responses(
        (status = 200, description = "Deleted reel", body = ApiResponse<Removed>)
    ),
    security(("bearer_auth" = [])),
    tag = "Reels"
)]
pub async fn delete_reel(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Removed>>> {
    Ok(Json(reel_service::delete_reel(&state, &user, id).await?))
}
