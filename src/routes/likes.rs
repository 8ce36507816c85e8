use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::products::ProductList,
    error::AppResult,
    middleware::auth::AuthUser,
    models::LikeStatus,
    pagination::PaginationQuery,
    response::ApiResponse,
    services::like_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(liked_products)).route(
        "/{product_id}",
        get(like_status).post(like_product).delete(unlike_product),
    )
}

#[utoipa::path(
    get,
    path = "/api/likes",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Products the caller likes", body = ApiResponse<ProductList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Likes"
)]
pub async fn liked_products(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    Ok(Json(like_service::liked_products(&state, &user, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/likes/{product_id}",
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Whether the caller likes the product", body = ApiResponse<LikeStatus>),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Likes"
)]
pub async fn like_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(product_id): Path<i32>,
) -> AppResult<Json<ApiResponse<LikeStatus>>> {
    Ok(Json(like_service::like_status(&state, &user, product_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/likes/{product_id}",
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Liked", body = ApiResponse<LikeStatus>),
        (status = 400, description = "Already liked"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Likes"
)]
pub async fn like_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(product_id): Path<i32>,
) -> AppResult<Json<ApiResponse<LikeStatus>>> {
    Ok(Json(like_service::like_product(&state, &user, product_id).await?))
}

#[utoipa::path(
    delete,
    path = "/api/likes/{product_id}",
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Unliked", body = ApiResponse<LikeStatus>),
        (status = 404, description = "Like not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Likes"
)]
pub async fn unlike_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(product_id): Path<i32>,
) -> AppResult<Json<ApiResponse<LikeStatus>>> {
    Ok(Json(like_service::unlike_product(&state, &user, product_id).await?))
}
