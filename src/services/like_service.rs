use crate::{
    audit::record,
    dto::products::ProductList,
    error::AppResult,
    middleware::auth::AuthUser,
    models::{LikeStatus, Product},
    pagination::PaginationQuery,
    response::{ApiResponse, Meta},
    state::AppState,
    unit_of_work::LikesUnitOfWork,
};

pub async fn like_product(
    state: &AppState,
    user: &AuthUser,
    product_id: i32,
) -> AppResult<ApiResponse<LikeStatus>> {
    let product = LikesUnitOfWork::new(&state.orm)
        .like(user.user_id, product_id)
        .await?;

    record(
        &state.orm,
        user.user_id,
        "product_like",
        "product_likes",
        serde_json::json!({ "product_id": product_id }),
    )
    .await;

    let data = LikeStatus {
        product_id,
        liked: true,
        like_count: product.like_count,
    };
    Ok(ApiResponse::success("Liked", data, Some(Meta::empty())))
}

pub async fn unlike_product(
    state: &AppState,
    user: &AuthUser,
    product_id: i32,
) -> AppResult<ApiResponse<LikeStatus>> {
    let product = LikesUnitOfWork::new(&state.orm)
        .unlike(user.user_id, product_id)
        .await?;

    record(
        &state.orm,
        user.user_id,
        "product_unlike",
        "product_likes",
        serde_json::json!({ "product_id": product_id }),
    )
    .await;

    let data = LikeStatus {
        product_id,
        liked: false,
        like_count: product.like_count,
    };
    Ok(ApiResponse::success("Unliked", data, Some(Meta::empty())))
}

pub async fn like_status(
    state: &AppState,
    user: &AuthUser,
    product_id: i32,
) -> AppResult<ApiResponse<LikeStatus>> {
    let (liked, like_count) = LikesUnitOfWork::new(&state.orm)
        .status(user.user_id, product_id)
        .await?;
    let data = LikeStatus {
        product_id,
        liked,
        like_count,
    };
    Ok(ApiResponse::success("Like status", data, None))
}

pub async fn liked_products(
    state: &AppState,
    user: &AuthUser,
    query: PaginationQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let page = LikesUnitOfWork::new(&state.orm)
        .liked_products(user.user_id, &query)
        .await?
        .map(Product::from);
    let meta = page.meta();
    Ok(ApiResponse::success("Liked products", ProductList { items: page.items }, Some(meta)))
}
