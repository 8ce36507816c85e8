use crate::{
    audit::record,
    dto::favorites::{AddFavoriteRequest, FavoriteProductList},
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Favorite, Product},
    pagination::PaginationQuery,
    response::{ApiResponse, Meta, Removed},
    state::AppState,
    unit_of_work::FavoritesUnitOfWork,
};

pub async fn list_favorites(
    state: &AppState,
    user: &AuthUser,
    query: PaginationQuery,
) -> AppResult<ApiResponse<FavoriteProductList>> {
    let page = FavoritesUnitOfWork::new(&state.orm)
        .products_of(user.user_id, &query)
        .await?
        .map(Product::from);
    let meta = page.meta();
    Ok(ApiResponse::success(
        "OK",
        FavoriteProductList { items: page.items },
        Some(meta),
    ))
}

pub async fn add_favorite(
    state: &AppState,
    user: &AuthUser,
    payload: AddFavoriteRequest,
) -> AppResult<ApiResponse<Favorite>> {
    let favorite = FavoritesUnitOfWork::new(&state.orm)
        .add_for(user.user_id, payload.product_id)
        .await?;

    record(
        &state.orm,
        user.user_id,
        "favorite_add",
        "favorites",
        serde_json::json!({ "product_id": payload.product_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Added to favorites",
        favorite.into(),
        Some(Meta::empty()),
    ))
}

pub async fn remove_favorite(
    state: &AppState,
    user: &AuthUser,
    product_id: i32,
) -> AppResult<ApiResponse<Removed>> {
    FavoritesUnitOfWork::new(&state.orm)
        .remove_for(user.user_id, product_id)
        .await?;

    record(
        &state.orm,
        user.user_id,
        "favorite_remove",
        "favorites",
        serde_json::json!({ "product_id": product_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Removed from favorites",
        Removed { id: product_id },
        Some(Meta::empty()),
    ))
}
