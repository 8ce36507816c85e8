use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::{
    audit::record,
    dto::products::{CreateProductRequest, ProductList, ProductQuery, UpdateProductRequest},
    entity::products,
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_owner},
    models::{Product, ProductDetail, Reel},
    pagination::PaginationQuery,
    response::{ApiResponse, Meta, RecordCount, Removed},
    services::required,
    state::AppState,
    unit_of_work::{ProductsUnitOfWork, StoresUnitOfWork},
};

pub async fn list_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let items = ProductsUnitOfWork::new(&state.orm)
        .get_all()
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(ApiResponse::success("Products", ProductList { items }, Some(Meta::empty())))
}

pub async fn paginate_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let page = ProductsUnitOfWork::new(&state.orm)
        .search(query.scope(), &query.pagination())
        .await?
        .map(Product::from);
    let meta = page.meta();
    Ok(ApiResponse::success("Products", ProductList { items: page.items }, Some(meta)))
}

pub async fn count_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<RecordCount>> {
    let total = ProductsUnitOfWork::new(&state.orm)
        .count_matching(query.scope(), &query.pagination())
        .await?;
    Ok(ApiResponse::success("Total records", RecordCount { total }, None))
}

pub async fn liked_products(
    state: &AppState,
    user: &AuthUser,
    query: PaginationQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let page = ProductsUnitOfWork::new(&state.orm)
        .liked_by(user.user_id, &query)
        .await?
        .map(Product::from);
    let meta = page.meta();
    Ok(ApiResponse::success("Liked products", ProductList { items: page.items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<ApiResponse<ProductDetail>> {
    let (product, reels) = ProductsUnitOfWork::new(&state.orm).detail(id).await?;
    let data = ProductDetail {
        product: product.into(),
        reels: reels.into_iter().map(Reel::from).collect(),
    };
    Ok(ApiResponse::success("Product", data, None))
}

pub async fn create_product(
    state: &AppState,
    user: &AuthUser,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let owner = StoresUnitOfWork::new(&state.orm)
        .owner_of(payload.store_id)
        .await?;
    ensure_owner(user, owner)?;
    check_price(payload.price)?;

    let product = ProductsUnitOfWork::new(&state.orm)
        .add(products::ActiveModel {
            id: NotSet,
            name: Set(required(payload.name, "Name")?),
            description: Set(payload.description.trim().to_string()),
            price: Set(payload.price),
            like_count: Set(0),
            status_id: Set(payload.status_id),
            category_id: Set(payload.category_id),
            marketplace_id: Set(payload.marketplace_id),
            store_id: Set(payload.store_id),
            created_at: Set(Utc::now()),
        })
        .await?;

    record(
        &state.orm,
        user.user_id,
        "product_create",
        "products",
        serde_json::json!({ "product_id": product.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Product created",
        product.into(),
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let uow = ProductsUnitOfWork::new(&state.orm);
    ensure_owner(user, uow.owner_of(id).await?)?;

    let mut active: products::ActiveModel = uow.get(id).await?.into();
    if let Some(name) = payload.name {
        active.name = Set(required(name, "Name")?);
    }
    if let Some(description) = payload.description {
        active.description = Set(description.trim().to_string());
    }
    if let Some(price) = payload.price {
        check_price(price)?;
        active.price = Set(price);
    }
    if let Some(category_id) = payload.category_id {
        active.category_id = Set(category_id);
    }
    if let Some(marketplace_id) = payload.marketplace_id {
        active.marketplace_id = Set(marketplace_id);
    }
    if let Some(status_id) = payload.status_id {
        active.status_id = Set(status_id);
    }

    let product = uow.update(active).await?;

    record(
        &state.orm,
        user.user_id,
        "product_update",
        "products",
        serde_json::json!({ "product_id": product.id }),
    )
    .await;

    Ok(ApiResponse::success("Updated", product.into(), Some(Meta::empty())))
}

pub async fn delete_product(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<Removed>> {
    let uow = ProductsUnitOfWork::new(&state.orm);
    ensure_owner(user, uow.owner_of(id).await?)?;
    uow.delete(id).await?;

    record(
        &state.orm,
        user.user_id,
        "product_delete",
        "products",
        serde_json::json!({ "product_id": id }),
    )
    .await;

    Ok(ApiResponse::success("Deleted", Removed { id }, Some(Meta::empty())))
}

fn check_price(price: i64) -> AppResult<()> {
    if price < 0 {
        return Err(AppError::BadRequest("Price cannot be negative".into()));
    }
    Ok(())
}
