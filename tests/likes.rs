mod common;

use reelbuy_api::{
    error::AppError, pagination::PaginationQuery, services::like_service,
    unit_of_work::LikesUnitOfWork,
};

#[tokio::test]
async fn like_and_unlike_move_the_counter() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let catalog = common::seed_catalog(&state).await?;
    let product = common::add_product(&state, &catalog, "Ferris Plush").await?;
    let alice = common::create_buyer(&state, "alice@example.com").await?;
    let bob = common::create_buyer(&state, "bob@example.com").await?;
    let likes = LikesUnitOfWork::new(&state.orm);

    assert_eq!(likes.like(alice.user_id, product.id).await?.like_count, 1);
    assert_eq!(likes.like(bob.user_id, product.id).await?.like_count, 2);
    assert_eq!(likes.status(alice.user_id, product.id).await?, (true, 2));

    assert_eq!(likes.unlike(alice.user_id, product.id).await?.like_count, 1);
    assert_eq!(likes.status(alice.user_id, product.id).await?, (false, 1));
    Ok(())
}

#[tokio::test]
async fn second_like_is_rejected_without_counting() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let catalog = common::seed_catalog(&state).await?;
    let product = common::add_product(&state, &catalog, "Ferris Plush").await?;
    let alice = common::create_buyer(&state, "alice@example.com").await?;
    let likes = LikesUnitOfWork::new(&state.orm);

    likes.like(alice.user_id, product.id).await?;
    let err = likes.like(alice.user_id, product.id).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "Like already exists"));
    assert_eq!(likes.status(alice.user_id, product.id).await?, (true, 1));
    Ok(())
}

#[tokio::test]
async fn unlike_without_like_is_not_found() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let catalog = common::seed_catalog(&state).await?;
    let product = common::add_product(&state, &catalog, "Ferris Plush").await?;
    let alice = common::create_buyer(&state, "alice@example.com").await?;
    let likes = LikesUnitOfWork::new(&state.orm);

    let err = likes.unlike(alice.user_id, product.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Like not found"));

    let err = likes.like(alice.user_id, 999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Product not found"));
    Ok(())
}

#[tokio::test]
async fn liked_products_lists_only_the_users_likes() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let catalog = common::seed_catalog(&state).await?;
    let hoodie = common::add_product(&state, &catalog, "Rust Hoodie").await?;
    let mug = common::add_product(&state, &catalog, "Ferris Mug").await?;
    common::add_product(&state, &catalog, "Sticker Pack").await?;
    let alice = common::create_buyer(&state, "alice@example.com").await?;
    let bob = common::create_buyer(&state, "bob@example.com").await?;

    like_service::like_product(&state, &alice, hoodie.id).await?;
    like_service::like_product(&state, &alice, mug.id).await?;
    like_service::like_product(&state, &bob, mug.id).await?;

    let response =
        like_service::liked_products(&state, &alice, PaginationQuery::default()).await?;
    let names: Vec<_> = response
        .data
        .map(|list| list.items.into_iter().map(|p| p.name).collect())
        .unwrap_or_default();
    assert_eq!(names, ["Ferris Mug", "Rust Hoodie"]);
    assert_eq!(response.meta.and_then(|meta| meta.total), Some(2));

    let status = like_service::like_status(&state, &bob, hoodie.id).await?;
    let status = status.data.expect("like status");
    assert!(!status.liked);
    assert_eq!(status.like_count, 1);
    Ok(())
}
