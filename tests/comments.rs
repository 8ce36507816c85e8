mod common;

use reelbuy_api::{
    dto::comments::{CreateCommentRequest, UpdateCommentRequest},
    error::AppError,
    pagination::PaginationQuery,
    services::{comment_service, product_service},
};

fn comment_on(product_id: i32, text: &str) -> CreateCommentRequest {
    CreateCommentRequest {
        product_id,
        description: text.to_string(),
    }
}

#[tokio::test]
async fn author_edits_and_strangers_are_forbidden() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let catalog = common::seed_catalog(&state).await?;
    let product = common::add_product(&state, &catalog, "Ferris Plush").await?;
    let author = common::create_buyer(&state, "author@example.com").await?;
    let stranger = common::create_buyer(&state, "stranger@example.com").await?;

    let created = comment_service::create_comment(&state, &author, comment_on(product.id, " Soft! "))
        .await?
        .data
        .expect("comment");
    assert_eq!(created.description, "Soft!");
    assert_eq!(created.user_id, author.user_id);

    let err = comment_service::update_comment(
        &state,
        &stranger,
        created.id,
        UpdateCommentRequest {
            description: "Mine now".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));

    let err = comment_service::delete_comment(&state, &stranger, created.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));

    let updated = comment_service::update_comment(
        &state,
        &author,
        created.id,
        UpdateCommentRequest {
            description: "Very soft".into(),
        },
    )
    .await?
    .data
    .expect("comment");
    assert_eq!(updated.description, "Very soft");

    comment_service::delete_comment(&state, &author, created.id).await?;
    let err = comment_service::get_comment(&state, created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Comment not found"));
    Ok(())
}

#[tokio::test]
async fn admin_may_remove_any_comment() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let catalog = common::seed_catalog(&state).await?;
    let product = common::add_product(&state, &catalog, "Ferris Plush").await?;
    let author = common::create_buyer(&state, "author@example.com").await?;
    let admin = common::create_admin(&state).await?;

    let created = comment_service::create_comment(&state, &author, comment_on(product.id, "Spam"))
        .await?
        .data
        .expect("comment");
    comment_service::delete_comment(&state, &admin, created.id).await?;
    Ok(())
}

#[tokio::test]
async fn invalid_comments_are_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let catalog = common::seed_catalog(&state).await?;
    let product = common::add_product(&state, &catalog, "Ferris Plush").await?;
    let author = common::create_buyer(&state, "author@example.com").await?;

    let err = comment_service::create_comment(&state, &author, comment_on(product.id, "   "))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let long = "a".repeat(1001);
    let err = comment_service::create_comment(&state, &author, comment_on(product.id, &long))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = comment_service::create_comment(&state, &author, comment_on(999, "Hello"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Product not found"));
    Ok(())
}

#[tokio::test]
async fn counts_and_pages_are_scoped_to_the_product() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let catalog = common::seed_catalog(&state).await?;
    let plush = common::add_product(&state, &catalog, "Ferris Plush").await?;
    let mug = common::add_product(&state, &catalog, "Ferris Mug").await?;
    let author = common::create_buyer(&state, "author@example.com").await?;

    for text in ["First", "Second", "Third"] {
        comment_service::create_comment(&state, &author, comment_on(plush.id, text)).await?;
    }
    comment_service::create_comment(&state, &author, comment_on(mug.id, "Nice mug")).await?;

    let count = comment_service::count_for_product(&state, plush.id).await?;
    assert_eq!(count.data.map(|c| c.total), Some(3));
    let count = comment_service::count_for_product(&state, mug.id).await?;
    assert_eq!(count.data.map(|c| c.total), Some(1));

    let err = comment_service::count_for_product(&state, 999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let page = comment_service::paginate_comments(
        &state,
        PaginationQuery {
            id: Some(plush.id),
            per_page: Some(2),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(page.data.map(|list| list.items.len()), Some(2));
    assert_eq!(page.meta.and_then(|meta| meta.total_pages), Some(2));
    Ok(())
}

#[tokio::test]
async fn comment_blocks_product_delete_until_removed() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let catalog = common::seed_catalog(&state).await?;
    let product = common::add_product(&state, &catalog, "Ferris Plush").await?;
    let author = common::create_buyer(&state, "author@example.com").await?;

    let comment = comment_service::create_comment(&state, &author, comment_on(product.id, "Cute"))
        .await?
        .data
        .expect("comment");

    let err = product_service::delete_product(&state, &catalog.seller, product.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::BadRequest(ref msg) if msg == "Product cannot be deleted while other records reference it"
    ));

    comment_service::delete_comment(&state, &author, comment.id).await?;
    product_service::delete_product(&state, &catalog.seller, product.id).await?;
    Ok(())
}
