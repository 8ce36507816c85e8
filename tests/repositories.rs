mod common;

use chrono::Utc;
use reelbuy_api::{
    entity::{Countries, countries, departments, reels},
    error::AppError,
    pagination::PaginationQuery,
    repositories::lookups::LookupEntity,
    unit_of_work::{
        DepartmentsUnitOfWork, FavoritesUnitOfWork, LookupUnitOfWork, ProductsUnitOfWork,
        ReelsUnitOfWork,
    },
};
use sea_orm::ActiveValue::{NotSet, Set};

fn page(page: i64, per_page: i64) -> PaginationQuery {
    PaginationQuery {
        page: Some(page),
        per_page: Some(per_page),
        ..Default::default()
    }
}

#[tokio::test]
async fn add_assigns_id_and_get_reads_it_back() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let countries = LookupUnitOfWork::<Countries>::new(&state.orm);

    let created = countries.add(Countries::new_active("Colombia".into())).await?;
    assert!(created.id > 0);

    let fetched = countries.get(created.id).await?;
    assert_eq!(fetched.name, "Colombia");
    Ok(())
}

#[tokio::test]
async fn missing_ids_are_not_found() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let products = ProductsUnitOfWork::new(&state.orm);

    let err = products.get(999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Product not found"));

    let err = products.delete(999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn duplicate_lookup_name_is_a_bad_request() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let countries = LookupUnitOfWork::<Countries>::new(&state.orm);

    countries.add(Countries::new_active("Peru".into())).await?;
    let err = countries
        .add(Countries::new_active("Peru".into()))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "Country already exists"));
    Ok(())
}

#[tokio::test]
async fn pages_cover_every_record_once() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let catalog = common::seed_catalog(&state).await?;
    for n in 1..=7 {
        common::add_product(&state, &catalog, &format!("Item {n:02}")).await?;
    }
    let products = ProductsUnitOfWork::new(&state.orm);

    let first = products.get_paginated(&page(1, 3)).await?;
    assert_eq!(first.total, 7);
    assert_eq!(first.total_pages(), 3);
    assert_eq!(first.items.len(), 3);
    assert_eq!(first.items[0].name, "Item 01");

    let last = products.get_paginated(&page(3, 3)).await?;
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.items[0].name, "Item 07");

    let beyond = products.get_paginated(&page(4, 3)).await?;
    assert!(beyond.items.is_empty());

    let meta = first.meta();
    assert_eq!(meta.total_pages, Some(3));
    assert_eq!(meta.per_page, Some(3));
    Ok(())
}

#[tokio::test]
async fn filter_matches_case_insensitively() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let catalog = common::seed_catalog(&state).await?;
    common::add_product(&state, &catalog, "Rust Hoodie").await?;
    common::add_product(&state, &catalog, "Ferris Mug").await?;
    common::add_product(&state, &catalog, "Sticker Pack").await?;
    let products = ProductsUnitOfWork::new(&state.orm);

    let query = PaginationQuery {
        filter: Some("HOODIE".into()),
        ..Default::default()
    };
    let found = products.get_paginated(&query).await?;
    assert_eq!(found.total, 1);
    assert_eq!(found.items[0].name, "Rust Hoodie");
    assert_eq!(products.count(&query).await?, 1);

    // Description is searched too.
    let query = PaginationQuery {
        filter: Some("mug desc".into()),
        ..Default::default()
    };
    assert_eq!(products.count(&query).await?, 1);
    Ok(())
}

#[tokio::test]
async fn like_wildcards_in_filter_match_literally() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let catalog = common::seed_catalog(&state).await?;
    common::add_product(&state, &catalog, "Hoodie 50% off").await?;
    common::add_product(&state, &catalog, "Ferris Mug").await?;
    common::add_product(&state, &catalog, "Sticker_Pack").await?;
    let products = ProductsUnitOfWork::new(&state.orm);

    let filter = |term: &str| PaginationQuery {
        filter: Some(term.into()),
        ..Default::default()
    };
    assert_eq!(products.count(&filter("%")).await?, 1);
    assert_eq!(products.count(&filter("50%")).await?, 1);
    assert_eq!(products.count(&filter("_")).await?, 1);
    assert_eq!(products.count(&filter("r_p")).await?, 1);
    // Would match "off" if `_` were a wildcard.
    assert_eq!(products.count(&filter("o_f")).await?, 0);
    Ok(())
}

#[tokio::test]
async fn departments_are_scoped_to_their_country() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let countries = LookupUnitOfWork::<Countries>::new(&state.orm);
    let colombia = countries.add(Countries::new_active("Colombia".into())).await?;
    let mexico = countries.add(Countries::new_active("Mexico".into())).await?;

    let departments = DepartmentsUnitOfWork::new(&state.orm);
    for (name, country) in [("Antioquia", &colombia), ("Caldas", &colombia), ("Jalisco", &mexico)] {
        departments
            .add(departments::ActiveModel {
                id: NotSet,
                name: Set(name.into()),
                country_id: Set(country.id),
            })
            .await?;
    }

    let combo = departments.combo(colombia.id).await?;
    let names: Vec<_> = combo.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Antioquia", "Caldas"]);

    let scoped = departments
        .get_paginated(&PaginationQuery {
            id: Some(mexico.id),
            ..Default::default()
        })
        .await?;
    assert_eq!(scoped.total, 1);

    let err = departments.combo(404).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Country not found"));

    // A country with departments cannot be removed.
    let err = countries.delete(colombia.id).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    Ok(())
}

#[tokio::test]
async fn lookup_combo_is_sorted_by_name() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let countries = LookupUnitOfWork::<countries::Entity>::new(&state.orm);
    for name in ["Peru", "Chile", "Mexico"] {
        countries.add(countries::Entity::new_active(name.into())).await?;
    }

    let names: Vec<_> = countries
        .combo()
        .await?
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, ["Chile", "Mexico", "Peru"]);
    Ok(())
}

#[tokio::test]
async fn favorite_blocks_product_delete_until_removed() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let catalog = common::seed_catalog(&state).await?;
    let buyer = common::create_buyer(&state, "buyer@example.com").await?;
    let product = common::add_product(&state, &catalog, "Ferris Plush").await?;

    let favorites = FavoritesUnitOfWork::new(&state.orm);
    favorites.add_for(buyer.user_id, product.id).await?;

    let products = ProductsUnitOfWork::new(&state.orm);
    let err = products.delete(product.id).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::BadRequest(ref msg) if msg == "Product cannot be deleted while other records reference it"
    ));

    favorites.remove_for(buyer.user_id, product.id).await?;
    products.delete(product.id).await?;
    assert!(matches!(products.get(product.id).await, Err(AppError::NotFound(_))));
    Ok(())
}

#[tokio::test]
async fn duplicate_favorite_is_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let catalog = common::seed_catalog(&state).await?;
    let buyer = common::create_buyer(&state, "buyer@example.com").await?;
    let product = common::add_product(&state, &catalog, "Ferris Plush").await?;
    let favorites = FavoritesUnitOfWork::new(&state.orm);

    favorites.add_for(buyer.user_id, product.id).await?;
    let err = favorites.add_for(buyer.user_id, product.id).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "Favorite already exists"));

    let listed = favorites
        .products_of(buyer.user_id, &PaginationQuery::default())
        .await?;
    assert_eq!(listed.total, 1);
    assert_eq!(listed.items[0].id, product.id);

    let err = favorites.add_for(buyer.user_id, 999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn reels_go_with_their_product() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let catalog = common::seed_catalog(&state).await?;
    let product = common::add_product(&state, &catalog, "Ferris Plush").await?;

    let reels_uow = ReelsUnitOfWork::new(&state.orm);
    for name in ["Unboxing", "Close-up"] {
        reels_uow
            .add(reels::ActiveModel {
                id: NotSet,
                name: Set(name.into()),
                reel_uri: Set(format!("https://cdn.example/{name}.mp4")),
                product_id: Set(product.id),
                created_at: Set(Utc::now()),
            })
            .await?;
    }

    let products = ProductsUnitOfWork::new(&state.orm);
    let (_, reels) = products.detail(product.id).await?;
    assert_eq!(reels.len(), 2);
    assert_eq!(reels_uow.by_product(product.id).await?.len(), 2);
    assert_eq!(reels_uow.owner_of(reels[0].id).await?, catalog.seller.user_id);

    products.delete(product.id).await?;
    assert!(reels_uow.get_all().await?.is_empty());
    Ok(())
}
