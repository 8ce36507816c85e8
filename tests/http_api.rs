mod common;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use reelbuy_api::{routes::build_app, state::AppState};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, body))
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("request")
}

async fn login(app: &Router, email: &str) -> anyhow::Result<String> {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/accounts/login",
            None,
            json!({ "email": email, "password": common::TEST_PASSWORD }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    Ok(body["data"]["token"]
        .as_str()
        .expect("token in login response")
        .to_string())
}

async fn app() -> anyhow::Result<(AppState, Router)> {
    let state = common::setup_state().await?;
    Ok((state.clone(), build_app(state)))
}

#[tokio::test]
async fn register_login_and_read_profile() -> anyhow::Result<()> {
    let (_, app) = app().await?;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/accounts/register",
            None,
            json!({
                "email": "  Ana@Example.com ",
                "password": common::TEST_PASSWORD,
                "first_name": "Ana",
                "last_name": "Gomez"
            }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "User created");
    assert_eq!(body["data"]["email"], "ana@example.com");
    assert!(body["data"].get("password_hash").is_none());

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/accounts/register",
            None,
            json!({
                "email": "ana@example.com",
                "password": common::TEST_PASSWORD,
                "first_name": "Ana",
                "last_name": "Gomez"
            }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email is already taken");

    let token = login(&app, "ana@example.com").await?;
    let (status, body) = send(&app, get_request("/api/accounts/me", Some(&token))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["first_name"], "Ana");
    assert_eq!(body["data"]["role"], "user");
    Ok(())
}

#[tokio::test]
async fn wrong_password_is_rejected() -> anyhow::Result<()> {
    let (state, app) = app().await?;
    common::create_buyer(&state, "buyer@example.com").await?;

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/api/accounts/login",
            None,
            json!({ "email": "buyer@example.com", "password": "not-the-one" }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn protected_routes_need_a_bearer_token() -> anyhow::Result<()> {
    let (_, app) = app().await?;

    let (status, body) = send(&app, get_request("/api/accounts/me", None)).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Missing Authorization header");
    assert_eq!(body["data"]["error"], "Missing Authorization header");

    let (status, _) = send(&app, get_request("/api/favorites", Some("not-a-jwt"))).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn lookup_writes_are_admin_only() -> anyhow::Result<()> {
    let (state, app) = app().await?;
    common::create_admin(&state).await?;
    common::create_buyer(&state, "buyer@example.com").await?;
    let admin = login(&app, "admin@example.com").await?;
    let buyer = login(&app, "buyer@example.com").await?;

    let (status, _) = send(
        &app,
        json_request("POST", "/api/countries", Some(&buyer), json!({ "name": "Chile" })),
    )
    .await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    for name in ["Peru", "Chile", "Mexico"] {
        let (status, body) = send(
            &app,
            json_request("POST", "/api/countries", Some(&admin), json!({ "name": name })),
        )
        .await?;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["message"], "Country created");
    }

    let (status, body) = send(
        &app,
        json_request("POST", "/api/countries", Some(&admin), json!({ "name": "Peru" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Country already exists");

    let (status, body) = send(
        &app,
        get_request("/api/countries/paginated?page=2&recordsNumber=2", Some(&buyer)),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 3);
    assert_eq!(body["meta"]["total_pages"], 2);
    assert_eq!(body["data"]["items"][0]["name"], "Peru");

    let (status, body) = send(
        &app,
        get_request("/api/countries/totalRecordsPaginated?filter=CH", Some(&buyer)),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 1);
    Ok(())
}

#[tokio::test]
async fn product_listing_carries_page_meta() -> anyhow::Result<()> {
    let (state, app) = app().await?;
    let catalog = common::seed_catalog(&state).await?;
    for name in ["Rust Hoodie", "Ferris Mug", "Sticker Pack"] {
        common::add_product(&state, &catalog, name).await?;
    }
    common::create_buyer(&state, "buyer@example.com").await?;
    let token = login(&app, "buyer@example.com").await?;

    let (status, body) = send(
        &app,
        get_request(
            &format!("/api/products/paginated?page=1&per_page=2&id={}", catalog.store_id),
            Some(&token),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["meta"]["page"], 1);
    assert_eq!(body["meta"]["per_page"], 2);
    assert_eq!(body["meta"]["total"], 3);
    assert_eq!(body["data"]["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["data"]["items"][0]["name"], "Ferris Mug");
    Ok(())
}

#[tokio::test]
async fn huge_page_number_returns_an_empty_page() -> anyhow::Result<()> {
    let (state, app) = app().await?;
    common::create_buyer(&state, "buyer@example.com").await?;
    let token = login(&app, "buyer@example.com").await?;

    let (status, body) = send(
        &app,
        get_request(
            &format!("/api/countries/paginated?page={}&per_page=100", i64::MAX),
            Some(&token),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["items"].as_array().map(Vec::len), Some(0));
    assert_eq!(body["meta"]["total"], 0);
    Ok(())
}

#[tokio::test]
async fn unknown_paths_fall_back_to_envelope() -> anyhow::Result<()> {
    let (_, app) = app().await?;

    let (status, body) = send(&app, get_request("/api/nothing-here", None)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
    assert_eq!(body["data"]["path"], "/api/nothing-here");

    let (status, body) = send(&app, get_request("/health", None)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["database"], "ok");
    Ok(())
}
