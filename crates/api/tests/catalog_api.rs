//! HTTP-level integration tests for the public catalog and reviews.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json_auth, seed_category, signup_vendor};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a product through the vendor API, returning its JSON.
async fn create_product_via_api(
    app: axum::Router,
    vendor_token: &str,
    category_id: i64,
    title: &str,
    price: i64,
) -> serde_json::Value {
    let body = serde_json::json!({
        "category_id": category_id,
        "title": title,
        "description": format!("{title} description"),
        "price": price,
    });
    let response = post_json_auth(app, "/api/v1/vendor/products", body, vendor_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Catalog browsing
// ---------------------------------------------------------------------------

/// The front page lists active products newest-first with display prices.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_front_page_listing(pool: PgPool) {
    let category = seed_category(&pool, "Shirts", "shirts").await;
    let app = common::build_test_app(pool);

    let vendor = signup_vendor(app.clone(), "vendor1").await;
    let token = vendor["access_token"].as_str().unwrap();

    create_product_via_api(app.clone(), token, category.id, "Old Shirt", 500).await;
    create_product_via_api(app.clone(), token, category.id, "New Shirt", 750).await;

    let response = get(app, "/api/v1/products").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let products = json["data"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["title"], "New Shirt", "newest first");
    assert_eq!(products[0]["display_price"], "7.50");
    assert_eq!(products[1]["display_price"], "5.00");
}

/// Search matches title or description, case-insensitively.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search(pool: PgPool) {
    let category = seed_category(&pool, "Misc", "misc").await;
    let app = common::build_test_app(pool);

    let vendor = signup_vendor(app.clone(), "vendor1").await;
    let token = vendor["access_token"].as_str().unwrap();

    create_product_via_api(app.clone(), token, category.id, "Wool Scarf", 1200).await;
    create_product_via_api(app.clone(), token, category.id, "Tea Mug", 800).await;

    let response = get(app.clone(), "/api/v1/products/search?query=WOOL").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["title"], "Wool Scarf");

    // An empty query matches everything.
    let response = get(app, "/api/v1/products/search").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

/// Category detail returns the category and its active products; unknown
/// slugs are 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_category_detail(pool: PgPool) {
    let shirts = seed_category(&pool, "Shirts", "shirts").await;
    seed_category(&pool, "Mugs", "mugs").await;
    let app = common::build_test_app(pool);

    let vendor = signup_vendor(app.clone(), "vendor1").await;
    let token = vendor["access_token"].as_str().unwrap();
    create_product_via_api(app.clone(), token, shirts.id, "Blue Shirt", 500).await;

    let response = get(app.clone(), "/api/v1/categories").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let response = get(app.clone(), "/api/v1/categories/shirts").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["category"]["title"], "Shirts");
    assert_eq!(json["data"]["products"].as_array().unwrap().len(), 1);

    let response = get(app.clone(), "/api/v1/categories/mugs").await;
    let json = body_json(response).await;
    assert!(json["data"]["products"].as_array().unwrap().is_empty());

    let response = get(app, "/api/v1/categories/hats").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Product detail resolves by slug, actives only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_product_detail(pool: PgPool) {
    let category = seed_category(&pool, "Shirts", "shirts").await;
    let app = common::build_test_app(pool.clone());

    let vendor = signup_vendor(app.clone(), "vendor1").await;
    let token = vendor["access_token"].as_str().unwrap();
    let product = create_product_via_api(app.clone(), token, category.id, "Blue Shirt", 500).await;
    assert_eq!(product["data"]["slug"], "blue-shirt");

    let response = get(app.clone(), "/api/v1/categories/shirts/blue-shirt").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Blue Shirt");
    assert_eq!(json["data"]["display_price"], "5.00");
    assert_eq!(json["data"]["average_rating"], 0.0);
    assert!(json["data"]["reviews"].as_array().unwrap().is_empty());

    let response = get(app, "/api/v1/categories/shirts/no-such-slug").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

/// One review per user per product: a second submission replaces the
/// first, and the average reflects all reviewers.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_review_upsert_and_average(pool: PgPool) {
    let category = seed_category(&pool, "Shirts", "shirts").await;
    let app = common::build_test_app(pool);

    let vendor = signup_vendor(app.clone(), "vendor1").await;
    let vendor_token = vendor["access_token"].as_str().unwrap();
    let product = create_product_via_api(app.clone(), vendor_token, category.id, "Blue Shirt", 500).await;
    let product_id = product["data"]["id"].as_i64().unwrap();

    let alice = common::signup_user(app.clone(), "alice").await;
    let alice_token = alice["access_token"].as_str().unwrap().to_string();
    let bob = common::signup_user(app.clone(), "bob").await;
    let bob_token = bob["access_token"].as_str().unwrap().to_string();

    let uri = format!("/api/v1/products/{product_id}/reviews");

    let body = serde_json::json!({ "rating": 5, "content": "Love it" });
    let response = post_json_auth(app.clone(), &uri, body, &alice_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = serde_json::json!({ "rating": 2, "content": "Shrank in the wash" });
    let response = post_json_auth(app.clone(), &uri, body, &bob_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Alice revises her review; it replaces the old one.
    let body = serde_json::json!({ "rating": 4, "content": "Still good" });
    let response = post_json_auth(app.clone(), &uri, body, &alice_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(app, "/api/v1/categories/shirts/blue-shirt").await;
    let json = body_json(response).await;
    let reviews = json["data"]["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 2, "one review per user");
    assert_eq!(json["data"]["average_rating"], 3.0, "(4 + 2) / 2");

    let alices = reviews
        .iter()
        .find(|r| r["username"] == "alice")
        .expect("alice's review");
    assert_eq!(alices["rating"], 4);
    assert_eq!(alices["content"], "Still good");
}

/// Reviews require auth and valid fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_review_validation(pool: PgPool) {
    let category = seed_category(&pool, "Shirts", "shirts").await;
    let app = common::build_test_app(pool);

    let vendor = signup_vendor(app.clone(), "vendor1").await;
    let vendor_token = vendor["access_token"].as_str().unwrap();
    let product = create_product_via_api(app.clone(), vendor_token, category.id, "Blue Shirt", 500).await;
    let product_id = product["data"]["id"].as_i64().unwrap();

    let user = common::signup_user(app.clone(), "alice").await;
    let token = user["access_token"].as_str().unwrap().to_string();

    let uri = format!("/api/v1/products/{product_id}/reviews");

    // No auth.
    let body = serde_json::json!({ "rating": 5, "content": "Love it" });
    let response = common::post_json(app.clone(), &uri, body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Rating out of range.
    let body = serde_json::json!({ "rating": 6, "content": "Love it" });
    let response = post_json_auth(app.clone(), &uri, body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Blank content.
    let body = serde_json::json!({ "rating": 3, "content": "  " });
    let response = post_json_auth(app.clone(), &uri, body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown product.
    let body = serde_json::json!({ "rating": 3, "content": "ok" });
    let response = post_json_auth(app, "/api/v1/products/424242/reviews", body, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
