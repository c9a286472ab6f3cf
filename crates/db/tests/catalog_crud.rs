//! Integration tests for the catalog repository layer.
//!
//! Exercises users, categories, and products against a real database:
//! creation, slug lookups, status filtering, vendor scoping, search,
//! and unique constraint violations.

use souk_core::catalog::{STATUS_ACTIVE, STATUS_DELETED};
use souk_db::models::category::CreateCategory;
use souk_db::models::product::{CreateProduct, UpdateProduct};
use souk_db::models::user::CreateUser;
use souk_db::repositories::{CategoryRepo, ProductRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_user(pool: &PgPool, username: &str) -> souk_db::models::user::User {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: "$argon2id$fake-hash".to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

async fn create_category(pool: &PgPool, title: &str, slug: &str) -> souk_db::models::category::Category {
    CategoryRepo::create(
        pool,
        &CreateCategory {
            title: title.to_string(),
            slug: slug.to_string(),
        },
    )
    .await
    .expect("category creation should succeed")
}

fn new_product(category_id: i64, title: &str, price: i64) -> CreateProduct {
    CreateProduct {
        category_id,
        title: title.to_string(),
        description: String::new(),
        price,
        image_url: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_create_and_find_product(pool: PgPool) {
    let user = create_user(&pool, "vendor1").await;
    let category = create_category(&pool, "Shirts", "shirts").await;

    let product = ProductRepo::create(
        &pool,
        user.id,
        "blue-shirt",
        &new_product(category.id, "Blue Shirt", 500),
    )
    .await
    .expect("product creation should succeed");

    assert_eq!(product.title, "Blue Shirt");
    assert_eq!(product.slug, "blue-shirt");
    assert_eq!(product.price, 500);
    assert_eq!(product.status, STATUS_ACTIVE, "new products default to active");

    let found = ProductRepo::find_active_by_slug(&pool, "blue-shirt")
        .await
        .expect("lookup should succeed")
        .expect("product should exist");
    assert_eq!(found.id, product.id);
}

#[sqlx::test]
async fn test_duplicate_slug_violates_unique_constraint(pool: PgPool) {
    let user = create_user(&pool, "vendor1").await;
    let category = create_category(&pool, "Shirts", "shirts").await;

    ProductRepo::create(&pool, user.id, "shirt", &new_product(category.id, "Shirt", 500))
        .await
        .expect("first creation should succeed");

    let err = ProductRepo::create(&pool, user.id, "shirt", &new_product(category.id, "Shirt", 600))
        .await
        .expect_err("duplicate slug must be rejected");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_products_slug"));
        }
        other => panic!("expected a database error, got: {other:?}"),
    }
}

#[sqlx::test]
async fn test_soft_delete_hides_from_listings_but_not_id_lookup(pool: PgPool) {
    let user = create_user(&pool, "vendor1").await;
    let category = create_category(&pool, "Shirts", "shirts").await;
    let product = ProductRepo::create(
        &pool,
        user.id,
        "blue-shirt",
        &new_product(category.id, "Blue Shirt", 500),
    )
    .await
    .unwrap();

    let deleted = ProductRepo::soft_delete_owned(&pool, product.id, user.id)
        .await
        .expect("soft delete should succeed");
    assert!(deleted);

    // Gone from active listings and slug lookup.
    assert!(ProductRepo::list_active(&pool).await.unwrap().is_empty());
    assert!(ProductRepo::find_active_by_slug(&pool, "blue-shirt")
        .await
        .unwrap()
        .is_none());

    // Gone from the vendor's own dashboard too.
    assert!(ProductRepo::list_for_vendor(&pool, user.id)
        .await
        .unwrap()
        .is_empty());

    // Still resolvable by id so carts and order history keep working.
    let by_id = ProductRepo::find_by_id(&pool, product.id)
        .await
        .unwrap()
        .expect("id lookup must still resolve");
    assert_eq!(by_id.status, STATUS_DELETED);
}

#[sqlx::test]
async fn test_soft_delete_requires_ownership(pool: PgPool) {
    let owner = create_user(&pool, "owner").await;
    let other = create_user(&pool, "other").await;
    let category = create_category(&pool, "Shirts", "shirts").await;
    let product = ProductRepo::create(
        &pool,
        owner.id,
        "blue-shirt",
        &new_product(category.id, "Blue Shirt", 500),
    )
    .await
    .unwrap();

    let deleted = ProductRepo::soft_delete_owned(&pool, product.id, other.id)
        .await
        .expect("query should succeed");
    assert!(!deleted, "another vendor must not be able to delete the product");
}

#[sqlx::test]
async fn test_update_owned_applies_partial_changes(pool: PgPool) {
    let user = create_user(&pool, "vendor1").await;
    let category = create_category(&pool, "Shirts", "shirts").await;
    let product = ProductRepo::create(
        &pool,
        user.id,
        "blue-shirt",
        &new_product(category.id, "Blue Shirt", 500),
    )
    .await
    .unwrap();

    let updated = ProductRepo::update_owned(
        &pool,
        product.id,
        user.id,
        &UpdateProduct {
            category_id: None,
            title: None,
            description: None,
            price: Some(750),
            image_url: None,
        },
    )
    .await
    .unwrap()
    .expect("update of own product should return the row");

    assert_eq!(updated.price, 750);
    assert_eq!(updated.title, "Blue Shirt", "unset fields stay unchanged");

    // Updating someone else's product returns None.
    let other = create_user(&pool, "other").await;
    let denied = ProductRepo::update_owned(
        &pool,
        product.id,
        other.id,
        &UpdateProduct {
            category_id: None,
            title: Some("Hijacked".to_string()),
            description: None,
            price: None,
            image_url: None,
        },
    )
    .await
    .unwrap();
    assert!(denied.is_none());
}

#[sqlx::test]
async fn test_search_matches_title_and_description(pool: PgPool) {
    let user = create_user(&pool, "vendor1").await;
    let category = create_category(&pool, "Misc", "misc").await;

    ProductRepo::create(
        &pool,
        user.id,
        "wool-scarf",
        &CreateProduct {
            category_id: category.id,
            title: "Wool Scarf".to_string(),
            description: "Warm winter accessory".to_string(),
            price: 1200,
            image_url: None,
        },
    )
    .await
    .unwrap();
    ProductRepo::create(
        &pool,
        user.id,
        "tea-mug",
        &CreateProduct {
            category_id: category.id,
            title: "Tea Mug".to_string(),
            description: "Ceramic, holds warmth".to_string(),
            price: 800,
            image_url: None,
        },
    )
    .await
    .unwrap();

    // Case-insensitive title match.
    let hits = ProductRepo::search_active(&pool, "wool").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].slug, "wool-scarf");

    // Description match hits both.
    let hits = ProductRepo::search_active(&pool, "warm").await.unwrap();
    assert_eq!(hits.len(), 2);

    // LIKE metacharacters are escaped, not interpreted.
    let hits = ProductRepo::search_active(&pool, "%").await.unwrap();
    assert!(hits.is_empty());
}

#[sqlx::test]
async fn test_category_listing_and_scoping(pool: PgPool) {
    let user = create_user(&pool, "vendor1").await;
    let shirts = create_category(&pool, "Shirts", "shirts").await;
    let mugs = create_category(&pool, "Mugs", "mugs").await;

    ProductRepo::create(&pool, user.id, "shirt-1", &new_product(shirts.id, "Shirt", 500))
        .await
        .unwrap();
    ProductRepo::create(&pool, user.id, "mug-1", &new_product(mugs.id, "Mug", 300))
        .await
        .unwrap();

    let listed = CategoryRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].title, "Mugs", "menu listing is alphabetical");

    let in_shirts = ProductRepo::list_active_by_category(&pool, shirts.id)
        .await
        .unwrap();
    assert_eq!(in_shirts.len(), 1);
    assert_eq!(in_shirts[0].slug, "shirt-1");

    let found = CategoryRepo::find_by_slug(&pool, "mugs").await.unwrap();
    assert!(found.is_some());
    assert!(CategoryRepo::find_by_slug(&pool, "hats").await.unwrap().is_none());
}
