//! Integration tests for the cart session store.

use souk_core::cart::Cart;
use souk_db::repositories::CartSessionRepo;
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test]
async fn test_first_touch_creates_empty_session(pool: PgPool) {
    let session = CartSessionRepo::load_or_create(&pool, None)
        .await
        .expect("load_or_create should succeed");

    assert_eq!(session.cart, serde_json::json!({}));

    // The row was written back immediately: a re-load under the returned
    // token finds it.
    let reloaded = CartSessionRepo::find(&pool, session.token)
        .await
        .unwrap()
        .expect("session must persist from first touch");
    assert_eq!(reloaded.cart, serde_json::json!({}));
}

#[sqlx::test]
async fn test_unknown_token_yields_a_fresh_session(pool: PgPool) {
    let stale = Uuid::new_v4();
    let session = CartSessionRepo::load_or_create(&pool, Some(stale))
        .await
        .unwrap();

    assert_ne!(session.token, stale, "unknown tokens are not resurrected");
}

#[sqlx::test]
async fn test_save_round_trips_cart_payload(pool: PgPool) {
    let session = CartSessionRepo::load_or_create(&pool, None).await.unwrap();

    let mut cart = Cart::new();
    cart.add(42, 2, false);
    let saved = CartSessionRepo::save(&pool, session.token, &cart.to_json())
        .await
        .unwrap();
    assert!(saved);

    let reloaded = CartSessionRepo::load_or_create(&pool, Some(session.token))
        .await
        .unwrap();
    assert_eq!(reloaded.token, session.token);

    let decoded = Cart::from_json(&reloaded.cart).expect("stored cart must decode");
    assert_eq!(decoded.count(), 2);
}

#[sqlx::test]
async fn test_delete_removes_session(pool: PgPool) {
    let session = CartSessionRepo::load_or_create(&pool, None).await.unwrap();

    assert!(CartSessionRepo::delete(&pool, session.token).await.unwrap());
    assert!(CartSessionRepo::find(&pool, session.token).await.unwrap().is_none());

    // Clearing an already-cleared session is a silent no-op.
    assert!(!CartSessionRepo::delete(&pool, session.token).await.unwrap());
}
