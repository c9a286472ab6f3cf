//! Handlers for the public catalog: front page, search, categories,
//! product detail, and product reviews.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use souk_core::error::CoreError;
use souk_core::types::DbId;
use souk_core::{money, review};
use souk_db::models::category::Category;
use souk_db::models::product::Product;
use souk_db::models::review::{CreateReview, Review};
use souk_db::repositories::{CategoryRepo, ProductRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A product with its display price, as shown in listings.
#[derive(Debug, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub display_price: rust_decimal::Decimal,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        let display_price = money::display_price(product.price);
        Self {
            product,
            display_price,
        }
    }
}

/// Category detail: the category plus its active products.
#[derive(Debug, Serialize)]
pub struct CategoryDetail {
    pub category: Category,
    pub products: Vec<ProductView>,
}

/// Product detail: the product plus its reviews and average rating.
#[derive(Debug, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: ProductView,
    pub reviews: Vec<Review>,
    pub average_rating: f64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/products
///
/// Front-page listing: all active products, newest first.
pub async fn list_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = ProductRepo::list_active(&state.pool).await?;
    let views: Vec<ProductView> = products.into_iter().map(Into::into).collect();

    Ok(Json(DataResponse { data: views }))
}

/// GET /api/v1/products/search?query=
///
/// Case-insensitive substring search over title and description of active
/// products. An empty query matches everything.
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let products = ProductRepo::search_active(&state.pool, &params.query).await?;
    let views: Vec<ProductView> = products.into_iter().map(Into::into).collect();

    Ok(Json(DataResponse { data: views }))
}

/// GET /api/v1/categories
///
/// All categories for the storefront menu.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/v1/categories/{slug}
///
/// Category detail with its active products.
pub async fn category_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: slug,
        }))?;

    let products = ProductRepo::list_active_by_category(&state.pool, category.id).await?;
    let products: Vec<ProductView> = products.into_iter().map(Into::into).collect();

    Ok(Json(DataResponse {
        data: CategoryDetail { category, products },
    }))
}

/// GET /api/v1/products/{category_slug}/{slug}
///
/// Product detail by slug, active products only. The category slug is part
/// of the canonical URL shape but the product slug alone identifies the row.
pub async fn product_detail(
    State(state): State<AppState>,
    Path((_category_slug, slug)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::find_active_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: slug,
        }))?;

    let reviews = ReviewRepo::list_for_product(&state.pool, product.id).await?;
    let average_rating = ReviewRepo::average_rating(&state.pool, product.id).await?;

    Ok(Json(DataResponse {
        data: ProductDetail {
            product: product.into(),
            reviews,
            average_rating,
        },
    }))
}

/// POST /api/v1/products/{id}/reviews
///
/// Create or update the caller's review of a product. One review per user
/// per product: a second submission replaces the first.
pub async fn create_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    Json(input): Json<CreateReview>,
) -> AppResult<impl IntoResponse> {
    review::validate_rating(input.rating)?;
    review::validate_content(&input.content)?;

    let product = ProductRepo::find_by_id(&state.pool, product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id.to_string(),
        }))?;

    let saved = ReviewRepo::upsert(&state.pool, product.id, auth.user_id, &input).await?;

    tracing::info!(
        product_id,
        user_id = auth.user_id,
        rating = input.rating,
        "Review saved",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: saved })))
}
