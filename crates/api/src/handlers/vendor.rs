//! Handlers for vendor pages: the public vendor profile and the vendor's
//! own product and order management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use souk_core::catalog;
use souk_core::error::CoreError;
use souk_core::types::DbId;
use souk_db::models::product::{CreateProduct, Product, UpdateProduct};
use souk_db::models::user::VendorProfile;
use souk_db::repositories::{CategoryRepo, OrderRepo, ProductRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireVendor;
use crate::response::DataResponse;
use crate::state::AppState;

/// Public vendor page: profile plus active products.
#[derive(Debug, Serialize)]
pub struct VendorDetail {
    pub vendor: VendorProfile,
    pub products: Vec<Product>,
}

// ---------------------------------------------------------------------------
// Public vendor page
// ---------------------------------------------------------------------------

/// GET /api/v1/vendors/{id}
///
/// A vendor's public page: username and active products.
pub async fn vendor_detail(
    State(state): State<AppState>,
    Path(vendor_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let vendor = UserRepo::find_vendor_profile(&state.pool, vendor_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vendor",
            id: vendor_id.to_string(),
        }))?;

    let products = ProductRepo::list_active_by_user(&state.pool, vendor_id).await?;

    Ok(Json(DataResponse {
        data: VendorDetail { vendor, products },
    }))
}

// ---------------------------------------------------------------------------
// Vendor product management
// ---------------------------------------------------------------------------

/// GET /api/v1/vendor/products
///
/// The caller's own products, excluding soft-deleted ones.
pub async fn my_products(
    RequireVendor(vendor): RequireVendor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let products = ProductRepo::list_for_vendor(&state.pool, vendor.user_id).await?;

    Ok(Json(DataResponse { data: products }))
}

/// POST /api/v1/vendor/products
///
/// Create a product owned by the caller. The slug is generated from the
/// title; a duplicate slug is a 409.
pub async fn create_product(
    RequireVendor(vendor): RequireVendor,
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    catalog::validate_title(&input.title)?;
    catalog::validate_description(&input.description)?;
    catalog::validate_price(input.price)?;

    let category = CategoryRepo::find_by_id(&state.pool, input.category_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: input.category_id.to_string(),
        }))?;

    let slug = catalog::slugify(&input.title);
    if slug.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Product title must contain at least one alphanumeric character".into(),
        )));
    }

    let product = ProductRepo::create(&state.pool, vendor.user_id, &slug, &input).await?;

    tracing::info!(
        product_id = product.id,
        user_id = vendor.user_id,
        category_id = category.id,
        "Product created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: product })))
}

/// PUT /api/v1/vendor/products/{id}
///
/// Partially update one of the caller's own products. 404 if the product
/// does not exist or belongs to another vendor.
pub async fn update_product(
    RequireVendor(vendor): RequireVendor,
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        catalog::validate_title(title)?;
    }
    if let Some(description) = &input.description {
        catalog::validate_description(description)?;
    }
    if let Some(price) = input.price {
        catalog::validate_price(price)?;
    }
    if let Some(category_id) = input.category_id {
        CategoryRepo::find_by_id(&state.pool, category_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Category",
                id: category_id.to_string(),
            }))?;
    }

    let product = ProductRepo::update_owned(&state.pool, product_id, vendor.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id.to_string(),
        }))?;

    tracing::info!(product_id, user_id = vendor.user_id, "Product updated",);

    Ok(Json(DataResponse { data: product }))
}

/// DELETE /api/v1/vendor/products/{id}
///
/// Soft-delete one of the caller's own products: the status flips to
/// `deleted` and the row stays so order history keeps resolving.
pub async fn delete_product(
    RequireVendor(vendor): RequireVendor,
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ProductRepo::soft_delete_owned(&state.pool, product_id, vendor.user_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id.to_string(),
        }));
    }

    tracing::info!(product_id, user_id = vendor.user_id, "Product deleted",);

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Vendor order views
// ---------------------------------------------------------------------------

/// GET /api/v1/vendor/orders
///
/// Every sold item of the caller's products, newest order first.
pub async fn my_sold_items(
    RequireVendor(vendor): RequireVendor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = OrderRepo::list_items_for_vendor(&state.pool, vendor.user_id).await?;

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/vendor/orders/{id}
///
/// One order's detail, visible only to vendors with at least one item in it.
pub async fn order_detail(
    RequireVendor(vendor): RequireVendor,
    State(state): State<AppState>,
    Path(order_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let order = OrderRepo::find_for_vendor(&state.pool, order_id, vendor.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id: order_id.to_string(),
        }))?;

    Ok(Json(DataResponse { data: order }))
}
