//! Admin CRUD routes.
//!
//! Mounted under `/api/admin` behind the Basic-auth admin guard
//! (`crate::middleware::require_admin`). Bodies reuse the data service's
//! draft and patch types directly.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use meteor_core::{ProductId, SlideId};
use meteor_store::models::{NewProduct, NewSlide, Product, ProductPatch, Slide, SlidePatch};

use crate::error::Result;
use crate::state::AppState;

/// Create a product.
pub async fn create_product(
    State(state): State<AppState>,
    Json(draft): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = state.store().products().create(draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Patch a product.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    let product = state
        .store()
        .products()
        .update(ProductId::new(id), patch)
        .await?;
    Ok(Json(product))
}

/// Delete a product. Idempotent.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.store().products().delete(ProductId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a slide.
pub async fn create_slide(
    State(state): State<AppState>,
    Json(draft): Json<NewSlide>,
) -> Result<(StatusCode, Json<Slide>)> {
    let slide = state.store().slides().create(draft).await?;
    Ok((StatusCode::CREATED, Json(slide)))
}

/// Patch a slide.
pub async fn update_slide(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<SlidePatch>,
) -> Result<Json<Slide>> {
    let slide = state
        .store()
        .slides()
        .update(SlideId::new(id), patch)
        .await?;
    Ok(Json(slide))
}

/// Delete a slide. Idempotent.
pub async fn delete_slide(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.store().slides().delete(SlideId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
