//! Public catalog routes.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use meteor_core::ProductId;
use meteor_store::browse::{self, ProductFilter, SortOrder};
use meteor_store::models::Product;
use serde::Deserialize;

use crate::error::Result;
use crate::state::AppState;

/// Query parameters for the product list.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Category label; omitted or `All` matches everything.
    pub category: Option<String>,
    /// Free-text search over name, category, and description.
    pub q: Option<String>,
    /// `price-low`, `price-high`, or anything else for catalog order.
    pub sort: Option<String>,
}

/// List products, filtered and sorted in memory.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Product>>> {
    let products = state.store().products().get_all().await?;

    let filter = ProductFilter {
        category: params.category,
        query: params.q,
    };
    let sort = params
        .sort
        .as_deref()
        .map_or(SortOrder::Default, SortOrder::from_param);

    Ok(Json(browse::browse(&products, &filter, sort)))
}

/// Fetch a single product.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>> {
    let product = state
        .store()
        .products()
        .get_by_id(ProductId::new(id))
        .await?;
    Ok(Json(product))
}

/// Distinct category labels currently in the catalog.
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let products = state.store().products().get_all().await?;
    Ok(Json(browse::categories(&products)))
}
