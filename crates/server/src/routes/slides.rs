//! Public carousel routes.

use axum::{Json, extract::State};
use meteor_store::models::Slide;

use crate::error::Result;
use crate::state::AppState;

/// List carousel slides, ascending by id.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Slide>>> {
    let slides = state.store().slides().get_all().await?;
    Ok(Json(slides))
}
