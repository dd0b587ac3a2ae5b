//! Demo authentication routes.
//!
//! No token or cookie is issued; the client holds the returned identity
//! for the session's lifetime.

use axum::{Json, extract::State};
use meteor_store::models::Identity;
use serde::Deserialize;

use crate::error::Result;
use crate::state::AppState;

/// Login payload.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration payload.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Authenticate an email/password pair.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Identity>> {
    let identity = state.store().auth().login(&body.email, &body.password).await?;
    Ok(Json(identity))
}

/// Register a new shopper account.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<Identity>> {
    let identity = state
        .store()
        .auth()
        .register(&body.email, &body.password, &body.name)
        .await?;
    Ok(Json(identity))
}
