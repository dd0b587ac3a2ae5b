//! Admin guard for the management surface.
//!
//! The demo auth model issues no tokens, so admin requests authenticate
//! per call with HTTP Basic credentials, validated against the demo auth
//! service; the resolved identity must carry the `admin` role. The
//! identity is stashed in request extensions for handlers that want it.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Require HTTP Basic credentials resolving to an admin identity.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` for missing/malformed credentials or
/// a non-admin identity.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("missing credentials".to_owned()))?;

    let (email, password) = parse_basic(header)
        .ok_or_else(|| AppError::Unauthorized("malformed credentials".to_owned()))?;

    let identity = state
        .store()
        .auth()
        .login(&email, &password)
        .await
        .map_err(|_| AppError::Unauthorized("invalid credentials".to_owned()))?;

    if !identity.role.is_admin() {
        return Err(AppError::Unauthorized("admin role required".to_owned()));
    }

    debug!(admin = %identity.email, "admin request authorized");
    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Decode a `Basic <base64(email:password)>` authorization header.
fn parse_basic(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (email, password) = text.split_once(':')?;
    Some((email.to_owned(), password.to_owned()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_roundtrip() {
        let encoded = BASE64.encode("admin@store.com:admin123");
        let header = format!("Basic {encoded}");
        let (email, password) = parse_basic(&header).unwrap();
        assert_eq!(email, "admin@store.com");
        assert_eq!(password, "admin123");
    }

    #[test]
    fn test_parse_basic_rejects_other_schemes() {
        assert!(parse_basic("Bearer abc").is_none());
        assert!(parse_basic("Basic not-base64!!").is_none());
    }

    #[test]
    fn test_parse_basic_requires_separator() {
        let encoded = BASE64.encode("no-separator");
        assert!(parse_basic(&format!("Basic {encoded}")).is_none());
    }
}
