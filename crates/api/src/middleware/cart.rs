//! Cart session token extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the opaque cart session token.
pub const CART_TOKEN_HEADER: &str = "x-cart-token";

/// The visitor's cart session token, taken from the `X-Cart-Token` header.
///
/// `None` on a first touch -- handlers pass it to the session store, which
/// creates a fresh session and returns the token to echo back to the client.
/// A syntactically invalid token is a 400, not a silent new session.
#[derive(Debug, Clone, Copy)]
pub struct CartToken(pub Option<Uuid>);

impl FromRequestParts<AppState> for CartToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(raw) = parts
            .headers
            .get(CART_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
        else {
            return Ok(CartToken(None));
        };

        let token = raw.parse::<Uuid>().map_err(|_| {
            AppError::BadRequest(format!("{CART_TOKEN_HEADER} must be a valid UUID"))
        })?;

        Ok(CartToken(Some(token)))
    }
}
