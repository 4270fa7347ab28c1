use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that resolves the bearer token to the authenticated subject.
///
/// Token resolution happens here, at the boundary; core services only ever
/// see the subject email. Any failure (missing header, malformed header,
/// bad signature, expired token) rejects with `"Not authenticated"` before
/// a handler runs.
#[derive(Debug, Clone)]
pub struct AuthSubject(pub Claims);

impl AuthSubject {
    /// The email asserted by the verified token.
    pub fn email(&self) -> &str {
        &self.0.sub
    }
}

impl FromRequestParts<AppState> for AuthSubject {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Not authenticated"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Not authenticated"))?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthSubject(claims))
    }
}
