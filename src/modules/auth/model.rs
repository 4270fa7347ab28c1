use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Token claims. The subject is the user's email; there is no server-side
/// session state behind a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}

/// Login form body. `username` carries the email, per the OAuth2 password
/// form convention the original surface exposes.
#[derive(Deserialize, Debug, Clone, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}
