use sqlx::PgPool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

use super::model::{LoginRequest, LoginResponse};

pub struct AuthService;

impl AuthService {
    /// Verify a credential and issue a bearer token with the email as subject.
    ///
    /// Unknown email and wrong password are deliberately distinguishable
    /// responses; callers match on the detail strings.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserCredential {
            email: String,
            password: String,
        }

        let user = sqlx::query_as::<_, UserCredential>(
            "SELECT email, password FROM users WHERE email = $1",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Invalid Credentials"))?;

        let is_valid = verify_password(&dto.password, &user.password)?;

        if !is_valid {
            return Err(AppError::not_found("Incorrect password"));
        }

        let access_token = create_access_token(&user.email, jwt_config)?;

        Ok(LoginResponse {
            access_token,
            token_type: "bearer".to_string(),
        })
    }
}
