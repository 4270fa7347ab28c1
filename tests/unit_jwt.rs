use learnhub::config::jwt::JwtConfig;
use learnhub::utils::jwt::{create_access_token, verify_token};

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

#[test]
fn test_create_access_token_success() {
    let jwt_config = get_test_jwt_config();

    let result = create_access_token("test@example.com", &jwt_config);

    assert!(result.is_ok());
    assert!(!result.unwrap().is_empty());
}

#[test]
fn test_verify_token_returns_subject_email() {
    let jwt_config = get_test_jwt_config();

    let token = create_access_token("test@example.com", &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, "test@example.com");
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_verify_token_invalid() {
    let jwt_config = get_test_jwt_config();

    let result = verify_token("invalid.token.here", &jwt_config);

    assert!(result.is_err());
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let token = create_access_token("test@example.com", &jwt_config).unwrap();

    let wrong_jwt_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        access_token_expiry: 3600,
    };

    assert!(verify_token(&token, &wrong_jwt_config).is_err());
}

#[test]
fn test_verify_token_expired() {
    let jwt_config = JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        // Issued already past its expiry, including the default leeway.
        access_token_expiry: -120,
    };

    let token = create_access_token("test@example.com", &jwt_config).unwrap();

    assert!(verify_token(&token, &get_test_jwt_config()).is_err());
}

#[test]
fn test_verify_token_empty() {
    let jwt_config = get_test_jwt_config();

    assert!(verify_token("", &jwt_config).is_err());
}
