use crate::{AuthError, SessionClaims, SessionManager};

use xb_core::SessionUser;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

fn session_user() -> SessionUser {
    SessionUser {
        external_id: "google-oauth2|1001".to_string(),
        email: "client@xibalba.example".to_string(),
        display_name: Some("Test Client".to_string()),
    }
}

fn create_test_token(claims: &SessionClaims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

#[test]
fn given_issued_token_when_validated_then_projection_round_trips() {
    let manager = SessionManager::with_hs256(SECRET, 3600);
    let user = session_user();

    let token = manager.issue(&user).unwrap();
    let claims = manager.validate(&token).unwrap();

    assert_eq!(claims.sub, "google-oauth2|1001");
    assert_eq!(claims.projection(), user);
    assert!(claims.exp > claims.iat);
}

#[test]
fn given_expired_token_when_validated_then_token_expired() {
    let manager = SessionManager::with_hs256(SECRET, 3600);
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: "google-oauth2|1001".to_string(),
        email: "client@xibalba.example".to_string(),
        name: None,
        exp: now - 3600, // Expired 1 hour ago
        iat: now - 7200,
    };
    let token = create_test_token(&claims, SECRET);

    let result = manager.validate(&token);

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_wrong_secret_when_validated_then_decode_error() {
    let manager = SessionManager::with_hs256(b"wrong-secret-key-at-least-32-byt", 3600);
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: "google-oauth2|1001".to_string(),
        email: "client@xibalba.example".to_string(),
        name: None,
        exp: now + 3600,
        iat: now,
    };
    let token = create_test_token(&claims, SECRET);

    let result = manager.validate(&token);

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_empty_subject_when_validated_then_invalid_claim() {
    let manager = SessionManager::with_hs256(SECRET, 3600);
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: String::new(),
        email: "client@xibalba.example".to_string(),
        name: None,
        exp: now + 3600,
        iat: now,
    };
    let token = create_test_token(&claims, SECRET);

    let result = manager.validate(&token);

    assert!(matches!(result, Err(AuthError::InvalidClaim { .. })));
}

#[test]
fn given_user_with_empty_email_when_issuing_then_rejected() {
    let manager = SessionManager::with_hs256(SECRET, 3600);
    let mut user = session_user();
    user.email = String::new();

    let result = manager.issue(&user);

    assert!(matches!(result, Err(AuthError::InvalidClaim { .. })));
}

#[test]
fn given_garbage_token_when_validated_then_decode_error() {
    let manager = SessionManager::with_hs256(SECRET, 3600);

    let result = manager.validate("not-a-jwt");

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}
