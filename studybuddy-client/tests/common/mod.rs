#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use studybuddy_client::{ApiClient, Config, HistoryNavigator, Session};
use studybuddy_common::UserSummary;
use wiremock::MockServer;

#[derive(serde::Serialize)]
struct TestClaims {
    sub: String,
    exp: i64,
    iat: i64,
}

fn sign(exp: i64, iat: i64) -> String {
    let claims = TestClaims {
        sub: "mario.rossi@example.com".to_string(),
        exp,
        iat,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .expect("Failed to encode JWT")
}

/// HS256 token valid for another hour.
pub fn valid_token() -> String {
    let now = Utc::now();
    sign((now + Duration::hours(1)).timestamp(), now.timestamp())
}

/// HS256 token that expired an hour ago.
pub fn expired_token() -> String {
    let now = Utc::now();
    sign((now - Duration::hours(1)).timestamp(), (now - Duration::hours(2)).timestamp())
}

pub fn test_user() -> UserSummary {
    UserSummary::new("Mario", "Rossi", "mario.rossi@example.com")
}

pub fn test_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.api.base_url = format!("{}/api", server.uri());
    config.api.timeout_secs = 5;
    config
}

pub fn test_client(server: &MockServer, session: Session) -> (ApiClient, Arc<HistoryNavigator>) {
    let navigator = Arc::new(HistoryNavigator::new());
    let client = ApiClient::new(&format!("{}/api", server.uri()), session, navigator.clone());
    (client, navigator)
}

/// In-memory session holding a valid token and the test user.
pub fn logged_in_session() -> (Session, String) {
    let session = Session::in_memory();
    let token = valid_token();
    session
        .establish(&token, &test_user())
        .expect("Failed to store session");
    (session, token)
}
