//! Integration tests for the guarded API client against a mock backend.

mod common;

use std::time::Duration;

use reqwest::Method;
use serde_json::json;
use studybuddy_client::auth::SESSION_EXPIRED_MESSAGE;
use studybuddy_client::{CancellationToken, Error, Session};
use studybuddy_common::{EducationLevel, RegisterRequest};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{logged_in_session, test_client};

#[tokio::test]
async fn test_bearer_header_attached() {
    let server = MockServer::start().await;
    let (session, token) = logged_in_session();

    Mock::given(method("GET"))
        .and(path("/api/gamification/stats"))
        .and(header("authorization", format!("Bearer {}", token).as_str()))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"currentStreak": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, navigator) = test_client(&server, session);
    let response = client.get("/gamification/stats").await.unwrap();

    assert_eq!(response.status(), 200);
    assert!(navigator.history().is_empty());
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_redirects() {
    let server = MockServer::start().await;
    let (session, _) = logged_in_session();

    Mock::given(method("GET"))
        .and(path("/api/gamification/stats"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (client, navigator) = test_client(&server, session.clone());
    let result = client.get("/gamification/stats").await;

    assert!(matches!(result, Err(Error::SessionExpired)));
    assert!(session.token().is_none());
    assert!(session.user().is_none());
    assert_eq!(navigator.last().as_deref(), Some("login.html"));
    assert_eq!(session.take_message().as_deref(), Some(SESSION_EXPIRED_MESSAGE));
}

#[tokio::test]
async fn test_unguarded_unauthorized_keeps_session() {
    let server = MockServer::start().await;
    let (session, token) = logged_in_session();

    Mock::given(method("GET"))
        .and(path("/api/gamification/stats"))
        .and(header("authorization", format!("Bearer {}", token).as_str()))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let (client, navigator) = test_client(&server, session.clone());
    let request = client.request(Method::GET, "/gamification/stats");
    let response = client
        .send_unguarded(request, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.status(), 401);
    assert_eq!(session.token(), Some(token));
    assert!(session.user().is_some());
    assert!(session.take_message().is_none());
    assert!(navigator.history().is_empty());
}

#[tokio::test]
async fn test_other_errors_pass_through() {
    let server = MockServer::start().await;
    let (session, _) = logged_in_session();

    Mock::given(method("GET"))
        .and(path("/api/gamification/stats"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let (client, navigator) = test_client(&server, session.clone());
    let response = client.get("/gamification/stats").await.unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.unwrap(), "boom");
    assert!(session.is_logged_in());
    assert!(navigator.history().is_empty());
}

#[tokio::test]
async fn test_cancelled_request_keeps_session() {
    let server = MockServer::start().await;
    let (session, _) = logged_in_session();

    Mock::given(method("GET"))
        .and(path("/api/gamification/stats"))
        .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let (client, navigator) = test_client(&server, session.clone());
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let request = client.request(reqwest::Method::GET, "/gamification/stats");
    let result = client.send_cancellable(request, &cancel).await;

    assert!(matches!(result, Err(Error::Cancelled)));
    assert!(session.is_logged_in());
    assert!(navigator.history().is_empty());
}

#[tokio::test]
async fn test_login_stores_session() {
    let server = MockServer::start().await;
    let session = Session::in_memory();

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "mario.rossi@example.com", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Login riuscito!",
            "token": "header.payload.signature",
            "userId": "6f1c2a64-0c1e-4b8e-9a57-3f1d2b7c9e10",
            "firstName": "Mario",
            "lastName": "Rossi",
            "email": "mario.rossi@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = test_client(&server, session.clone());
    let login = client.login("mario.rossi@example.com", "secret").await.unwrap();

    assert!(login.success);
    assert_eq!(session.token().as_deref(), Some("header.payload.signature"));
    let user = session.user().unwrap();
    assert_eq!(user.display_name(), "Mario Rossi");
    assert!(user.user_id.is_some());
}

#[tokio::test]
async fn test_login_rejected_does_not_redirect() {
    let server = MockServer::start().await;
    let session = Session::in_memory();

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Email o password errati"
        })))
        .mount(&server)
        .await;

    let (client, navigator) = test_client(&server, session.clone());
    let err = client.login("mario.rossi@example.com", "wrong").await.unwrap_err();

    match err {
        Error::Status { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Email o password errati");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!session.is_logged_in());
    assert!(navigator.history().is_empty());
    assert!(session.take_message().is_none());
}

#[tokio::test]
async fn test_register_conflict() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let (client, _) = test_client(&server, Session::in_memory());
    let request = RegisterRequest {
        first_name: "Mario".to_string(),
        last_name: "Rossi".to_string(),
        email: "mario.rossi@example.com".to_string(),
        password: "secret".to_string(),
        education_level: Some(EducationLevel::HighSchool),
    };

    match client.register(&request).await {
        Err(Error::Status { status, message }) => {
            assert_eq!(status, 409);
            assert_eq!(message, "Questa email è già registrata");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_register_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "firstName": "Mario",
            "lastName": "Rossi",
            "email": "mario.rossi@example.com",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "message": "Registrazione completata!",
            "userId": "6f1c2a64-0c1e-4b8e-9a57-3f1d2b7c9e10"
        })))
        .mount(&server)
        .await;

    let (client, _) = test_client(&server, Session::in_memory());
    let request = RegisterRequest {
        first_name: "Mario".to_string(),
        last_name: "Rossi".to_string(),
        email: "mario.rossi@example.com".to_string(),
        password: "secret".to_string(),
        education_level: None,
    };

    let response = client.register(&request).await.unwrap();
    assert!(response.success);
}

#[tokio::test]
async fn test_verify() {
    let server = MockServer::start().await;
    let (session, _) = logged_in_session();

    Mock::given(method("GET"))
        .and(path("/api/auth/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let (client, _) = test_client(&server, session);
    assert!(client.verify().await.unwrap());
}

#[tokio::test]
async fn test_verify_without_token() {
    let server = MockServer::start().await;
    let (client, navigator) = test_client(&server, Session::in_memory());

    assert!(matches!(client.verify().await, Err(Error::Unauthenticated)));
    assert!(navigator.history().is_empty());
}
