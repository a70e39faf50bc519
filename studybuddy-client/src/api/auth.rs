//! Login, registration and token verification.
//!
//! Login and registration go out unguarded: a 401 from `/auth/login` means
//! bad credentials, not a dead session.

use reqwest::{Method, StatusCode};
use studybuddy_common::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

use super::client::{decode_json, message_from_body};
use super::{error_message, ApiClient};
use crate::error::{Error, Result};

impl ApiClient {
    /// Log in and store the returned token and user record in the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        tracing::info!("Logging in as {}", email);
        let response = self
            .request(Method::POST, "/auth/login")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let login: LoginResponse = match serde_json::from_slice(&bytes) {
            Ok(login) => login,
            Err(_) if !status.is_success() => LoginResponse::default(),
            Err(e) => return Err(e.into()),
        };

        if !status.is_success() || !login.success {
            let message = login
                .message
                .clone()
                .unwrap_or_else(|| error_message("INVALID_CREDENTIALS").to_string());
            tracing::warn!("Login failed for {}: {}", email, message);
            return Err(Error::Status {
                status: status.as_u16(),
                message,
            });
        }

        let token = login
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Status {
                status: status.as_u16(),
                message: "Login response did not include a token".to_string(),
            })?;

        self.session().establish(token, &login.user())?;
        tracing::info!("Logged in as {}", email);

        Ok(login)
    }

    /// Create an account. A 409 means the email is already registered.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        tracing::info!("Registering {}", request.email);
        let response = self
            .request(Method::POST, "/auth/register")
            .json(request)
            .send()
            .await?;

        if response.status() == StatusCode::CONFLICT {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: StatusCode::CONFLICT.as_u16(),
                message: message_from_body(&body)
                    .unwrap_or_else(|| error_message("EMAIL_EXISTS").to_string()),
            });
        }

        decode_json(response).await
    }

    /// Ask the server whether the stored token is still accepted.
    ///
    /// A rejected token ends the session like any other guarded call.
    pub async fn verify(&self) -> Result<bool> {
        if self.session().token().is_none() {
            return Err(Error::Unauthenticated);
        }
        let response = self.get("/auth/verify").await?;
        Ok(response.status().is_success())
    }
}
