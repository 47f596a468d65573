//! Basic-Auth gate for the task routes.
//!
//! Every route in the group is guarded by one shared username/password
//! pair. The comparison itself sits behind [`CredentialValidator`] so a
//! different backend can be substituted without touching the handlers.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::sync::Arc;
use tarefas_core::error::ErrorBody;

/// Credential-check capability consulted by the auth gate.
pub trait CredentialValidator: Send + Sync {
    /// True when the presented pair is acceptable.
    fn validate(&self, username: &str, password: &str) -> bool;
}

/// A single shared username/password pair, loaded from configuration.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl CredentialValidator for StaticCredentials {
    fn validate(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Middleware enforcing `Authorization: Basic …` on every guarded route.
///
/// Missing, malformed, or mismatching credentials are all answered with
/// 401 and a challenge; the request never reaches a handler.
pub async fn basic_auth(
    State(validator): State<Arc<dyn CredentialValidator>>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(decode_basic)
        .map(|(username, password)| validator.validate(&username, &password))
        .unwrap_or(false);

    if !authorized {
        return unauthorized();
    }

    next.run(request).await
}

/// Decode the `Basic <base64 user:pass>` scheme.
fn decode_basic(header_value: &str) -> Option<(String, String)> {
    let encoded = header_value.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

fn unauthorized() -> Response {
    let body = ErrorBody {
        error: "Unauthorized".to_string(),
        details: None,
    };
    let mut response = (StatusCode::UNAUTHORIZED, Json(body)).into_response();
    response.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        HeaderValue::from_static("Basic realm=\"tarefas\""),
    );
    response
}
