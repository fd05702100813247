//! REST helpers for the admin auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed [`ApiError`]s instead of panics. Only
//! [`ApiError::Rejected`] carries a message meant for the user; the session
//! store swallows every invalidation error because local sign-out must not
//! depend on the backend.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;
use std::time::Duration;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use super::types::SessionRecord;
use crate::config::ApiConfig;
use crate::state::identity::Credential;

/// Upper bound on the best-effort logout call.
pub const LOGOUT_TIMEOUT: Duration = Duration::from_secs(5);

#[cfg(any(test, feature = "hydrate"))]
const SIGN_IN_PATH: &str = "admin/signin";
#[cfg(any(test, feature = "hydrate"))]
const SIGN_OUT_PATH: &str = "admin/logout";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("not available on server")]
    Unavailable,
}

/// Backend session invalidation, abstracted so sign-out can run against a stub.
pub trait AuthApi {
    /// Tell the backend to stop trusting `credential`.
    fn invalidate(&self, credential: &Credential) -> impl Future<Output = Result<(), ApiError>>;
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failed_message(status: u16) -> String {
    format!("sign in failed: {status}")
}

/// Build the error for a non-success sign-in response from its raw body.
#[cfg(any(test, feature = "hydrate"))]
fn rejection(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| sign_in_failed_message(status));
    ApiError::Rejected { status, message }
}

/// Race `request` against `deadline`; the deadline firing first is a
/// [`ApiError::Timeout`] of [`LOGOUT_TIMEOUT`].
#[cfg(any(test, feature = "hydrate"))]
pub(crate) async fn bounded<F, D>(request: F, deadline: D) -> Result<(), ApiError>
where
    F: Future<Output = Result<(), ApiError>>,
    D: Future<Output = ()>,
{
    use futures::future::{Either, select};

    match select(Box::pin(request), Box::pin(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout(LOGOUT_TIMEOUT)),
    }
}

/// HTTP implementation of the auth calls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Exchange email + password for a session via `POST admin/signin`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the server-provided message when the
    /// backend refuses the credentials, or a transport/decode error otherwise.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SessionRecord, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = super::types::SignInRequest { email, password };
            let resp = gloo_net::http::Request::post(&self.config.endpoint(SIGN_IN_PATH))
                .header("Accept", "application/json")
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(rejection(status, &body));
            }
            resp.json::<SessionRecord>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }
}

impl AuthApi for HttpAuthApi {
    /// `POST admin/logout` with the bearer credential. The response body is
    /// ignored; the call gives up after [`LOGOUT_TIMEOUT`].
    async fn invalidate(&self, credential: &Credential) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = async {
                gloo_net::http::Request::post(&self.config.endpoint(SIGN_OUT_PATH))
                    .header("Authorization", &credential.bearer())
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|e| ApiError::Network(e.to_string()))
            };
            bounded(request, gloo_timers::future::sleep(LOGOUT_TIMEOUT)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credential;
            Err(ApiError::Unavailable)
        }
    }
}
