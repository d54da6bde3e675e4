//! Registration endpoints.
//!
//! [`RegistrationApi`] is the seam between the sign-up controller and the
//! backend. [`HttpRegistrationApi`] talks to the real service; tests swap in
//! their own implementation.

use std::future::Future;

use log::{debug, error, info};
use serde::{Deserialize, Serialize};

use crate::BusinessConfig;
use crate::http::{Client, HttpError};
use crate::panel::Panel;

/// Body sent to every registration endpoint.
///
/// `password` is the hex SHA-512 digest, never the raw password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub token: String,
}

/// Optional error body returned by the backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("server returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to parse server response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("registration rejected: {0}")]
    Rejected(String),
}

pub trait RegistrationApi: Send + Sync {
    fn admin_register(
        &self,
        request: &RegistrationRequest,
    ) -> impl Future<Output = Result<RegistrationResponse, ApiError>> + Send;

    fn student_register(
        &self,
        request: &RegistrationRequest,
    ) -> impl Future<Output = Result<RegistrationResponse, ApiError>> + Send;

    fn teacher_register(
        &self,
        request: &RegistrationRequest,
    ) -> impl Future<Output = Result<RegistrationResponse, ApiError>> + Send;
}

/// Endpoint path below `/api` for each panel.
pub fn endpoint_path(panel: Panel) -> &'static str {
    match panel {
        Panel::Admin => "/admin/register",
        Panel::Student => "/student/register",
        Panel::Teacher => "/teacher/register",
    }
}

#[derive(Debug, Clone)]
pub struct HttpRegistrationApi {
    config: BusinessConfig,
}

impl HttpRegistrationApi {
    pub fn new(config: BusinessConfig) -> Self {
        Self { config }
    }

    pub fn endpoint(&self, panel: Panel) -> String {
        format!("{}{}", self.config.api_url(), endpoint_path(panel))
    }

    async fn register(
        &self,
        panel: Panel,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, ApiError> {
        let url = self.endpoint(panel);
        info!(
            "HttpRegistrationApi: registering '{}' as {panel}",
            request.username
        );

        let response = Client::post(&url)
            .header("accept", "application/json")
            .json(request)?
            .send()
            .await
            .inspect_err(|e| error!("HttpRegistrationApi: {panel} request failed: {e}"))?;

        if !response.is_success() {
            let message = response
                .json::<ErrorBody>()
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("{panel} registration failed"));
            info!(
                "HttpRegistrationApi: {panel} registration rejected with status {}: {message}",
                response.status
            );
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }

        let body: RegistrationResponse = response.json()?;
        if body.token.is_empty() {
            return Err(ApiError::Rejected(
                "server did not return a session token".to_owned(),
            ));
        }
        debug!("HttpRegistrationApi: {panel} registration accepted");
        Ok(body)
    }
}

impl RegistrationApi for HttpRegistrationApi {
    async fn admin_register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, ApiError> {
        self.register(Panel::Admin, request).await
    }

    async fn student_register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, ApiError> {
        self.register(Panel::Student, request).await
    }

    async fn teacher_register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, ApiError> {
        self.register(Panel::Teacher, request).await
    }
}
