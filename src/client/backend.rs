use async_trait::async_trait;
use parishdesk_config::BackendConfig;
use parishdesk_core::AppError;
use parishdesk_models::{ApiResponse, EnvelopeError, PermissionsResponse, ProfileResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Full permission catalog, with and without module grouping.
pub const PERMISSIONS_ENDPOINT: &str = "/roles/permissions/all";
/// The caller's profile, including granted permissions.
pub const PROFILE_ENDPOINT: &str = "/auth/profile";

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Failed to reach the parish backend: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Parish backend answered {status}: {message}")]
    Status { status: u16, message: String },

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error("Failed to decode parish backend response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl BackendError {
    /// True when the backend refused the caller's token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, BackendError::Status { status: 401, .. })
    }

    /// Maps a failed load onto the error returned to the dashboard. Anything
    /// but a rejected token surfaces as 502 with `message`.
    pub fn into_app_error(self, message: &'static str) -> AppError {
        if self.is_unauthorized() {
            AppError::unauthorized(anyhow::anyhow!("Session expired or token rejected"))
        } else {
            AppError::bad_gateway(anyhow::anyhow!(message))
        }
    }
}

#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn fetch_permissions(&self, token: &str) -> Result<PermissionsResponse, BackendError>;

    async fn fetch_profile(&self, token: &str) -> Result<ProfileResponse, BackendError>;
}

/// [`BackendApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(BackendError::Transport)?;

        Ok(Self { http, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, BackendError> {
        let url = self.config.url(path);
        debug!(url = %url, "Calling parish backend");

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(BackendError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let envelope: ApiResponse<T> = response.json().await.map_err(BackendError::Decode)?;
        Ok(envelope.into_data()?)
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    #[instrument(skip_all)]
    async fn fetch_permissions(&self, token: &str) -> Result<PermissionsResponse, BackendError> {
        let catalog: PermissionsResponse = self.get(PERMISSIONS_ENDPOINT, token).await?;
        Ok(catalog.normalized())
    }

    #[instrument(skip_all)]
    async fn fetch_profile(&self, token: &str) -> Result<ProfileResponse, BackendError> {
        self.get(PROFILE_ENDPOINT, token).await
    }
}

/// Pulls `message` out of an error envelope, falling back to a trimmed body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiResponse<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .unwrap_or_else(|| body.chars().take(200).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_envelope_message() {
        let body = r#"{"success": false, "message": "Token expired"}"#;
        assert_eq!(error_message(body), "Token expired");
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        let long = "x".repeat(500);
        assert_eq!(error_message(&long).len(), 200);
    }

    #[test]
    fn test_unauthorized_detection() {
        let err = BackendError::Status {
            status: 401,
            message: "Unauthorized".into(),
        };
        assert!(err.is_unauthorized());

        let err = BackendError::Envelope(EnvelopeError::MissingData);
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_into_app_error() {
        let err = BackendError::Envelope(EnvelopeError::Rejected("boom".into()));
        let app_error = err.into_app_error("Failed to fetch permissions. Please try again later");
        assert_eq!(app_error.status, axum::http::StatusCode::BAD_GATEWAY);
        assert_eq!(
            app_error.message(),
            "Failed to fetch permissions. Please try again later"
        );

        let err = BackendError::Status {
            status: 401,
            message: "expired".into(),
        };
        assert_eq!(
            err.into_app_error("ignored").status,
            axum::http::StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_new_keeps_base_url() {
        let backend = HttpBackend::new(BackendConfig::new("http://parish.test/api/", 5)).unwrap();
        assert_eq!(backend.base_url(), "http://parish.test/api");
    }
}
