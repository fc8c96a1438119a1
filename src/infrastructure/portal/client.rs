//! Portal backend HTTP client.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::ErrorResponse;
use crate::domain::entities::SessionToken;
use crate::domain::errors::GatewayError;

const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// HTTP client for the portal REST backend.
///
/// One instance implements every role port; the backend decides per
/// request whether the bearer token is allowed to call an endpoint.
pub struct PortalClient {
    http: Client,
    base_url: String,
    token: Option<SessionToken>,
}

impl PortalClient {
    /// Creates a client for the given base URL, unauthenticated.
    ///
    /// # Errors
    /// Returns an error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attaches a session token to every subsequent request.
    #[must_use]
    pub fn with_session(mut self, token: SessionToken) -> Self {
        self.token = Some(token);
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token.as_str());
        }
        builder
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, GatewayError> {
        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach the portal backend");
            if e.is_timeout() {
                GatewayError::transport("request timed out")
            } else if e.is_connect() {
                GatewayError::transport("failed to connect to the portal backend")
            } else {
                GatewayError::transport(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        Err(Self::error_for(status, response).await)
    }

    async fn error_for(status: StatusCode, response: Response) -> GatewayError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => format!("HTTP {status}"),
        };

        debug!(%status, message, "Portal backend returned an error");

        match status {
            StatusCode::UNAUTHORIZED => GatewayError::Unauthorized,
            StatusCode::FORBIDDEN => GatewayError::forbidden(message),
            StatusCode::NOT_FOUND => GatewayError::not_found(message),
            StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => GatewayError::transport(message),
            _ => GatewayError::rejected(message),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse portal response");
            GatewayError::decode(e.to_string())
        })
    }

    pub(super) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Self::decode(response).await
    }

    pub(super) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .send(self.request(Method::POST, path).json(body))
            .await?;
        Self::decode(response).await
    }

    pub(super) async fn post_unit<B>(&self, path: &str, body: &B) -> Result<(), GatewayError>
    where
        B: Serialize + Sync,
    {
        self.send(self.request(Method::POST, path).json(body))
            .await
            .map(drop)
    }

    pub(super) async fn put_unit(&self, path: &str) -> Result<(), GatewayError> {
        self.send(self.request(Method::PUT, path)).await.map(drop)
    }

    pub(super) async fn put_json_unit<B>(&self, path: &str, body: &B) -> Result<(), GatewayError>
    where
        B: Serialize + Sync,
    {
        self.send(self.request(Method::PUT, path).json(body))
            .await
            .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PortalClient::new("http://localhost:8080/api");
        assert!(client.is_ok());
    }

    #[test]
    fn test_url_joining_normalizes_slashes() {
        let client = PortalClient::new("http://localhost:8080/api/").unwrap();

        assert_eq!(
            client.url("/Shopkeeper/1/citizens"),
            "http://localhost:8080/api/Shopkeeper/1/citizens"
        );
        assert_eq!(
            client.url("Auth/login"),
            "http://localhost:8080/api/Auth/login"
        );
    }
}
