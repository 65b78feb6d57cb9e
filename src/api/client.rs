//! HTTP client for the recommendation endpoint.

use serde::Deserialize;

use crate::api::RecommendError;
use crate::types::recommendation::{FormInput, RecommendationItem};

/// Compiled-in fallback for the service base URL.
const DEFAULT_BASE_URL: &str = "https://internmitra-api.onrender.com";

/// Recommendation service configuration.
#[derive(Clone, Debug)]
pub struct RecommendConfig {
    pub base_url: String,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("INTERNMITRA_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}

/// Client for the remote scoring service.
pub struct RecommendClient {
    config: RecommendConfig,
    client: reqwest::Client,
}

/// Success body of `POST /recommend`.
#[derive(Debug, Deserialize)]
struct RecommendResponse {
    recommendations: Vec<RecommendationItem>,
}

impl RecommendClient {
    pub fn new(config: RecommendConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Submit one form's values and return the candidates in service order.
    ///
    /// Exactly one attempt: no retry, and no timeout beyond what the
    /// transport itself enforces.
    pub async fn submit(
        &self,
        input: &FormInput,
    ) -> Result<Vec<RecommendationItem>, RecommendError> {
        let url = format!("{}/recommend", self.config.base_url);
        tracing::debug!("requesting recommendations from {url}");

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(input)
            .send()
            .await
            .map_err(RecommendError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecommendError::Response(format!(
                "service returned {status}: {body}"
            )));
        }

        let parsed: RecommendResponse = response
            .json()
            .await
            .map_err(|e| RecommendError::Response(format!("malformed body: {e}")))?;

        tracing::info!("received {} recommendations", parsed.recommendations.len());
        Ok(parsed.recommendations)
    }

    /// Probe the service health endpoint. Used by the background worker.
    pub async fn health(&self) -> Result<(), RecommendError> {
        let response = self
            .client
            .get(format!("{}/health", self.config.base_url))
            .send()
            .await
            .map_err(RecommendError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecommendError::Response(format!(
                "health endpoint returned {status}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ErrorKind;
    use httpmock::prelude::*;

    fn sample_input() -> FormInput {
        FormInput::new("B.Tech", "Computer Science", "110001", "💻").unwrap()
    }

    fn client_for(server: &MockServer) -> RecommendClient {
        RecommendClient::new(RecommendConfig {
            base_url: server.base_url(),
        })
    }

    #[tokio::test]
    async fn test_submit_posts_form_fields_verbatim() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/recommend")
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "qualification": "B.Tech",
                    "branch": "Computer Science",
                    "pincode": 110001,
                    "interest_emoji": "💻"
                }));
            then.status(200)
                .json_body(serde_json::json!({ "recommendations": [] }));
        });

        let items = client_for(&server).submit(&sample_input()).await.unwrap();

        // Exactly one request, body matched 1:1.
        mock.assert();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_submit_preserves_service_order() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/recommend");
            then.status(200).json_body(serde_json::json!({
                "recommendations": [
                    {
                        "title": "AI Intern",
                        "required_qualification": "B.Tech",
                        "required_branch": "Computer Science",
                        "pincode": 110001,
                        "stipend": 5000,
                        "distance_km": 2.345,
                        "score": 0.8765
                    },
                    {
                        "title": "Data Entry Intern",
                        "required_qualification": "12th",
                        "required_branch": "Any",
                        "pincode": 400001,
                        "stipend": 3000,
                        "score": 0.51
                    }
                ]
            }));
        });

        let items = client_for(&server).submit(&sample_input()).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "AI Intern");
        assert_eq!(items[0].distance_km, Some(2.345));
        assert_eq!(items[1].title, "Data Entry Intern");
        assert_eq!(items[1].distance_km, None);
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_response_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/recommend");
            then.status(500).body("internal error");
        });

        let err = client_for(&server)
            .submit(&sample_input())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Response);
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_response_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/recommend");
            then.status(200).body("not json at all");
        });

        let err = client_for(&server)
            .submit(&sample_input())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Response);
    }

    #[tokio::test]
    async fn test_transport_failure_is_a_network_error() {
        // Nothing listens on the discard port.
        let client = RecommendClient::new(RecommendConfig {
            base_url: "http://127.0.0.1:9".to_string(),
        });

        let err = client.submit(&sample_input()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[tokio::test]
    async fn test_health_probe() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(200)
                .json_body(serde_json::json!({ "status": "healthy" }));
        });

        client_for(&server).health().await.unwrap();
        mock.assert();
    }
}
