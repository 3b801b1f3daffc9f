//! Generation service client — the only place that talks HTTP.
//!
//! Orchestrators depend on the `GenerationService` trait; `HttpGenerationService`
//! is the production implementation. One attempt per call, no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::errors::ServiceError;

pub mod detail;
pub mod probe;

/// JSON request/response seam used by the orchestrators.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value, ServiceError>;
}

#[derive(Clone)]
pub struct HttpGenerationService {
    client: Client,
    base_url: Url,
}

impl HttpGenerationService {
    /// `timeout` of `None` keeps the HTTP client defaults.
    pub fn new(base_url: &Url, timeout: Option<Duration>) -> Result<Self, ServiceError> {
        let mut builder = Client::builder().user_agent(user_agent());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: with_trailing_slash(base_url),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

#[async_trait]
impl GenerationService for HttpGenerationService {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value, ServiceError> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST");

        let response = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let detail = detail::extract(&bytes);
            warn!(
                status = status.as_u16(),
                detail = detail.as_deref().unwrap_or(""),
                "generation service rejected request"
            );
            return Err(ServiceError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

pub fn user_agent() -> &'static str {
    concat!("marketmind/", env!("CARGO_PKG_VERSION"))
}

/// `Url::join` replaces the last segment unless the base ends with `/`.
fn with_trailing_slash(url: &Url) -> Url {
    let mut url = url.clone();
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use serde_json::json;

    fn service(server: &MockServer) -> HttpGenerationService {
        let base = Url::parse(&server.url("/api/v1")).unwrap();
        HttpGenerationService::new(&base, Some(Duration::from_secs(5))).unwrap()
    }

    #[test]
    fn test_trailing_slash_is_added_once() {
        let a = with_trailing_slash(&Url::parse("http://localhost:8000/api/v1").unwrap());
        let b = with_trailing_slash(&Url::parse("http://localhost:8000/api/v1/").unwrap());
        assert_eq!(a.as_str(), "http://localhost:8000/api/v1/");
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_post_json_hits_path_under_base() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST")
                .path("/api/v1/lead/score")
                .header("content-type", "application/json")
                .json_body(json!({"name": "Jane"}));
            then.status(200).json_body(json!({"ok": true}));
        });

        let value = service(&server)
            .post_json("/lead/score", json!({"name": "Jane"}))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(value, json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_error_detail_is_extracted() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("POST").path("/api/v1/pitch/generate");
            then.status(500).json_body(json!({"detail": "LLM quota exhausted"}));
        });

        let err = service(&server)
            .post_json("pitch/generate", json!({}))
            .await
            .unwrap_err();

        match err {
            ServiceError::Rejected { status, detail } => {
                assert_eq!(status, 500);
                assert_eq!(detail.as_deref(), Some("LLM quota exhausted"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_without_json_body_has_no_detail() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("POST").path("/api/v1/campaign/generate");
            then.status(502).body("Bad Gateway");
        });

        let err = service(&server)
            .post_json("campaign/generate", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Rejected { status: 502, detail: None }));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        // Nothing listens on port 9 on the loopback interface.
        let base = Url::parse("http://127.0.0.1:9/api/v1").unwrap();
        let service = HttpGenerationService::new(&base, Some(Duration::from_secs(2))).unwrap();

        let err = service.post_json("lead/score", json!({})).await.unwrap_err();
        assert!(matches!(err, ServiceError::Transport(_)));
        assert_eq!(
            err.user_message("Failed to analyze lead."),
            crate::errors::NETWORK_ERROR_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("POST").path("/api/v1/lead/score");
            then.status(200).body("not json");
        });

        let err = service(&server)
            .post_json("lead/score", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Decode(_)));
    }
}
