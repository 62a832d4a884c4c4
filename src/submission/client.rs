//! HTTP client that posts the sign-up form as JSON
//!
//! Each call to `submit` issues exactly one POST to `{base_url}/posts`.
//! There are no retries, timeouts or deduplication.

use super::traits::{SubmissionClientTrait, SubmissionError, SubmissionOutcome};
use crate::state::SubmissionPayload;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Default remote API root
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Path the form is posted to, relative to the base URL
const POSTS_PATH: &str = "/posts";

/// Client for submitting the form to the remote API
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    http: Client,
    base_url: String,
}

impl SubmissionClient {
    /// Create a client posting to `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self::with_client(base_url, http))
    }

    /// Create a client with a preconfigured reqwest client
    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Full URL the form is posted to
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), POSTS_PATH)
    }

    async fn post(&self, payload: &SubmissionPayload) -> Result<Value, SubmissionError> {
        let response = self.http.post(self.endpoint()).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmissionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(decode_body(&body))
    }
}

/// Decode a response body: JSON when it parses, the raw text otherwise,
/// `null` when empty.
fn decode_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

#[async_trait]
impl SubmissionClientTrait for SubmissionClient {
    async fn submit(&self, payload: SubmissionPayload) -> SubmissionOutcome {
        match self.post(&payload).await {
            Ok(body) => {
                tracing::debug!(endpoint = %self.endpoint(), "submission accepted");
                SubmissionOutcome::Accepted(body)
            }
            Err(error) => {
                tracing::warn!(endpoint = %self.endpoint(), %error, "submission failed");
                if let SubmissionError::Status { body, .. } = &error {
                    tracing::debug!(%body, "error response body");
                }
                SubmissionOutcome::Failed { error }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormState, Gender};
    use mockito::Matcher;
    use serde_json::json;

    fn payload() -> SubmissionPayload {
        SubmissionPayload::snapshot(&FormState {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            agree_terms: true,
            gender: Gender::Male,
        })
    }

    fn expected_body() -> Value {
        json!({
            "name": "John Doe",
            "email": "john@example.com",
            "agreeTerms": true,
            "gender": "male",
        })
    }

    mod endpoint {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_base_url_endpoint() {
            let client = SubmissionClient::new(DEFAULT_BASE_URL).unwrap();
            assert_eq!(
                client.endpoint(),
                "https://jsonplaceholder.typicode.com/posts"
            );
        }

        #[test]
        fn test_trailing_slash_is_ignored() {
            let client = SubmissionClient::with_client("http://localhost:8080/", Client::new());
            assert_eq!(client.endpoint(), "http://localhost:8080/posts");
        }
    }

    mod decode {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_json_body() {
            assert_eq!(decode_body(r#"{"id":101}"#), json!({ "id": 101 }));
        }

        #[test]
        fn test_plain_text_body() {
            assert_eq!(decode_body("created"), json!("created"));
        }

        #[test]
        fn test_empty_body() {
            assert_eq!(decode_body(""), Value::Null);
            assert_eq!(decode_body("  \n"), Value::Null);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_posts_json_and_returns_body() {
            let mut server = mockito::Server::new_async().await;
            let mock = server
                .mock("POST", "/posts")
                .match_header("content-type", "application/json")
                .match_body(Matcher::Json(expected_body()))
                .with_status(201)
                .with_header("content-type", "application/json")
                .with_body(r#"{"id":101,"name":"John Doe"}"#)
                .expect(1)
                .create_async()
                .await;

            let client = SubmissionClient::new(server.url()).unwrap();
            let outcome = client.submit(payload()).await;

            mock.assert_async().await;
            assert!(outcome.is_accepted());
            assert_eq!(
                outcome.into_value(),
                json!({ "id": 101, "name": "John Doe" })
            );
        }

        #[tokio::test]
        async fn test_server_error_is_wrapped() {
            let mut server = mockito::Server::new_async().await;
            let mock = server
                .mock("POST", "/posts")
                .with_status(500)
                .with_body("boom")
                .expect(1)
                .create_async()
                .await;

            let client = SubmissionClient::new(server.url()).unwrap();
            let outcome = client.submit(payload()).await;

            mock.assert_async().await;
            match outcome {
                SubmissionOutcome::Failed {
                    error: SubmissionError::Status { status, ref body },
                } => {
                    assert_eq!(status, 500);
                    assert_eq!(body, "boom");
                }
                other => panic!("expected status failure, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn test_failure_value_has_error_shape() {
            let mut server = mockito::Server::new_async().await;
            let _mock = server
                .mock("POST", "/posts")
                .with_status(404)
                .create_async()
                .await;

            let client = SubmissionClient::new(server.url()).unwrap();
            let value = client.submit(payload()).await.into_value();

            assert_eq!(value, json!({ "error": "server responded with status 404" }));
        }

        #[tokio::test]
        async fn test_connection_refused_is_wrapped() {
            // Reserve a port, then free it so nothing is listening there
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);

            let client = SubmissionClient::new(format!("http://{addr}")).unwrap();
            let outcome = client.submit(payload()).await;

            assert!(matches!(
                outcome,
                SubmissionOutcome::Failed {
                    error: SubmissionError::Transport(_)
                }
            ));
        }

        #[tokio::test]
        async fn test_resubmission_is_not_deduplicated() {
            let mut server = mockito::Server::new_async().await;
            let mock = server
                .mock("POST", "/posts")
                .match_body(Matcher::Json(expected_body()))
                .with_status(201)
                .with_body("{}")
                .expect(2)
                .create_async()
                .await;

            let client = SubmissionClient::new(server.url()).unwrap();
            let first = client.submit(payload()).await;
            let second = client.submit(payload()).await;

            mock.assert_async().await;
            assert!(first.is_accepted());
            assert!(second.is_accepted());
        }
    }
}
