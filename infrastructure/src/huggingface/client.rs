//! Shared HTTP client for Inference API endpoints

use super::error::{HuggingFaceError, Result};
use super::protocol::{ErrorBody, InferenceRequest, RequestOptions};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};

/// Default hosted endpoint
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

const USER_AGENT: &str = concat!("moodscribe/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one inference endpoint
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection
/// pool between clones, so both adapters can hold their own copy.
#[derive(Clone)]
pub struct HuggingFaceClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    wait_for_model: bool,
}

impl std::fmt::Debug for HuggingFaceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("wait_for_model", &self.wait_for_model)
            .finish()
    }
}

impl HuggingFaceClient {
    /// Create a client for `base_url`.
    ///
    /// `timeout` of `None` means requests may block for as long as the
    /// model takes.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| HuggingFaceError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            wait_for_model: false,
        })
    }

    /// Ask the endpoint to hold the request while a cold model loads
    pub fn with_wait_for_model(mut self, wait: bool) -> Self {
        self.wait_for_model = wait;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model_url(&self, model_id: &str) -> String {
        format!("{}/models/{}", self.base_url, model_id)
    }

    /// Run one inference request against `model_id` and decode the reply.
    pub async fn infer<P, T>(&self, model_id: &str, inputs: &str, parameters: Option<P>) -> Result<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let body = InferenceRequest {
            inputs,
            parameters,
            options: self.wait_for_model.then_some(RequestOptions {
                wait_for_model: true,
            }),
        };
        self.post_json(model_id, &body).await
    }

    /// `POST` a JSON body to `{base_url}/models/{model_id}`.
    pub async fn post_json<B, T>(&self, model_id: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.model_url(model_id);
        debug!("POST {}", url);

        let mut request = self.http.post(&url).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        let raw = response.text().await?;
        trace!("Response {} from {}: {}", status.as_u16(), model_id, raw);

        if !status.is_success() {
            return Err(Self::classify_failure(model_id, status.as_u16(), &raw));
        }

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => Ok(value),
            // Some deployments report failures with a 200 and an error body.
            Err(e) => match serde_json::from_str::<ErrorBody>(&raw) {
                Ok(body) => Err(Self::error_from_body(model_id, status.as_u16(), body)),
                Err(_) => Err(HuggingFaceError::Parse {
                    error: e.to_string(),
                    raw,
                }),
            },
        }
    }

    fn classify_failure(model_id: &str, status: u16, raw: &str) -> HuggingFaceError {
        match serde_json::from_str::<ErrorBody>(raw) {
            Ok(body) => Self::error_from_body(model_id, status, body),
            Err(_) => HuggingFaceError::Status {
                model: model_id.to_string(),
                status,
                message: if raw.trim().is_empty() {
                    "no response body".to_string()
                } else {
                    raw.trim().to_string()
                },
            },
        }
    }

    fn error_from_body(model_id: &str, status: u16, body: ErrorBody) -> HuggingFaceError {
        let message = body.error.to_string();
        let loading = body.estimated_time.is_some() || message.to_lowercase().contains("loading");
        if status == 503 && loading {
            HuggingFaceError::ModelLoading {
                model: model_id.to_string(),
                estimated_time: body.estimated_time,
            }
        } else {
            HuggingFaceError::Status {
                model: model_id.to_string(),
                status,
                message,
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::serve_once;
    use super::*;
    use crate::huggingface::protocol::{LabelScore, NoParameters};

    #[test]
    fn test_model_url_trims_trailing_slash() {
        let client = HuggingFaceClient::new("http://localhost:8080/", None, None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.model_url("gpt2"), "http://localhost:8080/models/gpt2");
    }

    #[test]
    fn test_blank_api_key_ignored() {
        let client = HuggingFaceClient::new(DEFAULT_BASE_URL, Some("  ".to_string()), None).unwrap();
        assert!(!client.has_api_key());
        let client =
            HuggingFaceClient::new(DEFAULT_BASE_URL, Some("hf_abc".to_string()), None).unwrap();
        assert!(client.has_api_key());
        assert!(!format!("{client:?}").contains("hf_abc"));
    }

    #[tokio::test]
    async fn test_infer_sends_bearer_and_options() {
        let (url, captured) = serve_once(200, r#"[{"label":"POSITIVE","score":0.9}]"#).await;
        let client = HuggingFaceClient::new(url, Some("hf_token".to_string()), None)
            .unwrap()
            .with_wait_for_model(true);

        let parsed: Vec<LabelScore> = client
            .infer::<NoParameters, _>("distilbert", "hello", None)
            .await
            .unwrap();
        assert_eq!(parsed[0].label, "POSITIVE");

        let request = captured.await.unwrap();
        assert!(request.head.starts_with("POST /models/distilbert "));
        assert_eq!(request.header("authorization").as_deref(), Some("Bearer hf_token"));
        assert_eq!(
            request.json(),
            serde_json::json!({ "inputs": "hello", "options": { "wait_for_model": true } })
        );
    }

    #[tokio::test]
    async fn test_loading_model_is_reported() {
        let (url, _captured) = serve_once(
            503,
            r#"{"error":"Model gpt2 is currently loading","estimated_time":12.5}"#,
        )
        .await;
        let client = HuggingFaceClient::new(url, None, None).unwrap();

        let err = client
            .infer::<NoParameters, Vec<LabelScore>>("gpt2", "hi", None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            HuggingFaceError::ModelLoading {
                estimated_time: Some(t),
                ..
            } if (t - 12.5).abs() < f64::EPSILON
        ));
    }

    #[tokio::test]
    async fn test_plain_text_failure() {
        let (url, _captured) = serve_once(500, "internal error").await;
        let client = HuggingFaceClient::new(url, None, None).unwrap();

        let err = client
            .infer::<NoParameters, Vec<LabelScore>>("gpt2", "hi", None)
            .await
            .unwrap_err();
        match err {
            HuggingFaceError::Status {
                status, message, ..
            } => {
                assert_eq!(status, 500);
                assert_eq!(message, "internal error");
            }
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_success_body() {
        let (url, _captured) = serve_once(200, r#"{"unexpected":true}"#).await;
        let client = HuggingFaceClient::new(url, None, None).unwrap();

        let err = client
            .infer::<NoParameters, Vec<LabelScore>>("gpt2", "hi", None)
            .await
            .unwrap_err();
        assert!(matches!(err, HuggingFaceError::Parse { .. }));
    }
}
