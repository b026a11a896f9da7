//! Causal text generation over the Inference API

use super::client::HuggingFaceClient;
use super::error::Result;
use super::protocol::{GenerationParameters, GenerationResponse};
use async_trait::async_trait;
use moodscribe_application::{InferenceError, TextGenerator};
use moodscribe_domain::GenerationParams;
use tracing::debug;

/// [`TextGenerator`] backed by a `text-generation` model
pub struct HuggingFaceTextGenerator {
    client: HuggingFaceClient,
    model_id: String,
}

impl HuggingFaceTextGenerator {
    pub const DEFAULT_MODEL: &'static str = "gpt2";

    pub fn new(client: HuggingFaceClient, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    async fn generate_raw(&self, prompt: &str, params: &GenerationParams) -> Result<Vec<String>> {
        let parameters = GenerationParameters {
            max_length: params.max_length,
            num_return_sequences: params.num_sequences,
            return_full_text: true,
        };
        let response: GenerationResponse = self
            .client
            .infer(&self.model_id, prompt, Some(parameters))
            .await?;
        let texts = response.into_texts();
        debug!("{} returned {} sequences", self.model_id, texts.len());
        Ok(texts)
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceTextGenerator {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> std::result::Result<Vec<String>, InferenceError> {
        self.generate_raw(prompt, params)
            .await
            .map_err(InferenceError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huggingface::client::test_support::serve_once;

    fn generator(url: &str) -> HuggingFaceTextGenerator {
        let client = HuggingFaceClient::new(url, None, None).unwrap();
        HuggingFaceTextGenerator::new(client, HuggingFaceTextGenerator::DEFAULT_MODEL)
    }

    #[tokio::test]
    async fn test_generate_sends_parameters() {
        let (url, captured) = serve_once(
            200,
            r#"[{"generated_text":"Write a neutral paragraph about the following topic: Library. It opens Tuesday."}]"#,
        )
        .await;

        let texts = generator(&url)
            .generate(
                "Write a neutral paragraph about the following topic: Library.",
                &GenerationParams::default(),
            )
            .await
            .unwrap();

        assert_eq!(texts.len(), 1);
        assert!(texts[0].ends_with("It opens Tuesday."));

        let request = captured.await.unwrap();
        assert!(request.head.starts_with("POST /models/gpt2 "));
        assert_eq!(
            request.json(),
            serde_json::json!({
                "inputs": "Write a neutral paragraph about the following topic: Library.",
                "parameters": {
                    "max_length": 150,
                    "num_return_sequences": 1,
                    "return_full_text": true
                }
            })
        );
    }

    #[tokio::test]
    async fn test_generate_empty_list_passes_through() {
        let (url, _captured) = serve_once(200, "[]").await;
        let texts = generator(&url)
            .generate("prompt", &GenerationParams::default())
            .await
            .unwrap();
        assert!(texts.is_empty());
    }

    #[tokio::test]
    async fn test_generate_http_error() {
        let (url, _captured) = serve_once(400, r#"{"error":"Input is too long"}"#).await;
        let err = generator(&url)
            .generate("prompt", &GenerationParams::default())
            .await
            .unwrap_err();
        match err {
            InferenceError::RequestFailed(msg) => assert!(msg.contains("Input is too long")),
            other => panic!("Expected RequestFailed, got {other:?}"),
        }
    }
}
