//! Run Generation use case.
//!
//! Detects the sentiment of the user's prompt and generates a new paragraph
//! on the same topic in the same tone.
//!
//! The flow is strictly sequential: classify, template, generate, clean up.
//! Neither model call is retried; a failure in either one ends the run.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::inference::InferenceError;
use crate::ports::progress::GenerationProgressNotifier;
use crate::ports::sentiment_classifier::SentimentClassifier;
use crate::ports::text_generator::TextGenerator;
use moodscribe_domain::util::preview;
use moodscribe_domain::{
    GenerationParams, GenerationResult, PromptTemplate, UserPrompt, strip_echoed_prompt,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Which model call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceStage {
    Classification,
    Generation,
}

impl std::fmt::Display for InferenceStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InferenceStage::Classification => write!(f, "Sentiment analysis"),
            InferenceStage::Generation => write!(f, "Text generation"),
        }
    }
}

/// Errors that can occur during a generation run.
#[derive(Error, Debug)]
pub enum RunGenerationError {
    /// The prompt was empty; no model was called.
    #[error("Please enter a prompt first!")]
    EmptyPrompt,

    #[error("{stage} failed: {source}")]
    Inference {
        stage: InferenceStage,
        #[source]
        source: InferenceError,
    },

    /// The generator answered with zero sequences.
    #[error("The text generator returned no output")]
    NoGeneratedText,
}

impl RunGenerationError {
    /// User mistakes are warnings, everything else is a failure
    pub fn is_user_error(&self) -> bool {
        matches!(self, RunGenerationError::EmptyPrompt)
    }

    fn classification(source: InferenceError) -> Self {
        RunGenerationError::Inference {
            stage: InferenceStage::Classification,
            source,
        }
    }

    fn generation(source: InferenceError) -> Self {
        RunGenerationError::Inference {
            stage: InferenceStage::Generation,
            source,
        }
    }
}

/// Input for the [`RunGenerationUseCase`].
#[derive(Debug, Clone)]
pub struct RunGenerationInput {
    /// Raw text entered by the user; may be empty.
    pub prompt: String,
    pub params: GenerationParams,
}

impl RunGenerationInput {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }
}

/// Use case for one sentiment-matched generation.
///
/// 1. Reject an empty prompt without touching either model
/// 2. Classify the prompt
/// 3. Build the generation prompt from the lower-cased label
/// 4. Generate, keeping only the first sequence
/// 5. Strip the echoed generation prompt and trim
pub struct RunGenerationUseCase {
    classifier: Arc<dyn SentimentClassifier>,
    generator: Arc<dyn TextGenerator>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for RunGenerationUseCase {
    fn clone(&self) -> Self {
        Self {
            classifier: self.classifier.clone(),
            generator: self.generator.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl RunGenerationUseCase {
    pub fn new(classifier: Arc<dyn SentimentClassifier>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            classifier,
            generator,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn classifier_model(&self) -> &str {
        self.classifier.model_id()
    }

    pub fn generator_model(&self) -> &str {
        self.generator.model_id()
    }

    /// Execute one run with progress callbacks.
    pub async fn execute(
        &self,
        input: RunGenerationInput,
        progress: &dyn GenerationProgressNotifier,
    ) -> Result<GenerationResult, RunGenerationError> {
        let Some(prompt) = UserPrompt::try_new(input.prompt) else {
            warn!("Empty prompt; skipping model calls");
            return Err(RunGenerationError::EmptyPrompt);
        };

        info!("Starting generation run: {}", preview(prompt.as_str(), 80));
        self.conversation_logger.log(ConversationEvent::new(
            "prompt_received",
            serde_json::json!({ "prompt": prompt.as_str() }),
        ));

        // 1. Sentiment
        progress.on_classification_start();
        let sentiment = match self.classifier.classify(prompt.as_str()).await {
            Ok(s) => s,
            Err(e) => {
                let err = RunGenerationError::classification(e);
                progress.on_failed(&err.to_string());
                return Err(err);
            }
        };
        if sentiment.is_fallback() {
            warn!(
                "Classifier label '{}' is not a known sentiment; treating as {}",
                sentiment.raw_label, sentiment.label
            );
        }
        debug!(
            "Sentiment detected by {}: {} ({:.3})",
            self.classifier.model_id(),
            sentiment.label,
            sentiment.score
        );
        progress.on_sentiment_detected(&sentiment);
        self.conversation_logger.log(ConversationEvent::new(
            "sentiment_detected",
            serde_json::json!({
                "model": self.classifier.model_id(),
                "label": sentiment.label.as_str(),
                "raw_label": sentiment.raw_label,
                "score": sentiment.score,
            }),
        ));

        // 2. Template
        let generation_prompt = PromptTemplate::generation(sentiment.label, &prompt);
        debug!("Generation prompt: {}", generation_prompt);
        self.conversation_logger.log(ConversationEvent::new(
            "generation_prompt",
            serde_json::json!({
                "prompt": generation_prompt.as_str(),
                "max_length": input.params.max_length,
                "num_sequences": input.params.num_sequences,
            }),
        ));

        // 3. Generate
        progress.on_generation_start(&generation_prompt);
        let sequences = match self
            .generator
            .generate(generation_prompt.as_str(), &input.params)
            .await
        {
            Ok(seqs) => seqs,
            Err(e) => {
                let err = RunGenerationError::generation(e);
                progress.on_failed(&err.to_string());
                return Err(err);
            }
        };
        if sequences.len() > 1 {
            debug!("Generator returned {} sequences; using the first", sequences.len());
        }
        let Some(generated_text) = sequences.into_iter().next() else {
            let err = RunGenerationError::NoGeneratedText;
            progress.on_failed(&err.to_string());
            return Err(err);
        };

        // 4. Cleanup
        let cleaned_text = strip_echoed_prompt(&generated_text, generation_prompt.as_str());
        let result = GenerationResult {
            prompt,
            sentiment,
            generation_prompt,
            generated_text,
            cleaned_text,
        };
        if !result.prompt_was_echoed() {
            debug!("Generator did not echo the prompt verbatim; output kept as-is");
        }

        info!(
            "Generation completed: {} chars ({})",
            result.cleaned_text.chars().count(),
            result.label()
        );
        self.conversation_logger.log(ConversationEvent::new(
            "generation_completed",
            serde_json::json!({
                "model": self.generator.model_id(),
                "bytes": result.generated_text.len(),
                "text": result.cleaned_text,
            }),
        ));
        progress.on_generation_complete(&result);

        Ok(result)
    }
}
