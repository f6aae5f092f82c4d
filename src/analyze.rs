//! Task orchestrators: the public entry points of the library.
//!
//! [`DocumentAnalyzer`] owns the two things every call needs — a
//! [`ConverseClient`] and an [`AnalysisConfig`] — and composes the pipeline
//! stages per task: build the prompt, redact (Q&A only), assemble the
//! request, invoke the model, normalize the response. Each call is one
//! request-per-call unit of work: it awaits the remote call to completion,
//! holds no state between calls, and never retries.
//!
//! The client is injected at construction. That seam is what makes the whole
//! pipeline testable without network access — hand in any
//! `Arc<dyn ConverseClient>` test double and every orchestrator runs
//! end-to-end in process.

use crate::client::ConverseClient;
use crate::config::AnalysisConfig;
use crate::document::Document;
use crate::error::DocLensError;
use crate::output::{AnalysisResult, AnswerOutput, SentimentOutput, SummaryOutput, TopicsOutput};
use crate::pipeline::{guardrails, normalize, request};
use crate::prompts;
use crate::task::{AnalysisTask, SummaryStyle};
use std::sync::Arc;
use tracing::{debug, info};

/// Analyzes documents through an injected Converse client.
#[derive(Clone)]
pub struct DocumentAnalyzer {
    client: Arc<dyn ConverseClient>,
    config: AnalysisConfig,
}

impl DocumentAnalyzer {
    /// Analyzer with the default configuration (Claude 3 Sonnet, per-task
    /// inference defaults).
    pub fn new(client: Arc<dyn ConverseClient>) -> Self {
        Self::with_config(client, AnalysisConfig::default())
    }

    /// Analyzer with an explicit configuration.
    pub fn with_config(client: Arc<dyn ConverseClient>, config: AnalysisConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run one analysis task against a document.
    ///
    /// This is the generic orchestrator the typed wrappers delegate to.
    /// Either the fully normalized result comes back, or the call fails as a
    /// whole — there is no partial result.
    pub async fn run(
        &self,
        document: &Document,
        task: &AnalysisTask,
    ) -> Result<AnalysisResult, DocLensError> {
        info!(
            document = document.name(),
            bytes = document.len(),
            task = task.label(),
            model_id = %self.config.model_id,
            "running analysis task"
        );

        // ── Step 1: Guardrails (Q&A question only) ───────────────────────
        let task = filter_question(task);

        // ── Step 2: Prompt ───────────────────────────────────────────────
        let instruction = prompts::build_prompt(&task);

        // ── Step 3: Assemble request ─────────────────────────────────────
        let inference = self.config.inference_for(task.inference_defaults());
        let converse_request =
            request::build_request(document, &instruction, &self.config.model_id, inference);

        // ── Step 4: Invoke ───────────────────────────────────────────────
        let raw = self.client.converse(&converse_request).await?;

        // ── Step 5: Normalize ────────────────────────────────────────────
        let mut result = normalize::normalize(raw, &self.config.model_id)?;

        // ── Step 6: Guardrails (Q&A answer) ──────────────────────────────
        if let AnalysisTask::QuestionAnswer {
            use_guardrails: true,
            ..
        } = &task
        {
            result.text = guardrails::redact(&result.text).filtered_text;
        }

        debug!(
            input_tokens = result.input_tokens,
            output_tokens = result.output_tokens,
            stop_reason = result.stop_reason.as_deref().unwrap_or("-"),
            "analysis task complete"
        );

        Ok(result)
    }

    /// Blocking wrapper around [`DocumentAnalyzer::run`].
    ///
    /// Creates a temporary tokio runtime internally; for callers that are
    /// not already async.
    pub fn run_sync(
        &self,
        document: &Document,
        task: &AnalysisTask,
    ) -> Result<AnalysisResult, DocLensError> {
        tokio::runtime::Runtime::new()
            .map_err(|e| DocLensError::Internal(format!("failed to create tokio runtime: {e}")))?
            .block_on(self.run(document, task))
    }

    /// Summarize the document in the given style.
    pub async fn summarize(
        &self,
        document: &Document,
        style: SummaryStyle,
    ) -> Result<SummaryOutput, DocLensError> {
        self.run(document, &AnalysisTask::Summarize(style))
            .await
            .map(Into::into)
    }

    /// Summarize with a caller-supplied instruction instead of a style
    /// template. Uses the summarize inference defaults.
    pub async fn summarize_with_prompt(
        &self,
        document: &Document,
        prompt: &str,
    ) -> Result<SummaryOutput, DocLensError> {
        info!(
            document = document.name(),
            bytes = document.len(),
            task = "summarize-custom",
            model_id = %self.config.model_id,
            "running analysis task"
        );

        let defaults = AnalysisTask::Summarize(SummaryStyle::Concise).inference_defaults();
        let inference = self.config.inference_for(defaults);
        let converse_request =
            request::build_request(document, prompt, &self.config.model_id, inference);

        let raw = self.client.converse(&converse_request).await?;
        normalize::normalize(raw, &self.config.model_id).map(Into::into)
    }

    /// Analyze sentiment, tone, and writing style.
    pub async fn sentiment(&self, document: &Document) -> Result<SentimentOutput, DocLensError> {
        self.run(document, &AnalysisTask::Sentiment)
            .await
            .map(Into::into)
    }

    /// Extract the top-N key topics (N clamped to 3–10).
    pub async fn topics(
        &self,
        document: &Document,
        count: usize,
    ) -> Result<TopicsOutput, DocLensError> {
        self.run(document, &AnalysisTask::topics(count))
            .await
            .map(Into::into)
    }

    /// Answer a question about the document.
    ///
    /// With `use_guardrails` set, the question is PII-redacted before it
    /// enters the prompt and the answer is redacted before it is returned;
    /// the `question` field of the output is the redacted form that was
    /// actually sent.
    pub async fn answer(
        &self,
        document: &Document,
        question: &str,
        use_guardrails: bool,
    ) -> Result<AnswerOutput, DocLensError> {
        let task = AnalysisTask::question(question, use_guardrails);
        let result = self.run(document, &task).await?;

        let question_sent = if use_guardrails {
            guardrails::redact(question).filtered_text
        } else {
            question.to_string()
        };

        Ok(AnswerOutput {
            answer: result.text,
            question: question_sent,
            model: result.model,
            input_tokens: result.input_tokens,
            output_tokens: result.output_tokens,
            stop_reason: result.stop_reason,
        })
    }
}

/// Redact the question of a Q&A task when guardrails are enabled. Other
/// tasks pass through untouched; document bytes are never scanned.
fn filter_question(task: &AnalysisTask) -> AnalysisTask {
    match task {
        AnalysisTask::QuestionAnswer {
            question,
            use_guardrails: true,
        } => AnalysisTask::QuestionAnswer {
            question: guardrails::redact(question).filtered_text,
            use_guardrails: true,
        },
        other => other.clone(),
    }
}
