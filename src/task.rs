//! Analysis task definitions.
//!
//! [`AnalysisTask`] is a closed set: each variant carries exactly the
//! parameters its prompt needs, and each maps to fixed inference settings.
//! Keeping the task a tagged enum (rather than free-form prompt strings at the
//! call sites) means the prompt builder stays pure and the orchestrator can be
//! generic over all four operations.

use crate::client::InferenceConfig;
use serde::{Deserialize, Serialize};

/// Bounds for the requested topic count. Requests outside this range are
/// clamped at prompt-build time, not rejected.
pub const MIN_TOPICS: usize = 3;
pub const MAX_TOPICS: usize = 10;

/// One analysis operation against a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisTask {
    /// Summarize the document in the given style.
    Summarize(SummaryStyle),
    /// Overall sentiment, emotional tones, and writing style.
    Sentiment,
    /// Extract the top-N key topics. N is clamped to 3–10.
    TopicExtraction(usize),
    /// Answer a free-text question about the document.
    ///
    /// With `use_guardrails` set, the question is PII-redacted before it is
    /// placed in the prompt, and the model's answer is redacted before it is
    /// returned.
    QuestionAnswer {
        question: String,
        use_guardrails: bool,
    },
}

impl AnalysisTask {
    /// Convenience constructor for [`AnalysisTask::TopicExtraction`].
    pub fn topics(count: usize) -> Self {
        AnalysisTask::TopicExtraction(count)
    }

    /// Convenience constructor for [`AnalysisTask::QuestionAnswer`].
    pub fn question(question: impl Into<String>, use_guardrails: bool) -> Self {
        AnalysisTask::QuestionAnswer {
            question: question.into(),
            use_guardrails,
        }
    }

    /// Per-task generation settings.
    ///
    /// Summaries get the larger output budget and a mid-range temperature;
    /// sentiment and topic extraction run cooler; Q&A runs coolest so answers
    /// stay grounded in the document.
    pub fn inference_defaults(&self) -> InferenceConfig {
        match self {
            AnalysisTask::Summarize(_) => InferenceConfig {
                max_tokens: 4096,
                temperature: 0.5,
            },
            AnalysisTask::Sentiment | AnalysisTask::TopicExtraction(_) => InferenceConfig {
                max_tokens: 2048,
                temperature: 0.3,
            },
            AnalysisTask::QuestionAnswer { .. } => InferenceConfig {
                max_tokens: 2048,
                temperature: 0.2,
            },
        }
    }

    /// Short task label for log lines.
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisTask::Summarize(_) => "summarize",
            AnalysisTask::Sentiment => "sentiment",
            AnalysisTask::TopicExtraction(_) => "topics",
            AnalysisTask::QuestionAnswer { .. } => "qa",
        }
    }
}

/// Summary style, selecting one fixed instruction template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryStyle {
    /// 2–3 paragraph summary. (default)
    #[default]
    Concise,
    /// Comprehensive summary covering all key points.
    Detailed,
    /// Bullet-point summary of the main ideas.
    BulletPoints,
    /// Executive summary for senior leadership.
    Executive,
}

impl SummaryStyle {
    /// Parse a style name. Total: unrecognized values fall back to
    /// [`SummaryStyle::Concise`] — this is the documented default policy,
    /// not an error.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" => SummaryStyle::Detailed,
            "bullet-points" | "bullets" => SummaryStyle::BulletPoints,
            "executive" => SummaryStyle::Executive,
            _ => SummaryStyle::Concise,
        }
    }

    /// Canonical style name, as it appears in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryStyle::Concise => "concise",
            SummaryStyle::Detailed => "detailed",
            SummaryStyle::BulletPoints => "bullet-points",
            SummaryStyle::Executive => "executive",
        }
    }
}

impl std::fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
