//! Instruction templates for every analysis task.
//!
//! Centralising the prompts here serves two purposes:
//!
//! 1. **Single source of truth** — changing how a task is phrased requires
//!    editing exactly one place.
//! 2. **Testability** — unit tests inspect the instruction text directly
//!    without a model call, so prompt regressions are caught cheaply.
//!
//! [`build_prompt`] is pure and total: every [`AnalysisTask`] value maps to a
//! non-empty instruction string.

use crate::task::{AnalysisTask, SummaryStyle, MAX_TOPICS, MIN_TOPICS};

/// Summary templates, one per [`SummaryStyle`].
pub const SUMMARY_CONCISE: &str =
    "Provide a concise summary of this document in 2-3 paragraphs.";
pub const SUMMARY_DETAILED: &str =
    "Provide a detailed and comprehensive summary of this document, covering all key points.";
pub const SUMMARY_BULLET_POINTS: &str =
    "Summarize this document using clear bullet points, highlighting the main ideas.";
pub const SUMMARY_EXECUTIVE: &str =
    "Provide an executive summary suitable for senior leadership, focusing on key insights and actionable items.";

/// Three-part sentiment instruction: overall sentiment, tones, writing style.
pub const SENTIMENT: &str = "Analyze the sentiment and tone of this document. Provide:\n\
1. Overall sentiment (positive/negative/neutral)\n\
2. Key emotional tones\n\
3. Writing style";

/// The instruction text for one task.
///
/// The topic count is clamped to [`MIN_TOPICS`]–[`MAX_TOPICS`] here, so a
/// caller-constructed `TopicExtraction(500)` still produces a well-formed
/// request. The Q&A question is substituted verbatim — any guardrail
/// redaction has already happened by the time the task reaches this function.
pub fn build_prompt(task: &AnalysisTask) -> String {
    match task {
        AnalysisTask::Summarize(style) => summary_template(*style).to_string(),
        AnalysisTask::Sentiment => SENTIMENT.to_string(),
        AnalysisTask::TopicExtraction(count) => {
            let n = (*count).clamp(MIN_TOPICS, MAX_TOPICS);
            format!(
                "Extract the top {n} key topics or themes from this document. \
                 For each topic, provide a brief description."
            )
        }
        AnalysisTask::QuestionAnswer { question, .. } => {
            format!("Based on this document, answer: {question}")
        }
    }
}

/// Fixed template for a summary style.
pub fn summary_template(style: SummaryStyle) -> &'static str {
    match style {
        SummaryStyle::Concise => SUMMARY_CONCISE,
        SummaryStyle::Detailed => SUMMARY_DETAILED,
        SummaryStyle::BulletPoints => SUMMARY_BULLET_POINTS,
        SummaryStyle::Executive => SUMMARY_EXECUTIVE,
    }
}
