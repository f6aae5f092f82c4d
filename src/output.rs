//! Result records returned by the task orchestrators.
//!
//! [`AnalysisResult`] is the normalizer's uniform record; the typed wrappers
//! rename its text field to what each task actually produced (`summary`,
//! `analysis`, `topics`, `answer`) so the serde rendering matches what
//! downstream consumers expect. All records are created fresh per call.

use serde::{Deserialize, Serialize};

/// Uniform result of one model call, before task-specific naming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The model's reply: summary, analysis, topic list, or answer.
    pub text: String,
    /// Model identifier the call ran against.
    pub model: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
    /// Why generation ended (e.g. `end_turn`, `max_tokens`), when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
}

/// Result of a summarization task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOutput {
    pub summary: String,
    pub model: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
}

impl From<AnalysisResult> for SummaryOutput {
    fn from(r: AnalysisResult) -> Self {
        Self {
            summary: r.text,
            model: r.model,
            input_tokens: r.input_tokens,
            output_tokens: r.output_tokens,
            stop_reason: r.stop_reason,
        }
    }
}

/// Result of a sentiment-analysis task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentOutput {
    pub analysis: String,
    pub model: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
}

impl From<AnalysisResult> for SentimentOutput {
    fn from(r: AnalysisResult) -> Self {
        Self {
            analysis: r.text,
            model: r.model,
            input_tokens: r.input_tokens,
            output_tokens: r.output_tokens,
            stop_reason: r.stop_reason,
        }
    }
}

/// Result of a topic-extraction task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicsOutput {
    pub topics: String,
    pub model: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
}

impl From<AnalysisResult> for TopicsOutput {
    fn from(r: AnalysisResult) -> Self {
        Self {
            topics: r.text,
            model: r.model,
            input_tokens: r.input_tokens,
            output_tokens: r.output_tokens,
            stop_reason: r.stop_reason,
        }
    }
}

/// Result of a question-answering task.
///
/// `question` is the text that actually went into the prompt — with
/// guardrails enabled, that is the redacted form, never the raw input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOutput {
    pub answer: String,
    pub question: String,
    pub model: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            text: "X".into(),
            model: "model-x".into(),
            input_tokens: 10,
            output_tokens: 5,
            stop_reason: Some("end_turn".into()),
        }
    }

    #[test]
    fn summary_serde_field_names() {
        let out: SummaryOutput = sample().into();
        let json = serde_json::to_value(&out).expect("serializes");
        assert_eq!(json["summary"], "X");
        assert_eq!(json["input_tokens"], 10);
        assert_eq!(json["output_tokens"], 5);
        assert_eq!(json["stop_reason"], "end_turn");
    }

    #[test]
    fn stop_reason_omitted_when_absent() {
        let mut result = sample();
        result.stop_reason = None;
        let out: TopicsOutput = result.into();
        let json = serde_json::to_value(&out).expect("serializes");
        assert!(json.get("stop_reason").is_none());
        assert_eq!(json["topics"], "X");
    }

    #[test]
    fn wrappers_rename_the_text_field() {
        assert_eq!(SentimentOutput::from(sample()).analysis, "X");
        assert_eq!(TopicsOutput::from(sample()).topics, "X");
        assert_eq!(SummaryOutput::from(sample()).summary, "X");
    }
}
