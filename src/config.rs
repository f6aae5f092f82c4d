//! Configuration for document analysis.
//!
//! All knobs live in one [`AnalysisConfig`] struct built via its
//! [`AnalysisConfigBuilder`]. Keeping configuration in a single value makes it
//! trivial to share across calls, serialise for logging, and diff two runs.
//! Per-task inference defaults (see [`crate::task::AnalysisTask`]) apply
//! whenever an override is not set here.

use crate::client::InferenceConfig;
use crate::error::DocLensError;
use serde::{Deserialize, Serialize};

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-sonnet-20240229-v1:0";

/// Configuration shared by every task invocation of a
/// [`crate::analyze::DocumentAnalyzer`].
///
/// # Example
/// ```rust
/// use doclens::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .model_id("anthropic.claude-3-haiku-20240307-v1:0")
///     .temperature(0.2)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Bedrock model identifier. Any Converse-capable model id is accepted;
    /// the default is Claude 3 Sonnet.
    pub model_id: String,

    /// Override for the per-task max output tokens. `None` uses the task
    /// default (4096 for summaries, 2048 otherwise).
    pub max_tokens: Option<u32>,

    /// Override for the per-task sampling temperature. `None` uses the task
    /// default (0.5 summaries, 0.3 sentiment/topics, 0.2 Q&A).
    pub temperature: Option<f32>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            max_tokens: None,
            temperature: None,
        }
    }
}

impl AnalysisConfig {
    /// Create a new builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder {
            config: Self::default(),
        }
    }

    /// Resolve the generation settings for one task: the task's defaults with
    /// any configured overrides applied.
    pub(crate) fn inference_for(&self, defaults: InferenceConfig) -> InferenceConfig {
        InferenceConfig {
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            temperature: self.temperature.unwrap_or(defaults.temperature),
        }
    }
}

/// Builder for [`AnalysisConfig`].
#[derive(Debug)]
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    pub fn model_id(mut self, id: impl Into<String>) -> Self {
        self.config.model_id = id.into();
        self
    }

    pub fn max_tokens(mut self, n: u32) -> Self {
        self.config.max_tokens = Some(n.max(1));
        self
    }

    /// Sampling temperature, clamped to the 0.0–1.0 range Converse accepts.
    pub fn temperature(mut self, t: f32) -> Self {
        self.config.temperature = Some(t.clamp(0.0, 1.0));
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<AnalysisConfig, DocLensError> {
        let c = &self.config;
        if c.model_id.trim().is_empty() {
            return Err(DocLensError::InvalidConfig(
                "model_id must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_claude_sonnet() {
        let config = AnalysisConfig::default();
        assert_eq!(config.model_id, DEFAULT_MODEL_ID);
        assert!(config.max_tokens.is_none());
        assert!(config.temperature.is_none());
    }

    #[test]
    fn builder_clamps_temperature() {
        let config = AnalysisConfig::builder()
            .temperature(3.0)
            .build()
            .expect("valid config");
        assert_eq!(config.temperature, Some(1.0));
    }

    #[test]
    fn builder_rejects_empty_model_id() {
        let err = AnalysisConfig::builder().model_id("  ").build().unwrap_err();
        assert!(matches!(err, DocLensError::InvalidConfig(_)));
    }

    #[test]
    fn overrides_replace_task_defaults() {
        let config = AnalysisConfig::builder()
            .max_tokens(512)
            .build()
            .expect("valid config");
        let resolved = config.inference_for(InferenceConfig {
            max_tokens: 4096,
            temperature: 0.5,
        });
        assert_eq!(resolved.max_tokens, 512);
        assert_eq!(resolved.temperature, 0.5); // not overridden
    }
}
