//! Production [`ConverseClient`] backed by `aws-sdk-bedrockruntime`.
//!
//! This module is a pure adapter: it maps the crate's wire types onto the
//! SDK's Converse builders and back, and turns every SDK failure into
//! [`DocLensError::Transport`] with the full error chain attached. No retry,
//! no timeout of its own — the SDK client's configuration governs both.
//!
//! The client is constructed from an [`aws_config::SdkConfig`] the caller
//! loaded (constructor injection, never a process-wide singleton), so two
//! analyzers in one process can point at different regions or credentials.

use crate::client::{ConverseClient, ConverseRequest, ConverseResponse};
use crate::error::DocLensError;
use aws_sdk_bedrockruntime::types as bedrock;
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_types::Blob;
use tracing::{debug, info};

/// Bedrock Converse client.
#[derive(Debug, Clone)]
pub struct BedrockClient {
    inner: aws_sdk_bedrockruntime::Client,
}

impl BedrockClient {
    /// Build from a loaded AWS configuration (region, credentials, timeouts).
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            inner: aws_sdk_bedrockruntime::Client::new(config),
        }
    }

    /// Wrap an already-constructed SDK client.
    pub fn from_client(inner: aws_sdk_bedrockruntime::Client) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl ConverseClient for BedrockClient {
    async fn converse(&self, request: &ConverseRequest) -> Result<ConverseResponse, DocLensError> {
        let mut builder = self
            .inner
            .converse()
            .model_id(&request.model_id)
            .inference_config(
                bedrock::InferenceConfiguration::builder()
                    .max_tokens(clamp_to_i32(request.inference_config.max_tokens))
                    .temperature(request.inference_config.temperature)
                    .build(),
            );

        for message in &request.messages {
            builder = builder.messages(to_sdk_message(message)?);
        }

        info!(model_id = %request.model_id, "invoking Bedrock Converse");

        let response = builder.send().await.map_err(|e| {
            let message = DisplayErrorContext(&e).to_string();
            DocLensError::Transport {
                message,
                source: Some(Box::new(e)),
            }
        })?;

        debug!(
            stop_reason = response.stop_reason().as_str(),
            "Converse call returned"
        );

        Ok(from_sdk_response(response))
    }
}

// ── Mapping helpers ──────────────────────────────────────────────────────

fn to_sdk_message(
    message: &crate::client::Message,
) -> Result<bedrock::Message, DocLensError> {
    let role = match message.role {
        crate::client::Role::User => bedrock::ConversationRole::User,
    };

    let mut builder = bedrock::Message::builder().role(role);
    for part in &message.content {
        builder = builder.content(to_sdk_content(part)?);
    }
    builder
        .build()
        .map_err(|e| DocLensError::InvalidConfig(format!("message build failed: {e}")))
}

fn to_sdk_content(part: &crate::client::ContentPart) -> Result<bedrock::ContentBlock, DocLensError> {
    match part {
        crate::client::ContentPart::Text(text) => Ok(bedrock::ContentBlock::Text(text.clone())),
        crate::client::ContentPart::Document(doc) => {
            let block = bedrock::DocumentBlock::builder()
                .format(bedrock::DocumentFormat::from(doc.format.as_str()))
                .name(&doc.name)
                .source(bedrock::DocumentSource::Bytes(Blob::new(
                    doc.source.bytes.clone(),
                )))
                .build()
                .map_err(|e| DocLensError::InvalidConfig(format!("document build failed: {e}")))?;
            Ok(bedrock::ContentBlock::Document(block))
        }
    }
}

fn from_sdk_response(
    response: aws_sdk_bedrockruntime::operation::converse::ConverseOutput,
) -> ConverseResponse {
    let stop_reason = Some(response.stop_reason().as_str().to_string());

    let usage = response.usage().map(|u| crate::client::TokenUsage {
        input_tokens: u.input_tokens().max(0) as u32,
        output_tokens: u.output_tokens().max(0) as u32,
    });

    let message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .map(|m| crate::client::OutputMessage {
            content: m
                .content()
                .iter()
                .map(|block| crate::client::OutputContent {
                    text: match block {
                        bedrock::ContentBlock::Text(t) => Some(t.clone()),
                        _ => None,
                    },
                })
                .collect(),
        });

    ConverseResponse {
        output: Some(crate::client::ConverseOutput { message }),
        usage,
        stop_reason,
    }
}

fn clamp_to_i32(n: u32) -> i32 {
    n.min(i32::MAX as u32) as i32
}
