//! The remote-model boundary: wire types and the client trait.
//!
//! Everything upstream of this module is pure data transformation; this is
//! the single seam with network I/O. [`ConverseClient`] is deliberately
//! narrow — one call, request in, response out — so the entire pipeline can
//! be exercised with an in-process test double and no AWS account.
//!
//! The types here mirror the Converse API's JSON schema field-for-field
//! (camelCase names, base64 document bytes) rather than re-exporting the SDK
//! builders, for two reasons: the request shape is part of this crate's
//! contract and unit tests assert on it directly, and test doubles should not
//! have to construct SDK types to fake a response.

use crate::error::DocLensError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

pub mod bedrock;

pub use bedrock::BedrockClient;

/// The remote analysis call. One RPC per task invocation; implementations
/// perform no retries — a failed call surfaces immediately as
/// [`DocLensError::Transport`].
#[async_trait::async_trait]
pub trait ConverseClient: Send + Sync {
    async fn converse(&self, request: &ConverseRequest) -> Result<ConverseResponse, DocLensError>;
}

// ── Request ──────────────────────────────────────────────────────────────

/// A complete Converse request: model, single-turn message list, and
/// generation settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverseRequest {
    pub model_id: String,
    pub messages: Vec<Message>,
    pub inference_config: InferenceConfig,
}

/// One conversation turn.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: Vec<ContentPart>,
}

/// Message role. This pipeline only ever sends user turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// One content part of a message: the document attachment or instruction
/// text. Externally tagged so the JSON rendering matches the wire schema
/// (`{"document": {...}}` / `{"text": "..."}`).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentPart {
    Document(DocumentPart),
    Text(String),
}

/// The document attachment.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentPart {
    /// Sanitized display name (see [`crate::pipeline::sanitize`]).
    pub name: String,
    /// Always `"pdf"`.
    pub format: String,
    pub source: DocumentSource,
}

/// Raw document bytes. Rendered as base64 in JSON, the way the HTTP Converse
/// API carries them.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    pub bytes: Vec<u8>,
}

impl Serialize for DocumentSource {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("DocumentSource", 1)?;
        s.serialize_field("bytes", &BASE64.encode(&self.bytes))?;
        s.end()
    }
}

/// Per-call generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfig {
    pub max_tokens: u32,
    pub temperature: f32,
}

// ── Response ─────────────────────────────────────────────────────────────

/// Raw structured output of one Converse call.
///
/// Fields the normalizer requires are `Option` here: the SDK models them that
/// way, and a response with any of them missing must surface as
/// [`DocLensError::MalformedResponse`] rather than a panic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverseResponse {
    pub output: Option<ConverseOutput>,
    pub usage: Option<TokenUsage>,
    pub stop_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConverseOutput {
    pub message: Option<OutputMessage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputMessage {
    pub content: Vec<OutputContent>,
}

/// One content block of the model's reply. Non-text blocks deserialize with
/// `text: None` and are skipped by the normalizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Token accounting from the response's usage block.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl ConverseResponse {
    /// Assemble a reply with one text block — the shape every well-behaved
    /// call comes back with. Used by test doubles throughout the test suite.
    pub fn with_text(
        text: impl Into<String>,
        input_tokens: u32,
        output_tokens: u32,
        stop_reason: impl Into<String>,
    ) -> Self {
        ConverseResponse {
            output: Some(ConverseOutput {
                message: Some(OutputMessage {
                    content: vec![OutputContent {
                        text: Some(text.into()),
                    }],
                }),
            }),
            usage: Some(TokenUsage {
                input_tokens,
                output_tokens,
            }),
            stop_reason: Some(stop_reason.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_converse_field_names() {
        let request = ConverseRequest {
            model_id: "anthropic.claude-3-sonnet-20240229-v1:0".into(),
            messages: vec![Message {
                role: Role::User,
                content: vec![
                    ContentPart::Document(DocumentPart {
                        name: "report".into(),
                        format: "pdf".into(),
                        source: DocumentSource {
                            bytes: b"%PDF-1.4".to_vec(),
                        },
                    }),
                    ContentPart::Text("Summarize this.".into()),
                ],
            }],
            inference_config: InferenceConfig {
                max_tokens: 4096,
                temperature: 0.5,
            },
        };

        let json = serde_json::to_value(&request).expect("request serializes");
        assert_eq!(json["modelId"], "anthropic.claude-3-sonnet-20240229-v1:0");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"][0]["document"]["format"], "pdf");
        assert_eq!(
            json["messages"][0]["content"][0]["document"]["source"]["bytes"],
            BASE64.encode(b"%PDF-1.4")
        );
        assert_eq!(json["messages"][0]["content"][1]["text"], "Summarize this.");
        assert_eq!(json["inferenceConfig"]["maxTokens"], 4096);
    }

    #[test]
    fn response_round_trips_through_json() {
        let response = ConverseResponse::with_text("All good.", 12, 4, "end_turn");
        let json = serde_json::to_string(&response).expect("serialize");
        assert!(json.contains("\"inputTokens\":12"));
        assert!(json.contains("\"stopReason\":\"end_turn\""));

        let back: ConverseResponse = serde_json::from_str(&json).expect("deserialize");
        let usage = back.usage.expect("usage");
        assert_eq!(usage.input_tokens, 12);
        assert_eq!(usage.output_tokens, 4);
    }

    #[test]
    fn unknown_content_blocks_deserialize_as_textless() {
        let json = r#"{"output":{"message":{"content":[{"toolUse":{}},{"text":"hi"}]}},
                       "usage":{"inputTokens":1,"outputTokens":1},"stopReason":"end_turn"}"#;
        let response: ConverseResponse = serde_json::from_str(json).expect("deserialize");
        let content = &response.output.unwrap().message.unwrap().content;
        assert!(content[0].text.is_none());
        assert_eq!(content[1].text.as_deref(), Some("hi"));
    }
}
