//! Request assembly: one document, one instruction, one user turn.
//!
//! ## Message Layout
//!
//! Every request contains exactly one message with two content parts, in
//! order:
//!
//! 1. **Document part** — sanitized name, format `"pdf"`, the full raw bytes
//! 2. **Text part** — the task instruction
//!
//! One turn per invocation is a hard rule: repeated Q&A calls on the same
//! document each build a fresh single-turn request, with no accumulation of
//! prior questions or answers. The full document payload is copied in every
//! time, so the model always sees identical, complete bytes.

use crate::client::{
    ContentPart, ConverseRequest, DocumentPart, DocumentSource, InferenceConfig, Message, Role,
};
use crate::document::Document;
use crate::pipeline::sanitize::sanitize_filename;

/// Package a document and instruction into a Converse request.
pub fn build_request(
    document: &Document,
    instruction: &str,
    model_id: &str,
    inference_config: InferenceConfig,
) -> ConverseRequest {
    ConverseRequest {
        model_id: model_id.to_string(),
        messages: vec![Message {
            role: Role::User,
            content: vec![
                ContentPart::Document(DocumentPart {
                    name: sanitize_filename(document.name()),
                    format: Document::FORMAT.to_string(),
                    source: DocumentSource {
                        bytes: document.bytes().to_vec(),
                    },
                }),
                ContentPart::Text(instruction.to_string()),
            ],
        }],
        inference_config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PDF: &[u8] = b"%PDF-1.4 test payload";

    fn doc(name: &str) -> Document {
        Document::from_bytes(PDF.to_vec(), name).expect("valid PDF")
    }

    fn inference() -> InferenceConfig {
        InferenceConfig {
            max_tokens: 2048,
            temperature: 0.2,
        }
    }

    #[test]
    fn request_is_a_single_user_turn() {
        let request = build_request(&doc("a.pdf"), "Summarize this.", "model-x", inference());
        assert_eq!(request.model_id, "model-x");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, Role::User);
    }

    #[test]
    fn document_part_precedes_text_part() {
        let request = build_request(&doc("a.pdf"), "Summarize this.", "model-x", inference());
        let content = &request.messages[0].content;
        assert_eq!(content.len(), 2);
        match &content[0] {
            ContentPart::Document(part) => {
                assert_eq!(part.format, "pdf");
                assert_eq!(part.source.bytes, PDF);
            }
            other => panic!("expected document part first, got {other:?}"),
        }
        match &content[1] {
            ContentPart::Text(text) => assert_eq!(text, "Summarize this."),
            other => panic!("expected text part second, got {other:?}"),
        }
    }

    #[test]
    fn display_name_is_sanitized() {
        let request = build_request(&doc("Q3 report!.pdf"), "x", "model-x", inference());
        match &request.messages[0].content[0] {
            ContentPart::Document(part) => assert_eq!(part.name, "Q3 report__pdf"),
            other => panic!("expected document part, got {other:?}"),
        }
    }

    #[test]
    fn repeated_builds_carry_identical_full_bytes() {
        let document = doc("a.pdf");
        let first = build_request(&document, "x", "m", inference());
        let second = build_request(&document, "y", "m", inference());
        let bytes = |r: &ConverseRequest| match &r.messages[0].content[0] {
            ContentPart::Document(part) => part.source.bytes.clone(),
            _ => panic!("no document part"),
        };
        assert_eq!(bytes(&first), bytes(&second));
        assert_eq!(bytes(&first), PDF);
    }

    #[test]
    fn inference_config_is_attached_unchanged() {
        let request = build_request(
            &doc("a.pdf"),
            "x",
            "m",
            InferenceConfig {
                max_tokens: 4096,
                temperature: 0.5,
            },
        );
        assert_eq!(request.inference_config.max_tokens, 4096);
        assert_eq!(request.inference_config.temperature, 0.5);
    }
}
