//! # doclens
//!
//! Analyze PDF documents with the Amazon Bedrock Converse API: summaries,
//! sentiment analysis, topic extraction, and document Q&A.
//!
//! ## Why this crate?
//!
//! Bedrock's Converse API reads PDF documents natively — no local text
//! extraction, no rasterisation, no embedding pipeline. This crate covers
//! everything between "here is a PDF and a task" and "here is the model's
//! normalized answer": prompt templates per task, optional PII guardrails for
//! Q&A, the Converse message assembly, and response normalization into a
//! uniform result record.
//!
//! ## Pipeline Overview
//!
//! ```text
//! (document, task)
//!  │
//!  ├─ 1. Prompt      task → fixed instruction template
//!  ├─ 2. Guardrails  mask SSNs / card numbers / emails (Q&A only, opt-in)
//!  ├─ 3. Assemble    one user turn: [document bytes, instruction]
//!  ├─ 4. Invoke      Bedrock Converse (or any ConverseClient test double)
//!  └─ 5. Normalize   text + token counts + stop reason
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use doclens::{BedrockClient, Document, DocumentAnalyzer, SummaryStyle};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
//!     let analyzer = DocumentAnalyzer::new(Arc::new(BedrockClient::new(&aws)));
//!
//!     let document = Document::from_path("report.pdf")?;
//!     let result = analyzer.summarize(&document, SummaryStyle::Concise).await?;
//!
//!     println!("{}", result.summary);
//!     eprintln!("tokens: {} in / {} out", result.input_tokens, result.output_tokens);
//!     Ok(())
//! }
//! ```
//!
//! ## The client seam
//!
//! [`ConverseClient`] is the only network boundary. Production code hands the
//! analyzer a [`BedrockClient`]; tests hand it an in-process double that
//! replays canned [`client::ConverseResponse`] values, and the entire
//! pipeline — prompts, guardrails, request assembly, normalization — runs
//! without an AWS account. Clients are injected at construction, so one
//! process can run analyzers against different regions or credentials side
//! by side.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `doclens` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! doclens = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod analyze;
pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod prompts;
pub mod task;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use analyze::DocumentAnalyzer;
pub use client::{BedrockClient, ConverseClient, ConverseRequest, ConverseResponse, InferenceConfig};
pub use config::{AnalysisConfig, AnalysisConfigBuilder, DEFAULT_MODEL_ID};
pub use document::Document;
pub use error::DocLensError;
pub use output::{AnalysisResult, AnswerOutput, SentimentOutput, SummaryOutput, TopicsOutput};
pub use pipeline::guardrails::{redact, RedactionAction, RedactionOutcome};
pub use pipeline::sanitize::sanitize_filename;
pub use task::{AnalysisTask, SummaryStyle};
