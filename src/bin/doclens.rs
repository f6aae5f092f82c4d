//! CLI binary for doclens.
//!
//! A thin shim over the library crate that maps subcommands to
//! [`DocumentAnalyzer`] calls and prints results. All AWS bootstrap
//! (credentials, region) happens here — the library only ever receives a
//! constructed client.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use doclens::{
    AnalysisConfig, BedrockClient, Document, DocumentAnalyzer, SummaryStyle, DEFAULT_MODEL_ID,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────

fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Concise summary (default style)
  doclens summarize report.pdf

  # Executive summary with a specific model
  doclens --model anthropic.claude-3-5-sonnet-20240620-v1:0 summarize report.pdf --style executive

  # Sentiment and tone
  doclens sentiment report.pdf

  # Top 5 topics, JSON output
  doclens --json topics report.pdf -n 5

  # Q&A with PII guardrails
  doclens ask report.pdf "Who signed the contract?" --guardrails

CREDENTIALS:
  Standard AWS credential resolution applies (environment, profile, SSO,
  instance role). The account must have bedrock:InvokeModel access to the
  chosen model in the active region."#;

#[derive(Parser)]
#[command(
    name = "doclens",
    version,
    about = "Analyze PDF documents with the Amazon Bedrock Converse API",
    after_help = AFTER_HELP
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Bedrock model identifier.
    #[arg(long, global = true, env = "DOCLENS_MODEL", default_value = DEFAULT_MODEL_ID)]
    model: String,

    /// AWS region override (defaults to the profile/environment region).
    #[arg(long, global = true)]
    region: Option<String>,

    /// Print the full result record as JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize a PDF document.
    Summarize {
        pdf: PathBuf,
        /// Summary style: concise, detailed, bullet-points, or executive.
        /// Unknown values fall back to concise.
        #[arg(long, default_value = "concise")]
        style: String,
        /// Custom instruction replacing the style template.
        #[arg(long, conflicts_with = "style")]
        prompt: Option<String>,
    },
    /// Analyze sentiment, tone, and writing style.
    Sentiment { pdf: PathBuf },
    /// Extract the key topics (3-10).
    Topics {
        pdf: PathBuf,
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
    },
    /// Ask a question about the document.
    Ask {
        pdf: PathBuf,
        question: String,
        /// Mask SSNs, card numbers, and emails in the question and answer.
        #[arg(long)]
        guardrails: bool,
    },
}

fn spinner(msg: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);
    bar.set_style(style);
    bar.set_message(msg.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

fn print_result<T: serde::Serialize>(record: &T, text: &str, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        println!("{text}");
    }
    Ok(())
}

fn usage_footer(model: &str, input_tokens: u32, output_tokens: u32) {
    eprintln!(
        "{}",
        dim(&format!(
            "{model} · {input_tokens} tokens in / {output_tokens} out"
        ))
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = cli.region.clone() {
        loader = loader.region(aws_config::Region::new(region));
    }
    let aws = loader.load().await;

    let config = AnalysisConfig::builder().model_id(&cli.model).build()?;
    let analyzer = DocumentAnalyzer::with_config(Arc::new(BedrockClient::new(&aws)), config);

    match cli.command {
        Command::Summarize { pdf, style, prompt } => {
            let document = Document::from_path(&pdf)
                .with_context(|| format!("loading {}", pdf.display()))?;
            let bar = spinner("Summarizing document…");
            let result = match prompt {
                Some(custom) => analyzer.summarize_with_prompt(&document, &custom).await,
                None => analyzer.summarize(&document, SummaryStyle::parse(&style)).await,
            };
            bar.finish_and_clear();
            let result = result?;
            print_result(&result, &result.summary, cli.json)?;
            usage_footer(&result.model, result.input_tokens, result.output_tokens);
        }
        Command::Sentiment { pdf } => {
            let document = Document::from_path(&pdf)
                .with_context(|| format!("loading {}", pdf.display()))?;
            let bar = spinner("Analyzing sentiment…");
            let result = analyzer.sentiment(&document).await;
            bar.finish_and_clear();
            let result = result?;
            print_result(&result, &result.analysis, cli.json)?;
            usage_footer(&result.model, result.input_tokens, result.output_tokens);
        }
        Command::Topics { pdf, count } => {
            let document = Document::from_path(&pdf)
                .with_context(|| format!("loading {}", pdf.display()))?;
            let bar = spinner("Extracting topics…");
            let result = analyzer.topics(&document, count).await;
            bar.finish_and_clear();
            let result = result?;
            print_result(&result, &result.topics, cli.json)?;
            usage_footer(&result.model, result.input_tokens, result.output_tokens);
        }
        Command::Ask {
            pdf,
            question,
            guardrails,
        } => {
            let document = Document::from_path(&pdf)
                .with_context(|| format!("loading {}", pdf.display()))?;
            let bar = spinner("Answering question…");
            let result = analyzer.answer(&document, &question, guardrails).await;
            bar.finish_and_clear();
            let result = result?;
            if !cli.json {
                eprintln!("{} {}", bold("Q:"), result.question);
            }
            print_result(&result, &result.answer, cli.json)?;
            usage_footer(&result.model, result.input_tokens, result.output_tokens);
        }
    }

    Ok(())
}
