//! Response normalization: raw Converse output → uniform result record.
//!
//! The model's reply arrives as a list of content blocks plus a usage block.
//! The normalizer takes the first text block as the result body and requires
//! the usage counters to be present. A response missing either is a schema
//! break on the service side and surfaces as
//! [`DocLensError::MalformedResponse`] — never silently patched over, since
//! the caller must know the API contract changed.

use crate::client::ConverseResponse;
use crate::error::DocLensError;
use crate::output::AnalysisResult;

/// Extract text, token counts, and stop reason from a raw response.
pub fn normalize(
    response: ConverseResponse,
    model_id: &str,
) -> Result<AnalysisResult, DocLensError> {
    let message = response
        .output
        .and_then(|o| o.message)
        .ok_or_else(|| DocLensError::malformed("no message in response output"))?;

    let text = message
        .content
        .into_iter()
        .find_map(|block| block.text)
        .ok_or_else(|| DocLensError::malformed("response contained no text content block"))?;

    let usage = response
        .usage
        .ok_or_else(|| DocLensError::malformed("response missing usage block"))?;

    Ok(AnalysisResult {
        text,
        model: model_id.to_string(),
        input_tokens: usage.input_tokens,
        output_tokens: usage.output_tokens,
        stop_reason: response.stop_reason,
    })
}
