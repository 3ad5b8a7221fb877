//! Turns the model's reply text into a `ResumeAnalysis`.

use uuid::Uuid;

use crate::analysis::models::ResumeAnalysis;
use crate::errors::AppError;
use crate::llm_client::strip_json_fences;

/// Decodes the assistant's reply.
///
/// Fails with `MalformedResponse` when the reply is not JSON of the expected
/// shape, names an unknown tag type, or lacks `personalInfo` / `tags`.
/// Confidence and score are passed through unchecked.
pub fn parse_analysis(content: &str) -> Result<ResumeAnalysis, AppError> {
    let json = strip_json_fences(content);

    let mut analysis: ResumeAnalysis = serde_json::from_str(json)
        .map_err(|e| AppError::MalformedResponse(e.to_string()))?;

    if analysis.personal_info.is_none() {
        return Err(AppError::MalformedResponse(
            "missing field `personalInfo`".to_string(),
        ));
    }

    for tag in analysis.tags.iter_mut().filter(|t| t.id.trim().is_empty()) {
        tag.id = Uuid::new_v4().to_string();
    }

    Ok(analysis)
}
