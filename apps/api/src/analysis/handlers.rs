//! Axum route handlers for the Resume API.

use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::models::{PersonalInfo, ResumeAnalysis, ResumeTag, TagType};
use crate::errors::AppError;
use crate::models::envelope::ApiResponse;
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub content: Option<String>,
}

/// POST /api/resume/upload
///
/// Multipart upload; the PDF must be in the `file` field.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse<ResumeAnalysis>>, AppError> {
    let mut multipart =
        multipart.map_err(|e| AppError::InvalidInput(format!("Invalid upload: {e}")))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Invalid upload: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("<unnamed>").to_string();
        let content_type = field.content_type().map(String::from);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read file: {e}")))?;

        info!(
            "Received file upload request: filename={}, size={} bytes, contentType={:?}",
            file_name,
            bytes.len(),
            content_type
        );

        let analysis = state
            .analyzer
            .analyze_pdf(content_type.as_deref(), bytes)
            .await?;

        info!("Successfully analyzed resume from file: {file_name}");
        return Ok(Json(ApiResponse::success(analysis)));
    }

    Err(AppError::InvalidInput("Please select a file".to_string()))
}

/// POST /api/resume/analyze
///
/// Body: `{ "content": "<resume text>" }`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ResumeAnalysis>>, AppError> {
    let Json(request) =
        payload.map_err(|e| AppError::InvalidInput(format!("Invalid request body: {e}")))?;
    let content = request.content.unwrap_or_default();

    info!(
        "Received text analysis request with {} characters",
        content.chars().count()
    );

    let analysis = state.analyzer.analyze_text(&content).await?;

    info!("Successfully analyzed resume text");
    Ok(Json(ApiResponse::success(analysis)))
}

/// GET /api/resume/sample
///
/// A canned analysis for frontend work without a provider key.
pub async fn handle_sample() -> Json<ApiResponse<ResumeAnalysis>> {
    let tag = |name: &str, tag_type: TagType, confidence: f64| ResumeTag {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        tag_type,
        confidence,
        score: None,
    };

    Json(ApiResponse::success(ResumeAnalysis {
        personal_info: Some(PersonalInfo {
            name: Some("张三".to_string()),
            email: Some("zhangsan@example.com".to_string()),
            phone: Some("13800138000".to_string()),
            location: Some("北京".to_string()),
        }),
        tags: vec![
            tag("Java开发", TagType::Skill, 0.95),
            tag("阅读", TagType::Interest, 0.9),
            tag("后端工程师", TagType::Position, 0.95),
        ],
        raw_content: None,
    }))
}

/// GET /api/resume/test
pub async fn handle_test() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("API is working!"))
}
