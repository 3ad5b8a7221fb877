//! Resume analysis pipeline: validate → extract → prompt → complete → parse.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info, warn};

use crate::analysis::extract::{extract_pdf_text, validate_upload};
use crate::analysis::models::ResumeAnalysis;
use crate::analysis::parser::parse_analysis;
use crate::analysis::prompts::RESUME_ANALYSIS_SYSTEM;
use crate::errors::AppError;
use crate::llm_client::prompts::build_chat;
use crate::llm_client::ChatCompletion;

/// Runs one resume through the completion provider. Holds no per-request state.
#[derive(Clone)]
pub struct ResumeAnalyzer {
    llm: Arc<dyn ChatCompletion>,
}

impl ResumeAnalyzer {
    pub fn new(llm: Arc<dyn ChatCompletion>) -> Self {
        Self { llm }
    }

    /// Analyzes plain resume text.
    ///
    /// Blank content is rejected before the provider is contacted.
    pub async fn analyze_text(&self, content: &str) -> Result<ResumeAnalysis, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Content cannot be empty".to_string(),
            ));
        }

        let messages = build_chat(RESUME_ANALYSIS_SYSTEM, content);
        let reply = self.llm.complete(&messages).await?;
        debug!("Model reply received ({} chars)", reply.chars().count());

        let mut analysis = parse_analysis(&reply).map_err(|e| {
            warn!("Could not decode model reply: {reply}");
            e
        })?;

        if analysis.raw_content.is_none() {
            analysis.raw_content = Some(content.to_string());
        }

        info!("Resume analyzed: {} tags", analysis.tags.len());
        Ok(analysis)
    }

    /// Validates an uploaded PDF, extracts its text, then analyzes it.
    pub async fn analyze_pdf(
        &self,
        content_type: Option<&str>,
        bytes: Bytes,
    ) -> Result<ResumeAnalysis, AppError> {
        validate_upload(content_type, &bytes)?;

        // pdf-extract may panic on malformed documents; treat that as unreadable input
        let text = tokio::task::spawn_blocking(move || extract_pdf_text(&bytes))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    AppError::InvalidInput("Failed to read PDF file".to_string())
                } else {
                    AppError::Internal(anyhow::Error::new(e).context("PDF extraction task failed"))
                }
            })??;

        debug!("Extracted {} chars from PDF", text.chars().count());
        self.analyze_text(&text).await
    }
}
