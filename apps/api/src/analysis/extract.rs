//! PDF upload validation and text extraction.

use crate::errors::AppError;

const PDF_MIME: &str = "application/pdf";

/// Rejects uploads that are empty or not declared as PDF.
///
/// Only the MIME essence is compared; parameters and case are ignored.
pub fn validate_upload(content_type: Option<&str>, bytes: &[u8]) -> Result<(), AppError> {
    if bytes.is_empty() {
        return Err(AppError::InvalidInput("Please select a file".to_string()));
    }

    let is_pdf = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|essence| essence.trim().eq_ignore_ascii_case(PDF_MIME))
        .unwrap_or(false);
    if !is_pdf {
        return Err(AppError::InvalidInput(
            "Only PDF files are supported".to_string(),
        ));
    }

    Ok(())
}

/// Extracts the text layer of an in-memory PDF.
///
/// Blocking and CPU-bound; callers on the async runtime should wrap it in
/// `spawn_blocking`.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::InvalidInput(format!("Failed to read PDF file: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "No text could be extracted from the PDF".to_string(),
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_pdf::single_page_pdf;

    fn assert_invalid(result: Result<(), AppError>, expected: &str) {
        match result {
            Err(AppError::InvalidInput(msg)) => assert_eq!(msg, expected),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_upload_accepts_pdf() {
        assert!(validate_upload(Some("application/pdf"), b"%PDF-1.4").is_ok());
    }

    #[test]
    fn test_validate_upload_ignores_case_and_parameters() {
        assert!(validate_upload(Some("Application/PDF; name=cv.pdf"), b"%PDF-1.4").is_ok());
    }

    #[test]
    fn test_validate_upload_rejects_empty_buffer_first() {
        assert_invalid(validate_upload(Some("text/plain"), b""), "Please select a file");
    }

    #[test]
    fn test_validate_upload_rejects_other_types() {
        assert_invalid(
            validate_upload(Some("text/plain"), b"hello"),
            "Only PDF files are supported",
        );
        assert_invalid(
            validate_upload(Some("application/pdfx"), b"hello"),
            "Only PDF files are supported",
        );
        assert_invalid(validate_upload(None, b"%PDF-1.4"), "Only PDF files are supported");
    }

    #[test]
    fn test_extract_pdf_text_reads_text_layer() {
        let pdf = single_page_pdf(Some("Senior Java Engineer"));
        let text = extract_pdf_text(&pdf).unwrap();
        assert!(text.contains("Senior Java Engineer"), "got {text:?}");
    }

    #[test]
    fn test_extract_pdf_text_rejects_blank_page() {
        let pdf = single_page_pdf(None);
        match extract_pdf_text(&pdf) {
            Err(AppError::InvalidInput(msg)) => {
                assert_eq!(msg, "No text could be extracted from the PDF")
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}
