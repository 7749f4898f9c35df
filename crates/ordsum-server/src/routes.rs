//! Upload and summary request handlers.

use std::io::Write;
use std::path::Path;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Html;
use tracing::{info, warn};

use ordsum_core::enrich::{enrich_items, RetailQuantityLookup};
use ordsum_core::order::{OrderParser, RuleOrderParser};
use ordsum_core::pdf::{PdfExtractor, PdfProcessor};
use ordsum_core::render::render_order_html;

use crate::app::AppState;

const UPLOAD_FORM: &str = r#"<!doctype html>
<title>Upload order confirmation</title>
<h1>Upload an order-confirmation PDF</h1>
<form method="post" enctype="multipart/form-data">
    <input type="file" name="file">
    <input type="submit" value="Upload">
</form>
"#;

/// Landing page with the upload form.
pub async fn upload_form() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}

/// Liveness probe.
pub async fn health_handler() -> &'static str {
    "ok"
}

/// Accept one uploaded PDF, summarize it, and respond with the HTML summary.
///
/// The upload is spooled into a NamedTempFile inside the configured upload
/// directory; the file is removed when the handler returns, on every exit
/// path including errors.
pub async fn upload_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, (StatusCode, String)> {
    let config = &state.config;

    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Malformed upload: {}", e)))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or("").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| (StatusCode::BAD_REQUEST, format!("Malformed upload: {}", e)))?;
            upload = Some((file_name, data.to_vec()));
        }
    }

    let Some((file_name, data)) = upload else {
        return Err((StatusCode::BAD_REQUEST, "No file uploaded.".to_string()));
    };
    if file_name.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "No selected file.".to_string()));
    }
    if !has_allowed_extension(&file_name, &config.server.allowed_extensions) {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Unsupported file type: {}", file_name),
        ));
    }

    info!(file = %file_name, bytes = data.len(), "Received upload");

    let mut spooled = tempfile::NamedTempFile::new_in(&config.server.upload_dir).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Could not store upload: {}", e),
        )
    })?;
    spooled.write_all(&data).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Could not store upload: {}", e),
        )
    })?;

    // An unreadable document is the one fatal failure; no partial record
    let text = extract_text(spooled.path()).map_err(|e| {
        warn!(file = %file_name, error = %e, "Document unreadable");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Could not read document: {}", e),
        )
    })?;

    if text.trim().len() < config.pdf.min_text_length {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "No text could be extracted from the document.".to_string(),
        ));
    }

    let outcome = RuleOrderParser::new().parse(&text);
    let mut record = outcome.record;

    if config.server.enrich {
        let lookup = RetailQuantityLookup::new(&config.enrichment);
        enrich_items(&mut record, &lookup).await;
    }

    Ok(Html(render_order_html(&record)))
}

fn extract_text(path: &Path) -> ordsum_core::Result<String> {
    let data = std::fs::read(path)?;
    let mut extractor = PdfExtractor::new();
    extractor.load(&data)?;
    Ok(extractor.extract_text()?)
}

/// Case-insensitive extension allow-list check.
pub fn has_allowed_extension(file_name: &str, allowed: &[String]) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| allowed.iter().any(|a| a.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec!["pdf".to_string()]
    }

    #[test]
    fn test_pdf_extension_allowed() {
        assert!(has_allowed_extension("order.pdf", &allowed()));
        assert!(has_allowed_extension("order.PDF", &allowed()));
        assert!(has_allowed_extension("my order (1).pdf", &allowed()));
    }

    #[test]
    fn test_other_extensions_rejected() {
        assert!(!has_allowed_extension("order.txt", &allowed()));
        assert!(!has_allowed_extension("order.pdf.exe", &allowed()));
        assert!(!has_allowed_extension("order", &allowed()));
        assert!(!has_allowed_extension("", &allowed()));
    }
}
