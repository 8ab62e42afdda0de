//! Axum route handler for resume uploads.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::extractor::ExtractionError;
use crate::profile::models::ExtractedCandidateProfile;
use crate::profile::reconcile::{reconcile, IdentityFields};
use crate::profile::storage::{allowed_extension, sanitize_filename, storage_name, store_upload};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// One multipart submission. Lives only for the duration of the request.
#[derive(Debug, Default)]
struct ResumeSubmission {
    file: Option<UploadedFile>,
    form: IdentityFields,
}

#[derive(Debug)]
struct UploadedFile {
    filename: String,
    data: Bytes,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub data: UploadData,
}

#[derive(Debug, Serialize)]
pub struct UploadData {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// `null` when extraction was skipped or failed.
    pub ai_data: Option<ExtractedCandidateProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_error: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resumes
///
/// Stores the uploaded file, enriches PDFs with AI-extracted fields and returns the
/// reconciled candidate. Enrichment failures never fail the upload.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let submission = read_submission(&mut multipart).await?;

    let file = submission
        .file
        .filter(|f| !f.filename.trim().is_empty())
        .ok_or_else(|| AppError::Validation("No file provided".to_string()))?;

    let filename = sanitize_filename(&file.filename);
    let kind = allowed_extension(&filename).ok_or_else(|| {
        AppError::Validation("Invalid file format; accepted: .pdf, .doc, .docx".to_string())
    })?;

    let id = Uuid::new_v4();
    let uploaded_at = Utc::now();
    let stored_name = storage_name(uploaded_at, submission.form.email.as_deref(), id, &filename);
    let path = store_upload(&state.config.upload_dir, &stored_name, &file.data).await?;
    info!(%id, file = %stored_name, bytes = file.data.len(), "Resume stored");

    let (ai_data, ai_error) = if kind.is_pdf() {
        match enrich(&state, file.data).await {
            Ok(profile) => (Some(profile), None),
            Err(e) => {
                warn!(%id, "AI enrichment unavailable: {e}");
                (None, Some(e.to_string()))
            }
        }
    } else {
        (None, None)
    };

    let resolved = reconcile(&submission.form, ai_data.as_ref());

    // No database yet: the record is only logged.
    info!(
        %id,
        name = ?resolved.name,
        email = ?resolved.email,
        phone = ?resolved.phone,
        filename = %stored_name,
        filepath = %path.display(),
        uploaded_at = %uploaded_at.to_rfc3339(),
        ai_data = ?ai_data,
        ai_error = ?ai_error,
        "Resume received"
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            success: true,
            message: "Resume received successfully".to_string(),
            data: UploadData {
                id,
                name: resolved.name,
                email: resolved.email,
                phone: resolved.phone,
                ai_data,
                ai_error,
            },
        }),
    ))
}

async fn read_submission(multipart: &mut Multipart) -> Result<ResumeSubmission, AppError> {
    let mut submission = ResumeSubmission::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                submission.file = Some(UploadedFile { filename, data });
            }
            Some("name") => submission.form.name = non_blank(field.text().await?),
            Some("email") => submission.form.email = non_blank(field.text().await?),
            Some("phone") => submission.form.phone = non_blank(field.text().await?),
            _ => {}
        }
    }

    Ok(submission)
}

async fn enrich(
    state: &AppState,
    document: Bytes,
) -> Result<ExtractedCandidateProfile, ExtractionError> {
    let text = state.text.extract_text(document).await?;
    state.profiles.extract(&text).await
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
