//! Local storage for uploaded resumes.
//!
//! Stored names look like `20240131_142501_ana_example.com_<uuid>_cv.pdf`. The UUID
//! keeps names unique even when the second, email and original filename all coincide,
//! so the email token and the filename stem can be shortened to keep the whole name well
//! under the 255-byte limit of common filesystems.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Longest email token kept in a stored name, in bytes.
pub const MAX_EMAIL_TOKEN_BYTES: usize = 64;
/// Longest filename stem (the part before the extension) kept in a stored name, in bytes.
pub const MAX_STEM_BYTES: usize = 100;
const MAX_EXTENSION_BYTES: usize = 8;

/// Accepted upload formats. Only PDFs are sent through text and AI extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
}

impl DocumentKind {
    pub fn is_pdf(self) -> bool {
        self == DocumentKind::Pdf
    }
}

/// Classifies a filename by extension (case-insensitive). `None` means the upload is rejected.
pub fn allowed_extension(filename: &str) -> Option<DocumentKind> {
    let (_, ext) = filename.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "pdf" => Some(DocumentKind::Pdf),
        "doc" => Some(DocumentKind::Doc),
        "docx" => Some(DocumentKind::Docx),
        _ => None,
    }
}

/// Final path segment of a client-supplied filename, for either separator style.
/// The stem is cut to [`MAX_STEM_BYTES`]; a short extension is kept intact.
pub fn sanitize_filename(raw: &str) -> String {
    let last = raw.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or("").trim();
    match last {
        "" | "." | ".." => "resume".to_string(),
        name => match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && ext.len() <= MAX_EXTENSION_BYTES => {
                format!("{}.{}", truncate_bytes(stem, MAX_STEM_BYTES), ext)
            }
            _ => truncate_bytes(name, MAX_STEM_BYTES).to_string(),
        },
    }
}

/// Filesystem-safe token derived from the submitted email, or `unknown`.
pub fn email_token(email: Option<&str>) -> String {
    match email.map(str::trim).filter(|e| !e.is_empty()) {
        Some(email) => {
            let token: String = email
                .chars()
                .map(|c| {
                    if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                        c
                    } else {
                        '_'
                    }
                })
                .collect();
            truncate_bytes(&token, MAX_EMAIL_TOKEN_BYTES).to_string()
        }
        None => "unknown".to_string(),
    }
}

/// Longest prefix of `text` that fits in `max_bytes` without splitting a char.
fn truncate_bytes(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

pub fn storage_name(
    uploaded_at: DateTime<Utc>,
    email: Option<&str>,
    id: Uuid,
    filename: &str,
) -> String {
    format!(
        "{}_{}_{}_{}",
        uploaded_at.format("%Y%m%d_%H%M%S"),
        email_token(email),
        id.simple(),
        sanitize_filename(filename)
    )
}

/// Writes the upload into `dir`, creating the directory if needed.
pub async fn store_upload(dir: &Path, name: &str, data: &[u8]) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(name);
    tokio::fs::write(&path, data).await?;
    Ok(path)
}
