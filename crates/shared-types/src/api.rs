//! Request/response payloads for the backend and platform collaborators.
//!
//! Every type here mirrors a wire contract: the analysis backend (upload,
//! ask, translate, export, language preference) or the Firebase bridge
//! (history records, chat-log entries). Field names match the JSON the
//! services produce.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Clause;

/// Body returned by the upload endpoint after parsing and analyzing a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub summary: String,
    pub clauses: Vec<Clause>,
}

/// Question submitted to the Q&A endpoint.
///
/// `question` is always in the backend's default language; callers
/// pre-translate before building this request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Single-text translation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
}

/// Bulk UI-string translation: a named map in, the same map out with
/// values replaced by translations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiTranslationRequest {
    pub strings: HashMap<String, String>,
    pub target_language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiTranslationResponse {
    pub strings: HashMap<String, String>,
}

/// PDF report produced by the export endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    /// Base64-encoded PDF bytes.
    pub pdf_data: String,
    pub filename: String,
}

/// Session's previously chosen display language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagePreference {
    pub language: String,
}

/// Per-user history entry persisted after a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    pub filename: String,
    pub summary: String,
    pub clauses: Vec<Clause>,
    /// Milliseconds since epoch; the bridge query orders on this, newest first.
    pub uploaded_at: f64,
}

/// One answered question appended to a document's chat log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEntry {
    pub question: String,
    pub answer: String,
    pub asked_at: f64,
}
