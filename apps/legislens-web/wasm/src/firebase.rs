//! Firebase bridge: authentication and per-user persistence.
//!
//! The Firebase SDK stays in JavaScript; this module binds the bridge
//! script's functions and wraps them with typed payloads. Sign-in state,
//! storage rules, and query ordering (history is listed newest-upload-first)
//! are the bridge's concern.

use shared_types::{ChatEntry, HistoryRecord};
use wasm_bindgen::prelude::*;

/// Prompt shown when an action requires an authenticated session.
pub const SIGN_IN_REQUIRED: &str = "Please sign in to upload documents and ask questions.";

#[wasm_bindgen(module = "/www/js/firebase-bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = signUp, catch)]
    async fn sign_up_internal(email: &str, password: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = signIn, catch)]
    async fn sign_in_internal(email: &str, password: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = signInWithGoogle, catch)]
    async fn sign_in_with_google_internal() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = signOutUser, catch)]
    async fn sign_out_internal() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = currentUserId)]
    fn current_user_id_internal() -> Option<String>;

    #[wasm_bindgen(js_name = saveDocumentRecord, catch)]
    async fn save_document_record_internal(
        user_id: &str,
        record_json: &str,
    ) -> Result<JsValue, JsValue>;

    /// Returns a JSON array of history records, newest upload first.
    #[wasm_bindgen(js_name = listDocumentHistory, catch)]
    async fn list_document_history_internal(user_id: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = appendChatEntry, catch)]
    async fn append_chat_entry_internal(
        user_id: &str,
        document_id: &str,
        entry_json: &str,
    ) -> Result<JsValue, JsValue>;
}

pub async fn sign_up(email: &str, password: &str) -> Result<(), JsValue> {
    sign_up_internal(email, password).await.map(|_| ())
}

pub async fn sign_in(email: &str, password: &str) -> Result<(), JsValue> {
    sign_in_internal(email, password).await.map(|_| ())
}

pub async fn sign_in_with_google() -> Result<(), JsValue> {
    sign_in_with_google_internal().await.map(|_| ())
}

pub async fn sign_out() -> Result<(), JsValue> {
    sign_out_internal().await.map(|_| ())
}

pub fn current_user_id() -> Option<String> {
    current_user_id_internal().filter(|id| !id.is_empty())
}

/// Precondition check gating upload and question-asking.
pub fn require_signed_in() -> Result<String, JsValue> {
    current_user_id().ok_or_else(|| JsValue::from_str(SIGN_IN_REQUIRED))
}

/// Persist a history record after a successful upload.
pub async fn record_upload(user_id: &str, record: &HistoryRecord) -> Result<(), JsValue> {
    let json = serde_json::to_string(record).map_err(|e| JsValue::from_str(&e.to_string()))?;
    save_document_record_internal(user_id, &json)
        .await
        .map(|_| ())
}

/// Fetch the user's document history, newest upload first.
pub async fn fetch_history(user_id: &str) -> Result<Vec<HistoryRecord>, JsValue> {
    let value = list_document_history_internal(user_id).await?;
    let json = value
        .as_string()
        .ok_or_else(|| JsValue::from_str("History payload was not a JSON string"))?;
    serde_json::from_str(&json)
        .map_err(|e| JsValue::from_str(&format!("Malformed history payload: {}", e)))
}

/// Append one answered question to a document's chat log.
pub async fn record_chat(
    user_id: &str,
    document_id: &str,
    entry: &ChatEntry,
) -> Result<(), JsValue> {
    let json = serde_json::to_string(entry).map_err(|e| JsValue::from_str(&e.to_string()))?;
    append_chat_entry_internal(user_id, document_id, &json)
        .await
        .map(|_| ())
}
