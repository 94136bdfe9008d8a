//! LegisLens browser client.
//!
//! Holds the authoritative in-memory document state and projects it into
//! the page. The JS glue owns event wiring only: it forwards file drops,
//! clause clicks, chat input, and language changes to the exported
//! [`LegisLensApp`] methods and never reads document data back out of the
//! DOM.

use clause_engine::{DocumentSession, SelectionProjector, DEFAULT_LANGUAGE};
use shared_types::{AskRequest, ChatEntry, Document, HistoryRecord};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlElement};

// Export modules
pub mod api;
pub mod chat;
pub mod clause_list;
pub mod detail_panel;
pub mod export;
pub mod firebase;
pub mod i18n;
pub mod upload;

// Re-export commonly used items
pub use chat::{ChatMessage, ChatPanel, Sender, ANSWER_FAILURE_MESSAGE};
pub use clause_list::{ClauseListView, NO_CLAUSES_NOTICE, PREVIEW_PLACEHOLDER};
pub use detail_panel::{translate_display, DetailPanelView};
pub use export::{decode_pdf_data, save_as};
pub use firebase::SIGN_IN_REQUIRED;
pub use i18n::{apply_ui_strings, ui_catalog};
pub use upload::{is_supported_file, is_supported_mime, UNSUPPORTED_FILE_NOTICE};

const SUMMARY_ID: &str = "documentSummary";
const RESULTS_ID: &str = "resultsSection";
const PROGRESS_ID: &str = "uploadProgress";

const UPLOAD_FAILURE_NOTICE: &str = "Error uploading file";
const NO_DOCUMENT_NOTICE: &str = "Upload a document before asking questions.";
const EXPORT_FAILURE_NOTICE: &str = "Could not export the PDF report.";
const HISTORY_FAILURE_NOTICE: &str = "Could not load your document history.";

/// Application root: owns the session state cell, the selection projector,
/// and the rendering adapters.
#[wasm_bindgen]
pub struct LegisLensApp {
    api_base: String,
    session: DocumentSession,
    projector: SelectionProjector,
    list: ClauseListView,
    detail: DetailPanelView,
    chat: ChatPanel,
}

#[wasm_bindgen]
impl LegisLensApp {
    /// Create the app bound to the backend at `api_base`.
    #[wasm_bindgen(constructor)]
    pub fn new(api_base: &str) -> Result<LegisLensApp, JsValue> {
        console_error_panic_hook::set_once();
        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            session: DocumentSession::new(),
            projector: SelectionProjector::new(),
            list: ClauseListView::new()?,
            detail: DetailPanelView::new()?,
            chat: ChatPanel::new()?,
        })
    }

    /// Fetch the stored language preference and apply the UI overlay.
    ///
    /// A missing or failing preference endpoint leaves the default
    /// language active; startup never blocks on it.
    #[wasm_bindgen]
    pub async fn init(&mut self) -> Result<(), JsValue> {
        let language = match api::language_preference(&self.api_base).await {
            Ok(pref) if !pref.language.is_empty() => pref.language,
            Ok(_) => DEFAULT_LANGUAGE.to_string(),
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("Language preference unavailable: {:?}", err).into(),
                );
                DEFAULT_LANGUAGE.to_string()
            }
        };

        if language != DEFAULT_LANGUAGE {
            self.session.request_language(&language);
        }
        let strings = i18n::ui_strings_for(&self.api_base, &language).await;
        i18n::apply_ui_strings(&strings)
    }

    /// Upload a contract and replace the active document with the result.
    #[wasm_bindgen(js_name = uploadFile)]
    pub async fn upload_file(&mut self, file: File) -> Result<(), JsValue> {
        let user_id = match firebase::require_signed_in() {
            Ok(id) => id,
            Err(_) => {
                notify(SIGN_IN_REQUIRED);
                return Ok(());
            }
        };

        if !upload::is_supported_file(&file) {
            notify(UNSUPPORTED_FILE_NOTICE);
            return Ok(());
        }

        set_display_by_id(PROGRESS_ID, "block")?;
        let uploaded = match upload::upload_document(&self.api_base, &file).await {
            Ok(document) => document,
            Err(err) => {
                web_sys::console::error_1(&format!("Upload failed: {:?}", err).into());
                set_display_by_id(PROGRESS_ID, "none")?;
                notify(UPLOAD_FAILURE_NOTICE);
                return Ok(());
            }
        };
        set_display_by_id(PROGRESS_ID, "none")?;
        set_display_by_id(RESULTS_ID, "block")?;

        self.session.load_document(uploaded.clone());
        self.projector.clear();
        self.chat.clear()?;
        self.detail.reset()?;
        self.render_active()?;

        let record = HistoryRecord {
            id: uploaded.id.clone(),
            filename: file.name(),
            summary: uploaded.summary.clone(),
            clauses: uploaded.clauses.clone(),
            uploaded_at: js_sys::Date::now(),
        };
        if let Err(err) = firebase::record_upload(&user_id, &record).await {
            web_sys::console::warn_1(&format!("History save failed: {:?}", err).into());
        }

        // A non-default language stays active across uploads: derive the
        // translated copy of the new document.
        self.refresh_translation().await
    }

    /// Select a clause by id and project it into the detail panel.
    ///
    /// An id with no match in the active document is logged and ignored;
    /// the panel keeps its previous content.
    #[wasm_bindgen(js_name = selectClause)]
    pub async fn select_clause(&mut self, clause_id: u32) -> Result<(), JsValue> {
        let token = self.session.generation();
        let Some(document) = self.session.active_document() else {
            return Ok(());
        };

        let display = match self.projector.select(document, clause_id) {
            Ok(display) => display,
            Err(err) => {
                web_sys::console::warn_1(&format!("{}", err).into());
                return Ok(());
            }
        };

        self.list.mark_selected(clause_id)?;

        if self.session.needs_field_translation() {
            let language = self.session.language().to_string();
            let translated =
                detail_panel::translate_display(&self.api_base, display, &language).await;
            if !self.session.is_current(token) {
                web_sys::console::warn_1(&"Discarding stale selection translation".into());
                return Ok(());
            }
            self.detail.render(&translated)
        } else {
            self.detail.render(&display)
        }
    }

    /// Switch the active display language.
    ///
    /// Bumps the session generation so any in-flight translation batch for
    /// the previous language is discarded when it resolves.
    #[wasm_bindgen(js_name = switchLanguage)]
    pub async fn switch_language(&mut self, language: &str) -> Result<(), JsValue> {
        let language = language.trim().to_string();
        if language.is_empty() {
            return Ok(());
        }

        let token = self.session.request_language(&language);

        let strings = i18n::ui_strings_for(&self.api_base, &language).await;
        if !self.session.is_current(token) {
            web_sys::console::warn_1(&"Discarding stale language switch".into());
            return Ok(());
        }
        i18n::apply_ui_strings(&strings)?;

        if self.session.is_default_language() {
            self.render_active()?;
            self.restore_selection()
        } else {
            self.refresh_translation().await
        }
    }

    /// Submit a question about the active document to the Q&A panel.
    #[wasm_bindgen]
    pub async fn ask(&mut self, question: &str) -> Result<(), JsValue> {
        let question = question.trim().to_string();
        if question.is_empty() {
            return Ok(());
        }

        let user_id = match firebase::require_signed_in() {
            Ok(id) => id,
            Err(_) => {
                notify(SIGN_IN_REQUIRED);
                return Ok(());
            }
        };

        let document_id = match self.session.active_document() {
            Some(document) => document.id.clone(),
            None => {
                notify(NO_DOCUMENT_NOTICE);
                return Ok(());
            }
        };

        self.chat.push(Sender::User, &question)?;

        // The backend answers in its default language; pre-translate the
        // question when the user typed it in another one.
        let language = self.session.language().to_string();
        let backend_question = if language == DEFAULT_LANGUAGE {
            question.clone()
        } else {
            api::translate_or_original(&self.api_base, &question, DEFAULT_LANGUAGE).await
        };

        let request = AskRequest {
            question: backend_question,
            language: language.clone(),
        };
        match api::ask(&self.api_base, &request).await {
            Ok(response) => {
                self.chat.push(Sender::Bot, &response.answer)?;

                let entry = ChatEntry {
                    question,
                    answer: response.answer,
                    asked_at: js_sys::Date::now(),
                };
                if let Err(err) = firebase::record_chat(&user_id, &document_id, &entry).await {
                    web_sys::console::warn_1(&format!("Chat-log save failed: {:?}", err).into());
                }
            }
            Err(err) => {
                web_sys::console::error_1(&format!("Question failed: {:?}", err).into());
                self.chat.push(Sender::Bot, ANSWER_FAILURE_MESSAGE)?;
            }
        }
        Ok(())
    }

    /// Download the PDF report for the active session.
    #[wasm_bindgen(js_name = exportReport)]
    pub async fn export_report(&self) -> Result<(), JsValue> {
        let response = match api::export_pdf(&self.api_base).await {
            Ok(response) => response,
            Err(err) => {
                web_sys::console::error_1(&format!("Export failed: {:?}", err).into());
                notify(EXPORT_FAILURE_NOTICE);
                return Ok(());
            }
        };

        match export::decode_pdf_data(&response.pdf_data) {
            Ok(bytes) => export::save_as(&bytes, &response.filename),
            Err(err) => {
                web_sys::console::error_1(&format!("Export payload invalid: {}", err).into());
                notify(EXPORT_FAILURE_NOTICE);
                Ok(())
            }
        }
    }

    /// Fetch the signed-in user's history as a JSON array, newest upload
    /// first. Signed-out sessions get an empty list.
    #[wasm_bindgen(js_name = fetchHistory)]
    pub async fn fetch_history(&self) -> Result<String, JsValue> {
        let Some(user_id) = firebase::current_user_id() else {
            return Ok("[]".to_string());
        };

        match firebase::fetch_history(&user_id).await {
            Ok(records) => serde_json::to_string(&records)
                .map_err(|e| JsValue::from_str(&e.to_string())),
            Err(err) => {
                web_sys::console::error_1(&format!("History fetch failed: {:?}", err).into());
                notify(HISTORY_FAILURE_NOTICE);
                Ok("[]".to_string())
            }
        }
    }

    /// Replace the active document with a stored history record.
    #[wasm_bindgen(js_name = openHistoryRecord)]
    pub async fn open_history_record(&mut self, record_json: &str) -> Result<(), JsValue> {
        let record: HistoryRecord = serde_json::from_str(record_json)
            .map_err(|e| JsValue::from_str(&format!("Malformed history record: {}", e)))?;

        let document = Document {
            id: record.id,
            summary: record.summary,
            clauses: record.clauses,
        };

        self.session.load_document(document);
        self.projector.clear();
        self.chat.clear()?;
        self.detail.reset()?;
        set_display_by_id(RESULTS_ID, "block")?;
        self.render_active()?;

        self.refresh_translation().await
    }

    // ------------------------------------------------------------------
    // Authentication passthroughs
    // ------------------------------------------------------------------

    #[wasm_bindgen(js_name = signUp)]
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<(), JsValue> {
        firebase::sign_up(email, password).await
    }

    #[wasm_bindgen(js_name = signIn)]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), JsValue> {
        firebase::sign_in(email, password).await
    }

    #[wasm_bindgen(js_name = signInWithGoogle)]
    pub async fn sign_in_with_google(&self) -> Result<(), JsValue> {
        firebase::sign_in_with_google().await
    }

    #[wasm_bindgen(js_name = signOut)]
    pub async fn sign_out(&self) -> Result<(), JsValue> {
        firebase::sign_out().await
    }

    #[wasm_bindgen(js_name = isSignedIn)]
    pub fn is_signed_in(&self) -> bool {
        firebase::current_user_id().is_some()
    }

    // ------------------------------------------------------------------
    // Internal rendering helpers
    // ------------------------------------------------------------------

    /// Render summary and clause list from the authoritative document.
    fn render_active(&self) -> Result<(), JsValue> {
        let Some(document) = self.session.active_document() else {
            return Ok(());
        };

        set_text_by_id(SUMMARY_ID, &document.summary)?;
        self.list.render(document)?;
        if let Some(id) = self.projector.selected_id() {
            self.list.mark_selected(id)?;
        }
        Ok(())
    }

    /// Re-project the current selection against the authoritative document.
    fn restore_selection(&self) -> Result<(), JsValue> {
        let Some(document) = self.session.active_document() else {
            return Ok(());
        };
        if let Some(display) = self.projector.reproject(document) {
            self.detail.render(&display)?;
        }
        Ok(())
    }

    /// Derive and install the translated copy for the active language,
    /// then re-render. A batch superseded while in flight is discarded.
    async fn refresh_translation(&mut self) -> Result<(), JsValue> {
        if self.session.is_default_language() {
            return Ok(());
        }
        let Some(original) = self.session.original_document().cloned() else {
            return Ok(());
        };

        let token = self.session.generation();
        let language = self.session.language().to_string();

        let mut translated =
            i18n::translate_document(&self.api_base, &original, &language).await;
        i18n::fill_previews(&mut translated);

        match self.session.install_translation(token, &language, translated) {
            Ok(()) => {
                self.render_active()?;
                self.restore_selection()
            }
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("Discarding stale translation batch: {}", err).into(),
                );
                Ok(())
            }
        }
    }
}

fn page_document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window object available"))?
        .document()
        .ok_or_else(|| JsValue::from_str("No document object available"))
}

fn set_text_by_id(id: &str, text: &str) -> Result<(), JsValue> {
    if let Some(element) = page_document()?.get_element_by_id(id) {
        element.set_text_content(Some(text));
    }
    Ok(())
}

fn set_display_by_id(id: &str, value: &str) -> Result<(), JsValue> {
    if let Some(element) = page_document()?.get_element_by_id(id) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            html.style().set_property("display", value)?;
        }
    }
    Ok(())
}

/// User-visible notice for validation and transport failures.
fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
