//! Detail panel rendering for the active clause.
//!
//! Projection always runs against the in-memory document (the engine's
//! `SelectionProjector` hands us a resolved `ClauseDisplay`); this module
//! only writes the fields into the DOM and, when the display language is
//! non-default, routes them through the translation collaborator first.

use clause_engine::ClauseDisplay;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::api;

const PLACEHOLDER_ID: &str = "noClauseSelected";
const DETAIL_ID: &str = "clauseDetail";
const TITLE_ID: &str = "clauseTitle";
const BADGE_ID: &str = "riskBadge";
const SUMMARY_ID: &str = "clauseSummary";
const CONTENT_ID: &str = "clauseOriginalText";

/// Writes a projected clause into the `#clauseDetail` panel.
pub struct DetailPanelView {
    document: Document,
}

impl DetailPanelView {
    /// # Errors
    /// Returns a JsValue error if unable to access window or document.
    pub fn new() -> Result<Self, JsValue> {
        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document object available"))?;
        Ok(Self { document })
    }

    fn set_display(&self, element_id: &str, value: &str) -> Result<(), JsValue> {
        if let Some(element) = self.document.get_element_by_id(element_id) {
            if let Some(html) = element.dyn_ref::<HtmlElement>() {
                html.style().set_property("display", value)?;
            }
        }
        Ok(())
    }

    fn set_text(&self, element_id: &str, text: &str) -> Result<(), JsValue> {
        if let Some(element) = self.document.get_element_by_id(element_id) {
            element.set_text_content(Some(text));
        }
        Ok(())
    }

    /// Populate the panel from an already-resolved projection.
    pub fn render(&self, display: &ClauseDisplay) -> Result<(), JsValue> {
        self.set_display(PLACEHOLDER_ID, "none")?;
        self.set_display(DETAIL_ID, "block")?;

        self.set_text(TITLE_ID, &display.title)?;
        self.set_text(SUMMARY_ID, &display.summary)?;
        self.set_text(CONTENT_ID, &display.content)?;

        if let Some(badge) = self.document.get_element_by_id(BADGE_ID) {
            badge.set_text_content(Some(&format!("Risk: {}", display.risk.label())));
            badge.set_class_name(&format!("risk-badge {}", display.risk.css_class()));
        }
        Ok(())
    }

    /// Hide the detail panel and show the "nothing selected" placeholder.
    pub fn reset(&self) -> Result<(), JsValue> {
        self.set_display(DETAIL_ID, "none")?;
        self.set_display(PLACEHOLDER_ID, "block")?;
        Ok(())
    }
}

/// Translate the three display fields of a projection concurrently.
///
/// Join semantics: the panel is populated only after title, summary, and
/// content have all resolved; any field whose translation fails keeps its
/// original-language text. The risk badge is not translated.
pub async fn translate_display(
    api_base: &str,
    display: ClauseDisplay,
    target_language: &str,
) -> ClauseDisplay {
    let [title, summary, content] = api::translate_fields(
        api_base,
        [
            display.title.clone(),
            display.summary.clone(),
            display.content.clone(),
        ],
        target_language,
    )
    .await;

    ClauseDisplay {
        id: display.id,
        title,
        summary,
        content,
        risk: display.risk,
    }
}
