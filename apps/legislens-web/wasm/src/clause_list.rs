//! Clause list rendering: rank, previews, empty state, selection markers.
//!
//! This is a thin DOM adapter over `clause_engine::rank` and
//! `clause_engine::synthesize_preview`; all ordering and preview decisions
//! live in the engine. Click wiring stays in the JS glue, which reads the
//! `data-id` attribute and calls back into the app.

use clause_engine::{display_title, rank, synthesize_preview};
use shared_types::{Clause, Document as ClauseDocument};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// Shown when neither a server preview nor synthesizable content exists.
pub const PREVIEW_PLACEHOLDER: &str = "Click to view details...";

/// Shown instead of an empty list when the backend found no clauses.
pub const NO_CLAUSES_NOTICE: &str = "No clauses detected. Try a different document.";

const LIST_CONTAINER_ID: &str = "clauseList";

/// Renders the risk-ordered clause list into the `#clauseList` container.
pub struct ClauseListView {
    document: Document,
}

impl ClauseListView {
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

    fn container(&self) -> Result<Element, JsValue> {
        self.document
            .get_element_by_id(LIST_CONTAINER_ID)
            .ok_or_else(|| JsValue::from_str("Clause list container missing"))
    }

    /// Replace the rendered list with `doc`'s clauses in severity order.
    pub fn render(&self, doc: &ClauseDocument) -> Result<(), JsValue> {
        let container = self.container()?;
        container.set_inner_html("");

        if doc.clauses.is_empty() {
            let empty = self.document.create_element("div")?;
            empty.set_class_name("no-clauses");
            empty.set_attribute("data-i18n", "no_clauses")?;
            empty.set_text_content(Some(NO_CLAUSES_NOTICE));
            container.append_child(&empty)?;
            return Ok(());
        }

        for clause in rank(&doc.clauses) {
            let item = self.build_item(&clause)?;
            container.append_child(&item)?;
        }

        Ok(())
    }

    fn build_item(&self, clause: &Clause) -> Result<Element, JsValue> {
        let risk = clause.risk_level();

        let item = self.document.create_element("div")?;
        item.set_class_name(&format!("clause-item {}", risk.css_class()));
        item.set_attribute("data-id", &clause.id.to_string())?;

        let header = self.document.create_element("div")?;
        header.set_class_name("clause-header");

        let title = self.document.create_element("div")?;
        title.set_class_name("clause-title");
        title.set_text_content(Some(&display_title(clause)));

        let badge = self.document.create_element("div")?;
        badge.set_class_name(&format!("risk-label risk-label-{}", risk.label().to_lowercase()));
        badge.set_text_content(Some(risk.label()));

        header.append_child(&title)?;
        header.append_child(&badge)?;

        let preview = self.document.create_element("div")?;
        preview.set_class_name("clause-preview");
        preview.set_text_content(Some(&preview_text(clause)));

        item.append_child(&header)?;
        item.append_child(&preview)?;
        Ok(item)
    }

    /// Clear the previous visual selection marker and apply the new one.
    pub fn mark_selected(&self, id: u32) -> Result<(), JsValue> {
        let items = self.document.query_selector_all(".clause-item")?;
        for index in 0..items.length() {
            if let Some(node) = items.item(index) {
                if let Some(element) = node.dyn_ref::<Element>() {
                    element.class_list().remove_1("selected")?;
                }
            }
        }

        let selector = format!(".clause-item[data-id='{}']", id);
        if let Some(element) = self.document.query_selector(&selector)? {
            element.class_list().add_1("selected")?;
        }
        Ok(())
    }
}

/// Preview resolution: server-supplied preview first, then synthesis from
/// content, then the static placeholder.
fn preview_text(clause: &Clause) -> String {
    if let Some(preview) = clause.preview.as_deref() {
        if !preview.is_empty() {
            return preview.to_string();
        }
    }
    let synthesized = synthesize_preview(&clause.content);
    if synthesized.is_empty() {
        PREVIEW_PLACEHOLDER.to_string()
    } else {
        synthesized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::RiskLevel;

    fn clause(preview: Option<&str>, content: &str) -> Clause {
        Clause {
            id: 0,
            title: None,
            content: content.to_string(),
            summary: None,
            risk: Some(RiskLevel::Low),
            preview: preview.map(str::to_string),
        }
    }

    #[test]
    fn test_server_preview_takes_precedence() {
        let c = clause(Some("From the server"), "Long enough content to synthesize.");
        assert_eq!(preview_text(&c), "From the server");
    }

    #[test]
    fn test_empty_server_preview_falls_through_to_synthesis() {
        let c = clause(Some(""), "This clause content is long enough to preview.");
        assert_eq!(
            preview_text(&c),
            "This clause content is long enough to preview..."
        );
    }

    #[test]
    fn test_placeholder_when_nothing_to_synthesize() {
        let c = clause(None, "   ");
        assert_eq!(preview_text(&c), PREVIEW_PLACEHOLDER);
    }
}
