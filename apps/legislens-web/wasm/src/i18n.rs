//! Live-translation overlay: UI strings and the derived document copy.

use clause_engine::synthesize_preview;
use js_sys::Array;
use shared_types::{Clause, Document as ClauseDocument};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::Element;

use crate::api;

/// Default-language UI strings, keyed by the `data-i18n` attribute values
/// used in the page markup.
pub fn ui_catalog() -> HashMap<String, String> {
    [
        ("app_tagline", "Understand any contract in plain language"),
        ("upload_prompt", "Drop your contract here or click to browse"),
        ("upload_hint", "PDF and DOCX files are supported"),
        ("summary_heading", "Document summary"),
        ("clauses_heading", "Clauses by risk"),
        ("no_clauses", "No clauses detected. Try a different document."),
        ("no_selection", "Select a clause to see its explanation"),
        ("chat_heading", "Ask about this document"),
        ("chat_placeholder", "Type a question..."),
        ("send_label", "Send"),
        ("export_label", "Download PDF report"),
        ("history_heading", "Your documents"),
        ("sign_in_label", "Sign in"),
        ("sign_out_label", "Sign out"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}

/// Write a string map onto every element carrying a `data-i18n` key.
pub fn apply_ui_strings(strings: &HashMap<String, String>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let nodes = document.query_selector_all("[data-i18n]")?;
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else { continue };
        let Some(element) = node.dyn_ref::<Element>() else { continue };
        let Some(key) = element.get_attribute("data-i18n") else { continue };
        if let Some(text) = strings.get(&key) {
            element.set_text_content(Some(text));
        }
    }
    Ok(())
}

/// Resolve the UI string map for `language`: the default catalog as-is, or
/// the bulk-translated catalog for any other language.
///
/// A bulk-translation failure degrades to the default-language catalog and
/// is logged, not surfaced. Returned separately from [`apply_ui_strings`]
/// so callers can discard a stale result before touching the DOM.
pub async fn ui_strings_for(api_base: &str, language: &str) -> HashMap<String, String> {
    let catalog = ui_catalog();
    if language == clause_engine::DEFAULT_LANGUAGE {
        return catalog;
    }

    match api::translate_ui(api_base, catalog.clone(), language).await {
        Ok(translated) => translated,
        Err(err) => {
            web_sys::console::warn_1(
                &format!("UI translation fell back to default: {:?}", err).into(),
            );
            catalog
        }
    }
}

/// Build the language-derived copy of a document.
///
/// Every clause is translated concurrently; within a clause the title,
/// summary, and content requests are themselves concurrent and each field
/// degrades independently to its original text. One clause failing never
/// blocks or corrupts the others. Previews are re-synthesized from the
/// translated content so the list matches the detail view, which is why
/// the server-supplied preview is dropped on the derived copy.
pub async fn translate_document(
    api_base: &str,
    source: &ClauseDocument,
    target_language: &str,
) -> ClauseDocument {
    let clause_promises = Array::new();
    for clause in &source.clauses {
        let api_base = api_base.to_string();
        let target = target_language.to_string();
        let clause = clause.clone();
        clause_promises.push(&future_to_promise(async move {
            let [title, summary, content] = api::translate_fields(
                &api_base,
                [
                    clause.title.clone().unwrap_or_default(),
                    clause.summary.clone().unwrap_or_default(),
                    clause.content.clone(),
                ],
                &target,
            )
            .await;

            let translated = Clause {
                id: clause.id,
                title: (!title.is_empty()).then_some(title),
                content,
                summary: (!summary.is_empty()).then_some(summary),
                risk: clause.risk,
                preview: None,
            };
            serde_wasm_bindgen::to_value(&translated).map_err(|e| JsValue::from_str(&e.to_string()))
        }));
    }

    let summary = api::translate_or_original(api_base, &source.summary, target_language);

    let clauses = match JsFuture::from(js_sys::Promise::all(&clause_promises)).await {
        Ok(joined) => {
            let joined: Array = joined.unchecked_into();
            let mut clauses = Vec::with_capacity(source.clauses.len());
            for (index, original) in source.clauses.iter().enumerate() {
                let value = joined.get(index as u32);
                match serde_wasm_bindgen::from_value::<Clause>(value) {
                    Ok(clause) => clauses.push(clause),
                    // Degrade this clause alone to its original text.
                    Err(_) => clauses.push(original.clone()),
                }
            }
            clauses
        }
        Err(_) => source.clauses.clone(),
    };

    ClauseDocument {
        id: source.id.clone(),
        summary: summary.await,
        clauses,
    }
}

/// Re-synthesize previews on a derived document whose clauses carry none.
///
/// Kept separate from rendering so the derived copy stored in the session
/// already matches what the list will show.
pub fn fill_previews(document: &mut ClauseDocument) {
    for clause in &mut document.clauses {
        if clause.preview.as_deref().map_or(true, str::is_empty) {
            let preview = synthesize_preview(&clause.content);
            if !preview.is_empty() {
                clause.preview = Some(preview);
            }
        }
    }
}
